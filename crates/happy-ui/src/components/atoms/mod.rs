pub(crate) mod button;
pub(crate) mod icons;
pub(crate) mod input_field;
