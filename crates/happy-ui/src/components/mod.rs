//! Yew components: atoms are single controls, molecules compose them.
pub(crate) mod atoms;
pub(crate) mod molecules;
