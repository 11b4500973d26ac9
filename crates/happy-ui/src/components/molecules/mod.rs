pub(crate) mod login_form;
pub(crate) mod user_card;
