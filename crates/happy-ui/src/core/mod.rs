//! Core, DOM-free primitives and state machines for the UI atoms.
pub mod field;
pub mod login;
pub mod profile;
pub mod ripple;
pub mod submit;
pub mod tokens;
pub mod ui;
pub mod validation;
