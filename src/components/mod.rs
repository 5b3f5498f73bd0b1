pub mod form;
pub mod navbar;
