pub mod contact_form;
pub mod footer;
pub mod icons;
pub mod load_bar;
pub mod navbar;
pub mod section;
pub mod terminal_block;
