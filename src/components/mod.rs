pub mod contact_form;
pub mod counter;
pub mod dom;
pub mod navbar;
pub mod portfolio;
pub mod scroll_progress;
pub mod section_reveal;
pub mod typing;
