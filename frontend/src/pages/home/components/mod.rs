pub mod contact_form;
pub mod contact_section;
pub mod features;
pub mod footer;
pub mod hero;
