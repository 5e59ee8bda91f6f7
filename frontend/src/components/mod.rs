pub mod accordion;
pub mod contact_form;
pub mod hero;
pub mod particles;
pub mod sections;
pub mod template;
pub mod toast;
