//! View components for the application.

pub mod create_edit_group_form;

pub use create_edit_group_form::CreateEditGroupForm;
