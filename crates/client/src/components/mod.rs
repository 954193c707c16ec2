//! Reusable components for the group form.

pub mod forms;
mod save_state_icon;
pub mod ui;

pub use save_state_icon::SaveStateIcon;
