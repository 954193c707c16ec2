//! Groupforms Client - Dioxus web application
//!
//! The create/edit group screen of the annotation platform. Form state lives
//! in `groupforms-shared`; this crate renders it, talks to the group API and
//! hooks into the browser page lifecycle.

pub mod api_client;
pub mod config;
pub mod error_reporting;
pub mod logging;
pub mod navigation;

pub mod components;
pub mod hooks;
pub mod views;

pub use api_client::ApiClient;
pub use views::CreateEditGroupForm;
