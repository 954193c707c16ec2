//! Shared types and state machines for the group create/edit form.
//!
//! Everything in here is platform-independent so it can be exercised without
//! a browser: the client crate only wires these types to Dioxus signals and
//! browser events.

pub mod config;
pub mod error;
pub mod form;
pub mod models;
pub mod reporting;
pub mod save_state;
pub mod validation;

pub use config::*;
pub use error::*;
pub use form::*;
pub use models::*;
pub use reporting::*;
pub use save_state::*;
pub use validation::*;
