//! UI primitives (Button, TextInput, GroupTypeSelector)

pub mod button;
pub mod input;
pub mod radio_group;

pub use button::*;
pub use input::*;
pub use radio_group::*;
