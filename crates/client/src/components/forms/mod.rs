//! Form building blocks: labelled text fields with live validation.

mod text_field;

pub use text_field::{next_field_id, CharacterCounter, Label, RequiredStar, TextField};
