//! Length constraints for the form's text fields.
//!
//! Lengths are counted in Unicode code points, so an emoji or an accented
//! letter counts once no matter how many bytes it takes.

use thiserror::Error;

/// Inclusive character-count bounds for one text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLimits {
    pub min: usize,
    pub max: usize,
}

pub const NAME_LIMITS: FieldLimits = FieldLimits { min: 3, max: 25 };
pub const DESCRIPTION_LIMITS: FieldLimits = FieldLimits { min: 0, max: 250 };

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("Must be {max} characters or less.")]
    TooLong { max: usize },
    #[error("Must be {min} characters or more.")]
    TooShort { min: usize },
}

pub fn char_count(value: &str) -> usize {
    value.chars().count()
}

impl FieldLimits {
    /// Advisory error for `value`.
    ///
    /// "Too long" applies at once; "too short" only after the field has been
    /// committed (blurred after an edit) at least once.
    pub fn validate(&self, value: &str, committed: bool) -> Option<FieldError> {
        let count = char_count(value);
        if count > self.max {
            Some(FieldError::TooLong { max: self.max })
        } else if count < self.min && committed {
            Some(FieldError::TooShort { min: self.min })
        } else {
            None
        }
    }

    /// Counter text, e.g. `3/25`.
    pub fn counter(&self, value: &str) -> String {
        format!("{}/{}", char_count(value), self.max)
    }
}
