//! Generated documents.

use std::fmt;

use crate::domain::{error::DomainError, extractor, value_objects::ExerciseNumber};

/// One generated document nominally holding five `Exercise {n}` entries.
///
/// Opaque apart from the markers; written to `exercises.md` verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseBatch(String);

impl ExerciseBatch {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The body of one exercise, see [`extractor::extract`].
    pub fn exercise(&self, number: ExerciseNumber) -> Result<&str, DomainError> {
        extractor::extract(&self.0, u32::from(number.get()))
    }
}

impl fmt::Display for ExerciseBatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A generated solution write-up for one exercise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution(String);

impl Solution {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
