//! Shared vocabulary for the ceili dance catalogue.
//!
//! Every crate in the workspace speaks in these terms: the closed sets a
//! dance is classified by (category, difficulty, era), the musical meter
//! a dance is played in, and the slug rule used to mint step identifiers.

pub mod category;
pub mod difficulty;
pub mod meter;
pub mod util;

pub use category::{Category, Era};
pub use difficulty::Difficulty;
pub use meter::Meter;
pub use util::step_slug;

use thiserror::Error;

/// Error returned when a string names no member of a closed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: '{value}'")]
pub struct VocabularyParseError {
    /// Which vocabulary was being parsed ("category", "era", ...).
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

impl VocabularyParseError {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}
