use serde::{Deserialize, Serialize};

use crate::VocabularyParseError;

/// How much experience a dance assumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

const ALL_DIFFICULTIES: &[Difficulty] = &[
    Difficulty::Beginner,
    Difficulty::Intermediate,
    Difficulty::Advanced,
];

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// All difficulties, easiest first.
    pub fn all() -> &'static [Difficulty] {
        ALL_DIFFICULTIES
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = VocabularyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ALL_DIFFICULTIES
            .iter()
            .copied()
            .find(|d| d.as_str() == lower)
            .ok_or_else(|| VocabularyParseError::new("difficulty", s))
    }
}
