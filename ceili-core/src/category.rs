use serde::{Deserialize, Serialize};

use crate::VocabularyParseError;

/// Structural family of a ceili dance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Progressive dances in two facing lines.
    Long,
    /// Progressive dances for couples or lines travelling round the room.
    Round,
    /// Non-progressive dances with a body and figures.
    Figure,
    /// Sets descended from the quadrille.
    Set,
}

const ALL_CATEGORIES: &[Category] = &[
    Category::Long,
    Category::Round,
    Category::Figure,
    Category::Set,
];

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Long => "long",
            Self::Round => "round",
            Self::Figure => "figure",
            Self::Set => "set",
        }
    }

    /// Human-readable label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Long => "Long dances",
            Self::Round => "Round dances",
            Self::Figure => "Figure dances",
            Self::Set => "Sets",
        }
    }

    pub fn all() -> &'static [Category] {
        ALL_CATEGORIES
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = VocabularyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ALL_CATEGORIES
            .iter()
            .copied()
            .find(|c| c.as_str() == lower)
            .ok_or_else(|| VocabularyParseError::new("category", s))
    }
}

/// Provenance of a dance within the catalogue.
///
/// Each source record carries exactly one era, and every era grouping in
/// the generated module is computed from this tag.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Era {
    /// The CLRG standard repertoire (Ár Rince Fóirne).
    #[default]
    Standard,
    /// Dances collected from older manuscripts and dance masters.
    Historical,
    /// Dances kept alive by one county or parish tradition.
    Regional,
    /// Twentieth-century compositions in the ceili style.
    Contemporary,
}

const ALL_ERAS: &[Era] = &[
    Era::Standard,
    Era::Historical,
    Era::Regional,
    Era::Contemporary,
];

impl Era {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Historical => "historical",
            Self::Regional => "regional",
            Self::Contemporary => "contemporary",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Standard => "CLRG standard repertoire",
            Self::Historical => "Historical dances",
            Self::Regional => "Regional traditions",
            Self::Contemporary => "Contemporary compositions",
        }
    }

    pub fn all() -> &'static [Era] {
        ALL_ERAS
    }
}

impl std::fmt::Display for Era {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Era {
    type Err = VocabularyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ALL_ERAS
            .iter()
            .copied()
            .find(|e| e.as_str() == lower)
            .ok_or_else(|| VocabularyParseError::new("era", s))
    }
}

#[cfg(test)]
#[path = "tests/category_tests.rs"]
mod tests;
