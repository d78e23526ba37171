use serde::{Deserialize, Serialize};

use crate::VocabularyParseError;

/// Tune type a dance is played to.
///
/// Source records name the meter with a tag ("reel", "jig", "hornpipe")
/// rather than a literal time signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Meter {
    Reel,
    Jig,
    Hornpipe,
}

const ALL_METERS: &[Meter] = &[Meter::Reel, Meter::Jig, Meter::Hornpipe];

impl Meter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reel => "reel",
            Self::Jig => "jig",
            Self::Hornpipe => "hornpipe",
        }
    }

    /// Time signature written on the tune: reels and hornpipes in 2/4, jigs in 6/8.
    pub fn time_signature(&self) -> &'static str {
        match self {
            Self::Reel | Self::Hornpipe => "2/4",
            Self::Jig => "6/8",
        }
    }

    /// Look up a meter by its source tag (case-insensitive).
    pub fn from_tag(tag: &str) -> Option<Self> {
        let lower = tag.trim().to_lowercase();
        Self::all().iter().copied().find(|m| m.as_str() == lower)
    }

    pub fn all() -> &'static [Meter] {
        ALL_METERS
    }
}

impl std::fmt::Display for Meter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Meter {
    type Err = VocabularyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| VocabularyParseError::new("meter", s))
    }
}
