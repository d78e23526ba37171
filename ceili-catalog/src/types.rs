//! Data model types for the source catalogue.
//!
//! These mirror the hand-written YAML records. Optional fields carry serde
//! defaults so a sparse record still loads; filling in derived values is
//! the normalizer's job, not the loader's.

use ceili_core::{Category, Difficulty, Era};
use serde::{Deserialize, Serialize};

// ── Dance ───────────────────────────────────────────────────────────────────

/// One dance as curated in the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceDance {
    /// Unique slug, stable across catalogue revisions.
    pub id: String,
    /// English display title.
    pub title: String,
    pub category: Category,
    pub difficulty: Difficulty,
    /// Meter tag ("reel", "jig", "hornpipe"). Kept as text so an unknown
    /// tag survives loading and takes the normalizer's fallback.
    pub time_signature: String,
    pub formation: Formation,
    /// Choreographic sections, in the order they are danced.
    #[serde(default)]
    pub movements: Vec<Movement>,
    /// Beats per minute.
    pub music_tempo: u32,
    /// Ids of dances worth learning first.
    #[serde(default)]
    pub prerequisites: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub historical_notes: String,
    #[serde(default)]
    pub region: Option<String>,
    pub year_recorded: i32,
    #[serde(default)]
    pub era: Era,
    /// Title of the tune usually played, when it differs from the dance.
    #[serde(default)]
    pub tune: Option<String>,
}

impl SourceDance {
    /// Sum of all movement bar counts, with missing counts taken as 8.
    pub fn total_bars(&self) -> u64 {
        self.movements
            .iter()
            .map(|m| u64::from(m.bars_or_default()))
            .sum()
    }
}

// ── Formation ───────────────────────────────────────────────────────────────

/// Starting arrangement of the dancers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Formation {
    /// Formation tag, e.g. `eight_hand` or `two_couples_facing`.
    #[serde(rename = "type")]
    pub formation_type: String,
    #[serde(default)]
    pub description: String,
}

// ── Movement ────────────────────────────────────────────────────────────────

/// Bar count assumed for a movement that does not state one.
pub const DEFAULT_BARS: u32 = 8;

/// One named section of a dance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movement {
    pub name: String,
    #[serde(default)]
    pub bars: Option<u32>,
    #[serde(default)]
    pub description: String,
    /// Footwork notes for the section.
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub tips: Vec<String>,
}

impl Movement {
    /// The stated bar count, or [`DEFAULT_BARS`] when missing or zero.
    pub fn bars_or_default(&self) -> u32 {
        match self.bars {
            Some(n) if n > 0 => n,
            _ => DEFAULT_BARS,
        }
    }
}
