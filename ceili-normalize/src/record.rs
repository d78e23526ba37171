//! Output record types and their assembly from source dances.
//!
//! Field names serialize in camelCase to match the shapes the web
//! front-end imports.

use ceili_catalog::SourceDance;
use ceili_core::{Difficulty, Meter};
use serde::Serialize;

use crate::derive::{
    describe_tempo, estimate_duration, estimate_participants, map_time_signature,
    translate_title,
};
use crate::steps::build_steps;
use crate::tables::DEFAULT_REGION;

/// A name in English and Irish. The Irish falls back to the English when
/// no curated translation exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BilingualName {
    pub english: String,
    pub irish: String,
}

/// Tune information shown alongside a dance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicInfo {
    pub title: String,
    /// Descriptive tempo, e.g. "Lively reel time (120 bpm)".
    pub tempo: String,
    /// Written time signature, e.g. "6/8".
    pub time_signature: String,
}

/// One step of a normalized dance, derived from a source movement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepRecord {
    pub id: String,
    pub name: BilingualName,
    pub description: String,
    /// Bars the step lasts.
    pub counts: u32,
    pub footwork: String,
    pub handholds: String,
    pub tips: Vec<String>,
    pub common_mistakes: Vec<String>,
}

/// A normalized dance, as emitted into the generated module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputDance {
    pub id: String,
    pub name: BilingualName,
    pub difficulty: Difficulty,
    /// Estimated minutes for one pass through the dance.
    pub duration: u32,
    pub participants: u32,
    /// Description of the starting formation.
    pub formation: String,
    pub music: MusicInfo,
    pub steps: Vec<StepRecord>,
    pub cultural_context: String,
    pub region: String,
}

/// Build the output record for one source dance.
pub fn assemble_record(source: &SourceDance) -> OutputDance {
    if Meter::from_tag(&source.time_signature).is_none() {
        log::warn!(
            "'{}' has unknown time signature '{}'; treating it as a reel",
            source.id,
            source.time_signature,
        );
    }

    OutputDance {
        id: source.id.clone(),
        name: BilingualName {
            english: source.title.clone(),
            irish: translate_title(&source.title).to_string(),
        },
        difficulty: source.difficulty,
        duration: estimate_duration(&source.movements, source.music_tempo),
        participants: estimate_participants(&source.formation),
        formation: source.formation.description.clone(),
        music: MusicInfo {
            title: source
                .tune
                .clone()
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| source.title.clone()),
            tempo: describe_tempo(&source.time_signature, source.music_tempo),
            time_signature: map_time_signature(&source.time_signature).to_string(),
        },
        steps: build_steps(&source.movements, &source.title),
        cultural_context: cultural_context(source),
        region: source
            .region
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .unwrap_or(DEFAULT_REGION)
            .to_string(),
    }
}

/// Normalize every source dance, preserving catalogue order.
pub fn normalize(sources: &[SourceDance]) -> Vec<OutputDance> {
    let records: Vec<OutputDance> = sources.iter().map(assemble_record).collect();
    log::debug!("Normalized {} dances", records.len());
    records
}

/// Description and historical notes, skipping whichever is blank.
fn cultural_context(source: &SourceDance) -> String {
    [source.description.as_str(), source.historical_notes.as_str()]
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
