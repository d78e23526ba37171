//! Catalogue normalizer: turns curated source dances into the uniform
//! records, index groupings, and statistics the front-end consumes.
//!
//! Nothing here fails. Unknown tags and missing values fall back to fixed
//! defaults (see [`tables`]), so identical input always produces identical
//! output.

pub mod derive;
pub mod indices;
pub mod record;
pub mod stats;
pub mod steps;
pub mod tables;

pub use derive::{
    MIN_DURATION_MINUTES, derive_handholds, describe_tempo, estimate_duration,
    estimate_participants, formation_class, map_time_signature, translate_movement,
    translate_title,
};
pub use indices::{CatalogueIndices, Period, TimelineEntry, TimelinePeriod, build_indices};
pub use record::{BilingualName, MusicInfo, OutputDance, StepRecord, assemble_record, normalize};
pub use stats::{CatalogueStats, compute_stats};
pub use steps::build_steps;
pub use tables::FormationClass;

use ceili_catalog::SourceDance;

/// Everything derived from one catalogue: the records plus their indices
/// and statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedCatalogue {
    pub dances: Vec<OutputDance>,
    pub indices: CatalogueIndices,
    pub stats: CatalogueStats,
}

/// Run the whole normalization pipeline over a catalogue.
pub fn generate(sources: &[SourceDance]) -> GeneratedCatalogue {
    let dances = normalize(sources);
    let indices = build_indices(sources, &dances);
    let stats = compute_stats(sources, &dances);
    GeneratedCatalogue {
        dances,
        indices,
        stats,
    }
}
