//! Per-field derivations from a source record.
//!
//! Each function is pure and total: unknown tags and missing values take a
//! fixed default instead of producing an error.

use ceili_catalog::{Formation, Movement};
use ceili_core::Meter;

use crate::tables::{
    DEFAULT_HANDHOLDS, DEFAULT_PARTICIPANTS, FASTEST_TEMPO_BAND, FORMATIONS, FormationClass,
    HANDHOLD_KEYWORDS, MOVEMENT_TRANSLATIONS, TEMPO_BANDS, TITLE_TRANSLATIONS,
};

/// Beats in one bar of ceili music.
const BEATS_PER_BAR: u32 = 4;

/// Shortest duration reported for any dance, in minutes.
pub const MIN_DURATION_MINUTES: u32 = 3;

/// Time signature for a meter tag; unknown tags are treated as reels.
///
/// ```
/// use ceili_normalize::map_time_signature;
///
/// assert_eq!(map_time_signature("jig"), "6/8");
/// assert_eq!(map_time_signature("slip_jig"), "2/4");
/// ```
pub fn map_time_signature(tag: &str) -> &'static str {
    Meter::from_tag(tag).unwrap_or(Meter::Reel).time_signature()
}

/// Describe a tempo as a band plus the meter, e.g. `"Lively reel time (120 bpm)"`.
///
/// Bands: under 115 bpm is Moderate, under 125 is Lively, anything else Fast.
pub fn describe_tempo(tag: &str, bpm: u32) -> String {
    let band = TEMPO_BANDS
        .iter()
        .find(|(limit, _)| bpm < *limit)
        .map_or(FASTEST_TEMPO_BAND, |(_, band)| *band);
    let meter = Meter::from_tag(tag).unwrap_or(Meter::Reel);
    format!("{band} {meter} time ({bpm} bpm)")
}

/// Usual number of dancers for a formation.
pub fn estimate_participants(formation: &Formation) -> u32 {
    lookup_formation(&formation.formation_type).map_or(DEFAULT_PARTICIPANTS, |(n, _)| n)
}

/// Broad class of a formation, [`FormationClass::Other`] when unrecognized.
pub fn formation_class(formation: &Formation) -> FormationClass {
    lookup_formation(&formation.formation_type).map_or(FormationClass::Other, |(_, c)| c)
}

fn lookup_formation(tag: &str) -> Option<(u32, FormationClass)> {
    FORMATIONS
        .iter()
        .find(|(t, _, _)| *t == tag)
        .map(|&(_, n, class)| (n, class))
}

/// Estimated running time in whole minutes.
///
/// Sums the bars of every movement (8 for any missing count), at four beats
/// per bar, divided by the tempo. Rounded to the nearest minute and never
/// less than [`MIN_DURATION_MINUTES`]. A zero tempo gives the minimum.
pub fn estimate_duration(movements: &[Movement], bpm: u32) -> u32 {
    if bpm == 0 {
        return MIN_DURATION_MINUTES;
    }
    let bars: u64 = movements
        .iter()
        .map(|m| u64::from(m.bars_or_default()))
        .sum();
    let beats = bars as f64 * f64::from(BEATS_PER_BAR);
    let minutes = (beats / f64::from(bpm)).round() as u32;
    minutes.max(MIN_DURATION_MINUTES)
}

/// Irish title for a dance, or the English title when none is curated.
pub fn translate_title(title: &str) -> &str {
    match TITLE_TRANSLATIONS.get(title) {
        Some(&irish) => irish,
        None => title,
    }
}

/// Irish name for a movement, or the English name when none is curated.
pub fn translate_movement(name: &str) -> &str {
    match MOVEMENT_TRANSLATIONS.get(name) {
        Some(&irish) => irish,
        None => name,
    }
}

/// Handhold used in a movement, judged from keywords in its description.
pub fn derive_handholds(description: &str) -> &'static str {
    let lower = description.to_lowercase();
    HANDHOLD_KEYWORDS
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map_or(DEFAULT_HANDHOLDS, |(_, label)| *label)
}

#[cfg(test)]
#[path = "tests/derive_tests.rs"]
mod tests;
