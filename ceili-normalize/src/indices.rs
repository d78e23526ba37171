//! Index groupings over the normalized catalogue.
//!
//! Every grouping is computed in one pass from tags on the records
//! themselves. Groups list dance ids in catalogue order; every known tag
//! gets a group, even when it is empty, so the generated shape is stable.

use std::collections::BTreeMap;

use ceili_catalog::SourceDance;
use ceili_core::{Category, Difficulty, Era};
use serde::Serialize;

use crate::record::OutputDance;

/// Historical period a dance was recorded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    /// Before the Gaelic League was founded in 1893.
    Early,
    /// 1893 to 1938.
    Revival,
    /// 1939, when the Irish Dancing Commission published its handbook, to 1968.
    Commission,
    /// 1969 onwards.
    Modern,
}

impl Period {
    pub fn of_year(year: i32) -> Self {
        match year {
            ..=1892 => Self::Early,
            1893..=1938 => Self::Revival,
            1939..=1968 => Self::Commission,
            _ => Self::Modern,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Early => "Before the Gaelic League",
            Self::Revival => "Gaelic Revival",
            Self::Commission => "Irish Dancing Commission",
            Self::Modern => "Modern revival",
        }
    }

    /// First and last year of the period; `None` where it is open-ended.
    pub fn years(&self) -> (Option<i32>, Option<i32>) {
        match self {
            Self::Early => (None, Some(1892)),
            Self::Revival => (Some(1893), Some(1938)),
            Self::Commission => (Some(1939), Some(1968)),
            Self::Modern => (Some(1969), None),
        }
    }

    pub fn all() -> &'static [Period] {
        &[Self::Early, Self::Revival, Self::Commission, Self::Modern]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    pub id: String,
    pub title: String,
    pub year: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelinePeriod {
    pub period: Period,
    pub label: String,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    /// Sorted by year; ties keep catalogue order.
    pub dances: Vec<TimelineEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogueIndices {
    pub by_era: BTreeMap<Era, Vec<String>>,
    pub by_category: BTreeMap<Category, Vec<String>>,
    pub by_difficulty: BTreeMap<Difficulty, Vec<String>>,
    pub by_region: BTreeMap<String, Vec<String>>,
    pub region_counts: BTreeMap<String, usize>,
    pub timeline: Vec<TimelinePeriod>,
}

/// Partition the catalogue by era, category, difficulty, region and period.
///
/// `records` must be the normalized form of `sources`, in the same order.
pub fn build_indices(sources: &[SourceDance], records: &[OutputDance]) -> CatalogueIndices {
    debug_assert_eq!(sources.len(), records.len());

    let mut by_era: BTreeMap<Era, Vec<String>> =
        Era::all().iter().map(|&e| (e, Vec::new())).collect();
    let mut by_category: BTreeMap<Category, Vec<String>> =
        Category::all().iter().map(|&c| (c, Vec::new())).collect();
    let mut by_difficulty: BTreeMap<Difficulty, Vec<String>> =
        Difficulty::all().iter().map(|&d| (d, Vec::new())).collect();
    let mut by_region: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut by_period: BTreeMap<Period, Vec<TimelineEntry>> =
        Period::all().iter().map(|&p| (p, Vec::new())).collect();

    for (source, record) in sources.iter().zip(records) {
        let id = &record.id;
        by_era.entry(source.era).or_default().push(id.clone());
        by_category
            .entry(source.category)
            .or_default()
            .push(id.clone());
        by_difficulty
            .entry(record.difficulty)
            .or_default()
            .push(id.clone());
        by_region
            .entry(record.region.clone())
            .or_default()
            .push(id.clone());
        by_period
            .entry(Period::of_year(source.year_recorded))
            .or_default()
            .push(TimelineEntry {
                id: id.clone(),
                title: record.name.english.clone(),
                year: source.year_recorded,
            });
    }

    let region_counts = by_region
        .iter()
        .map(|(region, ids)| (region.clone(), ids.len()))
        .collect();

    let timeline = by_period
        .into_iter()
        .map(|(period, mut dances)| {
            // Stable sort keeps catalogue order within a year.
            dances.sort_by_key(|entry| entry.year);
            let (start_year, end_year) = period.years();
            TimelinePeriod {
                period,
                label: period.label().to_string(),
                start_year,
                end_year,
                dances,
            }
        })
        .collect();

    CatalogueIndices {
        by_era,
        by_category,
        by_difficulty,
        by_region,
        region_counts,
        timeline,
    }
}

#[cfg(test)]
#[path = "tests/indices_tests.rs"]
mod tests;
