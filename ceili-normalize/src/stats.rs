use std::collections::BTreeMap;

use ceili_catalog::SourceDance;
use ceili_core::{Category, Difficulty};
use serde::Serialize;

use crate::derive::formation_class;
use crate::record::OutputDance;
use crate::tables::FormationClass;

/// Aggregate figures over the normalized catalogue.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogueStats {
    pub total_dances: usize,
    pub total_steps: usize,
    /// Mean estimated duration in minutes, to one decimal place.
    pub average_duration: f64,
    pub by_difficulty: BTreeMap<Difficulty, usize>,
    pub by_category: BTreeMap<Category, usize>,
    pub by_formation: BTreeMap<FormationClass, usize>,
}

/// Count dances by difficulty, category and formation class.
///
/// `records` must be the normalized form of `sources`, in the same order.
pub fn compute_stats(sources: &[SourceDance], records: &[OutputDance]) -> CatalogueStats {
    let mut by_difficulty: BTreeMap<Difficulty, usize> =
        Difficulty::all().iter().map(|&d| (d, 0)).collect();
    let mut by_category: BTreeMap<Category, usize> =
        Category::all().iter().map(|&c| (c, 0)).collect();
    let mut by_formation: BTreeMap<FormationClass, usize> =
        FormationClass::all().iter().map(|&f| (f, 0)).collect();

    for (source, record) in sources.iter().zip(records) {
        *by_difficulty.entry(record.difficulty).or_default() += 1;
        *by_category.entry(source.category).or_default() += 1;
        *by_formation
            .entry(formation_class(&source.formation))
            .or_default() += 1;
    }

    let total_minutes: u32 = records.iter().map(|r| r.duration).sum();
    let average_duration = if records.is_empty() {
        0.0
    } else {
        (f64::from(total_minutes) / records.len() as f64 * 10.0).round() / 10.0
    };

    CatalogueStats {
        total_dances: records.len(),
        total_steps: records.iter().map(|r| r.steps.len()).sum(),
        average_duration,
        by_difficulty,
        by_category,
        by_formation,
    }
}
