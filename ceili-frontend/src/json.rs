use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use ceili_normalize::{CatalogueStats, GeneratedCatalogue, OutputDance, TimelinePeriod};

use crate::{CategoryGroups, FrontendError, ModuleWriter, format_timestamp};

/// Plain JSON document with the same content as the TypeScript module,
/// for consumers that fetch the catalogue instead of importing it.
pub struct JsonModule;

impl JsonModule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonModule {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonDocument<'a> {
    generated_at: String,
    dances: &'a [OutputDance],
    categories: CategoryGroups<'a>,
    timeline: &'a [TimelinePeriod],
    region_summary: &'a BTreeMap<String, usize>,
    statistics: &'a CatalogueStats,
}

impl ModuleWriter for JsonModule {
    fn name(&self) -> &'static str {
        "JSON"
    }

    fn extension(&self) -> &'static str {
        "json"
    }

    fn render(
        &self,
        catalogue: &GeneratedCatalogue,
        generated_at: DateTime<Utc>,
    ) -> Result<String, FrontendError> {
        let document = JsonDocument {
            generated_at: format_timestamp(generated_at),
            dances: &catalogue.dances,
            categories: CategoryGroups::of(catalogue),
            timeline: &catalogue.indices.timeline,
            region_summary: &catalogue.indices.region_counts,
            statistics: &catalogue.stats,
        };
        let mut json = serde_json::to_string_pretty(&document)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
#[path = "tests/json_tests.rs"]
mod tests;
