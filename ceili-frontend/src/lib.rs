pub mod error;
pub mod json;
pub mod typescript;

pub use error::FrontendError;
pub use json::JsonModule;
pub use typescript::TypeScriptModule;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use ceili_core::{Category, Difficulty, Era};
use ceili_normalize::GeneratedCatalogue;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Trait for generated data modules consumed by the web front-end.
pub trait ModuleWriter {
    fn name(&self) -> &'static str;

    /// File extension of the generated module, without the dot.
    fn extension(&self) -> &'static str;

    /// Render the module text. `generated_at` is the only input that is
    /// not derived from the catalogue.
    fn render(
        &self,
        catalogue: &GeneratedCatalogue,
        generated_at: DateTime<Utc>,
    ) -> Result<String, FrontendError>;

    /// Render and write the module to `path`, creating parent directories.
    fn write(
        &self,
        catalogue: &GeneratedCatalogue,
        path: &Path,
        generated_at: DateTime<Utc>,
    ) -> Result<(), FrontendError> {
        let text = self.render(catalogue, generated_at)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, text)?;
        log::debug!("Wrote {} module to {}", self.name(), path.display());
        Ok(())
    }
}

/// Output formats the generator can write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    #[serde(alias = "typescript")]
    Ts,
    Json,
}

impl OutputFormat {
    pub fn writer(&self) -> Box<dyn ModuleWriter> {
        match self {
            Self::Ts => Box::new(TypeScriptModule::new()),
            Self::Json => Box::new(JsonModule::new()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ts => "ts",
            Self::Json => "json",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = FrontendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ts" | "typescript" => Ok(Self::Ts),
            "json" => Ok(Self::Json),
            _ => Err(FrontendError::UnknownFormat(s.to_string())),
        }
    }
}

/// The grouping tables shared by every output format.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CategoryGroups<'a> {
    by_era: &'a BTreeMap<Era, Vec<String>>,
    by_category: &'a BTreeMap<Category, Vec<String>>,
    by_difficulty: &'a BTreeMap<Difficulty, Vec<String>>,
    by_region: &'a BTreeMap<String, Vec<String>>,
}

impl<'a> CategoryGroups<'a> {
    pub(crate) fn of(catalogue: &'a GeneratedCatalogue) -> Self {
        let indices = &catalogue.indices;
        Self {
            by_era: &indices.by_era,
            by_category: &indices.by_category,
            by_difficulty: &indices.by_difficulty,
            by_region: &indices.by_region,
        }
    }
}

/// ISO-8601 timestamp, to the second, in UTC.
pub(crate) fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}
