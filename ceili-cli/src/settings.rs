//! Generator settings (output path, output format, catalogue directory).
//!
//! Each value is resolved through a priority chain:
//!
//! 1. CLI flag
//! 2. `ceili.toml` in the working directory
//! 3. `~/.config/ceili-gen/settings.toml`
//! 4. Built-in default

use std::path::{Path, PathBuf};

use serde::Deserialize;

use ceili_frontend::OutputFormat;

use crate::CliError;

/// Project-local settings file, looked up in the working directory.
pub(crate) const LOCAL_SETTINGS_FILE: &str = "ceili.toml";

/// Default output location, without extension. The extension follows the
/// selected format.
pub(crate) const DEFAULT_OUTPUT_STEM: &str = "src/data/ceiliDances";

/// Canonical path to the user settings file: `~/.config/ceili-gen/settings.toml`.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("ceili-gen").join("settings.toml")
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub output: OutputSettings,
    pub catalog: CatalogSettings,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct OutputSettings {
    pub path: Option<PathBuf>,
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct CatalogSettings {
    pub dir: Option<PathBuf>,
}

impl Settings {
    /// Load the local file over the user file. Missing files are skipped;
    /// a file that exists but does not parse is an error.
    pub(crate) fn load() -> Result<Self, CliError> {
        Self::load_from(&[PathBuf::from(LOCAL_SETTINGS_FILE), settings_path()])
    }

    /// Load settings files in priority order, highest first.
    pub(crate) fn load_from(paths: &[PathBuf]) -> Result<Self, CliError> {
        let mut settings = Self::default();
        for path in paths {
            if let Some(file) = Self::read_file(path)? {
                log::debug!("Loaded settings from {}", path.display());
                settings = settings.or(file);
            }
        }
        Ok(settings)
    }

    fn read_file(path: &Path) -> Result<Option<Self>, CliError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        toml::from_str(&contents)
            .map(Some)
            .map_err(|e| CliError::config(format!("{}: {}", path.display(), e)))
    }

    /// Fill every unset value from `fallback`.
    fn or(self, fallback: Self) -> Self {
        Self {
            output: OutputSettings {
                path: self.output.path.or(fallback.output.path),
                format: self.output.format.or(fallback.output.format),
            },
            catalog: CatalogSettings {
                dir: self.catalog.dir.or(fallback.catalog.dir),
            },
        }
    }

    pub(crate) fn resolve_format(&self, cli_override: Option<OutputFormat>) -> OutputFormat {
        cli_override.or(self.output.format).unwrap_or_default()
    }

    /// An explicit CLI path is used as given. A settings path takes the
    /// extension of `format`, so `--format json` never writes JSON into a
    /// `.ts` file.
    pub(crate) fn resolve_output_path(
        &self,
        cli_override: Option<PathBuf>,
        format: OutputFormat,
    ) -> PathBuf {
        if let Some(path) = cli_override {
            return path;
        }
        let extension = format.writer().extension();
        match &self.output.path {
            Some(path) => path.with_extension(extension),
            None => PathBuf::from(DEFAULT_OUTPUT_STEM).with_extension(extension),
        }
    }

    /// `None` means the built-in catalogue.
    pub(crate) fn resolve_catalog_dir(&self, cli_override: Option<PathBuf>) -> Option<PathBuf> {
        cli_override.or_else(|| self.catalog.dir.clone())
    }
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
