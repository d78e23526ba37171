use std::path::PathBuf;

use thiserror::Error;

use ceili_catalog::YamlError;
use ceili_frontend::FrontendError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Catalogue could not be read or parsed
    #[error("Catalogue error: {0}")]
    Catalog(#[from] YamlError),

    /// Catalogue directory does not exist
    #[error("Catalogue directory not found: {}", .0.display())]
    CatalogNotFound(PathBuf),

    /// Nothing to generate from
    #[error("Catalogue is empty; refusing to write a module with no dances")]
    EmptyCatalogue,

    /// Module rendering or writing failed
    #[error("Output error: {0}")]
    Frontend(#[from] FrontendError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// `check --strict` found problems
    #[error("Catalogue check failed with {0} issue(s)")]
    CheckFailed(usize),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
