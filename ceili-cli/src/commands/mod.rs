pub(crate) mod check;
pub(crate) mod generate;
pub(crate) mod list;
pub(crate) mod stats;

use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use ceili_catalog::{SourceDance, builtin_dances, load_dances};

use crate::CliError;

/// Read the catalogue from `dir`, or the built-in one when `None`.
///
/// A directory named on the command line or in settings must exist.
pub(crate) fn load_catalogue(dir: Option<&Path>) -> Result<Vec<SourceDance>, CliError> {
    let dances = match dir {
        Some(dir) => {
            if !dir.exists() {
                return Err(CliError::CatalogNotFound(dir.to_path_buf()));
            }
            let dances = load_dances(dir)?;
            if dances.is_empty() {
                log::warn!("No dances found in {}", dir.display());
            }
            log::debug!("Loaded {} dances from {}", dances.len(), dir.display());
            dances
        }
        None => {
            let dances = builtin_dances()?;
            log::debug!("Loaded {} built-in dances", dances.len());
            dances
        }
    };
    Ok(dances)
}

/// Bold section heading followed by a blank line.
pub(crate) fn log_heading(title: &str) {
    log::info!("{}", title.if_supports_color(Stdout, |t| t.bold()));
    crate::log_blank();
}
