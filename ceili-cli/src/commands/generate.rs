use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use ceili_catalog::{SourceDance, check_catalogue};
use ceili_frontend::OutputFormat;

use crate::CliError;

/// Normalize the catalogue and write one data module to `output`.
///
/// Integrity issues are reported as warnings; they never stop generation.
/// An empty catalogue is an error and leaves `output` untouched.
pub(crate) fn run_generate(
    sources: &[SourceDance],
    output: &Path,
    format: OutputFormat,
) -> Result<(), CliError> {
    if sources.is_empty() {
        return Err(CliError::EmptyCatalogue);
    }
    for issue in check_catalogue(sources) {
        log::warn!("{}", issue);
    }

    let catalogue = ceili_normalize::generate(sources);
    let writer = format.writer();
    writer.write(&catalogue, output, chrono::Utc::now())?;

    log::info!(
        "{} Wrote {} module with {} dances ({} steps) to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        writer.name(),
        catalogue.stats.total_dances,
        catalogue.stats.total_steps,
        output.display().if_supports_color(Stdout, |t| t.bold()),
    );
    Ok(())
}
