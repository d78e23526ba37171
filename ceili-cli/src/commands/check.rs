use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use ceili_catalog::{SourceDance, check_catalogue};

use crate::CliError;

/// Report structural issues. With `strict`, any issue is an error.
pub(crate) fn run_check(sources: &[SourceDance], strict: bool) -> Result<(), CliError> {
    let issues = check_catalogue(sources);

    if issues.is_empty() {
        log::info!(
            "{} {} dances, no issues found",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            sources.len(),
        );
        return Ok(());
    }

    for issue in &issues {
        log::warn!("{}", issue);
    }
    log::info!(
        "{} {} issue(s) in {} dances",
        "\u{2718}".if_supports_color(Stdout, |t| t.red()),
        issues.len(),
        sources.len(),
    );

    if strict {
        Err(CliError::CheckFailed(issues.len()))
    } else {
        Ok(())
    }
}
