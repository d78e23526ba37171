use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use ceili_catalog::SourceDance;
use ceili_core::Era;
use ceili_normalize::OutputDance;

pub(crate) fn run_list(sources: &[SourceDance]) {
    let dances = ceili_normalize::normalize(sources);
    super::log_heading("Ceili dances:");

    let mut first = true;
    for &era in Era::all() {
        let in_era: Vec<&OutputDance> = sources
            .iter()
            .zip(&dances)
            .filter(|(source, _)| source.era == era)
            .map(|(_, dance)| dance)
            .collect();
        if in_era.is_empty() {
            continue;
        }
        if !first {
            crate::log_blank();
        }
        first = false;

        log::info!(
            "{} ({}):",
            era.label().if_supports_color(Stdout, |t| t.bold()),
            in_era.len(),
        );
        for dance in in_era {
            log::info!(
                "  {} [{}] {} min, {} dancers",
                dance.name.english.if_supports_color(Stdout, |t| t.bold()),
                dance
                    .difficulty
                    .as_str()
                    .if_supports_color(Stdout, |t| t.cyan()),
                dance.duration,
                dance.participants,
            );
        }
    }
}
