use ceili_catalog::SourceDance;

pub(crate) fn run_stats(sources: &[SourceDance]) {
    let catalogue = ceili_normalize::generate(sources);
    let stats = &catalogue.stats;

    super::log_heading("Catalogue Statistics");
    log::info!("  Dances:           {:>6}", stats.total_dances);
    log::info!("  Steps:            {:>6}", stats.total_steps);
    log::info!("  Average duration: {:>6.1} min", stats.average_duration);

    crate::log_blank();
    log::info!("  By difficulty:");
    for (difficulty, count) in &stats.by_difficulty {
        log::info!("    {:<16}{:>4}", difficulty.as_str(), count);
    }

    crate::log_blank();
    log::info!("  By category:");
    for (category, count) in &stats.by_category {
        log::info!("    {:<16}{:>4}", category.label(), count);
    }

    crate::log_blank();
    log::info!("  By formation:");
    for (formation, count) in &stats.by_formation {
        log::info!("    {:<16}{:>4}", formation.as_str(), count);
    }

    crate::log_blank();
    log::info!("  By region:");
    for (region, count) in &catalogue.indices.region_counts {
        log::info!("    {:<16}{:>4}", region, count);
    }
}
