use ceili_catalog::builtin_dances;
use ceili_core::{Difficulty, Era};
use ceili_normalize::{MIN_DURATION_MINUTES, Period, generate, normalize};

#[test]
fn every_builtin_dance_lasts_at_least_three_minutes() {
    let dances = normalize(&builtin_dances().unwrap());
    for dance in &dances {
        assert!(
            dance.duration >= MIN_DURATION_MINUTES,
            "{} lasts {} minutes",
            dance.id,
            dance.duration
        );
    }
}

#[test]
fn generation_is_deterministic() {
    let sources = builtin_dances().unwrap();
    let first = generate(&sources);
    let second = generate(&sources);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first.dances).unwrap(),
        serde_json::to_string(&second.dances).unwrap()
    );
}

#[test]
fn output_preserves_source_order_and_step_counts() {
    let sources = builtin_dances().unwrap();
    let dances = normalize(&sources);
    assert_eq!(dances.len(), sources.len());
    for (source, dance) in sources.iter().zip(&dances) {
        assert_eq!(source.id, dance.id);
        assert_eq!(source.movements.len(), dance.steps.len());
        for (n, step) in dance.steps.iter().enumerate() {
            assert!(step.id.ends_with(&format!("-step-{}", n + 1)));
        }
    }
}

#[test]
fn walls_of_limerick_record() {
    let sources = builtin_dances().unwrap();
    let dances = normalize(&sources);
    let walls = dances
        .iter()
        .find(|d| d.id == "walls-of-limerick")
        .unwrap();

    assert_eq!(walls.name.english, "The Walls of Limerick");
    assert_eq!(walls.name.irish, "Ballaí Luimní");
    assert_eq!(walls.difficulty, Difficulty::Beginner);
    assert_eq!(walls.duration, 3);
    assert_eq!(walls.participants, 4);
    assert_eq!(walls.region, "All Ireland");
    assert_eq!(walls.music.title, "The Walls of Limerick");
    assert_eq!(walls.music.time_signature, "2/4");
    assert_eq!(walls.music.tempo, "Lively reel time (116 bpm)");
    assert_eq!(walls.steps[0].id, "the-walls-of-limerick-step-1");
    assert_eq!(walls.steps[0].counts, 4);
    assert_eq!(
        walls.steps[0].footwork,
        "Promenade step forward for 2 bars, back for 2 bars"
    );
    assert_eq!(walls.steps[1].handholds, "No handhold");
    assert_eq!(walls.steps[3].handholds, "Right hands joined");
    assert!(walls.cultural_context.starts_with("The usual first dance"));
    assert!(walls.cultural_context.ends_with("in 1939."));
}

#[test]
fn tune_overrides_music_title() {
    let dances = normalize(&builtin_dances().unwrap());
    let harvest = dances
        .iter()
        .find(|d| d.id == "harvest-time-jig")
        .unwrap();
    assert_eq!(harvest.music.title, "Haste to the Wedding");
    assert_eq!(harvest.name.irish, harvest.name.english);
}

#[test]
fn blank_historical_notes_are_skipped_in_context() {
    let dances = normalize(&builtin_dances().unwrap());
    let haymakers = dances.iter().find(|d| d.id == "haymakers-jig").unwrap();
    assert_eq!(
        haymakers.cultural_context,
        "A progressive longways dance closely related to the Virginia Reel."
    );
}

#[test]
fn indices_and_stats_cover_every_dance() {
    let sources = builtin_dances().unwrap();
    let catalogue = generate(&sources);

    let era_total: usize = catalogue.indices.by_era.values().map(Vec::len).sum();
    let region_total: usize = catalogue.indices.region_counts.values().sum();
    let timeline_total: usize = catalogue
        .indices
        .timeline
        .iter()
        .map(|p| p.dances.len())
        .sum();
    assert_eq!(era_total, sources.len());
    assert_eq!(region_total, sources.len());
    assert_eq!(timeline_total, sources.len());

    assert!(catalogue.indices.by_era[&Era::Historical].contains(&"rince-fada".to_string()));
    assert_eq!(catalogue.indices.timeline[0].period, Period::Early);
    assert_eq!(catalogue.indices.timeline[0].dances[0].id, "rince-fada");

    let stats = &catalogue.stats;
    assert_eq!(stats.total_dances, sources.len());
    assert_eq!(stats.by_difficulty.values().sum::<usize>(), sources.len());
    assert_eq!(stats.by_formation.values().sum::<usize>(), sources.len());
    assert!(stats.average_duration >= f64::from(MIN_DURATION_MINUTES));
}
