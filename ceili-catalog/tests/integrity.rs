use ceili_catalog::{
    CatalogueIssue, Formation, Movement, SourceDance, builtin_dances, check_catalogue,
};
use ceili_core::{Category, Difficulty, Era};

fn dance(id: &str, prerequisites: &[&str]) -> SourceDance {
    SourceDance {
        id: id.to_string(),
        title: id.to_string(),
        category: Category::Long,
        difficulty: Difficulty::Beginner,
        time_signature: "reel".to_string(),
        formation: Formation {
            formation_type: "two_couples_facing".to_string(),
            description: String::new(),
        },
        movements: vec![Movement {
            name: "Swing".to_string(),
            bars: Some(8),
            description: String::new(),
            instructions: None,
            tips: Vec::new(),
        }],
        music_tempo: 116,
        prerequisites: prerequisites.iter().map(|s| s.to_string()).collect(),
        description: String::new(),
        historical_notes: String::new(),
        region: None,
        year_recorded: 1939,
        era: Era::Standard,
        tune: None,
    }
}

#[test]
fn builtin_catalogue_is_clean() {
    let dances = builtin_dances().unwrap();
    let issues = check_catalogue(&dances);
    assert!(issues.is_empty(), "unexpected issues: {issues:?}");
}

#[test]
fn dangling_prerequisite_is_reported() {
    let dances = vec![dance("a", &["ghost"]), dance("b", &["a"])];
    assert_eq!(
        check_catalogue(&dances),
        vec![CatalogueIssue::DanglingPrerequisite {
            dance: "a".to_string(),
            missing: "ghost".to_string(),
        }]
    );
}

#[test]
fn duplicate_id_is_reported_once() {
    let dances = vec![dance("a", &[]), dance("a", &[]), dance("a", &[])];
    assert_eq!(
        check_catalogue(&dances),
        vec![CatalogueIssue::DuplicateId {
            id: "a".to_string(),
            count: 3,
        }]
    );
}

#[test]
fn two_dance_cycle_is_reported_with_closed_path() {
    let dances = vec![dance("a", &["b"]), dance("b", &["a"]), dance("c", &["a"])];
    let issues = check_catalogue(&dances);
    assert_eq!(
        issues,
        vec![CatalogueIssue::PrerequisiteCycle {
            path: vec!["a".to_string(), "b".to_string(), "a".to_string()],
        }]
    );
    assert_eq!(issues[0].to_string(), "prerequisite cycle: a -> b -> a");
}

#[test]
fn self_prerequisite_is_a_cycle() {
    let issues = check_catalogue(&[dance("loop", &["loop"])]);
    assert_eq!(
        issues,
        vec![CatalogueIssue::PrerequisiteCycle {
            path: vec!["loop".to_string(), "loop".to_string()],
        }]
    );
}

#[test]
fn diamond_dependencies_are_not_cycles() {
    let dances = vec![
        dance("base", &[]),
        dance("left", &["base"]),
        dance("right", &["base"]),
        dance("top", &["left", "right"]),
    ];
    assert!(check_catalogue(&dances).is_empty());
}

#[test]
fn dance_without_movements_is_reported() {
    let mut empty = dance("empty", &[]);
    empty.movements.clear();
    assert_eq!(
        check_catalogue(&[empty]),
        vec![CatalogueIssue::NoMovements {
            dance: "empty".to_string(),
        }]
    );
}
