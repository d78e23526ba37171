use super::*;
use crate::{ModuleWriter, OutputFormat};
use ceili_catalog::builtin_dances;
use ceili_normalize::generate;
use chrono::TimeZone;

fn render_builtin() -> serde_json::Value {
    let catalogue = generate(&builtin_dances().unwrap());
    let at = Utc.with_ymd_and_hms(2024, 3, 17, 9, 30, 0).unwrap();
    let text = JsonModule::new().render(&catalogue, at).unwrap();
    serde_json::from_str(&text).unwrap()
}

#[test]
fn test_document_top_level_keys() {
    let doc = render_builtin();
    let keys: Vec<&str> = doc.as_object().unwrap().keys().map(String::as_str).collect();
    for key in [
        "generatedAt",
        "dances",
        "categories",
        "timeline",
        "regionSummary",
        "statistics",
    ] {
        assert!(keys.contains(&key), "missing {key}");
    }
    assert_eq!(doc["generatedAt"], "2024-03-17T09:30:00Z");
}

#[test]
fn test_categories_are_grouped() {
    let doc = render_builtin();
    let categories = &doc["categories"];
    assert!(categories["byEra"]["historical"]
        .as_array()
        .unwrap()
        .iter()
        .any(|id| id == "rince-fada"));
    assert!(categories["byCategory"]["long"].is_array());
    assert!(categories["byDifficulty"]["beginner"].is_array());
    assert!(categories["byRegion"]["All Ireland"].is_array());
}

#[test]
fn test_statistics_match_dance_list() {
    let doc = render_builtin();
    let dances = doc["dances"].as_array().unwrap();
    assert_eq!(doc["statistics"]["totalDances"], dances.len());
    let steps: usize = dances
        .iter()
        .map(|d| d["steps"].as_array().unwrap().len())
        .sum();
    assert_eq!(doc["statistics"]["totalSteps"], steps);
}

#[test]
fn test_output_format_parsing() {
    assert_eq!("ts".parse::<OutputFormat>().unwrap(), OutputFormat::Ts);
    assert_eq!(
        "TypeScript".parse::<OutputFormat>().unwrap(),
        OutputFormat::Ts
    );
    assert_eq!(" json ".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    let err = "yaml".parse::<OutputFormat>().unwrap_err();
    assert!(err.to_string().contains("yaml"));
}

#[test]
fn test_output_format_writers() {
    assert_eq!(OutputFormat::Ts.writer().extension(), "ts");
    assert_eq!(OutputFormat::Json.writer().extension(), "json");
    assert_eq!(OutputFormat::default(), OutputFormat::Ts);
}
