use super::*;

fn movement(bars: Option<u32>) -> Movement {
    Movement {
        name: "Swing".to_string(),
        bars,
        description: String::new(),
        instructions: None,
        tips: Vec::new(),
    }
}

fn formation(tag: &str) -> Formation {
    Formation {
        formation_type: tag.to_string(),
        description: String::new(),
    }
}

#[test]
fn time_signatures() {
    assert_eq!(map_time_signature("reel"), "2/4");
    assert_eq!(map_time_signature("jig"), "6/8");
    assert_eq!(map_time_signature("hornpipe"), "2/4");
    assert_eq!(map_time_signature("unknown"), "2/4");
    assert_eq!(map_time_signature(""), "2/4");
}

#[test]
fn tempo_bands() {
    assert_eq!(describe_tempo("reel", 114), "Moderate reel time (114 bpm)");
    assert_eq!(describe_tempo("jig", 115), "Lively jig time (115 bpm)");
    assert_eq!(describe_tempo("jig", 124), "Lively jig time (124 bpm)");
    assert_eq!(
        describe_tempo("hornpipe", 125),
        "Fast hornpipe time (125 bpm)"
    );
}

#[test]
fn tempo_of_unknown_meter_reads_as_reel() {
    assert_eq!(describe_tempo("polka", 130), "Fast reel time (130 bpm)");
}

#[test]
fn participants_lookup() {
    assert_eq!(estimate_participants(&formation("eight_hand")), 8);
    assert_eq!(estimate_participants(&formation("sixteen_hand")), 16);
    assert_eq!(estimate_participants(&formation("two_couples_facing")), 4);
    assert_eq!(estimate_participants(&formation("unrecognized_tag")), 4);
}

#[test]
fn formation_classes() {
    assert_eq!(
        formation_class(&formation("long_lines")),
        FormationClass::Longways
    );
    assert_eq!(
        formation_class(&formation("four_facing_four")),
        FormationClass::Round
    );
    assert_eq!(
        formation_class(&formation("eight_hand")),
        FormationClass::Square
    );
    assert_eq!(formation_class(&formation("mystery")), FormationClass::Other);
}

#[test]
fn four_eight_bar_movements_at_120_clamp_to_three_minutes() {
    // 32 bars * 4 beats / 120 bpm = 1.07, rounds to 1, clamped to 3.
    let movements = vec![movement(Some(8)); 4];
    assert_eq!(estimate_duration(&movements, 120), 3);
}

#[test]
fn duration_rounds_to_nearest_minute() {
    // 200 bars * 4 / 100 = 8.0
    assert_eq!(estimate_duration(&[movement(Some(200))], 100), 8);
    // 130 bars * 4 / 100 = 5.2
    assert_eq!(estimate_duration(&[movement(Some(130))], 100), 5);
    // 140 bars * 4 / 100 = 5.6
    assert_eq!(estimate_duration(&[movement(Some(140))], 100), 6);
}

#[test]
fn missing_or_zero_bars_count_as_eight() {
    let with_defaults = vec![movement(None), movement(Some(0)), movement(Some(8))];
    let explicit = vec![movement(Some(8)); 3];
    for bpm in [10, 20, 40] {
        assert_eq!(
            estimate_duration(&with_defaults, bpm),
            estimate_duration(&explicit, bpm)
        );
    }
    // 24 bars * 4 / 10 = 9.6
    assert_eq!(estimate_duration(&with_defaults, 10), 10);
}

#[test]
fn zero_tempo_gives_minimum_duration() {
    assert_eq!(estimate_duration(&[movement(Some(64))], 0), MIN_DURATION_MINUTES);
}

#[test]
fn huge_bar_counts_do_not_overflow() {
    let minutes = estimate_duration(&[movement(Some(u32::MAX)), movement(Some(8))], 120);
    let expected = ((f64::from(u32::MAX) + 8.0) * 4.0 / 120.0).round() as u32;
    assert_eq!(minutes, expected);
    assert_eq!(
        estimate_duration(&vec![movement(Some(u32::MAX)); 4], 1),
        u32::MAX
    );
}

#[test]
fn duration_never_below_minimum() {
    assert_eq!(estimate_duration(&[], 120), MIN_DURATION_MINUTES);
    for bars in [1, 8, 32, 64, 512] {
        for bpm in [1, 60, 112, 120, 200, 1000] {
            assert!(estimate_duration(&[movement(Some(bars))], bpm) >= MIN_DURATION_MINUTES);
        }
    }
}

#[test]
fn duration_is_monotonic_in_bars_and_tempo() {
    for bpm in [60, 100, 116, 124, 140] {
        let mut last = 0;
        for bars in (8..=800).step_by(8) {
            let d = estimate_duration(&[movement(Some(bars))], bpm);
            assert!(d >= last, "duration fell from {last} to {d} at {bars} bars, {bpm} bpm");
            last = d;
        }
    }
    for bars in [32, 96, 256, 640] {
        let mut last = u32::MAX;
        for bpm in 40..=200 {
            let d = estimate_duration(&[movement(Some(bars))], bpm);
            assert!(d <= last, "duration rose from {last} to {d} at {bpm} bpm, {bars} bars");
            last = d;
        }
    }
}

#[test]
fn title_translation() {
    assert_eq!(translate_title("The Walls of Limerick"), "Ballaí Luimní");
    assert_eq!(translate_title("Unmapped Dance Name"), "Unmapped Dance Name");
    // Exact match only.
    assert_eq!(translate_title("the walls of limerick"), "the walls of limerick");
}

#[test]
fn movement_translation() {
    assert_eq!(translate_movement("Swing"), "Luascadh");
    assert_eq!(translate_movement("Thread the Needle"), "Thread the Needle");
}

#[test]
fn handholds_follow_keyword_priority() {
    assert_eq!(
        derive_handholds("Turn with right hand, then left hand"),
        "Right hands joined"
    );
    assert_eq!(
        derive_handholds("Return with Left Hand joined"),
        "Left hands joined"
    );
    assert_eq!(derive_handholds("Swing with both hands"), "Both hands joined");
    assert_eq!(
        derive_handholds("Four dancers dance hands across"),
        "Hands across in a star"
    );
    assert_eq!(derive_handholds("Pass with no handhold"), "No handhold");
    assert_eq!(
        derive_handholds("Gallop down the centre"),
        "Various handholds as described"
    );
}
