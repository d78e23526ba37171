use ceili_catalog::Movement;
use ceili_core::step_slug;

use crate::derive::{derive_handholds, translate_movement};
use crate::record::{BilingualName, StepRecord};
use crate::tables::{COMMON_MISTAKES, DEFAULT_FOOTWORK, DEFAULT_TIPS, MAX_TIPS};

/// Turn a dance's movements into step records, one per movement, in order.
///
/// Step ids are `<slug of title>-step-<n>` with `n` counting from 1.
pub fn build_steps(movements: &[Movement], dance_title: &str) -> Vec<StepRecord> {
    movements
        .iter()
        .enumerate()
        .map(|(i, movement)| StepRecord {
            id: step_slug(dance_title, i + 1),
            name: BilingualName {
                english: movement.name.clone(),
                irish: translate_movement(&movement.name).to_string(),
            },
            description: movement.description.clone(),
            counts: movement.bars_or_default(),
            footwork: movement
                .instructions
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .unwrap_or(DEFAULT_FOOTWORK)
                .to_string(),
            handholds: derive_handholds(&movement.description).to_string(),
            tips: step_tips(&movement.tips),
            common_mistakes: COMMON_MISTAKES.iter().map(|s| s.to_string()).collect(),
        })
        .collect()
}

/// Up to [`MAX_TIPS`] non-blank tips, or the defaults when there are none.
fn step_tips(tips: &[String]) -> Vec<String> {
    let tips: Vec<String> = tips
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .take(MAX_TIPS)
        .map(String::from)
        .collect();
    if tips.is_empty() {
        DEFAULT_TIPS.iter().map(|s| s.to_string()).collect()
    } else {
        tips
    }
}

#[cfg(test)]
#[path = "tests/steps_tests.rs"]
mod tests;
