//! Rep-only progression for unloaded bodyweight movements.
//!
//! A record takes this path only when it carries no load and its exercise
//! name is on the allow-list below. Equipment type is not consulted: a
//! weighted pull-up (belt, vest) goes through the general weighted path.

use crate::rules::{BODYWEIGHT_MAX_REPS, BODYWEIGHT_MIN_REPS, BODYWEIGHT_REP_CHANGES};
use crate::{PerformanceRecord, Rating, Target};
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Movements progressed by reps alone when performed unloaded
pub static SPECIAL_BODYWEIGHT_EXERCISES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["PULL UP", "CHIN UP", "DIP", "PUSH UP", "PUSH UP DEFICIT"]
        .into_iter()
        .collect()
});

/// Normalise an exercise name for allow-list lookup
///
/// Case-insensitive; hyphens and underscores count as spaces and runs of
/// whitespace collapse, so "pull-up" and "Pull  Up" both match "PULL UP".
fn normalize_name(name: &str) -> String {
    name.replace(['-', '_'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}

pub fn is_special_bodyweight_exercise(name: &str) -> bool {
    SPECIAL_BODYWEIGHT_EXERCISES.contains(normalize_name(name).as_str())
}

/// Whether a record takes the bodyweight path: no load, allow-listed name
pub fn qualifies(record: &PerformanceRecord) -> bool {
    record.weight <= 0.0 && is_special_bodyweight_exercise(&record.exercise_name)
}

/// Apply the bodyweight rep table; weight is never touched
pub fn progress_bodyweight(record: &PerformanceRecord, rating: Rating) -> Target {
    let change = BODYWEIGHT_REP_CHANGES.get(rating);
    let reps = (record.reps as i64 + change)
        .clamp(BODYWEIGHT_MIN_REPS as i64, BODYWEIGHT_MAX_REPS as i64) as u32;

    tracing::debug!(
        "Bodyweight progression for {}: {} -> {} reps",
        record.exercise_name,
        record.reps,
        reps
    );

    Target::new(record.weight, reps)
}
