//! Property tests for the progression engine.
//!
//! These sweep a grid of records through every style, rating and experience
//! level and check the guarantees callers rely on:
//! - Invalid ratings are a no-op
//! - Weights never go negative and reps stay in bounds
//! - Increases never exceed the percentage cap
//! - Very easy never prescribes less than too hard
//! - Reps only drop alongside a heavier load or a deload
//! - Calls are independent and safe to run concurrently

use overload_core::cap::max_percentage_increase;
use overload_core::*;

const EQUIPMENT: [EquipmentType; 6] = [
    EquipmentType::Barbell,
    EquipmentType::Dumbbell,
    EquipmentType::Cable,
    EquipmentType::Machine,
    EquipmentType::Bodyweight,
    EquipmentType::Unknown,
];

const WEIGHTS: [f64; 12] = [0.0, 2.0, 4.0, 8.0, 10.0, 12.5, 19.0, 20.0, 37.5, 60.0, 101.0, 140.0];

const REPS: [u32; 7] = [1, 5, 8, 12, 19, 20, 25];

const STYLES: [TrainingStyle; 2] = [TrainingStyle::Strength, TrainingStyle::Hypertrophy];

const LEVELS: [ExperienceLevel; 3] = [
    ExperienceLevel::Beginner,
    ExperienceLevel::Intermediate,
    ExperienceLevel::Advanced,
];

/// Every record in the grid at the given rating
fn grid(rating: u8) -> Vec<PerformanceRecord> {
    let mut records = Vec::new();
    for equipment in EQUIPMENT {
        for is_compound in [false, true] {
            for weight in WEIGHTS {
                for reps in REPS {
                    records.push(PerformanceRecord::new(3, reps, weight, rating, equipment, is_compound));
                }
            }
        }
    }
    records.push(
        PerformanceRecord::new(3, 10, 0.0, rating, EquipmentType::Bodyweight, true).with_name("Chin Up"),
    );
    records.push(
        PerformanceRecord::new(3, 20, 0.0, rating, EquipmentType::Bodyweight, false).with_name("dip"),
    );
    records
}

fn settings_for(level: ExperienceLevel) -> EquipmentSettings {
    EquipmentSettings {
        experience_level: Some(level),
        ..EquipmentSettings::default()
    }
}

#[test]
fn test_invalid_ratings_leave_record_unchanged() {
    for rating in [0u8, 6, 7, 100, 255] {
        for record in grid(rating) {
            for style in STYLES {
                let result = calculate_progression(&record, style, None);
                assert_eq!(result.new_weight, record.weight);
                assert_eq!(result.new_reps, record.reps);
                assert!(!result.deload);
                assert!(result.suggestion.is_none());
            }
        }
    }
}

#[test]
fn test_results_stay_in_bounds() {
    for level in LEVELS {
        let settings = settings_for(level);
        for rating in 1..=5 {
            for record in grid(rating) {
                for style in STYLES {
                    let result = calculate_progression(&record, style, Some(&settings));
                    assert!(result.new_weight >= 0.0, "{:?} -> {:?}", record, result);
                    assert!(
                        (MIN_REPS..=MAX_REPS).contains(&result.new_reps),
                        "{:?} -> {:?}",
                        record,
                        result
                    );
                }
            }
        }
    }
}

#[test]
fn test_increases_respect_percentage_cap() {
    for level in LEVELS {
        let settings = settings_for(level);
        for rating in 1..=3 {
            for record in grid(rating) {
                if record.weight <= 0.0 {
                    continue;
                }
                let max_percent =
                    max_percentage_increase(record.weight, record.is_compound, record.equipment, level);
                let limit = record.weight * (1.0 + max_percent / 100.0);

                for style in STYLES {
                    let result = calculate_progression(&record, style, Some(&settings));
                    assert!(
                        result.new_weight <= limit + 1e-9,
                        "{:?} -> {} exceeds cap {}",
                        record,
                        result.new_weight,
                        limit
                    );
                }
            }
        }
    }
}

#[test]
fn test_very_easy_never_worse_than_too_hard() {
    for level in LEVELS {
        let settings = settings_for(level);
        for (easy, hard) in grid(1).iter().zip(grid(5).iter()) {
            for style in STYLES {
                let easy_result = calculate_progression(easy, style, Some(&settings));
                let hard_result = calculate_progression(hard, style, Some(&settings));

                assert!(
                    easy_result.new_weight >= hard_result.new_weight,
                    "{:?}: {:?} vs {:?}",
                    easy,
                    easy_result,
                    hard_result
                );
                assert!(
                    easy_result.new_reps >= hard_result.new_reps,
                    "{:?}: {:?} vs {:?}",
                    easy,
                    easy_result,
                    hard_result
                );
            }
        }
    }
}

#[test]
fn test_reps_only_drop_with_more_weight_or_a_deload() {
    for level in LEVELS {
        let settings = settings_for(level);
        for rating in 1..=5 {
            for record in grid(rating) {
                if record.reps > MAX_REPS {
                    continue;
                }
                for style in STYLES {
                    let result = calculate_progression(&record, style, Some(&settings));
                    if result.new_reps < record.reps && result.new_weight <= record.weight {
                        assert!(result.deload, "{:?} -> {:?}", record, result);
                    }
                }
            }
        }
    }
}

#[test]
fn test_strength_never_changes_reps() {
    for rating in 1..=5 {
        for record in grid(rating) {
            if record.weight <= 0.0 || !(MIN_REPS..=MAX_REPS).contains(&record.reps) {
                continue;
            }
            let result = calculate_progression(&record, TrainingStyle::Strength, None);
            assert_eq!(result.new_reps, record.reps);
        }
    }
}

#[test]
fn test_bodyweight_detection_ignores_case() {
    for rating in 1..=5 {
        let upper = PerformanceRecord::new(3, 9, 0.0, rating, EquipmentType::Bodyweight, true).with_name("PULL UP");
        let lower = upper.clone().with_name("pull up");

        for style in STYLES {
            let a = calculate_progression(&upper, style, None);
            let b = calculate_progression(&lower, style, None);
            assert_eq!(a, b);
            assert_eq!(a.new_weight, 0.0);
        }
    }
}

#[test]
fn test_concurrent_calls_match_sequential() {
    let records = grid(2);
    let sequential: Vec<ProgressionResult> = records
        .iter()
        .map(|r| calculate_progression(r, TrainingStyle::Hypertrophy, None))
        .collect();

    let concurrent: Vec<ProgressionResult> = std::thread::scope(|scope| {
        let handles: Vec<_> = records
            .chunks(64)
            .map(|chunk| {
                scope.spawn(move || {
                    chunk
                        .iter()
                        .map(|r| calculate_progression(r, TrainingStyle::Hypertrophy, None))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect()
    });

    assert_eq!(sequential, concurrent);
}
