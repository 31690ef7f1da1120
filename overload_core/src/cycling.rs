//! Rep cycling at the rep ceiling.
//!
//! Once reps reach the ceiling, reps drop back to the cycling target and the
//! weight goes up by a ratio that roughly preserves session volume. The ratio
//! is deliberately below the exact volume-preserving one (20/15 = 1.33) and
//! shrinks as the load gets heavier.
//!
//! Rating handling at the ceiling:
//! - Very easy / easy / moderate: cycle, or hold if the weight cannot move
//! - Hard: hold
//! - Too hard: reset reps to the cycling target at the same weight

use crate::rounding::settle_weight;
use crate::{EquipmentSettings, ExperienceLevel, PerformanceRecord, Rating, Target};

/// (inclusive lower load, ratio) bands, heaviest first
const CYCLING_BANDS: [(f64, f64); 3] = [(100.0, 1.25), (50.0, 1.28), (20.0, 1.30)];

/// Ratio for loads under the lightest band
const BASE_CYCLING_RATIO: f64 = 1.33;

const ADVANCED_CYCLING_DISCOUNT: f64 = 0.95;

/// Weight multiplier applied when cycling
pub fn cycling_ratio(weight: f64, level: ExperienceLevel) -> f64 {
    let ratio = CYCLING_BANDS
        .iter()
        .find(|(floor, _)| weight >= *floor)
        .map(|(_, ratio)| *ratio)
        .unwrap_or(BASE_CYCLING_RATIO);

    if level == ExperienceLevel::Advanced {
        ratio * ADVANCED_CYCLING_DISCOUNT
    } else {
        ratio
    }
}

/// Next target for a record sitting at the rep ceiling
///
/// A record with no load cannot carry volume over through a ratio, so it
/// picks up a single increment instead. Reps only drop when the weight goes
/// up; if the cap leaves no loadable step, the record holds.
pub fn cycle_reps(
    record: &PerformanceRecord,
    rating: Rating,
    increment: f64,
    settings: &EquipmentSettings,
    cycling_target: u32,
) -> Target {
    match rating {
        Rating::Hard => {
            tracing::debug!("At rep ceiling but rated hard, holding");
            Target::hold(record)
        }
        Rating::TooHard => {
            tracing::debug!("At rep ceiling but rated too hard, dropping to {} reps", cycling_target);
            Target::new(record.weight, cycling_target)
        }
        Rating::VeryEasy | Rating::Easy | Rating::Moderate => {
            let proposed = if record.weight > 0.0 {
                record.weight * cycling_ratio(record.weight, settings.experience())
            } else {
                increment
            };
            let weight = settle_weight(record, proposed, settings);
            if weight <= record.weight {
                tracing::debug!("Cap leaves no room above {}, holding at the ceiling", record.weight);
                return Target::hold(record);
            }

            tracing::debug!(
                "Cycling reps {} -> {}, weight {} -> {} (proposed {:.2})",
                record.reps,
                cycling_target,
                record.weight,
                weight,
                proposed
            );

            Target::new(weight, cycling_target)
        }
    }
}
