//! Volume-based choice between raising weight and raising reps.
//!
//! Volume is `sets x reps x weight`. For ratings 1-3 below the rep ceiling the
//! evaluator builds two candidates (heavier at the same reps, or one more rep
//! at the same weight) and ranks them:
//! - When one volume delta is clearly larger (by `EFFICIENCY_MARGIN`), the
//!   smaller delta is the conservative choice.
//! - When the deltas are close, the axis with the better volume-per-unit
//!   efficiency is the aggressive choice, if it dominates by the margin.
//! - Otherwise the smaller delta is conservative, reps winning ties.
//!
//! Moderate takes the conservative candidate, easy the aggressive one, and
//! very easy reaches further so that each tier lands somewhere different.

use crate::rounding::settle_weight;
use crate::rules::{EFFICIENCY_MARGIN, HYPERTROPHY_MULTIPLIERS, WEIGHT_EPSILON};
use crate::{EquipmentSettings, PerformanceRecord, Rating, Target};

/// Total training volume
pub fn calculate_volume(sets: u32, reps: u32, weight: f64) -> f64 {
    sets as f64 * reps as f64 * weight
}

/// Progression lever
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lever {
    Weight,
    Reps,
}

/// Ordering of the two levers for one record
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LeverRanking {
    pub conservative: Lever,
    pub aggressive: Lever,
}

/// Volume effect of the weight and rep candidates relative to the record
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VolumeComparison {
    pub weight_delta: f64,
    pub rep_delta: f64,
    /// Volume gained per kilo added
    pub weight_efficiency: f64,
    /// Volume gained per rep added
    pub rep_efficiency: f64,
}

impl VolumeComparison {
    pub fn between(record: &PerformanceRecord, weight_candidate: Target, rep_candidate: Target) -> Self {
        let current = calculate_volume(record.sets, record.reps, record.weight);
        let weight_delta = calculate_volume(record.sets, record.reps, weight_candidate.weight) - current;
        let rep_delta = calculate_volume(record.sets, rep_candidate.reps, record.weight) - current;

        let weight_change = weight_candidate.weight - record.weight;
        let rep_change = rep_candidate.reps as f64 - record.reps as f64;

        let weight_efficiency = if weight_change > WEIGHT_EPSILON {
            weight_delta / weight_change
        } else {
            0.0
        };
        let rep_efficiency = if rep_change > 0.0 {
            rep_delta / rep_change
        } else {
            0.0
        };

        Self {
            weight_delta,
            rep_delta,
            weight_efficiency,
            rep_efficiency,
        }
    }

    /// Rank the levers, or `None` when neither adds volume
    pub fn rank(&self) -> Option<LeverRanking> {
        let weight_gains = self.weight_delta > WEIGHT_EPSILON;
        let reps_gain = self.rep_delta > WEIGHT_EPSILON;

        let only = |lever| LeverRanking {
            conservative: lever,
            aggressive: lever,
        };
        let conservative = |lever| LeverRanking {
            conservative: lever,
            aggressive: other(lever),
        };

        match (weight_gains, reps_gain) {
            (false, false) => None,
            (true, false) => Some(only(Lever::Weight)),
            (false, true) => Some(only(Lever::Reps)),
            (true, true) => {
                let smaller = if self.weight_delta < self.rep_delta {
                    Lever::Weight
                } else {
                    Lever::Reps
                };
                let (low, high) = if self.weight_delta < self.rep_delta {
                    (self.weight_delta, self.rep_delta)
                } else {
                    (self.rep_delta, self.weight_delta)
                };

                if high >= low * EFFICIENCY_MARGIN {
                    return Some(conservative(smaller));
                }

                if self.weight_efficiency >= self.rep_efficiency * EFFICIENCY_MARGIN {
                    Some(conservative(Lever::Reps))
                } else if self.rep_efficiency >= self.weight_efficiency * EFFICIENCY_MARGIN {
                    Some(conservative(Lever::Weight))
                } else {
                    Some(conservative(smaller))
                }
            }
        }
    }
}

fn other(lever: Lever) -> Lever {
    match lever {
        Lever::Weight => Lever::Reps,
        Lever::Reps => Lever::Weight,
    }
}

/// Pick the next target for ratings 1-3 below the rep ceiling
///
/// `max_reps` bounds the rep candidate. Ratings 4-5 hold the record; the
/// engine routes those elsewhere.
pub fn choose_progression(
    record: &PerformanceRecord,
    rating: Rating,
    increment: f64,
    settings: &EquipmentSettings,
    max_reps: u32,
) -> Target {
    let rep_candidate = Target::new(record.weight, (record.reps + 1).min(max_reps));
    let step = HYPERTROPHY_MULTIPLIERS.get(rating);
    let weight_candidate = Target::new(
        settle_weight(record, record.weight + increment * step, settings),
        record.reps,
    );

    match rating {
        Rating::VeryEasy if record.is_compound => {
            tracing::debug!("Very easy compound: raising weight and reps together");
            Target::new(weight_candidate.weight, rep_candidate.reps)
        }
        Rating::VeryEasy => {
            let single = settle_weight(record, record.weight + increment, settings);
            if weight_candidate.weight > single + WEIGHT_EPSILON {
                weight_candidate
            } else {
                tracing::debug!("Very easy: cap absorbed the larger jump, adding a rep as well");
                Target::new(single, rep_candidate.reps)
            }
        }
        Rating::Easy | Rating::Moderate => {
            let comparison = VolumeComparison::between(record, weight_candidate, rep_candidate);
            let Some(ranking) = comparison.rank() else {
                tracing::debug!("Neither lever adds volume, holding");
                return Target::hold(record);
            };

            let lever = if rating == Rating::Moderate {
                ranking.conservative
            } else {
                ranking.aggressive
            };
            tracing::debug!(
                "Volume deltas: weight {:.1}, reps {:.1}; rating {} takes {:?}",
                comparison.weight_delta,
                comparison.rep_delta,
                rating,
                lever
            );

            match lever {
                Lever::Weight => weight_candidate,
                Lever::Reps => rep_candidate,
            }
        }
        Rating::Hard | Rating::TooHard => Target::hold(record),
    }
}
