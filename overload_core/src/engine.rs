//! Progression engine: the next training target for one exercise.
//!
//! Each call is a one-shot, side-effect-free decision. Branch order:
//!
//! 1. **Invalid rating** (outside 1-5): return the record unchanged
//! 2. **Unloaded bodyweight movement** on the allow-list: rep table only
//! 3. **Strength**: weight moves by the strength table, reps never change
//! 4. **Hypertrophy**:
//!    - compounds take the strength path (unless compound rep progression
//!      is enabled)
//!    - at the rep ceiling: cycle reps down and weight up
//!    - hard / too hard: weight-only adjustment
//!    - otherwise: volume evaluation picks weight-up or reps-up

use crate::bodyweight;
use crate::config::ProgressionConfig;
use crate::cycling::cycle_reps;
use crate::increment::resolve_increment;
use crate::rounding::{round_to_increment, settle_weight};
use crate::rules::{DEFAULT_EQUIPMENT_SETTINGS, HYPERTROPHY_MULTIPLIERS, STRENGTH_MULTIPLIERS};
use crate::transition::TransitionAdvisor;
use crate::volume::choose_progression;
use crate::{
    EquipmentSettings, EquipmentType, PerformanceRecord, ProgressionResult, ProgressionSuggestion,
    Rating, Target, TrainingStyle,
};
use once_cell::sync::Lazy;

/// Progression policy used when the caller supplies none
static DEFAULT_PROGRESSION_CONFIG: Lazy<ProgressionConfig> = Lazy::new(ProgressionConfig::default);

/// Computes progression results against fixed settings and policy
///
/// The engine only borrows its inputs, so one instance can serve any number
/// of concurrent calls.
pub struct ProgressionEngine<'a> {
    settings: &'a EquipmentSettings,
    config: &'a ProgressionConfig,
    advisor: Option<&'a dyn TransitionAdvisor>,
}

impl<'a> ProgressionEngine<'a> {
    /// A config with unusable rep bounds is replaced by the default policy
    pub fn new(settings: &'a EquipmentSettings, config: &'a ProgressionConfig) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(e) => {
                tracing::warn!("{}; using default progression policy", e);
                &*DEFAULT_PROGRESSION_CONFIG
            }
        };

        Self {
            settings,
            config,
            advisor: None,
        }
    }

    /// Attach a transition advisor consulted for weighted results
    pub fn with_advisor(mut self, advisor: &'a dyn TransitionAdvisor) -> Self {
        self.advisor = Some(advisor);
        self
    }

    /// Recommend the next target for a performance record
    pub fn calculate(&self, record: &PerformanceRecord, style: TrainingStyle) -> ProgressionResult {
        tracing::info!(
            "Calculating {:?} progression for {:?}: {} x {} @ {}, rating {}",
            style,
            record.exercise_name,
            record.sets,
            record.reps,
            record.weight,
            record.rating
        );

        let rating = match Rating::try_from(record.rating) {
            Ok(rating) => rating,
            Err(e) => {
                tracing::warn!("{}; leaving record unchanged", e);
                return ProgressionResult::unchanged(record);
            }
        };

        if bodyweight::qualifies(record) {
            let target = bodyweight::progress_bodyweight(record, rating);
            return self.finish(record, rating, target, None);
        }

        let increment = resolve_increment(record.equipment, record.weight, self.settings);

        let target = match style {
            TrainingStyle::Strength => self.strength(record, rating, increment),
            TrainingStyle::Hypertrophy => self.hypertrophy(record, rating, increment),
        };
        let target = Target::new(
            target.weight,
            target.reps.clamp(self.config.min_reps, self.config.max_reps),
        );

        let suggestion = record
            .exercise_id
            .zip(self.advisor)
            .and_then(|(id, advisor)| advisor.suggest(id, target.weight));

        self.finish(record, rating, target, suggestion)
    }

    fn strength(&self, record: &PerformanceRecord, rating: Rating, increment: f64) -> Target {
        let proposed = record.weight + increment * STRENGTH_MULTIPLIERS.get(rating);
        let weight = settle_weight(record, proposed, self.settings);

        tracing::debug!(
            "Strength: {} -> {} (increment {}, proposed {})",
            record.weight,
            weight,
            increment,
            proposed
        );

        Target::new(weight, record.reps)
    }

    fn hypertrophy(&self, record: &PerformanceRecord, rating: Rating, increment: f64) -> Target {
        if record.is_compound && !self.config.compound_rep_progression {
            tracing::debug!("Hypertrophy compound: using weight-only progression");
            return self.strength(record, rating, increment);
        }

        if record.reps >= self.config.max_reps {
            return cycle_reps(
                record,
                rating,
                increment,
                self.settings,
                self.config.cycling_target_reps,
            );
        }

        if rating >= Rating::Hard {
            let proposed = record.weight + increment * HYPERTROPHY_MULTIPLIERS.get(rating);
            return Target::new(settle_weight(record, proposed, self.settings), record.reps);
        }

        choose_progression(record, rating, increment, self.settings, self.config.max_reps)
    }

    fn finish(
        &self,
        record: &PerformanceRecord,
        rating: Rating,
        target: Target,
        suggestion: Option<ProgressionSuggestion>,
    ) -> ProgressionResult {
        let deload = rating == Rating::TooHard
            && (target.weight < record.weight || target.reps < record.reps);

        tracing::info!(
            "Next target: {} x {} @ {}{}",
            record.sets,
            target.reps,
            target.weight,
            if deload { " (deload)" } else { "" }
        );

        ProgressionResult {
            new_weight: target.weight,
            new_reps: target.reps,
            deload,
            suggestion,
        }
    }
}

/// Recommend the next target using the default progression policy
///
/// Omitted settings fall back to the process-wide defaults.
pub fn calculate_progression(
    record: &PerformanceRecord,
    style: TrainingStyle,
    settings: Option<&EquipmentSettings>,
) -> ProgressionResult {
    let settings = settings.unwrap_or(&DEFAULT_EQUIPMENT_SETTINGS);
    ProgressionEngine::new(settings, &DEFAULT_PROGRESSION_CONFIG).calculate(record, style)
}

/// Round an arbitrary weight to the caller's nearest valid increment
pub fn round_to_closest_increment(
    weight: f64,
    equipment: EquipmentType,
    settings: Option<&EquipmentSettings>,
) -> f64 {
    round_to_increment(weight, equipment, settings.unwrap_or(&DEFAULT_EQUIPMENT_SETTINGS))
}
