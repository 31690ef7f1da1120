//! Exercise transition advisories.
//!
//! When an exercise's recommended weight reaches a configured ceiling, the
//! lifter may be better served by a harder variation. The engine asks a
//! `TransitionAdvisor` for such a hint after settling on a weight; the hint
//! is advisory only and never changes the recommended weight or reps.

use crate::{ProgressionSuggestion, SuggestionKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const DEFAULT_TRANSITION_MESSAGE: &str = "Consider progressing to a more advanced exercise.";

/// Source of exercise transition hints
pub trait TransitionAdvisor {
    fn suggest(&self, exercise_id: u32, new_weight: f64) -> Option<ProgressionSuggestion>;
}

/// A weight ceiling for one exercise and its suggested successor
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ExerciseTransition {
    pub exercise_id: u32,
    pub weight_ceiling: f64,
    pub suggested_exercise_id: u32,
    #[serde(default)]
    pub message: Option<String>,
}

/// Lookup table of transitions keyed by exercise id
#[derive(Clone, Debug, Default)]
pub struct TransitionTable {
    entries: HashMap<u32, ExerciseTransition>,
}

impl TransitionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the transition for an exercise
    pub fn insert(&mut self, transition: ExerciseTransition) {
        self.entries.insert(transition.exercise_id, transition);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<ExerciseTransition> for TransitionTable {
    fn from_iter<I: IntoIterator<Item = ExerciseTransition>>(iter: I) -> Self {
        let mut table = Self::new();
        for transition in iter {
            table.insert(transition);
        }
        table
    }
}

impl TransitionAdvisor for TransitionTable {
    fn suggest(&self, exercise_id: u32, new_weight: f64) -> Option<ProgressionSuggestion> {
        let transition = self.entries.get(&exercise_id)?;
        if new_weight < transition.weight_ceiling {
            return None;
        }

        tracing::info!(
            "Exercise {} reached {} (ceiling {}), suggesting exercise {}",
            exercise_id,
            new_weight,
            transition.weight_ceiling,
            transition.suggested_exercise_id
        );

        Some(ProgressionSuggestion {
            kind: SuggestionKind::ChangeExercise,
            message: transition
                .message
                .clone()
                .unwrap_or_else(|| DEFAULT_TRANSITION_MESSAGE.to_string()),
            suggested_exercise_id: Some(transition.suggested_exercise_id),
        })
    }
}
