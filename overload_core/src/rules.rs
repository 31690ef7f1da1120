//! Immutable rule tables shared across the progression modules.
//!
//! Every constant that shapes a progression decision lives here (or, for
//! tables used by exactly one module, at the top of that module) so the rule
//! set can be audited in one read.

use crate::{EquipmentSettings, ExperienceLevel, Rating};

// ============================================================================
// Rep Bounds
// ============================================================================

/// Lowest rep count the weighted path will recommend
pub const MIN_REPS: u32 = 1;

/// Rep ceiling for the weighted path; reaching it triggers cycling
pub const MAX_REPS: u32 = 20;

/// Reps to reset to when cycling down from the ceiling
pub const CYCLING_TARGET_REPS: u32 = 15;

pub const BODYWEIGHT_MIN_REPS: u32 = 1;
pub const BODYWEIGHT_MAX_REPS: u32 = 20;

// ============================================================================
// Increments
// ============================================================================

/// Increment used for equipment the system does not recognise
pub const FALLBACK_INCREMENT: f64 = 2.5;

/// Dumbbells at or below this load step by `LIGHT_DUMBBELL_INCREMENT`
pub const LIGHT_DUMBBELL_MAX: f64 = 10.0;
pub const LIGHT_DUMBBELL_INCREMENT: f64 = 1.0;

/// Process-wide default equipment settings (kg)
pub const DEFAULT_EQUIPMENT_SETTINGS: EquipmentSettings = EquipmentSettings {
    barbell_increment: 2.5,
    dumbbell_increment: 2.0,
    cable_increment: 2.5,
    machine_increment: 5.0,
    experience_level: Some(ExperienceLevel::Beginner),
};

// ============================================================================
// Rating Tables
// ============================================================================

/// A value per rating, indexed 1 (very easy) through 5 (too hard)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RatingTable<T: Copy>([T; 5]);

impl<T: Copy> RatingTable<T> {
    pub const fn new(entries: [T; 5]) -> Self {
        Self(entries)
    }

    pub fn get(&self, rating: Rating) -> T {
        self.0[rating.index()]
    }
}

/// Weight change, in increments, for strength-style progression
pub const STRENGTH_MULTIPLIERS: RatingTable<f64> = RatingTable::new([3.0, 2.0, 1.0, 0.0, -1.0]);

/// Weight change, in increments, for the hypertrophy weight lever
pub const HYPERTROPHY_MULTIPLIERS: RatingTable<f64> =
    RatingTable::new([2.0, 1.0, 1.0, 0.0, -1.0]);

/// Rep change for special bodyweight movements
pub const BODYWEIGHT_REP_CHANGES: RatingTable<i64> = RatingTable::new([2, 1, 1, 0, -2]);

// ============================================================================
// Volume Negotiation
// ============================================================================

/// Ratio by which one option must beat the other to count as dominant
pub const EFFICIENCY_MARGIN: f64 = 1.5;

/// Tolerance for comparing computed weights
pub const WEIGHT_EPSILON: f64 = 1e-9;
