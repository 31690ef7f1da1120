//! Percentage caps on weight increases.
//!
//! A proposed increase is bounded to `current * (1 + max_percent / 100)`.
//! The cap only ever lowers an increase; it never raises a weight that was
//! not going up and never forces a decrease.

use crate::{EquipmentType, ExperienceLevel};

/// Base cap for compound movements, by experience level
const COMPOUND_CAP_PERCENT: [f64; 3] = [15.0, 10.0, 7.5];

/// Base cap for isolation movements, by experience level
const ISOLATION_CAP_PERCENT: [f64; 3] = [12.5, 10.0, 7.5];

/// (exclusive upper load, scale) bands; the first matching band applies
const LIGHT_LOAD_SCALING: [(f64, f64); 2] = [(10.0, 1.5), (20.0, 1.25)];

/// Dumbbells under this load may always jump by `VERY_LIGHT_DUMBBELL_CAP_PERCENT`
const VERY_LIGHT_DUMBBELL_MAX: f64 = 5.0;
const VERY_LIGHT_DUMBBELL_CAP_PERCENT: f64 = 25.0;

/// Maximum allowed increase, in percent of the current load
pub fn max_percentage_increase(
    current_weight: f64,
    is_compound: bool,
    equipment: EquipmentType,
    level: ExperienceLevel,
) -> f64 {
    let table = if is_compound {
        &COMPOUND_CAP_PERCENT
    } else {
        &ISOLATION_CAP_PERCENT
    };
    let mut percent = table[level.index()];

    if let Some((_, scale)) = LIGHT_LOAD_SCALING
        .iter()
        .find(|(limit, _)| current_weight < *limit)
    {
        percent *= scale;
    }

    if equipment == EquipmentType::Dumbbell && current_weight < VERY_LIGHT_DUMBBELL_MAX {
        percent = percent.max(VERY_LIGHT_DUMBBELL_CAP_PERCENT);
    }

    percent
}

/// Heaviest weight an increase may reach, or `None` when there is no load to
/// take a percentage of
pub fn max_allowed_weight(
    current_weight: f64,
    is_compound: bool,
    equipment: EquipmentType,
    level: ExperienceLevel,
) -> Option<f64> {
    if current_weight <= 0.0 {
        return None;
    }

    let percent = max_percentage_increase(current_weight, is_compound, equipment, level);
    Some(current_weight * (1.0 + percent / 100.0))
}

/// Bound a proposed weight by the percentage cap
pub fn apply_percentage_cap(
    current_weight: f64,
    proposed_weight: f64,
    is_compound: bool,
    equipment: EquipmentType,
    level: ExperienceLevel,
) -> f64 {
    if proposed_weight <= current_weight {
        return proposed_weight;
    }

    match max_allowed_weight(current_weight, is_compound, equipment, level) {
        Some(limit) if proposed_weight > limit => {
            tracing::debug!(
                "Capped increase from {} to {} (limit {:.2})",
                current_weight,
                proposed_weight,
                limit
            );
            limit
        }
        _ => proposed_weight,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_base_percentages() {
        use ExperienceLevel::*;

        assert_eq!(max_percentage_increase(100.0, true, EquipmentType::Barbell, Beginner), 15.0);
        assert_eq!(max_percentage_increase(100.0, true, EquipmentType::Barbell, Intermediate), 10.0);
        assert_eq!(max_percentage_increase(100.0, true, EquipmentType::Barbell, Advanced), 7.5);
        assert_eq!(max_percentage_increase(40.0, false, EquipmentType::Cable, Beginner), 12.5);
        assert_eq!(max_percentage_increase(40.0, false, EquipmentType::Cable, Intermediate), 10.0);
        assert_eq!(max_percentage_increase(40.0, false, EquipmentType::Cable, Advanced), 7.5);
    }

    #[test]
    fn test_light_load_scaling() {
        let level = ExperienceLevel::Beginner;

        assert!(approx(max_percentage_increase(8.0, true, EquipmentType::Barbell, level), 22.5));
        assert!(approx(max_percentage_increase(15.0, true, EquipmentType::Barbell, level), 18.75));
        assert!(approx(max_percentage_increase(8.0, false, EquipmentType::Cable, level), 18.75));
        assert!(approx(max_percentage_increase(20.0, false, EquipmentType::Cable, level), 12.5));
    }

    #[test]
    fn test_very_light_dumbbell_floor() {
        let pct = max_percentage_increase(3.0, false, EquipmentType::Dumbbell, ExperienceLevel::Advanced);
        assert_eq!(pct, 25.0);

        // Scaled beginner compound cap (22.5) still sits under the floor
        let pct = max_percentage_increase(4.0, true, EquipmentType::Dumbbell, ExperienceLevel::Beginner);
        assert_eq!(pct, 25.0);

        // The floor is dumbbell-only
        let pct = max_percentage_increase(3.0, false, EquipmentType::Cable, ExperienceLevel::Advanced);
        assert!(approx(pct, 11.25));
    }

    #[test]
    fn test_cap_bounds_increase() {
        let capped = apply_percentage_cap(100.0, 200.0, true, EquipmentType::Barbell, ExperienceLevel::Beginner);
        assert!(approx(capped, 115.0));

        let capped = apply_percentage_cap(100.0, 105.0, true, EquipmentType::Barbell, ExperienceLevel::Beginner);
        assert_eq!(capped, 105.0);
    }

    #[test]
    fn test_cap_never_forces_decrease() {
        let capped = apply_percentage_cap(100.0, 90.0, false, EquipmentType::Machine, ExperienceLevel::Advanced);
        assert_eq!(capped, 90.0);

        let capped = apply_percentage_cap(100.0, 100.0, false, EquipmentType::Machine, ExperienceLevel::Advanced);
        assert_eq!(capped, 100.0);
    }

    #[test]
    fn test_zero_load_is_uncapped() {
        assert_eq!(max_allowed_weight(0.0, false, EquipmentType::Cable, ExperienceLevel::Beginner), None);

        let capped = apply_percentage_cap(0.0, 5.0, false, EquipmentType::Cable, ExperienceLevel::Beginner);
        assert_eq!(capped, 5.0);
    }
}
