//! Equipment increment resolution.
//!
//! Maps an equipment type to the smallest load step the lifter can actually
//! make, honouring per-user settings and falling back to defaults.

use crate::rules::{
    DEFAULT_EQUIPMENT_SETTINGS, FALLBACK_INCREMENT, LIGHT_DUMBBELL_INCREMENT, LIGHT_DUMBBELL_MAX,
};
use crate::{EquipmentSettings, EquipmentType};

/// A configured increment is usable when it is a positive, finite number
fn usable(increment: f64) -> Option<f64> {
    (increment.is_finite() && increment > 0.0).then_some(increment)
}

impl EquipmentSettings {
    /// Configured increment for an equipment type, or the default when the
    /// setting is zero or otherwise unusable
    ///
    /// Weighted bodyweight work (belts, vests) shares the dumbbell increment.
    pub fn increment_for(&self, equipment: EquipmentType) -> f64 {
        let (configured, default) = match equipment {
            EquipmentType::Barbell => (
                self.barbell_increment,
                DEFAULT_EQUIPMENT_SETTINGS.barbell_increment,
            ),
            EquipmentType::Dumbbell | EquipmentType::Bodyweight => (
                self.dumbbell_increment,
                DEFAULT_EQUIPMENT_SETTINGS.dumbbell_increment,
            ),
            EquipmentType::Cable => (
                self.cable_increment,
                DEFAULT_EQUIPMENT_SETTINGS.cable_increment,
            ),
            EquipmentType::Machine => (
                self.machine_increment,
                DEFAULT_EQUIPMENT_SETTINGS.machine_increment,
            ),
            EquipmentType::Unknown => return FALLBACK_INCREMENT,
        };

        usable(configured).unwrap_or_else(|| {
            tracing::debug!(
                "Unusable {} increment {}, using default {}",
                equipment,
                configured,
                default
            );
            default
        })
    }
}

/// Resolve the weight step for an exercise at its current load
///
/// Light dumbbells (up to `LIGHT_DUMBBELL_MAX`) always step by
/// `LIGHT_DUMBBELL_INCREMENT` regardless of settings.
pub fn resolve_increment(
    equipment: EquipmentType,
    current_weight: f64,
    settings: &EquipmentSettings,
) -> f64 {
    if equipment == EquipmentType::Dumbbell && current_weight <= LIGHT_DUMBBELL_MAX {
        return LIGHT_DUMBBELL_INCREMENT;
    }

    settings.increment_for(equipment)
}
