//! Snapping weights to loadable values.

use crate::cap::{apply_percentage_cap, max_allowed_weight};
use crate::increment::resolve_increment;
use crate::rules::WEIGHT_EPSILON;
use crate::{EquipmentSettings, EquipmentType, PerformanceRecord};

/// Round a weight to the nearest multiple of its equipment increment
///
/// Ties go to the even multiple. The increment is resolved at the weight being
/// rounded, so light dumbbells snap to whole kilos.
pub fn round_to_increment(weight: f64, equipment: EquipmentType, settings: &EquipmentSettings) -> f64 {
    let increment = resolve_increment(equipment, weight, settings);
    ((weight / increment).round_ties_even() * increment).max(0.0)
}

/// Turn a proposed weight into the weight actually recommended
///
/// Increases are capped, then rounded without overshooting the cap. If the
/// step at the new load does not fit under the cap (light dumbbells crossing
/// into the full increment), the step at the current load is tried instead.
/// Decreases are rounded and floored at zero. A proposal equal to the current
/// weight keeps the current weight exactly, even if it is not on an increment.
pub fn settle_weight(record: &PerformanceRecord, proposed: f64, settings: &EquipmentSettings) -> f64 {
    let current = record.weight;
    let proposed = proposed.max(0.0);

    if (proposed - current).abs() < WEIGHT_EPSILON {
        return current;
    }

    if proposed < current {
        return round_to_increment(proposed, record.equipment, settings).min(current);
    }

    let level = settings.experience();
    let capped = apply_percentage_cap(current, proposed, record.is_compound, record.equipment, level);
    let limit = max_allowed_weight(current, record.is_compound, record.equipment, level);

    let settled = snap_under_limit(capped, limit, resolve_increment(record.equipment, capped, settings));
    if settled > current + WEIGHT_EPSILON {
        return settled;
    }

    let step = resolve_increment(record.equipment, current, settings);
    let settled = snap_under_limit(capped, limit, step);
    if settled <= current + WEIGHT_EPSILON {
        tracing::debug!(
            "No {} step of {} fits under the cap above {}",
            record.equipment,
            step,
            current
        );
    }

    settled.max(current)
}

/// Nearest multiple of `increment`, or the highest one under `limit` when the
/// nearest overshoots it
fn snap_under_limit(weight: f64, limit: Option<f64>, increment: f64) -> f64 {
    let nearest = ((weight / increment).round_ties_even() * increment).max(0.0);
    match limit {
        Some(limit) if nearest > limit + WEIGHT_EPSILON => {
            ((limit / increment + WEIGHT_EPSILON).floor() * increment).max(0.0)
        }
        _ => nearest,
    }
}
