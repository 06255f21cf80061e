//! Slot resolution: pick a concrete exercise for a blueprint slot

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, warn};

use super::blueprint::Slot;
use crate::error::PlanError;
use crate::exercises::{EquipmentSet, Exercise, find_exercise};

/// Pick one exercise for `slot`.
///
/// Candidates usable with `available` are preferred. When none is, the pick
/// falls back to any known alternative so the plan is still complete.
pub fn resolve<R: Rng + ?Sized>(
    slot: Slot,
    available: &EquipmentSet,
    rng: &mut R,
) -> Result<&'static Exercise, PlanError> {
    let candidates: Vec<&'static Exercise> = slot
        .alternatives()
        .iter()
        .filter_map(|id| {
            let found = find_exercise(id);
            if found.is_none() {
                warn!("Slot {} references unknown exercise '{}', skipping", slot, id);
            }
            found
        })
        .collect();

    let feasible: Vec<&'static Exercise> = candidates
        .iter()
        .copied()
        .filter(|e| e.fits(available))
        .collect();

    let pool = if feasible.is_empty() {
        debug!("No equipment match for slot {}, picking from all alternatives", slot);
        &candidates
    } else {
        &feasible
    };

    pool.choose(rng)
        .copied()
        .ok_or_else(|| PlanError::UnresolvableSlot { slot: slot.to_string() })
}
