//! Autoregulation of weekly volume from last week's feedback
//!
//! Two rules run in order on the same prescription:
//! 1. completed last week and RPE <= 7: one more main-lift set
//! 2. missed last week or RPE >= 9: one fewer set everywhere (floors 2 / 1)
//!
//! Rule 2 always runs after rule 1 and wins whenever both apply.

use serde::{Deserialize, Serialize};

use super::periodization::Prescription;
use crate::profile::Adherence;

const REWARD_MAX_RPE: i32 = 7;
const OVERREACH_MIN_RPE: i32 = 9;

const MIN_SETS_MAIN: u32 = 2;
const MIN_SETS_ACC: u32 = 1;

fn earns_reward(adherence: Adherence, rpe: i32) -> bool {
    adherence.completed() && rpe <= REWARD_MAX_RPE
}

fn needs_deload(adherence: Adherence, rpe: i32) -> bool {
    !adherence.completed() || rpe >= OVERREACH_MIN_RPE
}

pub fn adjust(prescription: Prescription, adherence: Adherence, rpe: i32) -> Prescription {
    let mut p = prescription;

    if earns_reward(adherence, rpe) {
        p.sets_main += 1;
    }

    if needs_deload(adherence, rpe) {
        p.sets_main = p.sets_main.saturating_sub(1).max(MIN_SETS_MAIN);
        p.sets_acc = p.sets_acc.saturating_sub(1).max(MIN_SETS_ACC);
    }

    p
}

/// Direction the adjuster moved volume, reported in plan metadata
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Progression {
    Increase,
    Hold,
    Decrease,
}

impl Progression {
    /// Outcome of the rules in `adjust`, the later rule taking precedence
    pub fn classify(adherence: Adherence, rpe: i32) -> Self {
        if needs_deload(adherence, rpe) {
            Progression::Decrease
        } else if earns_reward(adherence, rpe) {
            Progression::Increase
        } else {
            Progression::Hold
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Progression::Increase => "adding a main-lift set",
            Progression::Hold => "holding volume",
            Progression::Decrease => "backing off one set",
        }
    }
}
