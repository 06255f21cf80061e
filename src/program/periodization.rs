//! Periodization tables: base volume per experience level, tweaks per goal

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::profile::{ExperienceLevel, Goal};

/// Lowest rep-range bounds a goal delta may produce
const MIN_REPS_LOW: u32 = 3;
const MIN_REPS_HIGH: u32 = 4;

/// Inclusive rep range, serialized as `[min, max]`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RepRange(pub u32, pub u32);

impl RepRange {
    pub fn min(&self) -> u32 {
        self.0
    }

    pub fn max(&self) -> u32 {
        self.1
    }
}

impl fmt::Display for RepRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.0, self.1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelParameters {
    pub sets_main: u32,
    pub sets_acc: u32,
    pub reps_main: RepRange,
    pub reps_acc: RepRange,
    pub rest_main: u32,
    pub rest_acc: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalAdjustment {
    pub rep_main_delta: i32,
    pub rep_acc_delta: i32,
    pub rest_multiplier: f64,
}

const BEGINNER: LevelParameters = LevelParameters {
    sets_main: 3,
    sets_acc: 2,
    reps_main: RepRange(8, 10),
    reps_acc: RepRange(10, 15),
    rest_main: 120,
    rest_acc: 60,
};

const INTERMEDIATE: LevelParameters = LevelParameters {
    sets_main: 4,
    sets_acc: 3,
    reps_main: RepRange(6, 8),
    reps_acc: RepRange(8, 12),
    rest_main: 150,
    rest_acc: 75,
};

const ADVANCED: LevelParameters = LevelParameters {
    sets_main: 5,
    sets_acc: 3,
    reps_main: RepRange(4, 6),
    reps_acc: RepRange(6, 10),
    rest_main: 180,
    rest_acc: 90,
};

pub fn base_parameters(level: ExperienceLevel) -> LevelParameters {
    match level {
        ExperienceLevel::Beginner => BEGINNER,
        ExperienceLevel::Intermediate => INTERMEDIATE,
        ExperienceLevel::Advanced => ADVANCED,
    }
}

pub fn goal_adjustment(goal: Goal) -> GoalAdjustment {
    match goal {
        Goal::Strength => GoalAdjustment { rep_main_delta: -2, rep_acc_delta: -2, rest_multiplier: 1.2 },
        Goal::Hypertrophy => GoalAdjustment { rep_main_delta: 2, rep_acc_delta: 2, rest_multiplier: 0.9 },
        Goal::Endurance => GoalAdjustment { rep_main_delta: 4, rep_acc_delta: 4, rest_multiplier: 0.8 },
        Goal::Recomposition => GoalAdjustment { rep_main_delta: 0, rep_acc_delta: 0, rest_multiplier: 1.0 },
    }
}

/// Shift a rep range by `delta`, flooring at [3, 4]
pub fn adjusted_range(base: RepRange, delta: i32) -> RepRange {
    let shift = |reps: u32, floor: u32| (reps as i64 + delta as i64).max(floor as i64) as u32;
    RepRange(shift(base.0, MIN_REPS_LOW), shift(base.1, MIN_REPS_HIGH))
}

pub fn scaled_rest(base: u32, multiplier: f64) -> u32 {
    (base as f64 * multiplier).round() as u32
}

/// Volume and intensity for one week, before and after autoregulation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prescription {
    pub sets_main: u32,
    pub sets_acc: u32,
    pub reps_main: RepRange,
    pub reps_acc: RepRange,
    pub rest_main: u32,
    pub rest_acc: u32,
}

impl Prescription {
    /// Level base parameters with the goal's rep shift and rest scaling applied
    pub fn from_tables(level: ExperienceLevel, goal: Goal) -> Self {
        let base = base_parameters(level);
        let tweak = goal_adjustment(goal);

        Self {
            sets_main: base.sets_main,
            sets_acc: base.sets_acc,
            reps_main: adjusted_range(base.reps_main, tweak.rep_main_delta),
            reps_acc: adjusted_range(base.reps_acc, tweak.rep_acc_delta),
            rest_main: scaled_rest(base.rest_main, tweak.rest_multiplier),
            rest_acc: scaled_rest(base.rest_acc, tweak.rest_multiplier),
        }
    }
}
