//! Program module - weekly plan generation
//!
//! Pieces:
//! - Split selection by training-day count
//! - Periodization tables (level base + goal tweaks)
//! - Autoregulated progression from last week's feedback
//! - Equipment-aware slot resolution
//! - Weekly volume summary

pub mod blueprint;
pub mod periodization;
pub mod progression;
pub mod resolver;
pub mod split;
pub mod volume;

pub use blueprint::{DayBlueprint, Slot};
pub use periodization::{Prescription, RepRange};
pub use progression::Progression;
pub use split::DayFocus;
pub use volume::{MuscleVolume, weekly_volume};

use chrono::NaiveDate;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::PlanError;
use crate::exercises::{EquipmentSet, Exercise};
use crate::notes::CoachingNote;
use crate::profile::{Adherence, ExperienceLevel, Goal, TraineeProfile};

/// Accessory slots drawn per day
pub const ACCESSORIES_PER_DAY: usize = 3;

const WEEKDAY_LABELS: [&str; 6] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// One line of a training day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlannedExercise {
    pub id: String,
    pub name: String,
    pub sets: u32,
    pub reps: RepRange,
    /// Rest between sets, seconds
    pub rest: u32,
}

impl PlannedExercise {
    fn new(exercise: &Exercise, sets: u32, reps: RepRange, rest: u32) -> Self {
        Self {
            id: exercise.id.to_string(),
            name: exercise.name.to_string(),
            sets,
            reps,
            rest,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanDay {
    pub name: String,
    pub focus: DayFocus,
    pub main: Vec<PlannedExercise>,
    pub accessories: Vec<PlannedExercise>,
    pub note: String,
}

/// Profile fields the plan was generated from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanMeta {
    pub level: ExperienceLevel,
    /// Clamped day count
    pub days: u8,
    pub goal: Goal,
    pub week: u32,
    pub adherence: Adherence,
    pub rpe: i32,
    pub equipment: EquipmentSet,
    pub progression: Progression,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week_of: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratedPlan {
    pub meta: PlanMeta,
    pub plan: Vec<PlanDay>,
}

impl GeneratedPlan {
    pub fn days(&self) -> &[PlanDay] {
        &self.plan
    }
}

fn day_name(index: usize, focus: DayFocus) -> String {
    let label = WEEKDAY_LABELS.get(index % 6).copied().unwrap_or("Day");
    format!("{} – {}", label, focus.name().to_uppercase())
}

/// Plan generator over the static tables.
///
/// Construction runs the catalog consistency check, so a `Generator` that
/// exists can always resolve every blueprint slot.
#[derive(Debug, Clone)]
pub struct Generator {
    accessories_per_day: usize,
}

impl Generator {
    pub fn new() -> Result<Self, PlanError> {
        blueprint::check_catalog()?;
        Ok(Self {
            accessories_per_day: ACCESSORIES_PER_DAY,
        })
    }

    pub fn generate<R: Rng + ?Sized>(
        &self,
        profile: &TraineeProfile,
        rng: &mut R,
    ) -> Result<GeneratedPlan, PlanError> {
        if profile.equipment.is_empty() {
            return Err(PlanError::NoEquipment);
        }

        let days = split::clamp_days(profile.days);
        let focuses = split::select_split(profile.days);
        let prescription = progression::adjust(
            Prescription::from_tables(profile.level, profile.goal),
            profile.adherence,
            profile.rpe,
        );
        let note = CoachingNote::for_week(profile.week);

        let mut plan = Vec::with_capacity(focuses.len());
        for (i, focus) in focuses.iter().enumerate() {
            plan.push(self.build_day(i, *focus, &prescription, &profile.equipment, note, rng)?);
        }

        let progression = Progression::classify(profile.adherence, profile.rpe);
        info!(
            "Generated {}-day {} plan for {} (week {}, {})",
            days,
            profile.goal,
            profile.level,
            profile.week,
            progression.label()
        );

        Ok(GeneratedPlan {
            meta: PlanMeta {
                level: profile.level,
                days,
                goal: profile.goal,
                week: profile.week,
                adherence: profile.adherence,
                rpe: profile.rpe,
                equipment: profile.equipment.clone(),
                progression,
                week_of: profile.week_of,
            },
            plan,
        })
    }

    fn build_day<R: Rng + ?Sized>(
        &self,
        index: usize,
        focus: DayFocus,
        p: &Prescription,
        available: &EquipmentSet,
        note: CoachingNote,
        rng: &mut R,
    ) -> Result<PlanDay, PlanError> {
        let bp = blueprint::blueprint(focus);

        let main = bp
            .main
            .iter()
            .map(|slot| {
                resolver::resolve(*slot, available, rng)
                    .map(|e| PlannedExercise::new(e, p.sets_main, p.reps_main, p.rest_main))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut acc_slots = bp.accessories.to_vec();
        acc_slots.shuffle(rng);
        let accessories = acc_slots
            .into_iter()
            .take(self.accessories_per_day)
            .map(|slot| {
                resolver::resolve(slot, available, rng)
                    .map(|e| PlannedExercise::new(e, p.sets_acc, p.reps_acc, p.rest_acc))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PlanDay {
            name: day_name(index, focus),
            focus,
            main,
            accessories,
            note: note.text().to_string(),
        })
    }
}

/// Build a plan with a freshly checked generator
pub fn generate_plan<R: Rng + ?Sized>(
    profile: &TraineeProfile,
    rng: &mut R,
) -> Result<GeneratedPlan, PlanError> {
    Generator::new()?.generate(profile, rng)
}
