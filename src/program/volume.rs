//! Weekly set totals per muscle group for a generated plan

use std::collections::HashMap;

use serde::Serialize;

use super::GeneratedPlan;
use crate::exercises::{MuscleGroup, find_exercise};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct MuscleVolume {
    pub muscle: MuscleGroup,
    pub sets: u32,
}

/// Sets per primary muscle across the week, most-trained first.
/// Groups the plan never touches are left out.
pub fn weekly_volume(plan: &GeneratedPlan) -> Vec<MuscleVolume> {
    let mut totals: HashMap<MuscleGroup, u32> = HashMap::new();

    for day in plan.days() {
        for planned in day.main.iter().chain(&day.accessories) {
            // Plans loaded from elsewhere may carry ids we no longer know
            let Some(exercise) = find_exercise(&planned.id) else {
                continue;
            };
            *totals.entry(exercise.muscle).or_insert(0) += planned.sets;
        }
    }

    let mut report: Vec<_> = totals
        .into_iter()
        .map(|(muscle, sets)| MuscleVolume { muscle, sets })
        .collect();

    report.sort_by(|a, b| b.sets.cmp(&a.sets).then(a.muscle.cmp(&b.muscle)));
    report
}

/// Bar for text output, relative to the busiest muscle
pub fn volume_bar(sets: u32, max_sets: u32) -> &'static str {
    let ratio = sets as f32 / max_sets.max(1) as f32;
    match ratio {
        r if r >= 0.75 => "[++++]",
        r if r >= 0.50 => "[+++.]",
        r if r >= 0.25 => "[++..]",
        r if r > 0.0 => "[+...]",
        _ => "[....]",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exercises::{Equipment, EquipmentSet};
    use crate::notes::CoachingNote;
    use crate::profile::{Adherence, ExperienceLevel, Goal};
    use crate::program::{DayFocus, PlanDay, PlanMeta, PlannedExercise, Progression, RepRange};

    fn planned(id: &str, sets: u32) -> PlannedExercise {
        PlannedExercise {
            id: id.to_string(),
            name: id.to_string(),
            sets,
            reps: RepRange(8, 10),
            rest: 120,
        }
    }

    fn plan_with(days: Vec<PlanDay>) -> GeneratedPlan {
        GeneratedPlan {
            meta: PlanMeta {
                level: ExperienceLevel::Beginner,
                days: days.len() as u8,
                goal: Goal::Recomposition,
                week: 1,
                adherence: Adherence::Yes,
                rpe: 7,
                equipment: EquipmentSet::from([Equipment::Barbell]),
                progression: Progression::Hold,
                week_of: None,
            },
            plan: days,
        }
    }

    fn day(main: Vec<PlannedExercise>, accessories: Vec<PlannedExercise>) -> PlanDay {
        PlanDay {
            name: "Mon – FULL".to_string(),
            focus: DayFocus::Full,
            main,
            accessories,
            note: CoachingNote::Progression.text().to_string(),
        }
    }

    #[test]
    fn test_empty_plan() {
        assert!(weekly_volume(&plan_with(vec![])).is_empty());
    }

    #[test]
    fn test_sums_across_days() {
        let plan = plan_with(vec![
            day(vec![planned("squat", 4), planned("bench", 4)], vec![planned("fly", 3)]),
            day(vec![planned("goblet", 4)], vec![planned("coreplank", 2)]),
        ]);
        let report = weekly_volume(&plan);

        assert_eq!(report[0], MuscleVolume { muscle: MuscleGroup::Legs, sets: 8 });
        assert_eq!(report[1], MuscleVolume { muscle: MuscleGroup::Chest, sets: 7 });
        assert_eq!(report[2], MuscleVolume { muscle: MuscleGroup::Core, sets: 2 });
        assert_eq!(report.len(), 3);
    }

    #[test]
    fn test_unknown_ids_ignored() {
        let plan = plan_with(vec![day(vec![planned("burpee", 3)], vec![])]);
        assert!(weekly_volume(&plan).is_empty());
    }

    #[test]
    fn test_ties_follow_muscle_order() {
        let plan = plan_with(vec![day(vec![planned("row", 3), planned("squat", 3)], vec![])]);
        let muscles: Vec<_> = weekly_volume(&plan).iter().map(|v| v.muscle).collect();
        assert_eq!(muscles, vec![MuscleGroup::Legs, MuscleGroup::Back]);
    }

    #[test]
    fn test_volume_bar() {
        assert_eq!(volume_bar(8, 8), "[++++]");
        assert_eq!(volume_bar(4, 8), "[+++.]");
        assert_eq!(volume_bar(2, 8), "[++..]");
        assert_eq!(volume_bar(1, 8), "[+...]");
        assert_eq!(volume_bar(0, 8), "[....]");
        assert_eq!(volume_bar(0, 0), "[....]");
    }
}
