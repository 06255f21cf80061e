//! Exercise catalog - static registry of lifts

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Primary muscle group an exercise targets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum MuscleGroup {
    Legs,
    PosteriorChain,
    Glutes,
    Chest,
    Shoulders,
    Back,
    Biceps,
    Triceps,
    Quads,
    Calves,
    Core,
}

impl MuscleGroup {
    pub fn name(&self) -> &'static str {
        match self {
            MuscleGroup::Legs => "legs",
            MuscleGroup::PosteriorChain => "posterior-chain",
            MuscleGroup::Glutes => "glutes",
            MuscleGroup::Chest => "chest",
            MuscleGroup::Shoulders => "shoulders",
            MuscleGroup::Back => "back",
            MuscleGroup::Biceps => "biceps",
            MuscleGroup::Triceps => "triceps",
            MuscleGroup::Quads => "quads",
            MuscleGroup::Calves => "calves",
            MuscleGroup::Core => "core",
        }
    }

    /// All muscle groups for iteration
    pub fn all() -> &'static [MuscleGroup] {
        &[
            MuscleGroup::Legs,
            MuscleGroup::PosteriorChain,
            MuscleGroup::Glutes,
            MuscleGroup::Chest,
            MuscleGroup::Shoulders,
            MuscleGroup::Back,
            MuscleGroup::Biceps,
            MuscleGroup::Triceps,
            MuscleGroup::Quads,
            MuscleGroup::Calves,
            MuscleGroup::Core,
        ]
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Movement {
    Compound,
    Accessory,
    Core,
}

impl Movement {
    pub fn name(&self) -> &'static str {
        match self {
            Movement::Compound => "compound",
            Movement::Accessory => "accessory",
            Movement::Core => "core",
        }
    }
}

/// Equipment a trainee may have access to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Equipment {
    Barbell,
    Dumbbell,
    Machine,
    Cable,
    Kettlebell,
    Bench,
    Rack,
    Smith,
    Bodyweight,
    Bar,
}

impl Equipment {
    pub fn name(&self) -> &'static str {
        match self {
            Equipment::Barbell => "barbell",
            Equipment::Dumbbell => "dumbbell",
            Equipment::Machine => "machine",
            Equipment::Cable => "cable",
            Equipment::Kettlebell => "kettlebell",
            Equipment::Bench => "bench",
            Equipment::Rack => "rack",
            Equipment::Smith => "smith",
            Equipment::Bodyweight => "bodyweight",
            Equipment::Bar => "bar",
        }
    }

    pub fn all() -> &'static [Equipment] {
        &[
            Equipment::Barbell,
            Equipment::Dumbbell,
            Equipment::Machine,
            Equipment::Cable,
            Equipment::Kettlebell,
            Equipment::Bench,
            Equipment::Rack,
            Equipment::Smith,
            Equipment::Bodyweight,
            Equipment::Bar,
        ]
    }
}

impl fmt::Display for Equipment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Equipment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase();
        Equipment::all()
            .iter()
            .copied()
            .find(|e| e.name() == tag)
            .ok_or_else(|| format!("Unknown equipment: {}", s))
    }
}

/// Equipment inventory for a single generation request
pub type EquipmentSet = BTreeSet<Equipment>;

#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    pub id: &'static str,
    pub name: &'static str,
    pub muscle: MuscleGroup,
    pub movement: Movement,
    /// Never empty
    pub equipment: &'static [Equipment],
}

impl Exercise {
    /// True if any compatible equipment is in the inventory
    pub fn fits(&self, available: &EquipmentSet) -> bool {
        self.equipment.iter().any(|e| available.contains(e))
    }
}

use Equipment::*;

pub const CATALOG: &[Exercise] = &[
    // Legs
    Exercise { id: "squat", name: "Back Squat", muscle: MuscleGroup::Legs, movement: Movement::Compound, equipment: &[Barbell, Rack] },
    Exercise { id: "fsquat", name: "Front Squat", muscle: MuscleGroup::Legs, movement: Movement::Compound, equipment: &[Barbell, Rack] },
    Exercise { id: "goblet", name: "Goblet Squat", muscle: MuscleGroup::Legs, movement: Movement::Compound, equipment: &[Dumbbell, Kettlebell] },
    Exercise { id: "legpress", name: "Leg Press", muscle: MuscleGroup::Legs, movement: Movement::Compound, equipment: &[Machine] },
    // Hinge
    Exercise { id: "rdl", name: "Romanian Deadlift", muscle: MuscleGroup::PosteriorChain, movement: Movement::Compound, equipment: &[Barbell, Dumbbell] },
    Exercise { id: "dl", name: "Deadlift", muscle: MuscleGroup::PosteriorChain, movement: Movement::Compound, equipment: &[Barbell] },
    Exercise { id: "hipthrust", name: "Hip Thrust", muscle: MuscleGroup::Glutes, movement: Movement::Compound, equipment: &[Barbell, Bench] },
    // Push
    Exercise { id: "bench", name: "Barbell Bench Press", muscle: MuscleGroup::Chest, movement: Movement::Compound, equipment: &[Barbell, Bench] },
    Exercise { id: "dbbench", name: "DB Bench Press", muscle: MuscleGroup::Chest, movement: Movement::Compound, equipment: &[Dumbbell, Bench] },
    Exercise { id: "pushup", name: "Push-up", muscle: MuscleGroup::Chest, movement: Movement::Compound, equipment: &[Bodyweight] },
    Exercise { id: "ohp", name: "Overhead Press", muscle: MuscleGroup::Shoulders, movement: Movement::Compound, equipment: &[Barbell] },
    Exercise { id: "dbohp", name: "DB Shoulder Press", muscle: MuscleGroup::Shoulders, movement: Movement::Compound, equipment: &[Dumbbell] },
    // Pull
    Exercise { id: "row", name: "Barbell Row", muscle: MuscleGroup::Back, movement: Movement::Compound, equipment: &[Barbell] },
    Exercise { id: "dbrow", name: "DB Row", muscle: MuscleGroup::Back, movement: Movement::Compound, equipment: &[Dumbbell, Bench] },
    Exercise { id: "latpulldown", name: "Lat Pulldown", muscle: MuscleGroup::Back, movement: Movement::Compound, equipment: &[Machine, Cable] },
    Exercise { id: "pulldown", name: "Assisted Pull-up / Pull-down", muscle: MuscleGroup::Back, movement: Movement::Compound, equipment: &[Machine] },
    Exercise { id: "pullup", name: "Pull-up", muscle: MuscleGroup::Back, movement: Movement::Compound, equipment: &[Bodyweight, Bar] },
    // Accessories
    Exercise { id: "curl", name: "Bicep Curl", muscle: MuscleGroup::Biceps, movement: Movement::Accessory, equipment: &[Dumbbell, Barbell, Cable] },
    Exercise { id: "tric", name: "Triceps Pushdown", muscle: MuscleGroup::Triceps, movement: Movement::Accessory, equipment: &[Cable] },
    Exercise { id: "skull", name: "Skullcrusher", muscle: MuscleGroup::Triceps, movement: Movement::Accessory, equipment: &[Barbell, Dumbbell, Bench] },
    Exercise { id: "latraise", name: "Lateral Raise", muscle: MuscleGroup::Shoulders, movement: Movement::Accessory, equipment: &[Dumbbell, Cable] },
    Exercise { id: "fly", name: "Chest Fly", muscle: MuscleGroup::Chest, movement: Movement::Accessory, equipment: &[Dumbbell, Cable, Machine] },
    Exercise { id: "legcurl", name: "Leg Curl", muscle: MuscleGroup::PosteriorChain, movement: Movement::Accessory, equipment: &[Machine] },
    Exercise { id: "legext", name: "Leg Extension", muscle: MuscleGroup::Quads, movement: Movement::Accessory, equipment: &[Machine] },
    Exercise { id: "calf", name: "Calf Raise", muscle: MuscleGroup::Calves, movement: Movement::Accessory, equipment: &[Machine, Smith, Bodyweight] },
    // Core
    Exercise { id: "coreplank", name: "Plank", muscle: MuscleGroup::Core, movement: Movement::Core, equipment: &[Bodyweight] },
    Exercise { id: "corecable", name: "Cable Crunch", muscle: MuscleGroup::Core, movement: Movement::Core, equipment: &[Cable] },
    Exercise { id: "hanging", name: "Hanging Knee Raise", muscle: MuscleGroup::Core, movement: Movement::Core, equipment: &[Bar] },
];

pub fn all_exercises() -> &'static [Exercise] {
    CATALOG
}

pub fn find_exercise(id: &str) -> Option<&'static Exercise> {
    CATALOG.iter().find(|e| e.id == id)
}

/// Catalog entries usable with the given inventory
pub fn exercises_for(available: &EquipmentSet) -> Vec<&'static Exercise> {
    CATALOG.iter().filter(|e| e.fits(available)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_unique() {
        let ids: HashSet<_> = CATALOG.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), CATALOG.len());
    }

    #[test]
    fn test_every_exercise_has_equipment() {
        for exercise in CATALOG {
            assert!(!exercise.equipment.is_empty(), "{} has no equipment", exercise.id);
        }
    }

    #[test]
    fn test_find_exercise() {
        let goblet = find_exercise("goblet").unwrap();
        assert_eq!(goblet.name, "Goblet Squat");
        assert_eq!(goblet.muscle, MuscleGroup::Legs);
        assert_eq!(goblet.movement, Movement::Compound);
        assert!(find_exercise("burpee").is_none());
    }

    #[test]
    fn test_fits_requires_intersection() {
        let goblet = find_exercise("goblet").unwrap();
        assert!(goblet.fits(&EquipmentSet::from([Kettlebell])));
        assert!(!goblet.fits(&EquipmentSet::from([Barbell, Rack])));
        assert!(!goblet.fits(&EquipmentSet::new()));
    }

    #[test]
    fn test_exercises_for_bodyweight() {
        let ids: Vec<_> = exercises_for(&EquipmentSet::from([Bodyweight]))
            .iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec!["pushup", "pullup", "calf", "coreplank"]);
    }

    #[test]
    fn test_equipment_from_str_is_lenient() {
        assert_eq!(" Dumbbell ".parse::<Equipment>(), Ok(Dumbbell));
        assert_eq!("bar".parse::<Equipment>(), Ok(Bar));
        assert!("trx".parse::<Equipment>().is_err());
    }

    #[test]
    fn test_serde_names_match_display() {
        for group in MuscleGroup::all() {
            let json = serde_json::to_string(group).unwrap();
            assert_eq!(json, format!("\"{}\"", group.name()));
        }
        for equipment in Equipment::all() {
            let json = serde_json::to_string(equipment).unwrap();
            assert_eq!(json, format!("\"{}\"", equipment));
        }
    }
}
