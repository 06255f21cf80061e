//! Day blueprints: which exercise slots make up each kind of day

use std::fmt;

use super::split::DayFocus;
use crate::error::PlanError;
use crate::exercises::find_exercise;

/// Exercise ids in order of preference; any one of them fills the slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot(pub &'static [&'static str]);

impl Slot {
    pub fn alternatives(&self) -> &'static [&'static str] {
        self.0
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("/"))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DayBlueprint {
    /// Listed in this order in the generated day
    pub main: &'static [Slot],
    /// A random subset of these is used each day
    pub accessories: &'static [Slot],
}

const SQUAT: Slot = Slot(&["squat", "goblet", "legpress"]);
const PRESS: Slot = Slot(&["bench", "dbbench", "pushup"]);
const ROW: Slot = Slot(&["row", "dbrow", "latpulldown", "pullup"]);
const OVERHEAD: Slot = Slot(&["ohp", "dbohp"]);
const CORE: Slot = Slot(&["coreplank", "corecable", "hanging"]);

const FULL: DayBlueprint = DayBlueprint {
    main: &[SQUAT, PRESS, ROW],
    accessories: &[
        Slot(&["rdl", "hipthrust"]),
        Slot(&["latraise", "fly"]),
        Slot(&["curl", "tric"]),
        CORE,
    ],
};

const UPPER: DayBlueprint = DayBlueprint {
    main: &[PRESS, Slot(&["row", "latpulldown", "pullup"]), OVERHEAD],
    accessories: &[
        Slot(&["latraise", "fly"]),
        Slot(&["curl"]),
        Slot(&["tric"]),
        CORE,
    ],
};

const LOWER: DayBlueprint = DayBlueprint {
    main: &[SQUAT, Slot(&["rdl", "dl", "hipthrust"])],
    accessories: &[
        Slot(&["legext"]),
        Slot(&["legcurl"]),
        Slot(&["calf"]),
        Slot(&["coreplank"]),
    ],
};

const PUSH: DayBlueprint = DayBlueprint {
    main: &[PRESS, OVERHEAD],
    accessories: &[
        Slot(&["fly"]),
        Slot(&["tric"]),
        Slot(&["latraise"]),
        Slot(&["coreplank"]),
    ],
};

const PULL: DayBlueprint = DayBlueprint {
    main: &[ROW, Slot(&["rdl", "dl"])],
    accessories: &[Slot(&["curl"]), Slot(&["legcurl"]), CORE],
};

const LEGS: DayBlueprint = DayBlueprint {
    main: &[SQUAT, Slot(&["rdl", "hipthrust", "dl"])],
    accessories: &[
        Slot(&["legext"]),
        Slot(&["legcurl"]),
        Slot(&["calf"]),
        Slot(&["coreplank"]),
    ],
};

pub fn blueprint(focus: DayFocus) -> &'static DayBlueprint {
    match focus {
        DayFocus::Full => &FULL,
        DayFocus::Upper => &UPPER,
        DayFocus::Lower => &LOWER,
        DayFocus::Push => &PUSH,
        DayFocus::Pull => &PULL,
        DayFocus::Legs => &LEGS,
    }
}

/// Every slot id must exist in the catalog. Run once at startup.
pub fn check_catalog() -> Result<(), PlanError> {
    for focus in DayFocus::all() {
        let bp = blueprint(*focus);
        for slot in bp.main.iter().chain(bp.accessories) {
            if let Some(id) = slot.alternatives().iter().copied().find(|id| find_exercise(id).is_none()) {
                return Err(PlanError::UnknownExercise { focus: *focus, id });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_catalog_passes() {
        assert_eq!(check_catalog(), Ok(()));
    }

    #[test]
    fn test_every_blueprint_has_slots() {
        for focus in DayFocus::all() {
            let bp = blueprint(*focus);
            assert!(!bp.main.is_empty(), "{} has no main slots", focus);
            assert!(bp.accessories.len() >= 3, "{} has too few accessory slots", focus);
            for slot in bp.main.iter().chain(bp.accessories) {
                assert!(!slot.alternatives().is_empty());
            }
        }
    }

    #[test]
    fn test_slot_display() {
        assert_eq!(SQUAT.to_string(), "squat/goblet/legpress");
        assert_eq!(Slot(&["curl"]).to_string(), "curl");
    }

    #[test]
    fn test_upper_main_order() {
        let ids: Vec<_> = blueprint(DayFocus::Upper)
            .main
            .iter()
            .map(|s| s.alternatives()[0])
            .collect();
        assert_eq!(ids, vec!["bench", "row", "ohp"]);
    }
}
