//! Error types for plan generation

use crate::program::DayFocus;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum PlanError {
    /// Caller-correctable: ask the trainee what equipment they have
    #[error("no equipment available, at least one equipment tag is required")]
    NoEquipment,
    #[error("{focus} blueprint references unknown exercise '{id}'")]
    UnknownExercise { focus: DayFocus, id: &'static str },
    #[error("no exercise in the catalog matches slot {slot}")]
    UnresolvableSlot { slot: String },
}

impl PlanError {
    /// True for input problems the caller should fix and retry
    pub fn is_input_error(&self) -> bool {
        matches!(self, PlanError::NoEquipment)
    }
}
