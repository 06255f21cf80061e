//! liftplan - Rule-based resistance training plan generator
//!
//! Turns a trainee profile (level, days, goal, equipment, last week's
//! feedback) into a structured weekly program.

pub mod error;
pub mod exercises;
pub mod notes;
pub mod profile;
pub mod program;

pub use error::PlanError;
pub use profile::{GenerateRequest, TraineeProfile};
pub use program::{GeneratedPlan, Generator, generate_plan};
