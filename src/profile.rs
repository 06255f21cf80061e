//! Trainee profile and the request it is parsed from
//!
//! Parsing is lenient: anything unrecognized falls back to a default so a
//! plan can always be produced.

use std::fmt;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::exercises::{Equipment, EquipmentSet};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl ExperienceLevel {
    pub fn name(&self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "beginner",
            ExperienceLevel::Intermediate => "intermediate",
            ExperienceLevel::Advanced => "advanced",
        }
    }

    pub fn all() -> &'static [ExperienceLevel] {
        &[
            ExperienceLevel::Beginner,
            ExperienceLevel::Intermediate,
            ExperienceLevel::Advanced,
        ]
    }

    /// Case-insensitive match, beginner for anything else
    pub fn parse_or_default(s: &str) -> Self {
        let key = s.trim().to_lowercase();
        match Self::all().iter().find(|l| l.name() == key) {
            Some(level) => *level,
            None => {
                debug!("Unrecognized level '{}', using {}", s, Self::default());
                Self::default()
            }
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Strength,
    Hypertrophy,
    Endurance,
    #[default]
    #[serde(rename = "recomp")]
    Recomposition,
}

impl Goal {
    pub fn name(&self) -> &'static str {
        match self {
            Goal::Strength => "strength",
            Goal::Hypertrophy => "hypertrophy",
            Goal::Endurance => "endurance",
            Goal::Recomposition => "recomp",
        }
    }

    pub fn all() -> &'static [Goal] {
        &[Goal::Strength, Goal::Hypertrophy, Goal::Endurance, Goal::Recomposition]
    }

    /// Case-insensitive match, recomp for anything else
    pub fn parse_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "strength" => Goal::Strength,
            "hypertrophy" => Goal::Hypertrophy,
            "endurance" => Goal::Endurance,
            "recomp" | "recomposition" | "recomp/general" => Goal::Recomposition,
            other => {
                debug!("Unrecognized goal '{}', using {}", other, Self::default());
                Self::default()
            }
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether the trainee completed last week's prescribed volume
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Adherence {
    #[default]
    Yes,
    No,
}

impl Adherence {
    pub fn completed(&self) -> bool {
        matches!(self, Adherence::Yes)
    }

    pub fn parse_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "yes" | "y" | "true" => Adherence::Yes,
            "no" | "n" | "false" => Adherence::No,
            other => {
                debug!("Unrecognized adherence '{}', assuming yes", other);
                Self::default()
            }
        }
    }
}

impl fmt::Display for Adherence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Adherence::Yes => "yes",
            Adherence::No => "no",
        })
    }
}

pub const DEFAULT_DAYS: i64 = 3;
pub const DEFAULT_RPE: i32 = 7;

/// Everything the generator needs to know about a trainee for one request
#[derive(Debug, Clone, PartialEq)]
pub struct TraineeProfile {
    pub level: ExperienceLevel,
    /// Requested days, clamped by the split selector
    pub days: i64,
    pub goal: Goal,
    pub equipment: EquipmentSet,
    pub adherence: Adherence,
    /// Most recent session RPE, nominally 1-10
    pub rpe: i32,
    /// Program week, 1-based; drives deload cadence
    pub week: u32,
    /// Monday of the calendar week the plan is for
    pub week_of: Option<NaiveDate>,
}

impl Default for TraineeProfile {
    fn default() -> Self {
        Self {
            level: ExperienceLevel::default(),
            days: DEFAULT_DAYS,
            goal: Goal::default(),
            equipment: EquipmentSet::new(),
            adherence: Adherence::default(),
            rpe: DEFAULT_RPE,
            week: 1,
            week_of: None,
        }
    }
}

impl TraineeProfile {
    pub fn new(level: ExperienceLevel, days: i64, goal: Goal, equipment: EquipmentSet) -> Self {
        Self {
            level,
            days,
            goal,
            equipment,
            ..Self::default()
        }
    }

    pub fn with_feedback(mut self, adherence: Adherence, rpe: i32) -> Self {
        self.adherence = adherence;
        self.rpe = rpe;
        self
    }

    pub fn with_week(mut self, week: u32) -> Self {
        self.week = week.max(1);
        self
    }
}

/// Generation request as received from a form or API client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GenerateRequest {
    pub level: String,
    pub days: i64,
    pub goal: String,
    pub equipment: Vec<String>,
    pub adherence: String,
    pub rpe: i32,
    pub week: i64,
    pub week_of: Option<NaiveDate>,
}

impl Default for GenerateRequest {
    fn default() -> Self {
        Self {
            level: "beginner".to_string(),
            days: DEFAULT_DAYS,
            goal: "recomp".to_string(),
            equipment: Vec::new(),
            adherence: "yes".to_string(),
            rpe: DEFAULT_RPE,
            week: 1,
            week_of: None,
        }
    }
}

/// Parse equipment tags, dropping the ones not in the catalog
pub fn parse_equipment<S: AsRef<str>>(tags: &[S]) -> EquipmentSet {
    tags.iter()
        .filter_map(|tag| match tag.as_ref().parse::<Equipment>() {
            Ok(equipment) => Some(equipment),
            Err(e) => {
                warn!("{}, ignoring", e);
                None
            }
        })
        .collect()
}

impl From<GenerateRequest> for TraineeProfile {
    fn from(req: GenerateRequest) -> Self {
        Self {
            level: ExperienceLevel::parse_or_default(&req.level),
            days: req.days,
            goal: Goal::parse_or_default(&req.goal),
            equipment: parse_equipment(&req.equipment),
            adherence: Adherence::parse_or_default(&req.adherence),
            rpe: req.rpe,
            week: req.week.clamp(1, u32::MAX as i64) as u32,
            week_of: req.week_of.map(start_of_week),
        }
    }
}

/// Monday of the week containing `date`
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_request_defaults_from_empty_json() {
        let req: GenerateRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req, GenerateRequest::default());

        let profile = TraineeProfile::from(req);
        assert_eq!(profile, TraineeProfile::default());
    }

    #[test]
    fn test_request_partial_json() {
        let req: GenerateRequest = serde_json::from_str(
            r#"{"level": "Advanced", "days": 5, "equipment": ["barbell", "Rack"], "rpe": 9}"#,
        )
        .unwrap();
        let profile = TraineeProfile::from(req);

        assert_eq!(profile.level, ExperienceLevel::Advanced);
        assert_eq!(profile.days, 5);
        assert_eq!(profile.goal, Goal::Recomposition);
        assert_eq!(profile.equipment, EquipmentSet::from([Equipment::Barbell, Equipment::Rack]));
        assert_eq!(profile.adherence, Adherence::Yes);
        assert_eq!(profile.rpe, 9);
        assert_eq!(profile.week, 1);
    }

    #[test]
    fn test_unknown_values_fall_back() {
        let req = GenerateRequest {
            level: "elite".to_string(),
            goal: "powerlifting".to_string(),
            adherence: "sometimes".to_string(),
            equipment: vec!["trx".to_string(), "dumbbell".to_string()],
            week: -3,
            ..GenerateRequest::default()
        };
        let profile = TraineeProfile::from(req);

        assert_eq!(profile.level, ExperienceLevel::Beginner);
        assert_eq!(profile.goal, Goal::Recomposition);
        assert_eq!(profile.adherence, Adherence::Yes);
        assert_eq!(profile.equipment, EquipmentSet::from([Equipment::Dumbbell]));
        assert_eq!(profile.week, 1);
    }

    #[test]
    fn test_goal_aliases() {
        assert_eq!(Goal::parse_or_default("Recomp/General"), Goal::Recomposition);
        assert_eq!(Goal::parse_or_default("recomposition"), Goal::Recomposition);
        assert_eq!(Goal::parse_or_default("HYPERTROPHY"), Goal::Hypertrophy);
    }

    #[test]
    fn test_adherence_parsing() {
        assert_eq!(Adherence::parse_or_default("no"), Adherence::No);
        assert_eq!(Adherence::parse_or_default(" No "), Adherence::No);
        assert!(Adherence::parse_or_default("yes").completed());
        assert!(!Adherence::No.completed());
    }

    #[test]
    fn test_goal_serializes_as_recomp() {
        assert_eq!(serde_json::to_string(&Goal::Recomposition).unwrap(), "\"recomp\"");
        assert_eq!(serde_json::to_string(&ExperienceLevel::Intermediate).unwrap(), "\"intermediate\"");
        assert_eq!(serde_json::to_string(&Adherence::No).unwrap(), "\"no\"");
    }

    #[test]
    fn test_start_of_week() {
        let saturday = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        let monday = NaiveDate::from_ymd_opt(2026, 10, 12).unwrap();
        assert_eq!(start_of_week(saturday), monday);
        assert_eq!(start_of_week(monday), monday);
    }

    #[test]
    fn test_week_of_is_normalized_to_monday() {
        let req = GenerateRequest {
            week_of: NaiveDate::from_ymd_opt(2026, 10, 15),
            ..GenerateRequest::default()
        };
        let profile = TraineeProfile::from(req);
        assert_eq!(profile.week_of, NaiveDate::from_ymd_opt(2026, 10, 12));
    }

    #[test]
    fn test_with_week_floors_at_one() {
        let profile = TraineeProfile::default().with_week(0);
        assert_eq!(profile.week, 1);
    }
}
