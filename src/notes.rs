//! Coaching notes attached to each training day

use serde::{Deserialize, Serialize};

/// Every fourth program week is a deload
pub const DELOAD_EVERY: u32 = 4;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CoachingNote {
    /// Back off: lighter loads, more reps in reserve
    Deload,
    /// Push a little: small reserve, add load when sets felt easy
    Progression,
}

impl CoachingNote {
    pub fn for_week(week: u32) -> Self {
        if week % DELOAD_EVERY == 0 {
            CoachingNote::Deload
        } else {
            CoachingNote::Progression
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            CoachingNote::Deload => "Deload week: leave 3–4 RIR and reduce weight ~10–15%.",
            CoachingNote::Progression => "Leave 1–2 RIR. Increase next week if top sets ≤7 RPE.",
        }
    }

    pub fn is_deload(&self) -> bool {
        matches!(self, CoachingNote::Deload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deload_weeks() {
        for week in [4, 8, 12, 40] {
            assert_eq!(CoachingNote::for_week(week), CoachingNote::Deload, "week {}", week);
        }
    }

    #[test]
    fn test_progression_weeks() {
        for week in [1, 2, 3, 5, 6, 7, 9] {
            assert_eq!(CoachingNote::for_week(week), CoachingNote::Progression, "week {}", week);
        }
    }

    #[test]
    fn test_note_text() {
        assert!(CoachingNote::Deload.text().starts_with("Deload week"));
        assert!(CoachingNote::Deload.text().contains("10–15%"));
        assert!(CoachingNote::Progression.text().contains("1–2 RIR"));
        assert!(!CoachingNote::Progression.is_deload());
    }
}
