//! Weekly split templates keyed by training-day count

use std::fmt;

use serde::{Deserialize, Serialize};

pub const MIN_DAYS: u8 = 2;
pub const MAX_DAYS: u8 = 6;

/// What a training day concentrates on
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DayFocus {
    Full,
    Upper,
    Lower,
    Push,
    Pull,
    Legs,
}

impl DayFocus {
    pub fn name(&self) -> &'static str {
        match self {
            DayFocus::Full => "full",
            DayFocus::Upper => "upper",
            DayFocus::Lower => "lower",
            DayFocus::Push => "push",
            DayFocus::Pull => "pull",
            DayFocus::Legs => "legs",
        }
    }

    pub fn all() -> &'static [DayFocus] {
        &[
            DayFocus::Full,
            DayFocus::Upper,
            DayFocus::Lower,
            DayFocus::Push,
            DayFocus::Pull,
            DayFocus::Legs,
        ]
    }
}

impl fmt::Display for DayFocus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

use DayFocus::*;

const SPLITS: &[(u8, &[DayFocus])] = &[
    (2, &[Full, Full]),
    (3, &[Push, Pull, Legs]),
    (4, &[Upper, Lower, Upper, Lower]),
    (5, &[Upper, Lower, Push, Pull, Full]),
    (6, &[Push, Pull, Legs, Upper, Lower, Full]),
];

const DEFAULT_DAYS: u8 = 3;

/// Clamp a requested day count into the supported range
pub fn clamp_days(days: i64) -> u8 {
    days.clamp(MIN_DAYS as i64, MAX_DAYS as i64) as u8
}

fn template(days: u8) -> Option<&'static [DayFocus]> {
    SPLITS.iter().find(|(d, _)| *d == days).map(|(_, t)| *t)
}

/// Ordered day focuses for a week, never fails
pub fn select_split(days: i64) -> &'static [DayFocus] {
    template(clamp_days(days))
        .or_else(|| template(DEFAULT_DAYS))
        .unwrap_or(&[Push, Pull, Legs])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(-5, 2)]
    #[case(0, 2)]
    #[case(2, 2)]
    #[case(4, 4)]
    #[case(6, 6)]
    #[case(7, 6)]
    #[case(99, 6)]
    fn test_clamp_days(#[case] requested: i64, #[case] expected: u8) {
        assert_eq!(clamp_days(requested), expected);
        assert_eq!(select_split(requested).len(), expected as usize);
    }

    #[test]
    fn test_four_day_split_is_upper_lower() {
        assert_eq!(select_split(4), &[Upper, Lower, Upper, Lower]);
    }

    #[test]
    fn test_select_split_is_stable() {
        let first = select_split(4);
        for _ in 0..10 {
            assert_eq!(select_split(4), first);
        }
    }

    #[test]
    fn test_every_supported_count_has_template() {
        for days in MIN_DAYS..=MAX_DAYS {
            assert!(template(days).is_some(), "no template for {} days", days);
        }
    }

    #[test]
    fn test_focus_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Upper).unwrap(), "\"upper\"");
        assert_eq!(Legs.to_string(), "legs");
    }
}
