//! Requested diagnostic depth.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DiagError;

/// How thorough (and how long) a diagnostic run should be.
///
/// Kept as a raw integer so values arriving from config files or the command
/// line survive until the orchestrator can reject them; only the four named
/// levels resolve to a native engine level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct DiagLevel(i32);

impl DiagLevel {
    /// Sub-second sanity checks.
    pub const QUICK: Self = Self(1);
    pub const MEDIUM: Self = Self(2);
    pub const LONG: Self = Self(3);
    /// Can take many minutes.
    pub const EXTENDED: Self = Self(4);

    /// The defined levels, least to most thorough.
    pub const ALL: [Self; 4] = [Self::QUICK, Self::MEDIUM, Self::LONG, Self::EXTENDED];

    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    pub const fn as_raw(self) -> i32 {
        self.0
    }

    /// Name of a defined level, `None` for anything else.
    pub fn name(self) -> Option<&'static str> {
        match self {
            Self::QUICK => Some("quick"),
            Self::MEDIUM => Some("medium"),
            Self::LONG => Some("long"),
            Self::EXTENDED => Some("extended"),
            _ => None,
        }
    }

    pub fn is_defined(self) -> bool {
        self.name().is_some()
    }
}

impl Default for DiagLevel {
    fn default() -> Self {
        Self::QUICK
    }
}

impl std::fmt::Display for DiagLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.0),
        }
    }
}

/// Accepts a level name (`quick`, `medium`, `long`, `extended`, case
/// insensitive) or any integer. Integers are not range checked here.
impl FromStr for DiagLevel {
    type Err = DiagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "quick" | "short" => Ok(Self::QUICK),
            "medium" => Ok(Self::MEDIUM),
            "long" => Ok(Self::LONG),
            "extended" | "xlong" => Ok(Self::EXTENDED),
            _ => trimmed
                .parse::<i32>()
                .map(Self::from_raw)
                .map_err(|_| DiagError::UnparsableLevel(trimmed.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_ordered_by_thoroughness() {
        assert!(DiagLevel::QUICK < DiagLevel::MEDIUM);
        assert!(DiagLevel::MEDIUM < DiagLevel::LONG);
        assert!(DiagLevel::LONG < DiagLevel::EXTENDED);
    }

    #[test]
    fn test_raw_values() {
        let raws: Vec<i32> = DiagLevel::ALL.iter().map(|l| l.as_raw()).collect();
        assert_eq!(raws, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_parse_names_and_numbers() {
        assert_eq!("quick".parse::<DiagLevel>().unwrap(), DiagLevel::QUICK);
        assert_eq!("Extended".parse::<DiagLevel>().unwrap(), DiagLevel::EXTENDED);
        assert_eq!("3".parse::<DiagLevel>().unwrap(), DiagLevel::LONG);
        assert_eq!("99".parse::<DiagLevel>().unwrap(), DiagLevel::from_raw(99));
    }

    #[test]
    fn test_parse_garbage_fails() {
        let err = "thorough".parse::<DiagLevel>().unwrap_err();
        assert!(err.to_string().contains("thorough"));
    }

    #[test]
    fn test_display() {
        assert_eq!(DiagLevel::MEDIUM.to_string(), "medium");
        assert_eq!(DiagLevel::from_raw(99).to_string(), "99");
        assert!(!DiagLevel::from_raw(0).is_defined());
    }
}
