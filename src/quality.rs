use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use crate::error::PathError;

/// Step-length tier of a generated path.
///
/// Every step moves the walker `1 / divisor` units, so a larger divisor gives
/// a denser, smoother path for the same number of decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "cli",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum Quality {
    Low,
    #[default]
    Medium,
    High,
    Custom(NonZeroU32),
}

impl Quality {
    pub fn divisor(&self) -> u32 {
        match self {
            Quality::Low => 2,
            Quality::Medium => 10,
            Quality::High => 50,
            Quality::Custom(divisor) => divisor.get(),
        }
    }

    /// Length of a single walker step.
    pub fn step_length(&self) -> f64 {
        1.0 / f64::from(self.divisor())
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quality::Low => write!(f, "low"),
            Quality::Medium => write!(f, "medium"),
            Quality::High => write!(f, "high"),
            Quality::Custom(divisor) => write!(f, "{}", divisor),
        }
    }
}

impl FromStr for Quality {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Quality::Low),
            "medium" => Ok(Quality::Medium),
            "high" => Ok(Quality::High),
            other => other
                .parse::<NonZeroU32>()
                .map(Quality::Custom)
                .map_err(|_| PathError::InvalidQuality(s.to_string())),
        }
    }
}

impl TryFrom<String> for Quality {
    type Error = PathError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Quality> for String {
    fn from(quality: Quality) -> Self {
        quality.to_string()
    }
}
