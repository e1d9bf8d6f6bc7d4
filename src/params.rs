use thiserror::Error;

use crate::quality::Quality;

/// Accepted range of the absolute turn delta picked at every decision, degrees.
///
/// Candidates are drawn from `[-max, max]` and kept when `min <= |delta| < max`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnWindow {
    pub min: f64,
    pub max: f64,
}

impl TurnWindow {
    pub fn new(min: f64, max: f64) -> TurnWindow {
        TurnWindow { min, max }
    }

    pub fn accepts(&self, delta: f64) -> bool {
        (self.min..self.max).contains(&delta.abs())
    }

    pub fn is_empty(&self) -> bool {
        !(self.min < self.max) || self.max <= 0.0
    }

    /// Nearest accepted value for a rejected candidate: `min` for the
    /// deadband, the largest value below `max` for candidates at or past it.
    pub fn clamp(&self, delta: f64) -> f64 {
        let magnitude = if delta.abs() >= self.max && self.min < self.max {
            (self.max * (1.0 - f64::EPSILON)).max(self.min)
        } else {
            self.min
        };
        if delta < 0.0 {
            -magnitude
        } else {
            magnitude
        }
    }
}

impl Default for TurnWindow {
    fn default() -> Self {
        Self::new(10.0, 30.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "cli",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct GenerationParameters {
    /// Acts as the length of the path.
    pub number_of_decisions: usize,
    pub min_decision_size: i32,
    pub max_decision_size: i32,
    /// Turn rate bounds, degrees per step.
    pub min_angle_speed: f64,
    pub max_angle_speed: f64,
    pub quality: Quality,
    pub turn_window: TurnWindow,
    /// `None` keeps redrawing turn candidates until one is accepted.
    pub max_turn_attempts: Option<u32>,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        GenerationParameters {
            number_of_decisions: 100,
            min_decision_size: 10,
            max_decision_size: 20,
            min_angle_speed: 1.0,
            max_angle_speed: 2.0,
            quality: Quality::Medium,
            turn_window: TurnWindow::default(),
            max_turn_attempts: Some(1024),
        }
    }
}

/// Parameter combinations that produce empty output or stall generation.
/// They are reported, never rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationHazard {
    #[error("decision size range [{min}, {max}) is inverted")]
    InvertedDecisionRange { min: i32, max: i32 },

    #[error("decision size range [{min}, {max}) has non-positive sizes")]
    NonPositiveDecisionSize { min: i32, max: i32 },

    #[error("angle speed range [{min}, {max}] is inverted")]
    InvertedAngleSpeedRange { min: f64, max: f64 },

    #[error("angle speed range [{min}, {max}] contains negative speeds")]
    NegativeAngleSpeed { min: f64, max: f64 },

    #[error("turn window [{min}, {max}) accepts no delta")]
    EmptyTurnWindow { min: f64, max: f64 },

    #[error("turn window [{min}, {max}) is empty with unbounded retries")]
    UnboundedEmptyTurnWindow { min: f64, max: f64 },
}

impl GenerationParameters {
    pub fn with_quality(mut self, quality: Quality) -> Self {
        self.quality = quality;
        self
    }

    pub fn hazards(&self) -> Vec<ConfigurationHazard> {
        let mut hazards = Vec::new();
        let (min, max) = (self.min_decision_size, self.max_decision_size);
        if min > max {
            hazards.push(ConfigurationHazard::InvertedDecisionRange { min, max });
        }
        if min <= 0 {
            hazards.push(ConfigurationHazard::NonPositiveDecisionSize { min, max });
        }

        let (min, max) = (self.min_angle_speed, self.max_angle_speed);
        if min > max {
            hazards.push(ConfigurationHazard::InvertedAngleSpeedRange { min, max });
        }
        if min < 0.0 || max < 0.0 {
            hazards.push(ConfigurationHazard::NegativeAngleSpeed { min, max });
        }

        let TurnWindow { min, max } = self.turn_window;
        if self.turn_window.is_empty() {
            if self.max_turn_attempts.is_none() {
                hazards.push(ConfigurationHazard::UnboundedEmptyTurnWindow { min, max });
            } else {
                hazards.push(ConfigurationHazard::EmptyTurnWindow { min, max });
            }
        }
        hazards
    }
}
