extern crate nalgebra as na;

use na::{Rotation2, Vector2, Vector3};
use tracing::{debug, warn};

use crate::params::{GenerationParameters, TurnWindow};
use crate::paths::random_path::RandomPath;
use crate::random::{RandomSource, RngSource};

/// One heading change of the walk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    /// Steps drawn for this decision, a non-positive value adds no points.
    pub steps: i32,
    /// Accepted turn delta, degrees.
    pub turn: f64,
    pub target_angle: f64,
    /// Degrees per step.
    pub angle_speed: f64,
    /// Set when the turn came from the retry fallback instead of a draw.
    pub clamped: bool,
}

/// Builds random paths with a fixed set of [`GenerationParameters`].
#[derive(Debug, Clone, Default)]
pub struct PathGenerator {
    params: GenerationParameters,
}

impl PathGenerator {
    pub fn new(params: GenerationParameters) -> PathGenerator {
        PathGenerator { params }
    }

    pub fn params(&self) -> &GenerationParameters {
        &self.params
    }

    /// Creates a path using "decision" logic: every decision picks the next
    /// target angle and angle speed, then steers towards it for a random
    /// number of steps.
    ///
    /// `start` lies in the path plane, the returned points carry `z = 0`.
    /// `start_angle` is in degrees, counter-clockwise from the x axis.
    pub fn generate(
        &self,
        start: Vector2<f64>,
        number_of_decisions: usize,
        start_angle: f64,
        rng: &mut impl RandomSource,
    ) -> RandomPath {
        for hazard in self.params.hazards() {
            warn!("path generation: {}", hazard);
        }

        let step = Vector2::new(self.params.quality.step_length(), 0.0);
        let mut pos = start;
        let mut angle = start_angle;
        let mut points = Vec::new();
        let mut decisions = Vec::with_capacity(number_of_decisions);

        for i in 0..number_of_decisions {
            let steps = rng.next_int(self.params.min_decision_size, self.params.max_decision_size);
            let (turn, clamped) = self.draw_turn(rng);
            let target_angle = angle + turn;
            let angle_speed = rng
                .next_float(self.params.min_angle_speed, self.params.max_angle_speed)
                .abs();

            debug!(
                "decision {}: steps={} turn={:.3} target={:.3} speed={:.3}",
                i, steps, turn, target_angle, angle_speed
            );

            for _ in 0..steps.max(0) {
                angle = steer(angle, target_angle, angle_speed);
                pos += heading_step(angle, &step);
                points.push(Vector3::new(pos[0], pos[1], 0.0));
            }

            decisions.push(Decision {
                steps,
                turn,
                target_angle,
                angle_speed,
                clamped,
            });
        }

        debug!(
            "generated path with {} points over {} decisions, final heading {:.3}",
            points.len(),
            decisions.len(),
            angle
        );
        RandomPath::new(points, decisions)
    }

    /// Same as [`generate`](Self::generate) with a fresh entropy-seeded stream.
    pub fn generate_from_entropy(
        &self,
        start: Vector2<f64>,
        number_of_decisions: usize,
        start_angle: f64,
    ) -> RandomPath {
        let mut rng = RngSource::from_entropy();
        self.generate(start, number_of_decisions, start_angle, &mut rng)
    }

    /// Rejection-samples a turn delta inside the turn window.
    fn draw_turn(&self, rng: &mut impl RandomSource) -> (f64, bool) {
        let window: TurnWindow = self.params.turn_window;
        let mut attempts = 1u32;
        let mut candidate = rng.next_float(-window.max, window.max);

        while !window.accepts(candidate) {
            if let Some(max_attempts) = self.params.max_turn_attempts {
                if attempts >= max_attempts {
                    let turn = window.clamp(candidate);
                    warn!(
                        "no turn accepted in [{}, {}) after {} draws, using {}",
                        window.min, window.max, attempts, turn
                    );
                    return (turn, true);
                }
            }
            candidate = rng.next_float(-window.max, window.max);
            attempts = attempts.saturating_add(1);
        }
        (candidate, false)
    }
}

/// Moves `angle` one step of `speed` towards `target`. Does not stop at the
/// target, a step that crosses it overshoots.
pub fn steer(angle: f64, target: f64, speed: f64) -> f64 {
    if angle >= target {
        angle - speed
    } else {
        angle + speed
    }
}

/// Rotates `step` by `angle` degrees about the plane normal.
pub fn heading_step(angle: f64, step: &Vector2<f64>) -> Vector2<f64> {
    Rotation2::new(angle.to_radians()) * step
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quality::Quality;
    use crate::random::ScriptedRandom;
    use approx::assert_relative_eq;

    #[test]
    fn test_single_decision() {
        let params = GenerationParameters::default().with_quality(Quality::Medium);
        let generator = PathGenerator::new(params);
        let mut rng = ScriptedRandom::new(vec![5], vec![20.0, 1.0]);
        let path = generator.generate(Vector2::new(0.0, 0.0), 1, 0.0, &mut rng);

        assert_eq!(path.len(), 5);
        assert_eq!(rng.draws(), (1, 2));
        let decision = path.decisions()[0];
        assert_eq!(decision.steps, 5);
        assert_eq!(decision.turn, 20.0);
        assert_eq!(decision.target_angle, 20.0);
        assert!(!decision.clamped);

        let mut prev = Vector3::zeros();
        for (k, point) in path.points().iter().enumerate() {
            let heading = (k + 1) as f64;
            let delta = point - prev;
            assert_relative_eq!(delta.norm(), 0.1, epsilon = 1e-12);
            let angle = delta[1].atan2(delta[0]).to_degrees();
            assert_relative_eq!(angle, heading, epsilon = 1e-9);
            assert_eq!(point[2], 0.0);
            prev = *point;
        }
    }

    #[test]
    fn test_scripted_draws_are_bit_exact() {
        let generator = PathGenerator::default();
        let script = ScriptedRandom::new(
            vec![12, 17, 10],
            vec![-14.5, 1.25, 22.0, 1.75, 3.0, 12.0, 1.5],
        );
        let a = generator.generate(Vector2::new(3.0, -2.0), 3, 45.0, &mut script.clone());
        let b = generator.generate(Vector2::new(3.0, -2.0), 3, 45.0, &mut script.clone());

        assert_eq!(a.len(), 12 + 17 + 10);
        assert_eq!(a.points(), b.points());
        // 3.0 falls in the deadband and is redrawn
        assert_eq!(a.decisions()[2].turn, 12.0);
        assert_eq!(a.decisions()[2].angle_speed, 1.5);
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let generator = PathGenerator::default();
        let a = generator.generate(Vector2::new(1.0, 2.0), 20, 0.0, &mut RngSource::seeded(11));
        let b = generator.generate(Vector2::new(1.0, 2.0), 20, 0.0, &mut RngSource::seeded(11));
        assert_eq!(a, b);
    }

    #[test]
    fn test_length_and_turn_bounds() {
        let params = GenerationParameters::default();
        let generator = PathGenerator::new(params.clone());
        let mut rng = RngSource::seeded(2024);
        let path = generator.generate(Vector2::new(0.0, 0.0), 200, 0.0, &mut rng);

        let total: i32 = path.decisions().iter().map(|d| d.steps).sum();
        assert_eq!(path.len(), total as usize);
        assert_eq!(path.decisions().len(), 200);
        for d in path.decisions() {
            assert!((params.min_decision_size..params.max_decision_size).contains(&d.steps));
            assert!(d.turn.abs() >= 10.0 && d.turn.abs() < 30.0);
            let speeds = params.min_angle_speed..=params.max_angle_speed;
            assert!(speeds.contains(&d.angle_speed));
            assert!(!d.clamped);
        }
    }

    #[test]
    fn test_consecutive_points_are_one_step_apart() {
        let params = GenerationParameters::default().with_quality(Quality::High);
        let generator = PathGenerator::new(params);
        let start = Vector2::new(5.0, 5.0);
        let path = generator.generate(start, 10, 90.0, &mut RngSource::seeded(3));

        let mut prev = Vector3::new(start[0], start[1], 0.0);
        for point in path.points() {
            assert_relative_eq!((point - prev).norm(), 0.02, epsilon = 1e-12);
            prev = *point;
        }
    }

    #[test]
    fn test_non_positive_steps_add_no_points() {
        let params = GenerationParameters {
            min_decision_size: -3,
            max_decision_size: 0,
            ..Default::default()
        };
        let generator = PathGenerator::new(params);
        let path = generator.generate(Vector2::new(0.0, 0.0), 10, 0.0, &mut RngSource::seeded(1));
        assert!(path.is_empty());
        assert_eq!(path.decisions().len(), 10);
    }

    #[test]
    fn test_zero_decisions() {
        let generator = PathGenerator::default();
        let path = generator.generate(Vector2::new(0.0, 0.0), 0, 0.0, &mut RngSource::seeded(1));
        assert!(path.is_empty());
        assert!(path.decisions().is_empty());
    }

    #[test]
    fn test_retry_cap_clamps_turn() {
        let params = GenerationParameters {
            max_turn_attempts: Some(4),
            ..Default::default()
        };
        let generator = PathGenerator::new(params);
        let mut rng = ScriptedRandom::new(vec![2], vec![-1.0, -2.0, 0.5, -5.0, 1.0]);
        let path = generator.generate(Vector2::new(0.0, 0.0), 1, 0.0, &mut rng);

        let decision = path.decisions()[0];
        assert!(decision.clamped);
        assert_eq!(decision.turn, -10.0);
        assert_eq!(decision.target_angle, -10.0);
        assert_eq!(path.len(), 2);
        assert_eq!(rng.draws(), (1, 5));
    }

    #[test]
    fn test_retry_cap_keeps_upper_bound_side() {
        let params = GenerationParameters {
            max_turn_attempts: Some(1),
            ..Default::default()
        };
        let generator = PathGenerator::new(params);
        let mut rng = ScriptedRandom::new(vec![1], vec![-30.0, 1.0]);
        let path = generator.generate(Vector2::new(0.0, 0.0), 1, 0.0, &mut rng);

        let decision = path.decisions()[0];
        assert!(decision.clamped);
        assert!(decision.turn < -29.999 && decision.turn > -30.0);
        assert!(TurnWindow::default().accepts(decision.turn));
        assert_eq!(rng.draws(), (1, 2));
    }

    #[test]
    fn test_empty_turn_window_terminates_when_capped() {
        let params = GenerationParameters {
            turn_window: TurnWindow::new(30.0, 10.0),
            max_turn_attempts: Some(8),
            ..Default::default()
        };
        let generator = PathGenerator::new(params);
        let path = generator.generate(Vector2::new(0.0, 0.0), 5, 0.0, &mut RngSource::seeded(9));
        assert!(path.decisions().iter().all(|d| d.clamped && d.turn.abs() == 30.0));
    }

    #[test]
    fn test_steer_overshoots() {
        assert_eq!(steer(0.0, 1.5, 1.0), 1.0);
        assert_eq!(steer(1.0, 1.5, 1.0), 2.0);
        assert_eq!(steer(2.0, 1.5, 1.0), 1.0);
        assert_eq!(steer(1.5, 1.5, 1.0), 0.5);
    }

    #[test]
    fn test_heading_step_rotates_counter_clockwise() {
        let v = heading_step(90.0, &Vector2::new(0.5, 0.0));
        assert_relative_eq!(v, Vector2::new(0.0, 0.5), epsilon = 1e-12);
    }
}
