extern crate nalgebra as na;

use na::{UnitVector3, Vector3};

use crate::error::{PathError, Result};
use crate::generator::Decision;
use crate::paths::path::Path;
use crate::sampler::{locate, sample_at};

/// Polyline produced by [`PathGenerator`](crate::generator::PathGenerator),
/// points in travel order together with the decisions that shaped them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RandomPath {
    points: Vec<Vector3<f64>>,
    decisions: Vec<Decision>,
}

impl RandomPath {
    pub fn new(points: Vec<Vector3<f64>>, decisions: Vec<Decision>) -> RandomPath {
        RandomPath { points, decisions }
    }

    pub fn points(&self) -> &[Vector3<f64>] {
        &self.points
    }

    pub fn decisions(&self) -> &[Decision] {
        &self.decisions
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Polyline length from the first to the last point.
    pub fn length(&self) -> f64 {
        self.points.windows(2).map(|w| (w[1] - w[0]).norm()).sum()
    }

    pub fn into_points(self) -> Vec<Vector3<f64>> {
        self.points
    }
}

impl AsRef<[Vector3<f64>]> for RandomPath {
    fn as_ref(&self) -> &[Vector3<f64>] {
        &self.points
    }
}

impl Path for RandomPath {
    fn comp_pos(&self, t: f64) -> Result<Vector3<f64>> {
        sample_at(t, &self.points)
    }

    fn comp_tangent(&self, t: f64) -> Result<UnitVector3<f64>> {
        let n = self.points.len();
        if n < 2 {
            return Err(PathError::Degenerate(format!(
                "tangent needs at least two points, path has {}",
                n
            )));
        }

        let segment = locate(t, n);
        let (start, end) = if t == 1.0 || segment.end >= n {
            (n - 2, n - 1)
        } else {
            (segment.start, segment.end)
        };

        UnitVector3::try_new(self.points[end] - self.points[start], f64::EPSILON).ok_or_else(|| {
            PathError::Degenerate(format!("segment {}..{} has zero length", start, end))
        })
    }
}
