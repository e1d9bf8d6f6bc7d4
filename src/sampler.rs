extern crate nalgebra as na;

use na::Vector3;

use crate::error::{PathError, Result};

/// Pair of neighbouring path indices and the interpolation weight between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: usize,
    pub end: usize,
    pub weight: f64,
}

/// Maps `t` onto a path of `len` points.
///
/// `end` may equal `len` near `t = 1`, the caller then uses `start` as is.
/// Negative `t` saturates to index 0, `t > 1` to the last index.
pub fn locate(t: f64, len: usize) -> Segment {
    let scaled = len as f64 * t;
    let start = (scaled.floor().max(0.0) as usize).min(len.saturating_sub(1));
    let weight = (scaled - start as f64).clamp(0.0, 1.0);
    Segment {
        start,
        end: start + 1,
        weight,
    }
}

/// Returns a point on the path for `t` in `[0, 1]`, linearly interpolating
/// between the two neighbouring points.
pub fn sample_at(t: f64, path: &[Vector3<f64>]) -> Result<Vector3<f64>> {
    let (first, last) = match (path.first(), path.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(PathError::EmptyPath),
    };

    if t == 0.0 {
        return Ok(*first);
    }
    if t == 1.0 {
        return Ok(*last);
    }

    let segment = locate(t, path.len());
    if segment.end >= path.len() {
        return Ok(path[segment.start]);
    }
    Ok(path[segment.start].lerp(&path[segment.end], segment.weight))
}

/// Samples `t = 0, step, 2 * step, ...` while `t < 1`.
///
/// `step` must be at least `f64::EPSILON`, below that `t += step` stalls
/// before reaching 1.
pub fn sample_uniform(path: &[Vector3<f64>], step: f64) -> Result<Vec<Vector3<f64>>> {
    if !(step.is_finite() && step >= f64::EPSILON) {
        return Err(PathError::InvalidStep(step));
    }
    if path.is_empty() {
        return Err(PathError::EmptyPath);
    }

    let mut samples = Vec::new();
    let mut t = 0.0;
    while t < 1.0 {
        samples.push(sample_at(t, path)?);
        t += step;
    }
    Ok(samples)
}
