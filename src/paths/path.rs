extern crate nalgebra as na;
use na::{UnitVector3, Vector3};

use crate::error::Result;

/// A path evaluated by its normalized parameter `t` in `[0, 1]`.
pub trait Path {
    fn comp_pos(&self, t: f64) -> Result<Vector3<f64>>;
    fn comp_tangent(&self, t: f64) -> Result<UnitVector3<f64>>;
}
