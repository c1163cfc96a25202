//! Angle estimation strategies for pointing the beam at the target.

use nalgebra::Point2;

use crate::tracker::motion::MotionState;

/// Strategy for estimating the beam angle toward a fixed target.
///
/// Implementations are pure: the same motion state, target, and `dt` always
/// produce the same angle.
///
/// # Example
///
/// ```
/// use beamtrack_rs::{AngleEstimator, MotionState, PositionAngle};
/// use nalgebra::Point2;
///
/// let motion = MotionState::new(Point2::new(0.0, 0.0), 0.0);
/// let angle = PositionAngle.estimate(&motion, Point2::new(100.0, 0.0), 0.0);
/// assert_eq!(angle, 0.0);
/// ```
pub trait AngleEstimator {
    /// Angle in radians from the (possibly extrapolated) sensor position to
    /// `target`, in the `atan2` range `(-pi, pi]`.
    fn estimate(&self, motion: &MotionState, target: Point2<f64>, dt: f64) -> f64;
}

/// Angle of the line from `from` to `to`, in radians.
///
/// Uses the two-argument arctangent: quadrant-correct and well-defined when
/// the horizontal distance is zero.
#[inline]
pub fn bearing(from: Point2<f64>, to: Point2<f64>) -> f64 {
    (to.y - from.y).atan2(to.x - from.x)
}

/// Aim straight from the last observed position.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionAngle;

impl AngleEstimator for PositionAngle {
    fn estimate(&self, motion: &MotionState, target: Point2<f64>, _dt: f64) -> f64 {
        bearing(motion.position(), target)
    }
}

/// Lead the aim by one step of constant-velocity extrapolation.
#[derive(Debug, Clone, Copy, Default)]
pub struct VelocityAngle;

impl AngleEstimator for VelocityAngle {
    fn estimate(&self, motion: &MotionState, target: Point2<f64>, dt: f64) -> f64 {
        let projected = motion.position() + motion.velocity() * dt;
        bearing(projected, target)
    }
}

/// Lead the aim by one step of constant-acceleration extrapolation.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccelerationAngle;

impl AngleEstimator for AccelerationAngle {
    fn estimate(&self, motion: &MotionState, target: Point2<f64>, dt: f64) -> f64 {
        let projected =
            motion.position() + motion.velocity() * dt + motion.acceleration() * (0.5 * dt * dt);
        bearing(projected, target)
    }
}
