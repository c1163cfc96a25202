//! Beam pose geometry.
//!
//! The beam element rotates around a pivot that sits `pivot_radius` units
//! from its origin, so a plain rotation swings the origin away from the
//! sensor. `BeamPose` folds the compensating translation into the pose the
//! rendering layer applies.

use nalgebra::Point2;

use crate::tracker::beam_tracker::TrackerConfig;

/// Pose applied to the beam indicator by the rendering layer: an origin
/// translation plus a rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeamPose {
    /// Top-left origin of the beam element in UI pixel units
    pub origin: Point2<f64>,
    /// Rotation in radians
    pub angle: f64,
}

impl BeamPose {
    /// Compute the pose that points the beam from `sensor` at `angle`,
    /// correcting for the off-origin rotation pivot.
    pub fn aim(sensor: Point2<f64>, angle: f64, config: &TrackerConfig) -> Self {
        let corr_x = config.pivot_radius - config.pivot_radius * angle.cos();
        let corr_y = config.pivot_radius * angle.sin();
        Self {
            origin: Point2::new(
                sensor.x + config.anchor_offset - corr_x,
                sensor.y + config.anchor_offset + corr_y,
            ),
            angle,
        }
    }

    /// Rotation in degrees, for transform syntaxes that consume degrees.
    pub fn angle_degrees(&self) -> f64 {
        self.angle.to_degrees()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_zero_angle_applies_no_pivot_correction() {
        let config = TrackerConfig::default();
        let pose = BeamPose::aim(Point2::new(40.0, 60.0), 0.0, &config);
        assert_eq!(pose.origin, Point2::new(55.0, 75.0));
        assert_eq!(pose.angle_degrees(), 0.0);
    }

    #[test]
    fn test_quarter_turn_correction() {
        let config = TrackerConfig::default();
        let pose = BeamPose::aim(Point2::new(0.0, 0.0), FRAC_PI_2, &config);
        // cos = 0: the full pivot radius is subtracted on x; sin = 1 on y.
        assert_relative_eq!(pose.origin.x, 15.0 - 500.0, epsilon = 1e-9);
        assert_relative_eq!(pose.origin.y, 15.0 + 500.0, epsilon = 1e-9);
        assert!((pose.angle_degrees() - 90.0).abs() < 1e-9);
    }
}
