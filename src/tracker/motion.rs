//! Finite-difference motion estimation from irregularly-sampled positions.

use nalgebra::{Point2, Vector2};

/// Kinematic state of the tracked sensor, updated per sample.
///
/// Velocity and acceleration are derived by finite differences over
/// consecutive samples. Acceleration divides by the mean of the current and
/// previous `dt`, which smooths jitter from irregular sampling intervals.
///
/// Both derivatives stay at zero until enough samples have been observed:
/// velocity needs two, acceleration three.
#[derive(Debug, Clone)]
pub struct MotionState {
    position: Point2<f64>,
    velocity: Vector2<f64>,
    acceleration: Vector2<f64>,
    last_sample_time: f64,
    last_dt: f64,
    intervals: u32,
}

impl MotionState {
    /// Create a new motion state anchored at `position`, observed at `time`
    /// (milliseconds).
    pub fn new(position: Point2<f64>, time: f64) -> Self {
        Self {
            position,
            velocity: Vector2::zeros(),
            acceleration: Vector2::zeros(),
            last_sample_time: time,
            last_dt: 0.0,
            intervals: 0,
        }
    }

    /// Ingest a new position sample.
    ///
    /// Samples with `dt <= 0` (duplicate or out-of-order timestamps) move the
    /// position and the clock but leave the derivative estimates unchanged,
    /// so the state never holds `NaN` or infinite components.
    pub fn update(&mut self, position: Point2<f64>, time: f64) {
        let dt = time - self.last_sample_time;
        if dt <= 0.0 {
            self.position = position;
            self.last_sample_time = time;
            return;
        }

        let velocity = (position - self.position) / dt;
        if self.intervals >= 1 {
            let averaged_dt = 0.5 * (dt + self.last_dt);
            self.acceleration = (velocity - self.velocity) / averaged_dt;
        }
        self.velocity = velocity;

        self.position = position;
        self.last_sample_time = time;
        self.last_dt = dt;
        self.intervals += 1;
    }

    /// Last observed position.
    pub fn position(&self) -> Point2<f64> {
        self.position
    }

    /// Estimated velocity in pixels per millisecond. Zero until two samples
    /// have been observed.
    pub fn velocity(&self) -> Vector2<f64> {
        self.velocity
    }

    /// Estimated acceleration in pixels per millisecond squared. Zero until
    /// three samples have been observed.
    pub fn acceleration(&self) -> Vector2<f64> {
        self.acceleration
    }

    /// Timestamp of the last ingested sample.
    pub fn last_sample_time(&self) -> f64 {
        self.last_sample_time
    }

    /// Elapsed time between the two most recent well-formed samples.
    pub fn last_dt(&self) -> f64 {
        self.last_dt
    }
}
