//! Input types for the tracker.

use nalgebra::Point2;

/// A single position observation from a pointer device.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Observed position in UI pixel units
    pub position: Point2<f64>,
    /// Timestamp in milliseconds
    pub time: f64,
}

impl Sample {
    pub fn new(x: f64, y: f64, time: f64) -> Self {
        Self {
            position: Point2::new(x, y),
            time,
        }
    }

    pub fn from_point(position: Point2<f64>, time: f64) -> Self {
        Self { position, time }
    }
}

/// Discrete pointer events driving the drag interaction.
///
/// Positions in `Press` and `Move` are cursor positions; the tracker applies
/// the grab offset captured at press time itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer pressed on the sensor
    Press(Sample),
    /// Pointer moved while captured
    Move(Sample),
    /// Pointer released
    Release {
        /// Timestamp in milliseconds
        time: f64,
    },
}

impl PointerEvent {
    /// Timestamp of the event in milliseconds.
    pub fn time(&self) -> f64 {
        match self {
            Self::Press(s) | Self::Move(s) => s.time,
            Self::Release { time } => *time,
        }
    }
}
