//! Kinematic beam-pointing tracker.
//!
//! A draggable sensor is tracked through irregularly-sampled pointer input;
//! a beam is rotated to face a fixed target using finite-difference motion
//! estimates (position, velocity, or acceleration extrapolation).
//!
//! The crate is split into a pure kinematic core ([`tracker`]) and an
//! [`integration`] layer that connects pointer input backends to it.

pub mod integration;
pub mod tracker;

pub use integration::{ReplaySource, SampleBuilder, SampleSource, TrackingPipeline};
pub use tracker::{
    AccelerationAngle, AngleEstimator, BeamPose, BeamTracker, DragState, MotionState,
    PointerEvent, PositionAngle, Sample, TrackerConfig, VelocityAngle,
};
