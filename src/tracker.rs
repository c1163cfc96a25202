mod beam;
mod beam_tracker;
mod drag_state;
mod estimator;
mod motion;
mod sample;

pub use beam::BeamPose;
pub use beam_tracker::{BeamTracker, TrackerConfig};
pub use drag_state::DragState;
pub use estimator::{AccelerationAngle, AngleEstimator, PositionAngle, VelocityAngle, bearing};
pub use motion::MotionState;
pub use sample::{PointerEvent, Sample};
