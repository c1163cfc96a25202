//! Main beam tracker: drag interaction, motion estimation, beam pose output.

use nalgebra::{Point2, Vector2};

use crate::tracker::beam::BeamPose;
use crate::tracker::drag_state::DragState;
use crate::tracker::estimator::AngleEstimator;
use crate::tracker::motion::MotionState;
use crate::tracker::sample::{PointerEvent, Sample};

/// Configuration for the beam tracker.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Distance from the beam element's origin to its rotation pivot
    pub pivot_radius: f64,
    /// Offset from the sensor's top-left corner to the beam anchor point
    pub anchor_offset: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            pivot_radius: 500.0,
            anchor_offset: 15.0,
        }
    }
}

/// Tracks a draggable sensor and keeps the beam pointed at a fixed target.
///
/// The tracker owns the sensor's [`MotionState`] and a drag state machine.
/// Pointer events are fed through [`handle_event`](Self::handle_event); each
/// processed sample yields the [`BeamPose`] the rendering layer should apply.
/// Callers that own their interaction model can bypass the state machine and
/// feed samples directly through [`update`](Self::update).
pub struct BeamTracker<E: AngleEstimator> {
    motion: MotionState,
    target: Point2<f64>,
    estimator: E,
    state: DragState,
    grab_offset: Vector2<f64>,
    config: TrackerConfig,
}

impl<E: AngleEstimator> BeamTracker<E> {
    /// Create a tracker with the sensor at `sensor` and the target fixed at
    /// `target`, both observed at `time` (milliseconds).
    pub fn new(
        estimator: E,
        config: TrackerConfig,
        sensor: Point2<f64>,
        target: Point2<f64>,
        time: f64,
    ) -> Self {
        Self {
            motion: MotionState::new(sensor, time),
            target,
            estimator,
            state: DragState::Idle,
            grab_offset: Vector2::zeros(),
            config,
        }
    }

    /// Process one pointer event through the drag state machine.
    ///
    /// Returns the new beam pose when the event produced a sample, `None`
    /// otherwise. Events that do not fit the current state (a move or release
    /// while idle, a second press while dragging) are dropped.
    pub fn handle_event(&mut self, event: PointerEvent) -> Option<BeamPose> {
        match (self.state, event) {
            (DragState::Idle, PointerEvent::Press(sample)) => {
                // Anchor the sensor under the cursor for the whole drag.
                self.grab_offset = self.motion.position() - sample.position;
                self.state = DragState::Dragging;
                // Re-sample in place so the first move doesn't see the full
                // idle period as its dt.
                let position = self.motion.position();
                Some(self.track(Sample::from_point(position, sample.time)))
            }
            (DragState::Dragging, PointerEvent::Move(sample)) => Some(self.track(
                Sample::from_point(sample.position + self.grab_offset, sample.time),
            )),
            (DragState::Dragging, PointerEvent::Release { .. }) => {
                self.state = DragState::Idle;
                None
            }
            _ => None,
        }
    }

    /// Ingest a raw position sample, bypassing the drag state machine.
    pub fn update(&mut self, sample: Sample) -> BeamPose {
        self.track(sample)
    }

    fn track(&mut self, sample: Sample) -> BeamPose {
        self.motion.update(sample.position, sample.time);
        let angle = self
            .estimator
            .estimate(&self.motion, self.target, self.motion.last_dt());
        BeamPose::aim(self.motion.position(), angle, &self.config)
    }

    /// Current motion estimate of the sensor.
    pub fn motion(&self) -> &MotionState {
        &self.motion
    }

    /// The fixed target position.
    pub fn target(&self) -> Point2<f64> {
        self.target
    }

    /// Current drag state.
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Tracker configuration.
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }
}
