//! TrackingPipeline for combining pointer input with beam tracking.

use crate::tracker::{AngleEstimator, BeamPose, BeamTracker};

use super::SampleSource;

/// A combined tracker that bundles a pointer input backend with the beam
/// tracker.
///
/// This struct provides a convenient way to run end-to-end tracking by
/// combining any `SampleSource` with a `BeamTracker`.
pub struct TrackingPipeline<S: SampleSource, E: AngleEstimator> {
    source: S,
    tracker: BeamTracker<E>,
}

impl<S: SampleSource, E: AngleEstimator> TrackingPipeline<S, E> {
    /// Create a new tracking pipeline from an input backend and a tracker.
    pub fn new(source: S, tracker: BeamTracker<E>) -> Self {
        Self { source, tracker }
    }

    /// Process at most one pending pointer event.
    ///
    /// Returns the resulting beam pose when the event produced a sample,
    /// `None` when the source is idle or the event was dropped by the drag
    /// state machine.
    pub fn step(&mut self) -> Result<Option<BeamPose>, S::Error> {
        match self.source.next_event()? {
            Some(event) => Ok(self.tracker.handle_event(event)),
            None => Ok(None),
        }
    }

    /// Drain all pending pointer events.
    ///
    /// Returns the last beam pose produced, or `None` if no event yielded
    /// one.
    pub fn run(&mut self) -> Result<Option<BeamPose>, S::Error> {
        let mut last_pose = None;
        while let Some(event) = self.source.next_event()? {
            if let Some(pose) = self.tracker.handle_event(event) {
                last_pose = Some(pose);
            }
        }
        Ok(last_pose)
    }

    /// Get a reference to the underlying input backend.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Get a mutable reference to the underlying input backend.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Get a reference to the underlying tracker.
    pub fn tracker(&self) -> &BeamTracker<E> {
        &self.tracker
    }

    /// Get a mutable reference to the underlying tracker.
    pub fn tracker_mut(&mut self) -> &mut BeamTracker<E> {
        &mut self.tracker
    }
}
