//! Replay backend that feeds a recorded drag trace to the tracker.

use std::collections::VecDeque;

use thiserror::Error;

use crate::tracker::{PointerEvent, Sample};

use super::{SampleBuilder, SampleSource};

/// Error type for replay failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReplayError {
    /// A queued event carries an earlier timestamp than the one before it.
    #[error("timestamp went backwards: {now} after {last}")]
    NonMonotonicTimestamp { last: f64, now: f64 },
}

/// Pointer input backend that replays a queue of recorded events.
///
/// Timestamps are validated on the way out: a trace whose clock runs
/// backwards is malformed input from the recording side, not a degenerate
/// sample the kinematic core should silently absorb.
#[derive(Debug, Clone, Default)]
pub struct ReplaySource {
    events: VecDeque<PointerEvent>,
    last_time: Option<f64>,
}

impl ReplaySource {
    /// Create an empty replay source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a full drag from `(x, y, time)` triples: a press at the first
    /// triple, moves for the rest, and a release at the final timestamp.
    ///
    /// An empty trace produces an empty source.
    pub fn from_trace(trace: &[(f64, f64, f64)]) -> Self {
        fn sample(x: f64, y: f64, time: f64) -> Sample {
            SampleBuilder::new().position(x, y).timestamp(time).build()
        }

        let mut source = Self::new();
        let mut triples = trace.iter();
        if let Some(&(x, y, time)) = triples.next() {
            source.push(PointerEvent::Press(sample(x, y, time)));
            let mut last_time = time;
            for &(x, y, time) in triples {
                source.push(PointerEvent::Move(sample(x, y, time)));
                last_time = time;
            }
            source.push(PointerEvent::Release { time: last_time });
        }
        source
    }

    /// Append an event to the replay queue.
    pub fn push(&mut self, event: PointerEvent) {
        self.events.push_back(event);
    }

    /// Number of events still queued.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the queue has been drained.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl SampleSource for ReplaySource {
    type Error = ReplayError;

    fn next_event(&mut self) -> Result<Option<PointerEvent>, Self::Error> {
        let Some(event) = self.events.pop_front() else {
            return Ok(None);
        };

        let now = event.time();
        if let Some(last) = self.last_time {
            if now < last {
                return Err(ReplayError::NonMonotonicTimestamp { last, now });
            }
        }
        self.last_time = Some(now);

        Ok(Some(event))
    }
}
