//! Trait for pointer input backends.

use crate::tracker::PointerEvent;

/// Trait for pointer input backends.
///
/// Implement this trait to connect any source of pointer events to the beam
/// tracker.
///
/// # Example
///
/// ```ignore
/// use beamtrack_rs::{PointerEvent, SampleSource};
///
/// struct MyEventQueue {
///     // Your windowing backend here
/// }
///
/// impl SampleSource for MyEventQueue {
///     type Error = std::io::Error;
///
///     fn next_event(&mut self) -> Result<Option<PointerEvent>, Self::Error> {
///         // Pull the next pending pointer event
///         Ok(None)
///     }
/// }
/// ```
pub trait SampleSource {
    /// Error type for input failures.
    type Error;

    /// Pull the next pending pointer event.
    ///
    /// Returns `Ok(None)` when no event is currently pending. Events must be
    /// delivered in the order the input device produced them.
    fn next_event(&mut self) -> Result<Option<PointerEvent>, Self::Error>;
}

/// Helper trait for converting backend-specific input records into events.
///
/// Implement this for your backend's event format to enable easy conversion.
pub trait IntoEvents {
    /// Convert the input into a vector of pointer events.
    fn into_events(self) -> Vec<PointerEvent>;
}

impl IntoEvents for Vec<PointerEvent> {
    fn into_events(self) -> Vec<PointerEvent> {
        self
    }
}
