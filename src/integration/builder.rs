//! Builder for creating samples from backend coordinate conventions.

use nalgebra::Vector2;

use crate::tracker::Sample;

/// Builder for creating [`Sample`]s from the coordinate conventions input
/// backends actually deliver.
#[derive(Debug, Clone, Default)]
pub struct SampleBuilder {
    x: f64,
    y: f64,
    time: f64,
}

impl SampleBuilder {
    /// Create a new sample builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an absolute position in UI pixel units.
    pub fn position(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Set a position from client/viewport coordinates and the page origin
    /// of the tracked surface.
    pub fn client(mut self, x: f64, y: f64, page_origin: Vector2<f64>) -> Self {
        self.x = x - page_origin.x;
        self.y = y - page_origin.y;
        self
    }

    /// Set the timestamp in milliseconds.
    pub fn timestamp(mut self, time: f64) -> Self {
        self.time = time;
        self
    }

    /// Build the final [`Sample`].
    pub fn build(self) -> Sample {
        Sample::new(self.x, self.y, self.time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_builder() {
        let sample = SampleBuilder::new()
            .position(10.0, 20.0)
            .timestamp(150.0)
            .build();

        assert_eq!(sample.position.x, 10.0);
        assert_eq!(sample.position.y, 20.0);
        assert_eq!(sample.time, 150.0);
    }

    #[test]
    fn test_client_coordinates_subtract_page_origin() {
        let sample = SampleBuilder::new()
            .client(110.0, 220.0, Vector2::new(100.0, 200.0))
            .timestamp(150.0)
            .build();

        assert_eq!(sample.position.x, 10.0);
        assert_eq!(sample.position.y, 20.0);
    }
}
