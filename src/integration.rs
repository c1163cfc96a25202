//! Integration module for connecting pointer input backends with the tracker.
//!
//! This module provides traits and utilities for feeding pointer events from
//! any input backend (UI toolkit, recorded trace, test mock) into the beam
//! tracker.

mod builder;
mod pipeline;
mod replay;
mod source;

pub use builder::SampleBuilder;
pub use pipeline::TrackingPipeline;
pub use replay::{ReplayError, ReplaySource};
pub use source::{IntoEvents, SampleSource};
