use beamtrack_rs::{
    AccelerationAngle, BeamTracker, PositionAngle, ReplaySource, Sample, TrackerConfig,
    TrackingPipeline, VelocityAngle,
};
use nalgebra::Point2;

fn tracker<E: beamtrack_rs::AngleEstimator>(estimator: E) -> BeamTracker<E> {
    BeamTracker::new(
        estimator,
        TrackerConfig::default(),
        Point2::new(0.0, 0.0),
        Point2::new(100.0, 0.0),
        0.0,
    )
}

#[test]
fn test_basic_tracking() {
    // Replay a horizontal drag toward the target.
    let source = ReplaySource::from_trace(&[
        (0.0, 0.0, 10.0),
        (10.0, 0.0, 110.0),
        (20.0, 0.0, 210.0),
        (30.0, 0.0, 310.0),
    ]);
    let mut pipeline = TrackingPipeline::new(source, tracker(PositionAngle));

    let pose = pipeline.run().unwrap().expect("drag produced a pose");

    // The sensor followed the drag and the beam points straight right.
    assert_eq!(pipeline.tracker().motion().position(), Point2::new(30.0, 0.0));
    assert_eq!(pose.angle, 0.0);
    assert_eq!(pose.angle_degrees(), 0.0);

    // Constant drag speed: velocity settled at 0.1 px/ms, acceleration at 0.
    assert!((pipeline.tracker().motion().velocity().x - 0.1).abs() < 1e-12);
    assert!(pipeline.tracker().motion().acceleration().norm() < 1e-12);

    // After release the tracker is idle again and ignores stray moves.
    assert_eq!(
        pipeline.tracker().state(),
        beamtrack_rs::DragState::Idle
    );
    assert!(pipeline.run().unwrap().is_none());
}

#[test]
fn test_estimators_agree_on_a_stationary_sensor() {
    // Press and hold without moving: velocity and acceleration stay zero, so
    // all three strategies must produce the identical angle.
    let trace = [(0.0, 0.0, 10.0), (0.0, 0.0, 26.0), (0.0, 0.0, 42.0)];

    let mut angles = Vec::new();
    {
        let source = ReplaySource::from_trace(&trace);
        let mut pipeline = TrackingPipeline::new(source, tracker(PositionAngle));
        angles.push(pipeline.run().unwrap().unwrap().angle);
    }
    {
        let source = ReplaySource::from_trace(&trace);
        let mut pipeline = TrackingPipeline::new(source, tracker(VelocityAngle));
        angles.push(pipeline.run().unwrap().unwrap().angle);
    }
    {
        let source = ReplaySource::from_trace(&trace);
        let mut pipeline = TrackingPipeline::new(source, tracker(AccelerationAngle));
        angles.push(pipeline.run().unwrap().unwrap().angle);
    }

    assert_eq!(angles, vec![0.0, 0.0, 0.0]);
}

#[test]
fn test_direct_sample_feed() {
    // The raw SampleFeed path, bypassing the drag state machine.
    let mut tracker = tracker(VelocityAngle);

    tracker.update(Sample::new(10.0, 0.0, 100.0));
    let pose = tracker.update(Sample::new(20.0, 0.0, 200.0));

    // Moving along the target's row keeps the beam level.
    assert_eq!(pose.angle, 0.0);
    assert_eq!(tracker.motion().position(), Point2::new(20.0, 0.0));
}

#[test]
fn test_duplicate_timestamps_never_poison_the_estimate() {
    let mut tracker = tracker(AccelerationAngle);

    tracker.update(Sample::new(10.0, 5.0, 100.0));
    tracker.update(Sample::new(20.0, 10.0, 100.0));
    let pose = tracker.update(Sample::new(30.0, 15.0, 200.0));

    assert!(pose.angle.is_finite());
    assert!(pose.origin.x.is_finite());
    assert!(pose.origin.y.is_finite());
}
