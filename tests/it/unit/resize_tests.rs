//! Unit tests for the resize gesture tracker.

use crate::helpers::id;
use gridboard::input::{ResizeCommit, ResizeGesture};
use gridboard::{PixelPoint, PixelSize};

#[test]
fn test_commit_scenario() {
    let mut gesture = ResizeGesture::default();
    gesture.start(id("X"), PixelPoint::new(100.0, 100.0), PixelSize::new(100.0, 100.0));
    gesture.pointer_moved(PixelPoint::new(200.0, 120.0));
    gesture.pointer_moved(PixelPoint::new(250.0, 150.0));

    assert_eq!(
        gesture.end(),
        Some(ResizeCommit {
            item_id: id("X"),
            size: PixelSize::new(250.0, 150.0),
        })
    );
}

#[test]
fn test_restart_replaces_gesture() {
    let mut gesture = ResizeGesture::default();
    gesture.start(id("a"), PixelPoint::default(), PixelSize::new(100.0, 100.0));
    gesture.pointer_moved(PixelPoint::new(40.0, 40.0));
    gesture.start(id("b"), PixelPoint::new(10.0, 10.0), PixelSize::new(50.0, 50.0));

    assert!(gesture.is_resizing(&id("b")));
    assert_eq!(gesture.live_size(), Some(PixelSize::new(50.0, 50.0)));
}

#[test]
fn test_end_twice_commits_once() {
    let mut gesture = ResizeGesture::default();
    gesture.start(id("a"), PixelPoint::default(), PixelSize::new(100.0, 100.0));
    assert!(gesture.end().is_some());
    assert!(gesture.end().is_none());
}

#[test]
fn test_zero_width_does_not_commit() {
    let mut gesture = ResizeGesture::default();
    gesture.start(id("a"), PixelPoint::new(100.0, 0.0), PixelSize::new(100.0, 100.0));
    gesture.pointer_moved(PixelPoint::new(0.0, 0.0));
    assert_eq!(gesture.live_size(), Some(PixelSize::new(0.0, 100.0)));
    assert!(gesture.end().is_none());
}
