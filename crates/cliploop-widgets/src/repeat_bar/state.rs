//! Repeat bar display state
//!
//! A render-ready snapshot of the repeat session, rebuilt by the
//! application whenever it changes. The canvas program reads it for
//! drawing and hit-testing; it never mutates it.

use cliploop_core::drag::DragMode;
use cliploop_core::mapper;
use cliploop_core::range::{Edge, RepeatRange};
use cliploop_core::types::{RepeatOptions, Seconds};
use cliploop_core::viewport::Viewport;

use super::EDGE_HANDLE_WIDTH;

/// Snapshot of the repeat session consumed by the repeat bar canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RepeatBarState {
    pub range: RepeatRange,
    pub viewport: Viewport,
    pub options: RepeatOptions,
    pub media_duration: Seconds,
    /// Current playback position, drawn as a line when visible
    pub playhead: Seconds,
}

impl RepeatBarState {
    /// Horizontal pixel of a time value within a bar of `width` pixels
    pub fn time_to_x(&self, time: Seconds, width: f32) -> f32 {
        (mapper::time_to_fraction(time, &self.viewport) * f64::from(width)) as f32
    }

    /// What a pointer-down at local `x` grabs, if anything.
    ///
    /// Edge handles win over the body so a minimum-length range can still
    /// be resized; presses outside the range grab nothing.
    pub fn hit_test(&self, x: f32, width: f32) -> Option<DragMode> {
        let start_x = self.time_to_x(self.range.start(), width);
        let end_x = self.time_to_x(self.range.end(), width);

        if (x - start_x).abs() <= EDGE_HANDLE_WIDTH {
            Some(DragMode::Resize(Edge::Start))
        } else if (x - end_x).abs() <= EDGE_HANDLE_WIDTH {
            Some(DragMode::Resize(Edge::End))
        } else if x > start_x && x < end_x {
            Some(DragMode::Move)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // [10, 16] viewport, range [12, 13], 300 px bar: 50 px per second,
    // range body spans x = 100..150
    fn state() -> RepeatBarState {
        let options = RepeatOptions::default();
        let viewport = Viewport::around(60.0, 12.5, options);
        let range = RepeatRange::create(12.0, 60.0, options).unwrap();
        RepeatBarState {
            range,
            viewport,
            options,
            media_duration: 60.0,
            playhead: 12.0,
        }
    }

    #[test]
    fn test_time_to_x() {
        let state = state();
        assert!((state.time_to_x(10.0, 300.0) - 0.0).abs() < 1e-3);
        assert!((state.time_to_x(13.0, 300.0) - 150.0).abs() < 1e-3);
        assert!((state.time_to_x(16.0, 300.0) - 300.0).abs() < 1e-3);
    }

    #[test]
    fn test_hit_test_edges_win_over_body() {
        let state = state();
        assert_eq!(
            state.hit_test(100.0, 300.0),
            Some(DragMode::Resize(Edge::Start))
        );
        assert_eq!(
            state.hit_test(104.0, 300.0),
            Some(DragMode::Resize(Edge::Start))
        );
        assert_eq!(
            state.hit_test(148.0, 300.0),
            Some(DragMode::Resize(Edge::End))
        );
    }

    #[test]
    fn test_hit_test_body() {
        let state = state();
        assert_eq!(state.hit_test(125.0, 300.0), Some(DragMode::Move));
    }

    #[test]
    fn test_hit_test_outside_range() {
        let state = state();
        assert_eq!(state.hit_test(50.0, 300.0), None);
        assert_eq!(state.hit_test(250.0, 300.0), None);
    }
}
