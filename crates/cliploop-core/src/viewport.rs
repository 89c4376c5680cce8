//! Pannable view window over the media timeline
//!
//! The viewport is the slice of the clip that the repeat bar currently
//! shows. It is created when repeat-edit mode is entered and only ever
//! moves by panning; its width never changes after creation.

use crate::types::{RepeatOptions, Seconds};

/// Result of a pan request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanOutcome {
    /// The full delta was applied
    Applied,
    /// A media bound stopped the window short of the requested delta
    Truncated,
}

/// The visible time window of the repeat timeline
///
/// Invariant: `0 <= start < end <= media_duration`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    start: Seconds,
    end: Seconds,
}

impl Viewport {
    /// Window width as a multiple of the maximum range duration
    pub const WIDTH_FACTOR: f64 = 3.0;

    /// Create the window shown when repeat-edit mode is entered.
    ///
    /// Width is `min(WIDTH_FACTOR * max_duration, media_duration)`, centered
    /// on the midpoint of a freshly created range (`anchor + min_duration/2`)
    /// and then shifted so the window lies inside `[0, media_duration]`.
    pub fn around(media_duration: Seconds, anchor: Seconds, options: RepeatOptions) -> Self {
        let width = (Self::WIDTH_FACTOR * options.max_duration).min(media_duration);
        let center = anchor + options.min_duration / 2.0;
        let mut start = center - width / 2.0;
        let mut end = center + width / 2.0;
        if start < 0.0 {
            end -= start;
            start = 0.0;
        }
        if end > media_duration {
            start -= end - media_duration;
            end = media_duration;
        }
        let start = start.max(0.0);
        debug_assert!(start < end && end <= media_duration);
        Self { start, end }
    }

    pub fn start(&self) -> Seconds {
        self.start
    }

    pub fn end(&self) -> Seconds {
        self.end
    }

    pub fn duration(&self) -> Seconds {
        self.end - self.start
    }

    /// Whether `time` lies inside the visible window
    pub fn contains(&self, time: Seconds) -> bool {
        time >= self.start && time <= self.end
    }

    /// Translate the window by `delta` seconds, clamped to the media bounds.
    ///
    /// The width never changes. Returns [`PanOutcome::Truncated`] when a
    /// bound stopped the window short of the request; the auto-pan engine
    /// uses that to stop panning in the blocked direction.
    pub fn pan_by(&mut self, delta: Seconds, media_duration: Seconds) -> PanOutcome {
        let width = self.duration();
        let requested = self.start + delta;
        let clamped = requested.clamp(0.0, media_duration - width);
        self.start = clamped;
        self.end = clamped + width;
        if (clamped - requested).abs() > f64::EPSILON {
            PanOutcome::Truncated
        } else {
            PanOutcome::Applied
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> RepeatOptions {
        RepeatOptions {
            min_duration: 1.0,
            max_duration: 2.0,
        }
    }

    #[test]
    fn test_around_clamps_left_bound() {
        // Raw center at anchor + min/2 would put the window start below zero
        let viewport = Viewport::around(60.0, 1.0, options());
        assert_eq!(viewport.start(), 0.0);
        assert_eq!(viewport.end(), 6.0);
    }

    #[test]
    fn test_around_clamps_right_bound() {
        let viewport = Viewport::around(10.0, 9.0, options());
        assert_eq!(viewport.end(), 10.0);
        assert_eq!(viewport.start(), 4.0);
    }

    #[test]
    fn test_around_short_clip_spans_whole_media() {
        // Width would be 6 s but the clip is only 4 s long
        let viewport = Viewport::around(4.0, 2.0, options());
        assert_eq!(viewport.start(), 0.0);
        assert_eq!(viewport.end(), 4.0);
    }

    #[test]
    fn test_pan_by_keeps_width() {
        let mut viewport = Viewport::around(60.0, 20.0, options());
        let width = viewport.duration();
        assert_eq!(viewport.pan_by(3.5, 60.0), PanOutcome::Applied);
        assert!((viewport.duration() - width).abs() < 1e-9);
    }

    #[test]
    fn test_pan_by_truncates_at_media_start() {
        let mut viewport = Viewport::around(60.0, 10.0, options());
        assert_eq!(viewport.pan_by(-100.0, 60.0), PanOutcome::Truncated);
        assert_eq!(viewport.start(), 0.0);
        assert_eq!(viewport.end(), 6.0);
        // Further requests in the blocked direction are no-ops
        assert_eq!(viewport.pan_by(-0.05, 60.0), PanOutcome::Truncated);
        assert_eq!(viewport.start(), 0.0);
    }

    #[test]
    fn test_pan_by_truncates_at_media_end() {
        let mut viewport = Viewport::around(60.0, 55.0, options());
        assert_eq!(viewport.pan_by(20.0, 60.0), PanOutcome::Truncated);
        assert_eq!(viewport.end(), 60.0);
    }
}
