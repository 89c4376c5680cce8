//! The repeat selection
//!
//! A `RepeatRange` is the `[start, end]` window playback loops over. Its
//! duration is clamped to the session's [`RepeatOptions`] and the whole
//! range stays inside `[0, media_duration]` after every mutation. A caller
//! that would leave either invariant broken is a programming error, checked
//! with `debug_assert!` rather than surfaced as a recoverable failure.

use crate::types::{RepeatOptions, Seconds};
use thiserror::Error;

/// Which edge of the range a resize drags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Start,
    End,
}

/// Recoverable failures of repeat-range operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RepeatError {
    /// Media metadata is missing, or the clip is shorter than the minimum
    /// range duration. Creation is refused and nothing is mutated.
    #[error("cannot create a repeat range: media duration is unknown or shorter than {min_duration} s")]
    InvalidDuration { min_duration: Seconds },
}

/// The user-selected repeat window on the media timeline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RepeatRange {
    start: Seconds,
    end: Seconds,
}

impl RepeatRange {
    /// Create a range anchored at the current playback position.
    ///
    /// The range starts at `anchor` with the minimum duration, shifted right
    /// if it would start before zero and left if it would end past the clip.
    /// Fails with [`RepeatError::InvalidDuration`] when the clip cannot hold
    /// a minimum-length range.
    pub fn create(
        anchor: Seconds,
        media_duration: Seconds,
        options: RepeatOptions,
    ) -> Result<Self, RepeatError> {
        if !media_duration.is_finite() || media_duration < options.min_duration {
            return Err(RepeatError::InvalidDuration {
                min_duration: options.min_duration,
            });
        }

        let mut start = anchor;
        let mut end = anchor + options.min_duration;
        if start < 0.0 {
            start = 0.0;
            end = options.min_duration;
        }
        if end > media_duration {
            start = media_duration - options.min_duration;
            end = media_duration;
        }

        let range = Self { start, end };
        range.assert_valid(options, media_duration);
        Ok(range)
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

    /// Whether `time` lies inside the range
    pub fn contains(&self, time: Seconds) -> bool {
        time >= self.start && time <= self.end
    }

    /// Move the whole range so it starts at `new_start`, clamped into the
    /// clip. The duration is preserved exactly; only the position moves.
    pub fn move_to(&mut self, new_start: Seconds, media_duration: Seconds) {
        let duration = self.duration();
        self.start = new_start.clamp(0.0, media_duration - duration);
        self.end = self.start + duration;
        debug_assert!(self.start >= 0.0 && self.end <= media_duration);
    }

    /// Resize by dragging one edge to `new_time` while the opposite edge
    /// stays fixed.
    ///
    /// The resulting duration is clamped into the option limits by adjusting
    /// the moving edge only. The whole range is then translated back into
    /// `[0, media_duration]` when the duration clamp alone left the moving
    /// edge outside the clip.
    pub fn resize_edge(
        &mut self,
        edge: Edge,
        new_time: Seconds,
        options: RepeatOptions,
        media_duration: Seconds,
    ) {
        match edge {
            Edge::Start => {
                let fixed = self.end;
                let duration = (fixed - new_time)
                    .clamp(options.min_duration, options.max_duration)
                    .min(media_duration);
                self.start = fixed - duration;
                self.end = fixed;
                if self.start < 0.0 {
                    self.start = 0.0;
                    self.end = duration;
                }
            }
            Edge::End => {
                let fixed = self.start;
                let duration = (new_time - fixed)
                    .clamp(options.min_duration, options.max_duration)
                    .min(media_duration);
                self.start = fixed;
                self.end = fixed + duration;
                if self.end > media_duration {
                    self.end = media_duration;
                    self.start = media_duration - duration;
                }
            }
        }
        self.assert_valid(options, media_duration);
    }

    fn assert_valid(&self, options: RepeatOptions, media_duration: Seconds) {
        debug_assert!(
            self.duration() >= options.min_duration - f64::EPSILON
                && self.duration() <= options.max_duration + f64::EPSILON,
            "range duration {} outside [{}, {}]",
            self.duration(),
            options.min_duration,
            options.max_duration
        );
        debug_assert!(
            self.start >= 0.0 && self.end <= media_duration,
            "range [{}, {}] outside media [0, {}]",
            self.start,
            self.end,
            media_duration
        );
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
    fn test_create_at_anchor() {
        let range = RepeatRange::create(3.0, 10.0, options()).unwrap();
        assert_eq!(range.start(), 3.0);
        assert_eq!(range.end(), 4.0);
    }

    #[test]
    fn test_create_clamps_left_near_clip_end() {
        // anchor + min overflows the clip, so the range shifts left
        let range = RepeatRange::create(9.5, 10.0, options()).unwrap();
        assert_eq!(range.start(), 8.0);
        assert_eq!(range.end(), 9.0);
    }

    #[test]
    fn test_create_clamps_negative_anchor() {
        let range = RepeatRange::create(-2.0, 10.0, options()).unwrap();
        assert_eq!(range.start(), 0.0);
        assert_eq!(range.end(), 1.0);
    }

    #[test]
    fn test_create_refuses_short_clip() {
        let err = RepeatRange::create(0.0, 0.5, options()).unwrap_err();
        assert_eq!(err, RepeatError::InvalidDuration { min_duration: 1.0 });
    }

    #[test]
    fn test_create_refuses_nan_duration() {
        assert!(RepeatRange::create(0.0, f64::NAN, options()).is_err());
    }

    #[test]
    fn test_move_to_preserves_duration() {
        let mut range = RepeatRange::create(2.0, 10.0, options()).unwrap();
        range.resize_edge(Edge::End, 3.5, options(), 10.0);
        let duration = range.duration();

        range.move_to(7.2, 10.0);
        assert!((range.duration() - duration).abs() < 1e-9);
        assert_eq!(range.start(), 7.2);

        range.move_to(100.0, 10.0);
        assert_eq!(range.end(), 10.0);
        assert!((range.duration() - duration).abs() < 1e-9);

        range.move_to(-5.0, 10.0);
        assert_eq!(range.start(), 0.0);
        assert!((range.duration() - duration).abs() < 1e-9);
    }

    #[test]
    fn test_resize_end_keeps_start_fixed() {
        let mut range = RepeatRange::create(4.0, 10.0, options()).unwrap();
        range.resize_edge(Edge::End, 5.7, options(), 10.0);
        assert_eq!(range.start(), 4.0);
        assert!((range.end() - 5.7).abs() < 1e-9);
    }

    #[test]
    fn test_resize_start_keeps_end_fixed() {
        let mut range = RepeatRange::create(4.0, 10.0, options()).unwrap();
        range.resize_edge(Edge::Start, 3.2, options(), 10.0);
        assert_eq!(range.end(), 5.0);
        assert!((range.start() - 3.2).abs() < 1e-9);
    }

    #[test]
    fn test_resize_clamps_duration_to_limits() {
        let mut range = RepeatRange::create(4.0, 10.0, options()).unwrap();

        // Dragging far left stops at max duration
        range.resize_edge(Edge::Start, 0.0, options(), 10.0);
        assert_eq!(range.end(), 5.0);
        assert_eq!(range.start(), 3.0);

        // Dragging past the fixed edge collapses to min duration
        range.resize_edge(Edge::Start, 9.0, options(), 10.0);
        assert_eq!(range.end(), 5.0);
        assert_eq!(range.start(), 4.0);
    }

    #[test]
    fn test_resize_translates_when_clamp_is_insufficient() {
        // End pinned at 0.5: max duration pulls start to -1.5, translation
        // then moves the whole range (including the fixed edge) into bounds.
        let mut range = RepeatRange::create(0.0, 10.0, options()).unwrap();
        range.resize_edge(Edge::End, 0.5, options(), 10.0);
        assert_eq!(range.start(), 0.0);
        assert_eq!(range.end(), 1.0);

        range.resize_edge(Edge::Start, -5.0, options(), 10.0);
        assert_eq!(range.start(), 0.0);
        assert_eq!(range.end(), 2.0);
    }
}
