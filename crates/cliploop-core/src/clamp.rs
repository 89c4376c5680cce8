//! Playback clamping while repeat mode is active
//!
//! While the media plays inside an active repeat session, every animation
//! frame checks whether the clock escaped the range and where to seek back
//! to. The tolerance absorbs the one-frame lag between issuing a seek and
//! the media clock reflecting it; without it the frame right after a seek
//! would trigger another seek.

use crate::range::RepeatRange;
use crate::types::Seconds;

/// Clock drift tolerated on either side of the range before reseeking
pub const CLAMP_EPSILON: Seconds = 0.1;

/// Decide whether playback at `current` must loop back into the range.
///
/// Returns the seek target (always the range start) when the position has
/// escaped `[start - epsilon, end + epsilon]`, `None` otherwise.
pub fn clamp_action(current: Seconds, range: &RepeatRange, epsilon: Seconds) -> Option<Seconds> {
    if current < range.start() - epsilon || current > range.end() + epsilon {
        Some(range.start())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RepeatOptions;

    fn range(start: Seconds, end: Seconds) -> RepeatRange {
        let options = RepeatOptions {
            min_duration: 1.0,
            max_duration: 2.0,
        };
        let mut range = RepeatRange::create(start, 20.0, options).unwrap();
        range.resize_edge(crate::range::Edge::End, end, options, 20.0);
        range
    }

    #[test]
    fn test_inside_range_no_reseek() {
        let range = range(8.0, 9.9);
        assert_eq!(clamp_action(8.5, &range, CLAMP_EPSILON), None);
    }

    #[test]
    fn test_overflow_within_tolerance_no_reseek() {
        // One frame past the end is the lag of a just-issued seek
        let range = range(8.0, 9.9);
        assert_eq!(clamp_action(9.95, &range, CLAMP_EPSILON), None);
    }

    #[test]
    fn test_overflow_reseeks_to_range_start() {
        let range = range(8.0, 9.9);
        assert_eq!(clamp_action(10.2, &range, CLAMP_EPSILON), Some(8.0));
    }

    #[test]
    fn test_underflow_reseeks_to_range_start() {
        let range = range(8.0, 9.9);
        assert_eq!(clamp_action(7.5, &range, CLAMP_EPSILON), Some(8.0));
        assert_eq!(clamp_action(7.95, &range, CLAMP_EPSILON), None);
    }
}
