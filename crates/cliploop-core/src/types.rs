//! Common types for Cliploop
//!
//! This module contains the fundamental time types used throughout the
//! repeat-range controller, plus the session-wide duration limits and the
//! timestamp formatting used by the player's labels.

use serde::{Deserialize, Serialize};

/// Time value in seconds on the media clock
pub type Seconds = f64;

/// Duration limits for the repeat range, fixed for the lifetime of a session
///
/// Loaded once from the player config; every range mutation is clamped so
/// that `min_duration <= end - start <= max_duration` holds afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepeatOptions {
    /// Smallest allowed range duration in seconds
    pub min_duration: Seconds,
    /// Largest allowed range duration in seconds
    pub max_duration: Seconds,
}

impl Default for RepeatOptions {
    fn default() -> Self {
        Self {
            min_duration: 1.0,
            max_duration: 2.0,
        }
    }
}

/// Format a time as `mm:ss.cc` (minutes, seconds, centiseconds)
///
/// Negative and non-finite inputs render as `00:00.00`.
pub fn format_timestamp(time: Seconds) -> String {
    let total = if time.is_finite() { time.max(0.0) } else { 0.0 };
    let minutes = (total / 60.0) as u64;
    let seconds = (total % 60.0) as u64;
    let centis = ((total * 100.0) as u64) % 100;
    format!("{:02}:{:02}.{:02}", minutes, seconds, centis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = RepeatOptions::default();
        assert_eq!(options.min_duration, 1.0);
        assert_eq!(options.max_duration, 2.0);
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(0.0), "00:00.00");
        assert_eq!(format_timestamp(9.5), "00:09.50");
        assert_eq!(format_timestamp(61.25), "01:01.25");
        assert_eq!(format_timestamp(600.0), "10:00.00");
    }

    #[test]
    fn test_format_timestamp_degenerate_inputs() {
        assert_eq!(format_timestamp(-3.0), "00:00.00");
        assert_eq!(format_timestamp(f64::NAN), "00:00.00");
    }
}
