//! Wall-clock media collaborator
//!
//! Stands in for a real video element: a monotonic clock advances the
//! playback position while playing, and `seek` moves it with the same
//! clamping contract an HTML video element applies to `currentTime`.
//! Decoding and rendering are out of scope; everything the repeat
//! controller needs is the clock, the duration, and the paused flag.

use std::time::Instant;

use cliploop_core::media::{MediaTransport, PlaybackError};
use cliploop_core::types::Seconds;

/// Media transport driven by the system monotonic clock
#[derive(Debug, Clone)]
pub struct ClockTransport {
    duration: Option<Seconds>,
    /// Position when playback last started or the clock last paused/seeked
    base_position: Seconds,
    /// Set while playing; elapsed time since then is added to the base
    playing_since: Option<Instant>,
    muted: bool,
}

impl ClockTransport {
    /// Create a transport for a clip of the given length.
    ///
    /// `None` models a clip whose metadata has not loaded: the transport
    /// reports no duration and refuses to play.
    pub fn new(duration: Option<Seconds>) -> Self {
        Self {
            duration: duration.filter(|d| d.is_finite() && *d > 0.0),
            base_position: 0.0,
            playing_since: None,
            muted: false,
        }
    }

    fn clamp(&self, time: Seconds) -> Seconds {
        match self.duration {
            Some(duration) => time.clamp(0.0, duration),
            None => 0.0,
        }
    }
}

impl MediaTransport for ClockTransport {
    fn current_time(&self) -> Seconds {
        let elapsed = self
            .playing_since
            .map(|since| since.elapsed().as_secs_f64())
            .unwrap_or(0.0);
        self.clamp(self.base_position + elapsed)
    }

    fn duration(&self) -> Option<Seconds> {
        self.duration
    }

    fn paused(&self) -> bool {
        self.playing_since.is_none()
    }

    fn play(&mut self) -> Result<(), PlaybackError> {
        if self.duration.is_none() {
            return Err(PlaybackError::NotReady);
        }
        if self.playing_since.is_none() {
            self.playing_since = Some(Instant::now());
        }
        Ok(())
    }

    fn pause(&mut self) {
        // Fold the elapsed play time into the base before stopping the clock
        self.base_position = self.current_time();
        self.playing_since = None;
    }

    fn seek(&mut self, time: Seconds) {
        self.base_position = self.clamp(time);
        if self.playing_since.is_some() {
            self.playing_since = Some(Instant::now());
        }
    }

    fn muted(&self) -> bool {
        self.muted
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }
}
