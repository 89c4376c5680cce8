//! Contract with the media collaborator
//!
//! The repeat controller never talks to a concrete video element; it sees
//! the small surface below. The player ships a wall-clock implementation
//! ([`ClockTransport`] in `cliploop-player`), tests use scripted stubs.

use crate::types::Seconds;
use thiserror::Error;

/// Failure starting playback
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlaybackError {
    /// No media metadata yet; there is nothing to play
    #[error("media is not ready to play")]
    NotReady,
    /// The collaborator refused to start playback
    #[error("playback rejected: {0}")]
    Rejected(String),
}

/// A media element as the repeat controller sees it
pub trait MediaTransport {
    /// Current playback position on the media clock
    fn current_time(&self) -> Seconds;

    /// Clip length; `None` before metadata has loaded
    fn duration(&self) -> Option<Seconds>;

    fn paused(&self) -> bool;

    fn play(&mut self) -> Result<(), PlaybackError>;

    fn pause(&mut self);

    /// Move the clock; the collaborator clamps into `[0, duration]`
    fn seek(&mut self, time: Seconds);

    fn muted(&self) -> bool;

    fn set_muted(&mut self, muted: bool);
}
