//! Application messages for cliploop-player

use cliploop_widgets::{RangeEvent, ScrubEvent};
use iced::keyboard::Key;

/// Messages that can be sent to the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Animation-frame tick driving auto-pan, playback clamp, and redraw
    Tick,
    /// Toggle play/pause
    TogglePlay,
    /// Pause and return to the repeat start (or the clip start)
    Stop,
    /// Toggle audio mute
    ToggleMute,
    /// Jump by signed seconds
    Skip(f64),
    /// Toggle repeat mode on/off
    ToggleRepeat,
    /// Seek bar scrub gesture
    Scrub(ScrubEvent),
    /// Repeat bar drag event
    Range(RangeEvent),
    /// Raw key press, routed through config-aware handling
    KeyPressed(Key),
}
