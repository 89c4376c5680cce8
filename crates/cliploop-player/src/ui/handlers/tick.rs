//! Animation-frame tick handler
//!
//! Runs at ~60 fps while anything animates. Each tick:
//! - pauses the clock transport at the clip end (it does not stop itself)
//! - clamps playback into the repeat range while the clamp loop runs
//! - steps the auto-pan engine while a drag overshoots the viewport
//!
//! A mutation made here is visible to the next render and the next tick;
//! nothing blocks.

use iced::Task;

use cliploop_core::clamp::{clamp_action, CLAMP_EPSILON};
use cliploop_core::media::MediaTransport;
use cliploop_core::viewport::PanOutcome;

use crate::ui::app::PlayerApp;
use crate::ui::message::Message;

/// Handle the tick message
pub fn handle(app: &mut PlayerApp) -> Task<Message> {
    // End of clip outside repeat mode: stop the clock where a video
    // element would fire "ended"
    if !app.transport.paused() && !app.repeat.is_active() {
        if let Some(duration) = app.transport.duration() {
            if app.transport.current_time() >= duration {
                app.transport.pause();
                app.loops.clamp.cancel();
            }
        }
    }

    // Playback clamp: loop back inside the range while playing
    if app.loops.clamp.is_engaged() {
        if app.transport.paused() || !app.repeat.is_active() {
            // Self-terminates the moment the media stops playing
            app.loops.clamp.cancel();
        } else if let Some(active) = app.repeat.active() {
            let current = app.transport.current_time();
            if let Some(target) = clamp_action(current, &active.range, CLAMP_EPSILON) {
                log::trace!("playback clamp: {:.2} -> {:.2}", current, target);
                app.transport.seek(target);
            }
        }
    }

    // Auto-pan: shift the viewport one step while the drag overshoots it
    if app.loops.auto_pan.is_engaged() {
        let options = app.repeat.options();
        let media = app.transport.duration().unwrap_or(0.0);
        if let Some(active) = app.repeat.active_mut() {
            if app.auto_pan.step(active, options, media) == Some(PanOutcome::Truncated) {
                log::trace!("auto-pan reached the media bound");
            }
        }
    }

    Task::none()
}
