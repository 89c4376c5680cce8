//! Transport message handler
//!
//! Play/pause, stop, mute, skip, keyboard shortcuts, and seek-bar
//! scrubbing. While repeat mode is active, skip targets are clamped into
//! the range so the buttons cannot escape the loop.

use iced::keyboard::key::Named;
use iced::keyboard::Key;
use iced::Task;

use cliploop_core::media::MediaTransport;
use cliploop_widgets::ScrubEvent;

use crate::ui::app::PlayerApp;
use crate::ui::message::Message;

/// Toggle play/pause
pub fn toggle_play(app: &mut PlayerApp) -> Task<Message> {
    if app.transport.paused() {
        match app.transport.play() {
            Ok(()) => {
                app.status.clear();
                if app.repeat.is_active() {
                    app.loops.clamp.engage();
                }
            }
            Err(e) => {
                log::warn!("play refused: {}", e);
                app.status = e.to_string();
            }
        }
    } else {
        app.transport.pause();
        app.loops.clamp.cancel();
    }
    Task::none()
}

/// Pause and return to the repeat start, or the clip start
pub fn stop(app: &mut PlayerApp) -> Task<Message> {
    app.transport.pause();
    app.loops.clamp.cancel();
    let target = app
        .repeat
        .active()
        .map(|active| active.range.start())
        .unwrap_or(0.0);
    app.transport.seek(target);
    Task::none()
}

pub fn toggle_mute(app: &mut PlayerApp) -> Task<Message> {
    let muted = app.transport.muted();
    app.transport.set_muted(!muted);
    Task::none()
}

/// Jump by signed seconds; the landing time stays inside an active range
pub fn skip(app: &mut PlayerApp, delta: f64) -> Task<Message> {
    let mut target = app.transport.current_time() + delta;
    if let Some(active) = app.repeat.active() {
        target = target.clamp(active.range.start(), active.range.end());
    }
    app.transport.seek(target);
    Task::none()
}

/// Seek bar scrub: pause for the gesture, restore play state on release
pub fn scrub(app: &mut PlayerApp, event: ScrubEvent) -> Task<Message> {
    match event {
        ScrubEvent::Started(fraction) => {
            app.resume_after_scrub = !app.transport.paused();
            app.transport.pause();
            app.loops.clamp.cancel();
            seek_fraction(app, fraction);
        }
        ScrubEvent::Moved(fraction) => {
            seek_fraction(app, fraction);
        }
        ScrubEvent::Ended => {
            if app.resume_after_scrub {
                app.resume_after_scrub = false;
                return toggle_play(app);
            }
        }
    }
    Task::none()
}

fn seek_fraction(app: &mut PlayerApp, fraction: f64) {
    if let Some(duration) = app.transport.duration() {
        app.transport.seek(fraction * duration);
    }
}

/// Keyboard shortcuts: arrows skip, Space/Enter toggles playback
pub fn key_pressed(app: &mut PlayerApp, key: Key) -> Task<Message> {
    let step = app.config.transport.skip_seconds;
    match key {
        Key::Named(Named::ArrowRight) => skip(app, step),
        Key::Named(Named::ArrowLeft) => skip(app, -step),
        Key::Named(Named::Space) | Key::Named(Named::Enter) => toggle_play(app),
        _ => Task::none(),
    }
}
