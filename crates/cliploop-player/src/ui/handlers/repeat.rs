//! Repeat message handler
//!
//! Creating and cancelling the repeat session, and applying the events
//! the repeat bar's drag state machine publishes.

use iced::Task;

use cliploop_core::drag::DragMode;
use cliploop_core::media::MediaTransport;
use cliploop_core::range::Edge;
use cliploop_widgets::RangeEvent;

use crate::ui::app::PlayerApp;
use crate::ui::message::Message;

/// Toggle repeat mode
pub fn toggle(app: &mut PlayerApp) -> Task<Message> {
    if app.repeat.is_active() {
        cancel(app);
        return Task::none();
    }

    let anchor = app.transport.current_time();
    match app.repeat.create(anchor, app.transport.duration()) {
        Ok(_) => {
            // Editing starts paused, same as every range drag
            app.transport.pause();
            app.loops.clamp.cancel();
            app.status.clear();
        }
        Err(e) => {
            log::warn!("repeat refused: {}", e);
            app.status = e.to_string();
        }
    }
    Task::none()
}

/// Leave repeat mode and release everything attached to it
fn cancel(app: &mut PlayerApp) {
    app.repeat.cancel();
    app.drag = None;
    app.auto_pan.disengage();
    app.loops.auto_pan.cancel();
    app.loops.clamp.cancel();
}

/// Apply one event from the repeat bar
pub fn range_event(app: &mut PlayerApp, event: RangeEvent) -> Task<Message> {
    match event {
        RangeEvent::DragStarted(mode) => {
            app.drag = Some(mode);
            // Pause for the drag; intentionally never auto-resumed
            if !app.transport.paused() {
                app.transport.pause();
                app.loops.clamp.cancel();
            }
        }
        RangeEvent::Changed(range) => {
            app.auto_pan.disengage();
            app.loops.auto_pan.cancel();
            if let Some(active) = app.repeat.active_mut() {
                active.range = range;
            }
            // Keep the playhead on the dragged part of the range
            let target = match app.drag {
                Some(DragMode::Resize(Edge::End)) => range.end(),
                _ => range.start(),
            };
            app.transport.seek(target);
        }
        RangeEvent::PanRequested(mode, direction) => {
            app.auto_pan.engage(mode, direction);
            app.loops.auto_pan.engage();
        }
        RangeEvent::DragEnded => {
            app.drag = None;
            app.auto_pan.disengage();
            app.loops.auto_pan.cancel();
        }
    }
    Task::none()
}
