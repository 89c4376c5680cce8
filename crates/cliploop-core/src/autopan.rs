//! Fixed-increment viewport panning during an out-of-bounds drag
//!
//! When a drag proposal crosses the visible window, direct mapping stops
//! and this engine takes over: each animation frame it pans the viewport
//! one step in the overshoot direction and glues the dragged part of the
//! range to the viewport edge. Panning stops at the media bound while the
//! glue keeps holding the range against the now-fixed window.

use crate::drag::{DragMode, PanDirection};
use crate::session::ActiveRepeat;
use crate::types::{RepeatOptions, Seconds};
use crate::viewport::PanOutcome;

/// Seconds the viewport shifts per animation frame while auto-panning
pub const AUTO_PAN_STEP: Seconds = 0.05;

/// Auto-pan engine state, owned by the player session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AutoPan {
    engaged: Option<(DragMode, PanDirection)>,
}

impl AutoPan {
    /// Engage for an overshooting drag. Re-engaging with a new direction
    /// replaces the old one.
    pub fn engage(&mut self, mode: DragMode, direction: PanDirection) {
        self.engaged = Some((mode, direction));
    }

    /// Disengage; a no-op when the engine is already idle.
    pub fn disengage(&mut self) {
        self.engaged = None;
    }

    pub fn is_engaged(&self) -> bool {
        self.engaged.is_some()
    }

    /// One animation frame: pan the viewport one step and re-glue the range.
    ///
    /// Returns `None` when the engine is idle. [`PanOutcome::Truncated`]
    /// means the media bound was reached; the viewport stays put from then
    /// on, but the glue below still clamps the range against it.
    pub fn step(
        &self,
        active: &mut ActiveRepeat,
        options: RepeatOptions,
        media_duration: Seconds,
    ) -> Option<PanOutcome> {
        let (mode, direction) = self.engaged?;

        let delta = match direction {
            PanDirection::Left => -AUTO_PAN_STEP,
            PanDirection::Right => AUTO_PAN_STEP,
        };
        let outcome = active.viewport.pan_by(delta, media_duration);

        let glue_time = match direction {
            PanDirection::Left => active.viewport.start(),
            PanDirection::Right => active.viewport.end(),
        };
        match mode {
            DragMode::Move => {
                let start = match direction {
                    PanDirection::Left => glue_time,
                    PanDirection::Right => glue_time - active.range.duration(),
                };
                active.range.move_to(start, media_duration);
            }
            DragMode::Resize(edge) => {
                active.range.resize_edge(edge, glue_time, options, media_duration);
            }
        }

        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::Edge;
    use crate::session::RepeatSession;
    use crate::types::RepeatOptions;

    fn session_at(anchor: Seconds, media: Seconds) -> RepeatSession {
        let mut session = RepeatSession::new(RepeatOptions::default());
        session.create(anchor, Some(media)).unwrap();
        session
    }

    #[test]
    fn test_step_idle_is_noop() {
        let mut session = session_at(12.0, 60.0);
        let engine = AutoPan::default();
        let before = *session.active().unwrap();
        assert_eq!(
            engine.step(session.active_mut().unwrap(), RepeatOptions::default(), 60.0),
            None
        );
        assert_eq!(*session.active().unwrap(), before);
    }

    #[test]
    fn test_disengage_is_idempotent() {
        let mut engine = AutoPan::default();
        engine.disengage();
        engine.engage(DragMode::Move, PanDirection::Left);
        engine.disengage();
        engine.disengage();
        assert!(!engine.is_engaged());
    }

    #[test]
    fn test_step_pans_and_glues_move() {
        let mut session = session_at(30.0, 60.0);
        let mut engine = AutoPan::default();
        engine.engage(DragMode::Move, PanDirection::Right);

        let active = session.active_mut().unwrap();
        let viewport_end = active.viewport.end();
        let duration = active.range.duration();

        let outcome = engine.step(active, RepeatOptions::default(), 60.0);
        assert_eq!(outcome, Some(PanOutcome::Applied));
        assert!((active.viewport.end() - (viewport_end + AUTO_PAN_STEP)).abs() < 1e-9);
        assert!((active.range.end() - active.viewport.end()).abs() < 1e-9);
        assert!((active.range.duration() - duration).abs() < 1e-9);
    }

    #[test]
    fn test_step_pins_range_at_media_start() {
        // Drag the start edge left until the viewport hits the clip start:
        // panning truncates, the range start stays pinned at zero.
        let mut session = session_at(1.0, 60.0);
        let mut engine = AutoPan::default();
        engine.engage(DragMode::Resize(Edge::Start), PanDirection::Left);

        let active = session.active_mut().unwrap();
        for _ in 0..100 {
            engine.step(active, RepeatOptions::default(), 60.0);
        }
        assert_eq!(active.viewport.start(), 0.0);
        assert_eq!(
            engine.step(active, RepeatOptions::default(), 60.0),
            Some(PanOutcome::Truncated)
        );
        assert_eq!(active.range.start(), 0.0);
        assert_eq!(active.viewport.start(), 0.0);
    }
}
