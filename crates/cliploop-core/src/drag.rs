//! Drag-session state for direct manipulation of the repeat range
//!
//! A [`DragSession`] is created on pointer-down over the range body or one
//! of its edge handles and dropped on pointer-up; it never outlives one
//! press-to-release interaction. Pointer motion is folded into a proposal
//! by [`DragSession::propose`]: either a new range to apply directly, or an
//! overshoot signal when the proposal crosses the visible window and the
//! viewport has to pan instead.

use crate::mapper;
use crate::range::{Edge, RepeatRange};
use crate::types::{RepeatOptions, Seconds};
use crate::viewport::Viewport;

/// What a pointer-down grabbed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    /// The range body; the whole range moves, duration preserved
    Move,
    /// An edge handle; the opposite edge stays fixed
    Resize(Edge),
}

/// Direction the viewport pans while a drag overshoots it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanDirection {
    Left,
    Right,
}

/// Outcome of folding a pointer position into a drag session
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragProposal {
    /// The drag stays inside the viewport; apply this range directly
    Apply(RepeatRange),
    /// The proposal crossed the visible edge; engage auto-pan instead
    Overshoot(PanDirection),
}

/// Transient state of one pointer-down -> pointer-up interaction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub mode: DragMode,
    /// Pointer x at pointer-down, in the bar's local coordinate space
    pub anchor_x: f32,
    /// Range bounds at pointer-down (or at the last re-anchor after a pan)
    pub anchor_range: RepeatRange,
    /// Pan direction while the drag is out of bounds, `None` otherwise
    pub pan: Option<PanDirection>,
}

impl DragSession {
    pub fn new(mode: DragMode, anchor_x: f32, anchor_range: RepeatRange) -> Self {
        Self {
            mode,
            anchor_x,
            anchor_range,
            pan: None,
        }
    }

    /// Re-anchor after auto-pan released: motion is measured from the
    /// current pointer position and range again, so the range does not jump
    /// when direct mapping resumes.
    pub fn rebase(&mut self, anchor_x: f32, anchor_range: RepeatRange) {
        self.anchor_x = anchor_x;
        self.anchor_range = anchor_range;
        self.pan = None;
    }

    /// Fold the current pointer position into a proposed range.
    ///
    /// The pixel delta since the anchor is converted to a time delta
    /// through the *current* viewport; a proposal that would extend past
    /// the visible window is reported as an overshoot instead of a range.
    pub fn propose(
        &self,
        pointer_x: f32,
        element_width: f32,
        viewport: &Viewport,
        options: RepeatOptions,
        media_duration: Seconds,
    ) -> DragProposal {
        let delta = mapper::pixel_to_time(pointer_x, 0.0, element_width, viewport)
            - mapper::pixel_to_time(self.anchor_x, 0.0, element_width, viewport);

        match self.mode {
            DragMode::Move => {
                let start = self.anchor_range.start() + delta;
                let end = start + self.anchor_range.duration();
                if start < viewport.start() {
                    return DragProposal::Overshoot(PanDirection::Left);
                }
                if end > viewport.end() {
                    return DragProposal::Overshoot(PanDirection::Right);
                }
                let mut range = self.anchor_range;
                range.move_to(start, media_duration);
                DragProposal::Apply(range)
            }
            DragMode::Resize(edge) => {
                let anchor_edge = match edge {
                    Edge::Start => self.anchor_range.start(),
                    Edge::End => self.anchor_range.end(),
                };
                let target = anchor_edge + delta;
                if target < viewport.start() {
                    return DragProposal::Overshoot(PanDirection::Left);
                }
                if target > viewport.end() {
                    return DragProposal::Overshoot(PanDirection::Right);
                }
                let mut range = self.anchor_range;
                range.resize_edge(edge, target, options, media_duration);
                DragProposal::Apply(range)
            }
        }
    }
}
