//! Canvas Program for the repeat bar
//!
//! Implements the drag state machine: `Idle -> DraggingWhole |
//! DraggingEdge -> Idle`. The interaction state is one optional
//! [`DragSession`], created on pointer-down over the range and dropped on
//! pointer-up wherever the cursor is. iced keeps delivering mouse events
//! while the cursor is outside the widget, so a fast drag that leaves the
//! bar keeps tracking and the release is never missed.

use cliploop_core::drag::{DragMode, DragProposal, DragSession, PanDirection};
use cliploop_core::mapper;
use cliploop_core::range::RepeatRange;
use iced::widget::canvas::{self, Event, Frame, Geometry, Path, Program, Stroke};
use iced::{mouse, Point, Rectangle, Size, Theme};

use super::state::RepeatBarState;
use super::EDGE_HANDLE_WIDTH;
use crate::theme;

/// Events published by the repeat bar to the application
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RangeEvent {
    /// A drag started on the body or an edge handle; playback pauses here
    DragStarted(DragMode),
    /// Direct manipulation produced a new range; auto-pan (if any) stops
    Changed(RepeatRange),
    /// The drag crossed the visible edge; engage auto-pan
    PanRequested(DragMode, PanDirection),
    /// Pointer released; the drag is over regardless of where it ended
    DragEnded,
}

/// Canvas program rendering the repeat range and driving its drags
pub struct RepeatBarCanvas<'a, Message, F>
where
    F: Fn(RangeEvent) -> Message,
{
    pub state: &'a RepeatBarState,
    pub on_event: F,
}

impl<'a, Message, F> Program<Message> for RepeatBarCanvas<'a, Message, F>
where
    Message: Clone,
    F: Fn(RangeEvent) -> Message,
{
    type State = Option<DragSession>;

    fn update(
        &self,
        interaction: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                let mode = self.state.hit_test(position.x, bounds.width)?;
                *interaction = Some(DragSession::new(mode, position.x, self.state.range));
                log::trace!("repeat drag started: {:?}", mode);
                return Some(canvas::Action::publish((self.on_event)(
                    RangeEvent::DragStarted(mode),
                )));
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                // Release anywhere ends the drag, even outside the bar
                if interaction.take().is_some() {
                    log::trace!("repeat drag ended");
                    return Some(canvas::Action::publish((self.on_event)(
                        RangeEvent::DragEnded,
                    )));
                }
            }
            Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                let session = interaction.as_mut()?;
                let position = cursor.position()?;
                let x = position.x - bounds.x;

                if let Some(direction) = session.pan {
                    // Auto-pan owns the range until the pointer re-enters
                    // the viewport; then the drag re-anchors and resumes
                    // direct mapping without a jump.
                    let time = mapper::pixel_to_time(x, 0.0, bounds.width, &self.state.viewport);
                    if self.state.viewport.contains(time) {
                        session.rebase(x, self.state.range);
                    } else {
                        let now = if time < self.state.viewport.start() {
                            PanDirection::Left
                        } else {
                            PanDirection::Right
                        };
                        if now != direction {
                            session.pan = Some(now);
                            return Some(canvas::Action::publish((self.on_event)(
                                RangeEvent::PanRequested(session.mode, now),
                            )));
                        }
                    }
                    return None;
                }

                match session.propose(
                    x,
                    bounds.width,
                    &self.state.viewport,
                    self.state.options,
                    self.state.media_duration,
                ) {
                    DragProposal::Apply(range) if range != self.state.range => {
                        return Some(canvas::Action::publish((self.on_event)(
                            RangeEvent::Changed(range),
                        )));
                    }
                    DragProposal::Apply(_) => {}
                    DragProposal::Overshoot(direction) => {
                        session.pan = Some(direction);
                        return Some(canvas::Action::publish((self.on_event)(
                            RangeEvent::PanRequested(session.mode, direction),
                        )));
                    }
                }
            }
            _ => {}
        }

        None
    }

    fn mouse_interaction(
        &self,
        interaction: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if let Some(session) = interaction {
            return match session.mode {
                DragMode::Move => mouse::Interaction::Grabbing,
                DragMode::Resize(_) => mouse::Interaction::ResizingHorizontally,
            };
        }
        if let Some(position) = cursor.position_in(bounds) {
            match self.state.hit_test(position.x, bounds.width) {
                Some(DragMode::Move) => mouse::Interaction::Grab,
                Some(DragMode::Resize(_)) => mouse::Interaction::ResizingHorizontally,
                None => mouse::Interaction::default(),
            }
        } else {
            mouse::Interaction::default()
        }
    }

    fn draw(
        &self,
        _interaction: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let width = bounds.width;
        let height = bounds.height;

        frame.fill_rectangle(Point::ORIGIN, bounds.size(), theme::BAR_BACKGROUND);

        // Range body inside the viewport
        let start_x = self
            .state
            .time_to_x(self.state.range.start(), width)
            .clamp(0.0, width);
        let end_x = self
            .state
            .time_to_x(self.state.range.end(), width)
            .clamp(0.0, width);
        frame.fill_rectangle(
            Point::new(start_x, 0.0),
            Size::new(end_x - start_x, height),
            theme::RANGE_FILL,
        );

        // Edge handles at both ends of the range
        let handle = EDGE_HANDLE_WIDTH.min((end_x - start_x) / 2.0);
        frame.fill_rectangle(
            Point::new(start_x, 0.0),
            Size::new(handle, height),
            theme::RANGE_HANDLE,
        );
        frame.fill_rectangle(
            Point::new(end_x - handle, 0.0),
            Size::new(handle, height),
            theme::RANGE_HANDLE,
        );

        // Playhead line when it is inside the visible window
        if self.state.viewport.contains(self.state.playhead) {
            let playhead_x = self.state.time_to_x(self.state.playhead, width);
            frame.stroke(
                &Path::line(
                    Point::new(playhead_x, 0.0),
                    Point::new(playhead_x, height),
                ),
                Stroke::default().with_color(theme::PLAYHEAD).with_width(2.0),
            );
        }

        vec![frame.into_geometry()]
    }
}
