//! Full-clip progress bar with click/drag scrubbing
//!
//! Spans the whole media duration (not the repeat viewport). Pressing
//! anywhere seeks, dragging keeps seeking, and the application pauses
//! playback for the duration of the scrub.

use iced::widget::canvas::{self, Canvas, Event, Frame, Geometry, Path, Program, Stroke};
use iced::{mouse, Element, Length, Point, Rectangle, Size, Theme};

use crate::theme;

/// Height of the seek bar in pixels
pub const SEEK_BAR_HEIGHT: f32 = 18.0;

/// Scrub gesture events published to the application
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrubEvent {
    /// Pointer pressed at the given clip fraction; pause and seek here
    Started(f64),
    /// Pointer dragged to a new clip fraction; keep seeking
    Moved(f64),
    /// Pointer released; restore the pre-scrub play state
    Ended,
}

/// Seek bar display state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeekBarState {
    /// Elapsed fraction of the clip (0.0 to 1.0)
    pub fraction: f64,
    /// False before media metadata is known; the bar ignores input then
    pub enabled: bool,
}

/// Canvas state tracking an in-progress scrub
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrubInteraction {
    pub is_scrubbing: bool,
}

/// Canvas program for the seek bar
pub struct SeekBarCanvas<'a, Message, F>
where
    F: Fn(ScrubEvent) -> Message,
{
    pub state: &'a SeekBarState,
    pub on_scrub: F,
}

impl<'a, Message, F> Program<Message> for SeekBarCanvas<'a, Message, F>
where
    Message: Clone,
    F: Fn(ScrubEvent) -> Message,
{
    type State = ScrubInteraction;

    fn update(
        &self,
        interaction: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        if !self.state.enabled {
            return None;
        }

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                interaction.is_scrubbing = true;
                let fraction = f64::from((position.x / bounds.width).clamp(0.0, 1.0));
                return Some(canvas::Action::publish((self.on_scrub)(
                    ScrubEvent::Started(fraction),
                )));
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                // Release anywhere ends the scrub
                if interaction.is_scrubbing {
                    interaction.is_scrubbing = false;
                    return Some(canvas::Action::publish((self.on_scrub)(ScrubEvent::Ended)));
                }
            }
            Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                if interaction.is_scrubbing {
                    let position = cursor.position()?;
                    let x = position.x - bounds.x;
                    let fraction = f64::from((x / bounds.width).clamp(0.0, 1.0));
                    return Some(canvas::Action::publish((self.on_scrub)(ScrubEvent::Moved(
                        fraction,
                    ))));
                }
            }
            _ => {}
        }

        None
    }

    fn mouse_interaction(
        &self,
        _interaction: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.state.enabled && cursor.is_over(bounds) {
            mouse::Interaction::Pointer
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

        let background = if self.state.enabled {
            theme::BAR_BACKGROUND
        } else {
            theme::BAR_DISABLED
        };
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), background);

        if self.state.enabled {
            let progress_x = (self.state.fraction.clamp(0.0, 1.0) * f64::from(width)) as f32;
            frame.fill_rectangle(
                Point::ORIGIN,
                Size::new(progress_x, height),
                theme::PROGRESS_FILL,
            );
            frame.stroke(
                &Path::line(
                    Point::new(progress_x, 0.0),
                    Point::new(progress_x, height),
                ),
                Stroke::default().with_color(theme::PLAYHEAD).with_width(2.0),
            );
        }

        vec![frame.into_geometry()]
    }
}

/// Create the seek bar element
pub fn seek_bar<'a, Message>(
    state: &'a SeekBarState,
    on_scrub: impl Fn(ScrubEvent) -> Message + 'a,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    Canvas::new(SeekBarCanvas { state, on_scrub })
        .width(Length::Fill)
        .height(Length::Fixed(SEEK_BAR_HEIGHT))
        .into()
}
