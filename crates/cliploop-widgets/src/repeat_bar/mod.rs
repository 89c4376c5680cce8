//! Repeat-range editor bar
//!
//! Renders the active repeat range inside its viewport and turns pointer
//! input into range edits: dragging the body moves the whole range,
//! dragging an edge handle resizes it, and a drag that leaves the visible
//! window hands off to the application's auto-pan engine.

mod canvas;
mod state;

pub use canvas::{RangeEvent, RepeatBarCanvas};
pub use state::RepeatBarState;

use iced::widget::Canvas;
use iced::{Element, Length};

/// Height of the repeat bar in pixels
pub const REPEAT_BAR_HEIGHT: f32 = 28.0;

/// Pointer distance (px) from a range edge that still grabs the handle
pub const EDGE_HANDLE_WIDTH: f32 = 6.0;

/// Create the repeat bar element.
///
/// `on_event` receives every [`RangeEvent`] the drag state machine
/// publishes; the application applies them to its repeat session.
pub fn repeat_bar<'a, Message>(
    state: &'a RepeatBarState,
    on_event: impl Fn(RangeEvent) -> Message + 'a,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    Canvas::new(RepeatBarCanvas { state, on_event })
        .width(Length::Fill)
        .height(Length::Fixed(REPEAT_BAR_HEIGHT))
        .into()
}
