//! iced widgets for the cliploop player timeline
//!
//! This crate provides the two canvas widgets of the player and the theme
//! constants they share.
//!
//! ## Architecture (iced 0.14 patterns)
//!
//! - **State structs**: pure data snapshots ([`RepeatBarState`],
//!   [`SeekBarState`]) built by the application each frame
//! - **View functions**: take state + callbacks, return `Element<Message>`
//! - **Canvas Programs**: handle custom rendering and event-to-callback
//!   translation; the repeat bar's `Program` is the drag state machine
//!
//! ## Widgets
//!
//! - `repeat_bar`: the repeat-range editor (move/resize by direct
//!   manipulation, auto-pan handoff when a drag leaves the viewport)
//! - `seek_bar`: full-clip progress bar with click/drag scrubbing

pub mod repeat_bar;
pub mod seek_bar;
pub mod theme;

pub use repeat_bar::{
    repeat_bar, RangeEvent, RepeatBarCanvas, RepeatBarState, EDGE_HANDLE_WIDTH,
    REPEAT_BAR_HEIGHT,
};
pub use seek_bar::{seek_bar, ScrubEvent, SeekBarCanvas, SeekBarState, SEEK_BAR_HEIGHT};
