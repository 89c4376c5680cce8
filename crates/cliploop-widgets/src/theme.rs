//! Shared theme constants for cliploop UI components
//!
//! Color scheme used by the repeat bar and seek bar canvases.

use iced::Color;

/// Bar background (both seek and repeat bars)
pub const BAR_BACKGROUND: Color = Color::from_rgb(0.10, 0.10, 0.12);

/// Fill of the elapsed part of the seek bar
pub const PROGRESS_FILL: Color = Color::from_rgb(0.30, 0.55, 0.95);

/// Fill of the repeat range body
pub const RANGE_FILL: Color = Color::from_rgba(0.30, 0.55, 0.95, 0.45);

/// Edge handles of the repeat range
pub const RANGE_HANDLE: Color = Color::from_rgb(0.55, 0.75, 1.0);

/// Playhead line
pub const PLAYHEAD: Color = Color::from_rgb(1.0, 1.0, 1.0);

/// Seek bar when no media is loaded
pub const BAR_DISABLED: Color = Color::from_rgb(0.16, 0.16, 0.18);
