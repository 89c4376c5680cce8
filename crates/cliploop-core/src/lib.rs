//! Cliploop Core - repeat-range timeline model shared by the widgets and the player

pub mod autopan;
pub mod clamp;
pub mod drag;
pub mod mapper;
pub mod media;
pub mod range;
pub mod session;
pub mod types;
pub mod viewport;

pub use types::*;
