//! UI module for cliploop-player
//!
//! Built with iced. All state mutation happens in `update` on the UI
//! thread; the frame loops are subscriptions gated on explicit handles.

pub mod app;
pub mod handlers;
pub mod loops;
pub mod message;

pub use app::PlayerApp;
