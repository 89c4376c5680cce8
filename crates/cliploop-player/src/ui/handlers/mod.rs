//! Message handlers for PlayerApp
//!
//! Each handler module is responsible for a specific category of messages.
//! Handlers receive `&mut PlayerApp` and return `Task<Message>`.

pub mod repeat;
pub mod tick;
pub mod transport;
