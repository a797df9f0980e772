//! Feed provider implementations

pub mod channel;
pub mod scripted;
