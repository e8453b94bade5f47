//! Concrete report sources
//!
//! Two implementations of [`crate::source::ReportSource`]: a channel-backed
//! source fed by a live player integration, and a scripted source that
//! replays a fixed report sequence with optional pacing.

pub mod channel;
pub mod script;

pub use channel::ChannelSource;
pub use script::ScriptedSource;
