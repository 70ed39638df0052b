//! # Activity Bus - Host/Plugin Communication Contract
//!
//! Implements the boundary between a hosted activity surface and its
//! enclosing platform as an explicit request/response channel.
//!
//! ## Contract Rules
//!
//! - **No shared references:** surfaces and host exchange messages only;
//!   neither side holds an object reference into the other.
//! - **One-shot replies:** every dispatched event carries a correlation id
//!   and a reply slot the host fires exactly once, with either a result or
//!   an error. Exactly-once is enforced by move semantics on [`Responder`].
//! - **No cancellation:** once dispatched, the plugin has no means to
//!   withdraw an event; the host is the sole arbiter of when the reply fires.
//!
//! ## Shape
//!
//! ```text
//! ┌──────────────┐                      ┌──────────────┐
//! │   Surface    │  dispatch(event)     │     Host     │
//! │ (plugin side)│ ───────────────────► │ (recv + reply)│
//! │              │ ◄─ ─ ─ ─ ─ ─ ─ ─ ─ ─ │              │
//! └──────────────┘   ReplyHandle        └──────────────┘
//! ```

pub mod channel;
pub mod contract;
pub mod events;

// Re-export main types
pub use channel::{
    request_channel, DispatchError, Envelope, IncomingRequest, ReplyHandle, RequestReceiver,
    RequestSender, RequestStream, Responder,
};
pub use contract::{ActivityChannels, HostEndpoint, PluginEndpoint};
pub use events::{EventPayload, HostError, ModelUpdated, SaveReceipt, Submission};

/// Maximum requests to buffer toward the host before dispatch fails.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 16;
