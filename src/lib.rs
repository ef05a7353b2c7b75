//! Typed read-only views over a social platform's "Spaces" (live audio
//! room) API payloads.
//!
//! This library wraps one decoded JSON response and exposes typed accessors
//! for each known field — dates parsed, id lists coerced to integers, the
//! lifecycle state resolved into an enum — so application code never reads
//! raw payload maps directly. It performs no I/O of its own: payloads
//! arrive pre-fetched from whatever client talked to the endpoint.

pub mod domain;
pub mod time;

// Re-export the payload-facing types
pub use domain::{SpaceError, SpaceState, SpaceView};
