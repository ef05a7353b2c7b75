//! Read-only view over a single Spaces API payload.

use std::fmt;

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::debug;

use super::error::SpaceError;
use super::state::SpaceState;
use crate::time::parse_platform_timestamp;

/// Read-only typed view over one decoded Spaces API response.
///
/// The view borrows the envelope instead of copying it, so the borrow
/// checker guarantees the payload cannot be mutated underneath it. Every
/// accessor reads the unwrapped record on demand; nothing is cached.
///
/// A payload with no usable `data` object still constructs. Every accessor
/// then reads as absent, indistinguishable from a missing field — there is
/// deliberately no separate "no record" error.
#[derive(Debug, Clone, Copy)]
pub struct SpaceView<'a> {
    envelope: &'a Value,
    record: Option<&'a Value>,
}

impl<'a> SpaceView<'a> {
    /// Wrap a decoded envelope shaped `{ "data": <object> | [<object>, ...], ... }`.
    ///
    /// When `data` is an array the record is its first element; otherwise
    /// the record is the `data` value itself. Construction never fails:
    /// missing or malformed `data` degrades to a record-less view, and any
    /// errors surface later from the accessors.
    pub fn new(envelope: &'a Value) -> Self {
        let record = match envelope.get("data") {
            Some(Value::Array(items)) => items.first(),
            other => other,
        };
        debug!(has_record = record.is_some(), "unwrapped space payload");
        Self { envelope, record }
    }

    /// The full envelope as received, for diagnostics.
    pub fn envelope(&self) -> &'a Value {
        self.envelope
    }

    /// The space record the accessors read, if the envelope carried one.
    pub fn record(&self) -> Option<&'a Value> {
        self.record
    }

    fn field(&self, key: &str) -> Option<&'a Value> {
        self.record.and_then(|record| record.get(key))
    }

    fn str_field(&self, key: &str) -> Option<&'a str> {
        self.field(key).and_then(Value::as_str)
    }

    /// The space's title.
    pub fn title(&self) -> Option<&'a str> {
        self.str_field("title")
    }

    /// The space's lifecycle state, as the raw wire string.
    pub fn state(&self) -> Option<&'a str> {
        self.str_field("state")
    }

    /// Resolve the `state` field into a [`SpaceState`].
    ///
    /// The raw value is handed to the resolver unconditionally: an absent
    /// `state` fails with [`SpaceError::UnrecognizedState`] carrying no
    /// value, it does not read as absent. Guarding it would silently turn
    /// an error into a null.
    pub fn state_type(&self) -> Result<SpaceState, SpaceError> {
        match self.state() {
            Some(raw) => raw.parse(),
            None => Err(SpaceError::UnrecognizedState(None)),
        }
    }

    /// The space's id, a string identifier.
    pub fn id(&self) -> Option<&'a str> {
        self.str_field("id")
    }

    /// The space's language tag.
    pub fn lang(&self) -> Option<&'a str> {
        self.str_field("lang")
    }

    /// The creator's id, as the raw string.
    ///
    /// Unlike [`hosts`](Self::hosts) and
    /// [`invited_users`](Self::invited_users) this is never coerced to an
    /// integer. The asymmetry is part of the accessor contract.
    pub fn creator_id(&self) -> Option<&'a str> {
        self.str_field("creator_id")
    }

    /// When the space was created.
    pub fn created_at(&self) -> Result<Option<DateTime<Utc>>, SpaceError> {
        parse_platform_timestamp(self.str_field("created_at"))
    }

    /// Ids of the space's hosts, coerced to integers.
    ///
    /// An empty `host_ids` array and an absent one collapse to the same
    /// `Ok(None)`; callers cannot tell them apart.
    pub fn hosts(&self) -> Result<Option<Vec<u64>>, SpaceError> {
        self.user_ids("host_ids")
    }

    /// Ids of the users invited to speak, coerced to integers.
    ///
    /// Same empty-vs-absent collapsing as [`hosts`](Self::hosts).
    pub fn invited_users(&self) -> Result<Option<Vec<u64>>, SpaceError> {
        self.user_ids("invited_users")
    }

    /// When the space started. Only present once the space has started.
    pub fn started_at(&self) -> Result<Option<DateTime<Utc>>, SpaceError> {
        parse_platform_timestamp(self.str_field("started_at"))
    }

    /// When the space's metadata was last updated.
    ///
    /// The response shape carries no `updated_at` key, so this reads
    /// `started_at` and always matches [`started_at`](Self::started_at).
    /// Kept as-is for compatibility with existing callers; revisit if the
    /// endpoint ever returns a real `updated_at` field.
    pub fn updated_at(&self) -> Result<Option<DateTime<Utc>>, SpaceError> {
        parse_platform_timestamp(self.str_field("started_at"))
    }

    /// Whether the space is ticketed, as stored in the payload.
    ///
    /// Not strictly boolean-typed at the source, so the raw value is
    /// returned and the caller decides how to read it.
    pub fn is_ticketed(&self) -> Option<&'a Value> {
        self.field("is_ticketed")
    }

    fn user_ids(&self, key: &str) -> Result<Option<Vec<u64>>, SpaceError> {
        let items = match self.field(key).and_then(Value::as_array) {
            Some(items) if !items.is_empty() => items,
            _ => return Ok(None),
        };
        let mut ids = Vec::with_capacity(items.len());
        for item in items {
            ids.push(coerce_user_id(item)?);
        }
        Ok(Some(ids))
    }
}

impl fmt::Display for SpaceView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Space(title:{:?} state:{:?} id:{:?} state_type:{:?})",
            self.title(),
            self.state(),
            self.id(),
            self.state_type().ok(),
        )
    }
}

fn coerce_user_id(value: &Value) -> Result<u64, SpaceError> {
    match value {
        Value::String(raw) => raw.parse().map_err(|_| SpaceError::UserIdInvalid {
            value: raw.clone(),
        }),
        Value::Number(n) => n.as_u64().ok_or_else(|| SpaceError::UserIdInvalid {
            value: n.to_string(),
        }),
        other => Err(SpaceError::UserIdInvalid {
            value: other.to_string(),
        }),
    }
}
