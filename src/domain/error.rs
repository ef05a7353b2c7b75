//! Domain layer error definitions.

use thiserror::Error;

/// Errors surfaced by the space payload accessors.
///
/// A missing field — or a missing record altogether — is not an error:
/// accessors report it as an absent value. Only values that are present
/// but unusable end up here. Errors bubble to the caller unhandled; this
/// layer performs no logging, retry, or default substitution.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// The `state` field does not name a known lifecycle state.
    ///
    /// Carries `None` when the field itself was absent: the state resolver
    /// is invoked unconditionally, so an absent state errors here instead
    /// of reading as a neutral value.
    #[error("unrecognized space lifecycle state (got: {0:?})")]
    UnrecognizedState(Option<String>),

    /// A timestamp field is present but not in the platform format.
    #[error("timestamp is not in the platform format (got: {value})")]
    TimestampInvalid {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// An element of an id list cannot be coerced to an integer.
    #[error("user id cannot be coerced to an integer (got: {value})")]
    UserIdInvalid { value: String },
}
