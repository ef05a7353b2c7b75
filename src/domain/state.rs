//! Lifecycle states for a space.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::SpaceError;

/// Lifecycle phase of a space, as reported by the payload's `state` field.
///
/// The endpoint emits a closed set of lowercase strings. Anything outside
/// the set is an error, not a fallback variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpaceState {
    /// Announced but not yet started.
    Scheduled,
    /// Currently broadcasting.
    Live,
    /// Finished broadcasting.
    Ended,
}

impl SpaceState {
    /// Get the wire string for this state.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Live => "live",
            Self::Ended => "ended",
        }
    }
}

impl FromStr for SpaceState {
    type Err = SpaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(Self::Scheduled),
            "live" => Ok(Self::Live),
            "ended" => Ok(Self::Ended),
            other => Err(SpaceError::UnrecognizedState(Some(other.to_string()))),
        }
    }
}

impl fmt::Display for SpaceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_state_from_str_success() {
        // テスト項目: 既知のライフサイクル文字列を解決できる
        // given (前提条件):
        let raw = "live";

        // when (操作):
        let result: Result<SpaceState, SpaceError> = raw.parse();

        // then (期待する結果):
        assert_eq!(result, Ok(SpaceState::Live));
    }

    #[test]
    fn test_space_state_from_str_unrecognized_fails() {
        // テスト項目: 未知のライフサイクル文字列はエラーになる
        // given (前提条件):
        let raw = "bogus";

        // when (操作):
        let result: Result<SpaceState, SpaceError> = raw.parse();

        // then (期待する結果):
        assert_eq!(
            result,
            Err(SpaceError::UnrecognizedState(Some("bogus".to_string())))
        );
    }

    #[test]
    fn test_space_state_as_str() {
        // テスト項目: 各バリアントがワイヤ文字列を返す
        // then (期待する結果):
        assert_eq!(SpaceState::Scheduled.as_str(), "scheduled");
        assert_eq!(SpaceState::Live.as_str(), "live");
        assert_eq!(SpaceState::Ended.as_str(), "ended");
    }
}
