//! Timestamp parsing for platform-formatted date strings.

use chrono::{DateTime, Utc};

use crate::domain::error::SpaceError;

/// Parse a platform timestamp string into a UTC datetime.
///
/// The platform formats timestamps as RFC 3339 (e.g.
/// `2021-06-01T10:00:00.000Z`). Absent input is not an error: the endpoint
/// omits timestamps the space has not reached yet (`started_at` before the
/// space starts), so `None` maps to `Ok(None)`. A string that is present
/// but does not match the format fails with
/// [`SpaceError::TimestampInvalid`].
pub fn parse_platform_timestamp(raw: Option<&str>) -> Result<Option<DateTime<Utc>>, SpaceError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let parsed =
        DateTime::parse_from_rfc3339(raw).map_err(|source| SpaceError::TimestampInvalid {
            value: raw.to_string(),
            source,
        })?;
    Ok(Some(parsed.with_timezone(&Utc)))
}
