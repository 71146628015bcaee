//! Serde bridge for the API's epoch-millisecond timestamps.
//!
//! Domain bodies carry `created`/`updated` as integer milliseconds since the
//! Unix epoch; the model exposes them as `Option<DateTime<Utc>>`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Serialize `Option<DateTime<Utc>>` back to the wire's millisecond integers.
pub fn serialize<S>(dt: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match dt {
        Some(dt) => serializer.serialize_some(&dt.timestamp_millis()),
        None => serializer.serialize_none(),
    }
}

/// Deserialize millisecond integers (or `null`) into `Option<DateTime<Utc>>`.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Option::<i64>::deserialize(deserializer)? {
        Some(millis) => DateTime::from_timestamp_millis(millis)
            .map(Some)
            .ok_or_else(|| Error::custom(format!("epoch milliseconds out of range: {millis}"))),
        None => Ok(None),
    }
}
