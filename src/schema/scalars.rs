/// The `Date` scalar
///
/// On the wire a `Date` is an integer holding milliseconds since the Unix
/// epoch. Internally it is a `chrono::DateTime<Utc>`.

use async_graphql::dynamic::Scalar;
use async_graphql::Value;
use chrono::{DateTime, Utc};

pub const DATE: &str = "Date";

/// Create the Date scalar
///
/// Integer inputs must name a representable instant. Any other input kind is
/// let through and decodes to an absent value.
pub fn date_scalar() -> Scalar {
    Scalar::new(DATE)
        .description("Date custom scalar type")
        .validator(|value| !matches!(value, Value::Number(_)) || parse_value(value).is_some())
}

/// Convert an outgoing date to epoch milliseconds
pub fn serialize(date: &DateTime<Utc>) -> Value {
    Value::Number(date.timestamp_millis().into())
}

/// Convert a client-supplied value (usually a variable) to a date.
///
/// Accepts epoch milliseconds as an integer; anything else yields `None`.
pub fn parse_value(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        _ => None,
    }
}

/// Convert a literal written in a query document to a date.
///
/// Only integer literals are accepted; anything else yields `None`.
pub fn parse_literal(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        _ => None,
    }
}
