//! Field conversions from the wire format to domain types.
//!
//! The service sends monetary values as strings and timestamps in any
//! of three encodings. Each endpoint owns one normalization [`Rule`]
//! built from the helpers here; the rule receives the decoded body by
//! value, exactly once per call, and returns the finalized typed
//! result. Conversions fail loudly: a field holding something other
//! than its documented type is an error naming the field, never a
//! silent default.

use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde_json::{Map, Value};

use crate::errors::NormalizeError;

/// A normalization rule: owns the raw payload, returns the typed form.
pub type Rule<T> = fn(Value) -> Result<T, NormalizeError>;

/// Identity rule for endpoints documented without field conversions.
pub fn raw(value: Value) -> Result<Value, NormalizeError> {
    Ok(value)
}

/// The payload as a JSON object, or a [`NormalizeError::Shape`].
pub fn object(value: &Value) -> Result<&Map<String, Value>, NormalizeError> {
    value.as_object().ok_or_else(|| {
        NormalizeError::Shape(format!("expected an object, found {}", kind(value)))
    })
}

/// The payload as a JSON array, or a [`NormalizeError::Shape`].
pub fn array(value: Value) -> Result<Vec<Value>, NormalizeError> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(NormalizeError::Shape(format!(
            "expected an array, found {}",
            kind(&other)
        ))),
    }
}

/// Apply an element rule across an array payload.
pub fn list<T>(value: Value, rule: Rule<T>) -> Result<Vec<T>, NormalizeError> {
    array(value)?.into_iter().map(rule).collect()
}

/// A required monetary or amount field: a numeric string (the usual
/// wire form) or a bare JSON number, converted to [`Decimal`] exactly.
pub fn decimal(object: &Map<String, Value>, name: &'static str) -> Result<Decimal, NormalizeError> {
    decimal_value(field(object, name, "a decimal string")?, name)
}

/// A numeric field the service sends as JSON null when it has no value
/// yet. The field must still be present.
pub fn nullable_decimal(
    object: &Map<String, Value>,
    name: &'static str,
) -> Result<Option<Decimal>, NormalizeError> {
    match field(object, name, "a decimal string or null")? {
        Value::Null => Ok(None),
        value => decimal_value(value, name).map(Some),
    }
}

/// Decimal conversion for a value outside an object context, such as an
/// order book level. `name` labels the error.
pub fn decimal_value(value: &Value, name: &'static str) -> Result<Decimal, NormalizeError> {
    let parsed = match value {
        Value::String(s) => s.parse::<Decimal>(),
        Value::Number(n) => n.to_string().parse::<Decimal>(),
        _ => return Err(error(name, "a decimal string", value)),
    };
    parsed.map_err(|_| error(name, "a decimal string", value))
}

/// A required integer field, tolerating the quoted encoding.
pub fn integer(object: &Map<String, Value>, name: &'static str) -> Result<i64, NormalizeError> {
    let value = field(object, name, "an integer")?;
    match value {
        Value::Number(n) => n.as_i64().ok_or_else(|| error(name, "an integer", value)),
        Value::String(s) => s.parse().map_err(|_| error(name, "an integer", value)),
        _ => Err(error(name, "an integer", value)),
    }
}

/// A required string field.
pub fn string(object: &Map<String, Value>, name: &'static str) -> Result<String, NormalizeError> {
    match field(object, name, "a string")? {
        Value::String(s) => Ok(s.clone()),
        value => Err(error(name, "a string", value)),
    }
}

/// A string field that may be absent or null.
pub fn optional_string(
    object: &Map<String, Value>,
    name: &'static str,
) -> Result<Option<String>, NormalizeError> {
    match object.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(value) => Err(error(name, "a string", value)),
    }
}

/// An identifier field the service sends as either a bare number or a
/// string, depending on the endpoint. Absent and null mean no id.
pub fn id_string(
    object: &Map<String, Value>,
    name: &'static str,
) -> Result<Option<String>, NormalizeError> {
    match object.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(value) => Err(error(name, "an id", value)),
    }
}

/// An integer code field (order type, transaction type, withdrawal
/// status) that may be absent or null.
pub fn optional_code(
    object: &Map<String, Value>,
    name: &'static str,
) -> Result<Option<i64>, NormalizeError> {
    match object.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(_) => integer(object, name).map(Some),
    }
}

/// A required timestamp field run through [`parse_timestamp`].
pub fn datetime(
    object: &Map<String, Value>,
    name: &'static str,
) -> Result<Option<DateTime<Utc>>, NormalizeError> {
    parse_timestamp(field(object, name, "a timestamp")?)
}

/// Parse the service's timestamp encodings into a UTC date-time.
///
/// Three encodings appear in responses: Unix epoch seconds (a JSON
/// number or a numeric string), `YYYY-MM-DD HH:MM:SS.ffffff`, and
/// `YYYY-MM-DD HH:MM:SS`, tried in that order. JSON null and the empty
/// string mean "no timestamp" and parse to `None`; anything else is a
/// [`NormalizeError::Timestamp`].
pub fn parse_timestamp(value: &Value) -> Result<Option<DateTime<Utc>>, NormalizeError> {
    let text = match value {
        Value::Null => return Ok(None),
        Value::Number(n) => {
            let seconds = n
                .as_i64()
                .ok_or_else(|| NormalizeError::Timestamp(n.to_string()))?;
            return epoch(seconds, &n.to_string()).map(Some);
        }
        Value::String(s) => s,
        other => return Err(NormalizeError::Timestamp(kind(other))),
    };
    if text.is_empty() {
        return Ok(None);
    }
    if let Ok(seconds) = text.parse::<i64>() {
        return epoch(seconds, text).map(Some);
    }
    for format in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(Some(naive.and_utc()));
        }
    }
    Err(NormalizeError::Timestamp(format!("{text:?}")))
}

fn epoch(seconds: i64, input: &str) -> Result<DateTime<Utc>, NormalizeError> {
    DateTime::from_timestamp(seconds, 0).ok_or_else(|| NormalizeError::Timestamp(input.to_string()))
}

fn field<'a>(
    object: &'a Map<String, Value>,
    name: &'static str,
    expected: &'static str,
) -> Result<&'a Value, NormalizeError> {
    object.get(name).ok_or(NormalizeError::Field {
        field: name,
        expected,
        found: "missing field".to_string(),
    })
}

fn error(field: &'static str, expected: &'static str, found: &Value) -> NormalizeError {
    NormalizeError::Field {
        field,
        expected,
        found: kind(found),
    }
}

fn kind(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean {b}"),
        Value::Number(n) => format!("number {n}"),
        Value::String(s) => format!("string {s:?}"),
        Value::Array(_) => "an array".to_string(),
        Value::Object(_) => "an object".to_string(),
    }
}
