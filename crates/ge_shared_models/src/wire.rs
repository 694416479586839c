//! Helpers for the loosely typed JSON both item services return.

use crate::Error;
use serde::Deserialize;
use serde::de::{DeserializeOwned, Error as _};
use serde_json::Value;
use std::borrow::Cow;

/// A JSON scalar read as text, whatever type the service chose to send.
///
/// The services are inconsistent: ids, prices and flags show up as strings
/// in one response and as numbers or booleans in the next.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl Scalar {
    pub fn from_value(field: &str, value: &Value) -> Result<Self, Error> {
        Scalar::deserialize(value)
            .map_err(|_| Error::format(format!("field `{field}` is not a scalar: {value}")))
    }

    pub fn text(&self) -> Cow<'_, str> {
        match self {
            Scalar::Text(text) => Cow::Borrowed(text),
            Scalar::Integer(number) => Cow::Owned(number.to_string()),
            Scalar::Float(number) => Cow::Owned(number.to_string()),
            Scalar::Bool(flag) => Cow::Owned(flag.to_string()),
        }
    }

    pub fn to_id(&self, field: &str) -> Result<i32, Error> {
        match self {
            Scalar::Integer(number) => i32::try_from(*number)
                .map_err(|_| Error::format(format!("field `{field}` out of range: {number}"))),
            other => other
                .text()
                .trim()
                .parse::<i32>()
                .map_err(|e| Error::format(format!("field `{field}` is not an integer: {e}"))),
        }
    }

    /// `true` only for a boolean true or the text "true" in any case.
    pub fn to_bool(&self) -> bool {
        match self {
            Scalar::Bool(flag) => *flag,
            other => other.text().eq_ignore_ascii_case("true"),
        }
    }
}

/// Deserializes the first JSON value in `body`, ignoring anything after it.
pub fn first_value<T: DeserializeOwned>(body: &[u8]) -> serde_json::Result<T> {
    serde_json::Deserializer::from_slice(body)
        .into_iter::<T>()
        .next()
        .unwrap_or_else(|| Err(serde_json::Error::custom("empty response body")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_any_scalar_as_text() {
        assert_eq!(Scalar::from_value("id", &json!("1042")).unwrap().text(), "1042");
        assert_eq!(Scalar::from_value("id", &json!(1042)).unwrap().text(), "1042");
        assert_eq!(Scalar::from_value("m", &json!(true)).unwrap().text(), "true");
        assert!(Scalar::from_value("x", &json!({"a": 1})).is_err());
        assert!(Scalar::from_value("x", &Value::Null).is_err());
    }

    #[test]
    fn ids_from_numbers_and_text() {
        assert_eq!(Scalar::Integer(995).to_id("id"), Ok(995));
        assert_eq!(Scalar::Text("995".into()).to_id("id"), Ok(995));
        assert!(Scalar::Text("abc".into()).to_id("id").is_err());
        assert!(Scalar::Integer(i64::MAX).to_id("id").is_err());
    }

    #[test]
    fn booleans_from_text() {
        assert!(Scalar::Text("TRUE".into()).to_bool());
        assert!(Scalar::Bool(true).to_bool());
        assert!(!Scalar::Text("yes".into()).to_bool());
        assert!(!Scalar::Integer(1).to_bool());
    }

    #[test]
    fn stops_after_first_value() {
        let value: Value = first_value(br#"{"a": 1} trailing garbage"#).unwrap();
        assert_eq!(value, json!({"a": 1}));
        assert!(first_value::<Value>(b"").is_err());
        assert!(first_value::<Value>(b"   ").is_err());
    }
}
