//! Conversion between [`Value`] and `serde_json::Value`.
//!
//! JSON has no binary, UUID, date or URI types, so on output they become
//! strings:
//! - binary → `"data:base64,<padded base64>"`
//! - uuid → lowercase `8-4-4-4-12` hex
//! - date → `YYYY-MM-DDTHH:MM:SSZ`
//! - uri → the bare URI text
//!
//! On input every string is run through [`sniff_string`], which recovers
//! binary, uuid and date values from those shapes. URIs cannot be told
//! apart from ordinary text and come back as strings.

use serde_json::{Map as JsonMap, Number, Value as JsonValue};
use tracing::{debug, trace};

use super::error::JsonError;
use crate::options::ParseOptions;
use crate::types::{parse_canonical_uuid, Date};
use crate::value::{Map, Value};

/// Prefix marking a string as base64-encoded binary.
pub const BINARY_PREFIX: &str = "data:base64,";

/// A string recovery rule: returns the richer value when `s` has its shape.
type RecoveryRule = fn(&str) -> Option<Value>;

/// Recovery rules in precedence order; the first match wins.
const RECOVERY_CHAIN: &[(&str, RecoveryRule)] = &[
    ("binary", recover_binary as RecoveryRule),
    ("uuid", recover_uuid as RecoveryRule),
    ("date", recover_date as RecoveryRule),
];

fn recover_binary(s: &str) -> Option<Value> {
    s.strip_prefix(BINARY_PREFIX)
        .map(|encoded| Value::Binary(llsd_base64::from_base64(encoded)))
}

fn recover_uuid(s: &str) -> Option<Value> {
    parse_canonical_uuid(s).map(Value::Uuid)
}

fn recover_date(s: &str) -> Option<Value> {
    Date::parse_canonical(s).map(Value::Date)
}

/// Classifies a JSON string, falling back to a plain string.
pub fn sniff_string(s: String) -> Value {
    for (name, rule) in RECOVERY_CHAIN {
        if let Some(value) = rule(&s) {
            trace!(rule = *name, len = s.len(), "recovered typed value from json string");
            return value;
        }
    }
    Value::String(s)
}

/// Converts a value to a JSON tree. Map keys come out sorted.
pub fn to_json(value: &Value) -> JsonValue {
    match value {
        Value::Undefined => JsonValue::Null,
        Value::Boolean(b) => JsonValue::Bool(*b),
        Value::Integer(i) => JsonValue::from(*i),
        // NaN and infinities have no JSON spelling.
        Value::Real(r) => Number::from_f64(*r).map_or(JsonValue::Null, JsonValue::Number),
        Value::String(s) => JsonValue::String(s.clone()),
        Value::Uuid(u) => JsonValue::String(u.hyphenated().to_string()),
        Value::Date(d) => JsonValue::String(d.to_canonical_string()),
        Value::Uri(u) => JsonValue::String(u.as_str().to_owned()),
        Value::Binary(b) => {
            JsonValue::String(format!("{}{}", BINARY_PREFIX, llsd_base64::to_base64(b)))
        }
        Value::Array(arr) => JsonValue::Array(arr.iter().map(to_json).collect()),
        Value::Map(map) => JsonValue::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), to_json(v)))
                .collect::<JsonMap<String, JsonValue>>(),
        ),
    }
}

/// Converts a JSON tree to a value, recovering typed strings.
pub fn from_json(json: JsonValue) -> Result<Value, JsonError> {
    from_json_with_options(json, ParseOptions::default())
}

pub fn from_json_with_options(json: JsonValue, options: ParseOptions) -> Result<Value, JsonError> {
    convert(json, &options, 0)
}

fn convert(json: JsonValue, options: &ParseOptions, depth: usize) -> Result<Value, JsonError> {
    match json {
        JsonValue::Null => Ok(Value::Undefined),
        JsonValue::Bool(b) => Ok(Value::Boolean(b)),
        JsonValue::Number(n) => convert_number(&n, options),
        JsonValue::String(s) => Ok(sniff_string(s)),
        JsonValue::Array(arr) => {
            let depth = enter(options, depth)?;
            arr.into_iter()
                .map(|item| convert(item, options, depth))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array)
        }
        JsonValue::Object(obj) => {
            let depth = enter(options, depth)?;
            obj.into_iter()
                .map(|(k, v)| Ok((k, convert(v, options, depth)?)))
                .collect::<Result<Map, JsonError>>()
                .map(Value::Map)
        }
    }
}

fn enter(options: &ParseOptions, depth: usize) -> Result<usize, JsonError> {
    let depth = depth + 1;
    if options.allows_depth(depth) {
        Ok(depth)
    } else {
        Err(JsonError::DepthLimitExceeded {
            limit: options.max_depth.unwrap_or_default(),
        })
    }
}

/// Integral literals become integers, everything else a real.
///
/// Numbers keep their source text (`arbitrary_precision`), so an integral
/// literal of any magnitude reaches the overflow policy.
fn convert_number(n: &Number, options: &ParseOptions) -> Result<Value, JsonError> {
    let literal = n.to_string();
    match integral_digits(&literal) {
        Some((negative, digits)) => options
            .integer_overflow
            .narrow_decimal(negative, digits)
            .map(Value::Integer)
            .ok_or(JsonError::IntegerOverflow { literal }),
        // Out-of-range exponents parse to an infinity.
        None => Ok(Value::Real(literal.parse().unwrap_or(f64::NAN))),
    }
}

/// Splits a literal with no fraction or exponent into sign and digits.
fn integral_digits(literal: &str) -> Option<(bool, &str)> {
    let (negative, digits) = match literal.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, literal),
    };
    (!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())).then_some((negative, digits))
}

/// Serializes a value to compact JSON text with sorted keys.
pub fn format_json(value: &Value) -> String {
    to_json(value).to_string()
}

/// Parses JSON text into a value.
pub fn parse_json(text: &str) -> Result<Value, JsonError> {
    parse_json_with_options(text, ParseOptions::default())
}

pub fn parse_json_with_options(text: &str, options: ParseOptions) -> Result<Value, JsonError> {
    let result = serde_json::from_str::<JsonValue>(text)
        .map_err(JsonError::from)
        .and_then(|json| from_json_with_options(json, options));
    if let Err(err) = &result {
        debug!(error = %err, len = text.len(), "json llsd parse failed");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sniff_order_prefers_binary() {
        // Looks like a uuid after the prefix, but the prefix rule runs first.
        let s = format!("{BINARY_PREFIX}6bad258e-06f0-4f36-bf1b-0ee2a3f9c6a1");
        assert!(sniff_string(s).is_binary());
    }

    #[test]
    fn sniff_plain_text() {
        assert_eq!(sniff_string("hello".into()), Value::from("hello"));
        assert_eq!(sniff_string("data:text,hi".into()), Value::from("data:text,hi"));
        assert_eq!(
            sniff_string("2025-02-30T00:00:00Z".into()),
            Value::from("2025-02-30T00:00:00Z")
        );
    }

    #[test]
    fn numbers_split_on_literal_form() {
        assert_eq!(from_json(json!(5)).unwrap(), Value::Integer(5));
        assert_eq!(from_json(json!(-5)).unwrap(), Value::Integer(-5));
        assert_eq!(from_json(json!(5.0)).unwrap(), Value::Real(5.0));
        assert_eq!(from_json(json!(0.5)).unwrap(), Value::Real(0.5));
        assert_eq!(parse_json("-2.5E1").unwrap(), Value::Real(-25.0));
    }

    #[test]
    fn non_finite_real_is_null() {
        assert_eq!(to_json(&Value::Real(f64::NAN)), JsonValue::Null);
        assert_eq!(to_json(&Value::Real(f64::INFINITY)), JsonValue::Null);
    }

    #[test]
    fn u64_literal_overflows() {
        let err = from_json(json!(u64::MAX)).unwrap_err();
        assert!(matches!(err, JsonError::IntegerOverflow { ref literal } if literal == "18446744073709551615"));

        let saturated = from_json_with_options(
            json!(u64::MAX),
            ParseOptions::default().with_integer_overflow(crate::IntegerOverflow::Saturate),
        )
        .unwrap();
        assert_eq!(saturated, Value::Integer(i32::MAX));
    }

    #[test]
    fn integral_digits_only_for_plain_integers() {
        assert_eq!(integral_digits("42"), Some((false, "42")));
        assert_eq!(integral_digits("-0"), Some((true, "0")));
        assert_eq!(integral_digits("1.0"), None);
        assert_eq!(integral_digits("1e3"), None);
        assert_eq!(integral_digits("-"), None);
    }
}
