//! LLSD structured data.
//!
//! [`Value`] is a tagged union over undef, boolean, 32-bit integer, real,
//! string, UUID, date, URI, binary, array and map. Two codecs convert it to
//! and from the outside world:
//!
//! - [`binary`]: the compact tag-prefixed wire format.
//! - [`json`]: the JSON interchange form, which recovers binary, UUID and
//!   date values from their string spellings. URIs come back as strings.
//!
//! The codecs never call each other; both only produce and consume `Value`.
//!
//! # Example
//!
//! ```
//! use llsd::{decode, encode, format_json, parse_json, Value};
//!
//! let value = parse_json(r#"{"blob":"data:base64,AQIDBA==","n":123}"#).unwrap();
//! assert_eq!(value.get("blob"), Some(&Value::Binary(vec![1, 2, 3, 4])));
//!
//! let bytes = encode(&value).unwrap();
//! let back = decode(&bytes).unwrap();
//! assert_eq!(format_json(&back), r#"{"blob":"data:base64,AQIDBA==","n":123}"#);
//! ```

pub mod binary;
pub mod json;
mod options;
mod types;
mod value;

pub use binary::{
    decode, decode_with_consumed, decode_with_options, encode, format_binary, parse_binary,
    parse_binary_with_options, BinaryDecoder, BinaryEncoder, BinaryError,
};
pub use json::{
    format_json, from_json, from_json_with_options, parse_json, parse_json_with_options, to_json,
    JsonError,
};
pub use options::{IntegerOverflow, ParseOptions};
pub use types::{parse_canonical_uuid, Date, Uri, Uuid};
pub use value::{Array, Map, TypeMismatch, Value, ValueKind};
