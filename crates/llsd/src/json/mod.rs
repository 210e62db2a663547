//! JSON interchange form of LLSD.

mod codec;
mod error;

pub use codec::{
    format_json, from_json, from_json_with_options, parse_json, parse_json_with_options,
    sniff_string, to_json, BINARY_PREFIX,
};
pub use error::JsonError;
