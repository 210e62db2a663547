//! Binary LLSD: one ASCII tag byte per value, then a fixed-width or
//! length-prefixed payload. Lengths and counts are 4-byte big-endian signed
//! integers.
//!
//! | Tag | Value | Payload |
//! |-----|-------|---------|
//! | `!` | undef | none |
//! | `1` / `0` | boolean | none |
//! | `i` | integer | 4 bytes BE |
//! | `r` | real | 8 bytes BE |
//! | `s` | string | length + bytes |
//! | `u` | uuid | 16 bytes |
//! | `l` | uri | length + bytes |
//! | `b` | binary | length + bytes |
//! | `d` | date | 8 bytes **LE** seconds |
//! | `[` | array | count, values, `]` |
//! | `{` | map | count, (`k` length key value)*, `}` |

pub mod constants;
mod decoder;
mod encoder;
mod error;

pub use decoder::{
    decode, decode_with_consumed, decode_with_options, parse_binary, parse_binary_with_options,
    BinaryDecoder,
};
pub use encoder::{encode, format_binary, BinaryEncoder};
pub use error::BinaryError;
