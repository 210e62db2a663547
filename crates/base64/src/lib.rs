//! Base64 encoding and decoding for LLSD binary payloads.
//!
//! Encoding always produces the standard alphabet with `=` padding to a
//! multiple of four characters. Decoding is lenient: characters outside the
//! alphabet are skipped, the first `=` ends the input, and the output holds
//! exactly as many bytes as the consumed 6-bit groups describe. Because of
//! that, decoding never fails.
//!
//! # Example
//!
//! ```
//! use llsd_base64::{from_base64, to_base64};
//!
//! let encoded = to_base64(&[1, 2, 3, 4]);
//! assert_eq!(encoded, "AQIDBA==");
//! assert_eq!(from_base64(&encoded), vec![1, 2, 3, 4]);
//! ```

mod constants;
mod from_base64;
mod to_base64;

pub use constants::{ALPHABET, ALPHABET_BYTES, PAD};
pub use from_base64::{from_base64, from_base64_bytes};
pub use to_base64::{encoded_len, to_base64};
