//! Lenient base64 decoding.

use crate::constants::{DECODE_TABLE, NOT_IN_ALPHABET, PAD};

const PAD_BYTE: u8 = PAD as u8;

/// Decodes a base64 string.
///
/// Non-alphabet characters before the first `=` are skipped and decoding
/// stops at the first `=`. Every complete octet carried by the consumed
/// sextets is emitted, so padded and unpadded input decode identically and
/// a trailing group of two or three sextets yields one or two bytes.
///
/// ```
/// use llsd_base64::from_base64;
///
/// assert_eq!(from_base64("AQIDBA=="), vec![1, 2, 3, 4]);
/// assert_eq!(from_base64("AQIDBA"), vec![1, 2, 3, 4]);
/// ```
pub fn from_base64(encoded: &str) -> Vec<u8> {
    from_base64_bytes(encoded.as_bytes())
}

/// Byte-slice variant of [`from_base64`].
pub fn from_base64_bytes(encoded: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(encoded.len() / 4 * 3 + 2);
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;

    for &byte in encoded {
        if byte == PAD_BYTE {
            break;
        }
        let sextet = DECODE_TABLE[byte as usize];
        if sextet == NOT_IN_ALPHABET {
            continue;
        }
        acc = (acc << 6) | u32::from(sextet);
        bits += 6;
        if bits >= 8 {
            bits -= 8;
            out.push((acc >> bits) as u8);
            acc &= (1 << bits) - 1;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_byte_payload_is_not_truncated_to_three() {
        assert_eq!(from_base64("AQIDBA=="), vec![1, 2, 3, 4]);
    }

    #[test]
    fn skips_whitespace_between_groups() {
        assert_eq!(from_base64("Zm9v\nYmFy"), b"foobar");
        assert_eq!(from_base64(" Z m 9 v "), b"foo");
    }

    #[test]
    fn stops_at_first_padding() {
        assert_eq!(from_base64("Zg==Zm9v"), b"f");
    }

    #[test]
    fn lone_trailing_sextet_carries_no_byte() {
        assert_eq!(from_base64("Zm9vY"), b"foo");
    }
}
