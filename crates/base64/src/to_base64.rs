//! Standard padded base64 encoding.

use crate::constants::{ALPHABET_BYTES, PAD};

/// Number of characters `to_base64` produces for `len` input bytes.
pub fn encoded_len(len: usize) -> usize {
    len.div_ceil(3) * 4
}

/// Encodes a byte slice to a standard base64 string with `=` padding.
///
/// ```
/// use llsd_base64::to_base64;
///
/// assert_eq!(to_base64(b"hello world"), "aGVsbG8gd29ybGQ=");
/// ```
pub fn to_base64(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(encoded_len(bytes.len()));

    let mut chunks = bytes.chunks_exact(3);
    for chunk in &mut chunks {
        let triple = (u32::from(chunk[0]) << 16) | (u32::from(chunk[1]) << 8) | u32::from(chunk[2]);
        push_sextets(&mut out, triple, 4);
    }

    match *chunks.remainder() {
        [o1] => {
            push_sextets(&mut out, u32::from(o1) << 16, 2);
            out.push(PAD);
            out.push(PAD);
        }
        [o1, o2] => {
            push_sextets(&mut out, (u32::from(o1) << 16) | (u32::from(o2) << 8), 3);
            out.push(PAD);
        }
        _ => {}
    }

    out
}

/// Emits the top `count` sextets of a 24-bit group.
#[inline]
fn push_sextets(out: &mut String, triple: u32, count: usize) {
    for i in 0..count {
        let index = (triple >> (18 - 6 * i)) & 0b11_1111;
        out.push(ALPHABET_BYTES[index as usize] as char);
    }
}
