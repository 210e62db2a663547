/// Standard base64 alphabet.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// [`ALPHABET`] as bytes, indexed by sextet value.
pub const ALPHABET_BYTES: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Padding character.
pub const PAD: char = '=';

/// Marks bytes outside the alphabet in [`DECODE_TABLE`].
pub(crate) const NOT_IN_ALPHABET: u8 = 0xff;

/// Reverse of [`ALPHABET_BYTES`]: ASCII byte to sextet value.
pub(crate) static DECODE_TABLE: [u8; 256] = {
    let mut table = [NOT_IN_ALPHABET; 256];
    let mut i = 0;
    while i < 64 {
        table[ALPHABET_BYTES[i] as usize] = i as u8;
        i += 1;
    }
    table
};
