//! Tag bytes of the binary wire format.

pub const TAG_UNDEF: u8 = b'!';
pub const TAG_TRUE: u8 = b'1';
pub const TAG_FALSE: u8 = b'0';
/// 4-byte big-endian two's complement.
pub const TAG_INTEGER: u8 = b'i';
/// 8-byte big-endian IEEE-754.
pub const TAG_REAL: u8 = b'r';
pub const TAG_STRING: u8 = b's';
pub const TAG_UUID: u8 = b'u';
pub const TAG_URI: u8 = b'l';
pub const TAG_BINARY: u8 = b'b';
/// 8-byte **little-endian** IEEE-754 seconds since the epoch.
pub const TAG_DATE: u8 = b'd';
pub const TAG_ARRAY_BEGIN: u8 = b'[';
pub const TAG_ARRAY_END: u8 = b']';
pub const TAG_MAP_BEGIN: u8 = b'{';
pub const TAG_MAP_END: u8 = b'}';
pub const TAG_MAP_KEY: u8 = b'k';

pub const UUID_LEN: usize = 16;
