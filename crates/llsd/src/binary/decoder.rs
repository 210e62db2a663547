//! Recursive-descent parser for binary LLSD.

use std::io::{self, Read};

use tracing::{debug, trace};

use super::constants::*;
use super::error::BinaryError;
use crate::options::ParseOptions;
use crate::types::{Date, Uri, Uuid};
use crate::value::{Array, Map, Value};

/// Upper bound on speculative allocation driven by a declared length or
/// count. Larger payloads grow as bytes actually arrive.
const PREALLOC_LIMIT: usize = 64 * 1024;

/// Reads exactly one value from a byte stream.
///
/// Only the bytes belonging to the value are consumed, so several values
/// can be read back to back from the same reader.
pub struct BinaryDecoder<R> {
    reader: R,
    /// Bytes consumed so far.
    pos: u64,
    depth: usize,
    options: ParseOptions,
}

impl<R: Read> BinaryDecoder<R> {
    pub fn new(reader: R) -> Self {
        Self::with_options(reader, ParseOptions::default())
    }

    pub fn with_options(reader: R, options: ParseOptions) -> Self {
        Self {
            reader,
            pos: 0,
            depth: 0,
            options,
        }
    }

    /// Number of bytes consumed from the reader.
    pub fn position(&self) -> u64 {
        self.pos
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Parses the next value.
    pub fn read_value(&mut self) -> Result<Value, BinaryError> {
        self.depth = 0;
        let start = self.pos;
        match self.read_any() {
            Ok(value) => {
                trace!(start, end = self.pos, kind = %value.kind(), "decoded binary llsd value");
                Ok(value)
            }
            Err(err) => {
                debug!(error = %err, start, offset = self.pos, "binary llsd parse failed");
                Err(err)
            }
        }
    }

    fn read_any(&mut self) -> Result<Value, BinaryError> {
        let offset = self.pos;
        let tag = self.u8("tag")?;
        match tag {
            TAG_UNDEF => Ok(Value::Undefined),
            TAG_TRUE => Ok(Value::Boolean(true)),
            TAG_FALSE => Ok(Value::Boolean(false)),
            TAG_INTEGER => Ok(Value::Integer(self.i32_be("integer")?)),
            TAG_REAL => Ok(Value::Real(f64::from_be_bytes(self.array("real")?))),
            TAG_STRING => Ok(Value::String(self.string("string")?)),
            TAG_UUID => Ok(Value::Uuid(Uuid::from_bytes(
                self.array::<UUID_LEN>("uuid")?,
            ))),
            TAG_URI => Ok(Value::Uri(Uri::new(self.string("uri")?))),
            TAG_BINARY => {
                let len = self.length("binary length")?;
                Ok(Value::Binary(self.payload(len, "binary")?))
            }
            TAG_DATE => {
                let seconds = f64::from_le_bytes(self.array("date")?);
                Date::from_seconds(seconds)
                    .map(Value::Date)
                    .ok_or(BinaryError::InvalidDate { seconds })
            }
            TAG_ARRAY_BEGIN => self.read_arr(),
            TAG_MAP_BEGIN => self.read_obj(),
            tag => Err(BinaryError::UnknownTag { tag, offset }),
        }
    }

    fn read_arr(&mut self) -> Result<Value, BinaryError> {
        self.enter()?;
        let count = self.length("array count")?;
        trace!(count, depth = self.depth, "array");
        let mut arr = Array::with_capacity(count.min(PREALLOC_LIMIT));
        for _ in 0..count {
            arr.push(self.read_any()?);
        }
        self.terminator(TAG_ARRAY_END)?;
        self.depth -= 1;
        Ok(Value::Array(arr))
    }

    fn read_obj(&mut self) -> Result<Value, BinaryError> {
        self.enter()?;
        let count = self.length("map count")?;
        trace!(count, depth = self.depth, "map");
        let mut map = Map::new();
        for _ in 0..count {
            let offset = self.pos;
            let tag = self.u8("map key tag")?;
            if tag != TAG_MAP_KEY {
                return Err(BinaryError::MissingKeyTag { found: tag, offset });
            }
            let key = self.string("map key")?;
            let value = self.read_any()?;
            map.insert(key, value);
        }
        self.terminator(TAG_MAP_END)?;
        self.depth -= 1;
        Ok(Value::Map(map))
    }

    fn enter(&mut self) -> Result<(), BinaryError> {
        self.depth += 1;
        if !self.options.allows_depth(self.depth) {
            return Err(BinaryError::DepthLimitExceeded {
                limit: self.options.max_depth.unwrap_or_default(),
            });
        }
        Ok(())
    }

    fn terminator(&mut self, expected: u8) -> Result<(), BinaryError> {
        let offset = self.pos;
        let found = self.u8(if expected == TAG_ARRAY_END {
            "array terminator"
        } else {
            "map terminator"
        })?;
        if found != expected {
            return Err(BinaryError::MissingTerminator {
                expected: expected as char,
                found,
                offset,
            });
        }
        Ok(())
    }

    // ----------------------------------------------------------------
    // Primitive reads

    fn fill(&mut self, buf: &mut [u8], what: &'static str) -> Result<(), BinaryError> {
        match self.reader.read_exact(buf) {
            Ok(()) => {
                self.pos += buf.len() as u64;
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                Err(BinaryError::Truncated { what })
            }
            Err(e) => Err(BinaryError::Io(e)),
        }
    }

    fn array<const N: usize>(&mut self, what: &'static str) -> Result<[u8; N], BinaryError> {
        let mut buf = [0u8; N];
        self.fill(&mut buf, what)?;
        Ok(buf)
    }

    #[inline]
    fn u8(&mut self, what: &'static str) -> Result<u8, BinaryError> {
        let [b] = self.array::<1>(what)?;
        Ok(b)
    }

    #[inline]
    fn i32_be(&mut self, what: &'static str) -> Result<i32, BinaryError> {
        Ok(i32::from_be_bytes(self.array(what)?))
    }

    /// Reads a length or count field, rejecting negative values.
    fn length(&mut self, what: &'static str) -> Result<usize, BinaryError> {
        let offset = self.pos;
        let length = self.i32_be(what)?;
        usize::try_from(length).map_err(|_| BinaryError::NegativeLength { length, offset })
    }

    /// Reads exactly `len` bytes without trusting `len` for allocation.
    fn payload(&mut self, len: usize, what: &'static str) -> Result<Vec<u8>, BinaryError> {
        let mut buf = Vec::with_capacity(len.min(PREALLOC_LIMIT));
        let read = self
            .reader
            .by_ref()
            .take(len as u64)
            .read_to_end(&mut buf)?;
        self.pos += read as u64;
        if read < len {
            return Err(BinaryError::Truncated { what });
        }
        Ok(buf)
    }

    /// Length-prefixed UTF-8 text (`s`, `l` and map keys).
    fn string(&mut self, what: &'static str) -> Result<String, BinaryError> {
        let len = self.length(what)?;
        let offset = self.pos;
        let bytes = self.payload(len, what)?;
        String::from_utf8(bytes).map_err(|_| BinaryError::InvalidUtf8 { offset })
    }
}

/// Parses one value from `reader`, leaving any trailing bytes unread.
pub fn parse_binary<R: Read>(reader: &mut R) -> Result<Value, BinaryError> {
    parse_binary_with_options(reader, ParseOptions::default())
}

pub fn parse_binary_with_options<R: Read>(
    reader: &mut R,
    options: ParseOptions,
) -> Result<Value, BinaryError> {
    BinaryDecoder::with_options(reader, options).read_value()
}

/// Parses one value from the front of `input`.
pub fn decode(input: &[u8]) -> Result<Value, BinaryError> {
    decode_with_options(input, ParseOptions::default())
}

pub fn decode_with_options(input: &[u8], options: ParseOptions) -> Result<Value, BinaryError> {
    BinaryDecoder::with_options(input, options).read_value()
}

/// Parses one value and reports how many bytes of `input` it occupied.
pub fn decode_with_consumed(input: &[u8]) -> Result<(Value, usize), BinaryError> {
    let mut decoder = BinaryDecoder::new(input);
    let value = decoder.read_value()?;
    Ok((value, decoder.position() as usize))
}
