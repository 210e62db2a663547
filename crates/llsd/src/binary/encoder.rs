//! Binary LLSD writer.

use std::io::{self, Write};

use super::constants::*;
use crate::types::{Date, Uri, Uuid};
use crate::value::{Map, Value};

/// Writes values to an [`io::Write`] sink.
///
/// Output goes straight to the sink in small writes; wrap unbuffered sinks
/// such as files in a `BufWriter`.
pub struct BinaryEncoder<W> {
    writer: W,
}

impl<W: Write> BinaryEncoder<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    pub fn write_any(&mut self, value: &Value) -> io::Result<()> {
        match value {
            Value::Undefined => self.write_undef(),
            Value::Boolean(b) => self.write_boolean(*b),
            Value::Integer(i) => self.write_integer(*i),
            Value::Real(r) => self.write_real(*r),
            Value::String(s) => self.write_str(s),
            Value::Uuid(u) => self.write_uuid(u),
            Value::Date(d) => self.write_date(d),
            Value::Uri(u) => self.write_uri(u),
            Value::Binary(b) => self.write_bin(b),
            Value::Array(arr) => self.write_arr(arr),
            Value::Map(map) => self.write_obj(map),
        }
    }

    pub fn write_undef(&mut self) -> io::Result<()> {
        self.writer.write_all(&[TAG_UNDEF])
    }

    pub fn write_boolean(&mut self, b: bool) -> io::Result<()> {
        self.writer.write_all(&[if b { TAG_TRUE } else { TAG_FALSE }])
    }

    pub fn write_integer(&mut self, int: i32) -> io::Result<()> {
        self.writer.write_all(&[TAG_INTEGER])?;
        self.writer.write_all(&int.to_be_bytes())
    }

    pub fn write_real(&mut self, real: f64) -> io::Result<()> {
        self.writer.write_all(&[TAG_REAL])?;
        self.writer.write_all(&real.to_be_bytes())
    }

    pub fn write_str(&mut self, s: &str) -> io::Result<()> {
        self.write_sized(TAG_STRING, s.as_bytes())
    }

    pub fn write_uuid(&mut self, uuid: &Uuid) -> io::Result<()> {
        self.writer.write_all(&[TAG_UUID])?;
        self.writer.write_all(uuid.as_bytes())
    }

    /// Dates are the one little-endian field of the format.
    pub fn write_date(&mut self, date: &Date) -> io::Result<()> {
        self.writer.write_all(&[TAG_DATE])?;
        self.writer.write_all(&date.seconds().to_le_bytes())
    }

    pub fn write_uri(&mut self, uri: &Uri) -> io::Result<()> {
        self.write_sized(TAG_URI, uri.as_str().as_bytes())
    }

    pub fn write_bin(&mut self, buf: &[u8]) -> io::Result<()> {
        self.write_sized(TAG_BINARY, buf)
    }

    pub fn write_arr(&mut self, arr: &[Value]) -> io::Result<()> {
        self.writer.write_all(&[TAG_ARRAY_BEGIN])?;
        self.write_len(arr.len())?;
        for item in arr {
            self.write_any(item)?;
        }
        self.writer.write_all(&[TAG_ARRAY_END])
    }

    pub fn write_obj(&mut self, map: &Map) -> io::Result<()> {
        self.writer.write_all(&[TAG_MAP_BEGIN])?;
        self.write_len(map.len())?;
        for (key, value) in map {
            self.write_sized(TAG_MAP_KEY, key.as_bytes())?;
            self.write_any(value)?;
        }
        self.writer.write_all(&[TAG_MAP_END])
    }

    fn write_sized(&mut self, tag: u8, bytes: &[u8]) -> io::Result<()> {
        self.writer.write_all(&[tag])?;
        self.write_len(bytes.len())?;
        self.writer.write_all(bytes)
    }

    fn write_len(&mut self, len: usize) -> io::Result<()> {
        let len = i32::try_from(len).map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("length {len} does not fit the 32-bit length field"),
            )
        })?;
        self.writer.write_all(&len.to_be_bytes())
    }
}

/// Writes one value to `writer`.
pub fn format_binary<W: Write>(writer: &mut W, value: &Value) -> io::Result<()> {
    BinaryEncoder::new(writer).write_any(value)
}

/// Encodes one value into a fresh buffer.
///
/// Fails only when a payload or container exceeds `i32::MAX` entries.
pub fn encode(value: &Value) -> io::Result<Vec<u8>> {
    let mut out = Vec::new();
    format_binary(&mut out, value)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_reference_vectors() {
        assert_eq!(encode(&Value::Undefined).unwrap(), b"!");
        assert_eq!(encode(&Value::Boolean(true)).unwrap(), b"1");
        assert_eq!(encode(&Value::Boolean(false)).unwrap(), b"0");
        assert_eq!(encode(&Value::Integer(258)).unwrap(), b"i\x00\x00\x01\x02");
        assert_eq!(
            encode(&Value::from("hello")).unwrap(),
            b"s\x00\x00\x00\x05hello"
        );
        assert_eq!(
            encode(&Value::Uri(Uri::new("example.com"))).unwrap(),
            b"l\x00\x00\x00\x0bexample.com"
        );
    }

    #[test]
    fn strings_may_contain_nul() {
        assert_eq!(
            encode(&Value::from("a\0b")).unwrap(),
            b"s\x00\x00\x00\x03a\x00b"
        );
    }

    #[test]
    fn emptied_containers_encode_as_zero_count() {
        let mut value = Value::Array(vec![Value::Integer(1)]);
        let taken = std::mem::take(value.as_array_mut().unwrap());
        assert_eq!(taken.len(), 1);
        assert_eq!(encode(&value).unwrap(), b"[\x00\x00\x00\x00]");
        assert_eq!(encode(&Value::new_map()).unwrap(), b"{\x00\x00\x00\x00}");
    }
}
