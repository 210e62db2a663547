//! [`Value`]: the LLSD tagged union.
//!
//! Containers own their children outright. `Clone` is a deep copy: cloning
//! a map or array allocates fresh containers all the way down, so a copy can
//! be mutated without the original observing it. Moving out of a slot in
//! place goes through [`Value::take`], which leaves `Undefined` behind.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

use crate::types::{Date, Uri, Uuid};

/// Ordered sequence of values.
pub type Array = Vec<Value>;

/// String-keyed map. Iteration is in key order, which JSON output relies on.
pub type Map = BTreeMap<String, Value>;

/// A single LLSD value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Undefined,
    Boolean(bool),
    Integer(i32),
    Real(f64),
    String(String),
    Uuid(Uuid),
    Date(Date),
    Uri(Uri),
    Binary(Vec<u8>),
    Array(Array),
    Map(Map),
}

/// Discriminant of a [`Value`], used in type-mismatch reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Undefined,
    Boolean,
    Integer,
    Real,
    String,
    Uuid,
    Date,
    Uri,
    Binary,
    Array,
    Map,
}

impl ValueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Undefined => "undef",
            ValueKind::Boolean => "boolean",
            ValueKind::Integer => "integer",
            ValueKind::Real => "real",
            ValueKind::String => "string",
            ValueKind::Uuid => "uuid",
            ValueKind::Date => "date",
            ValueKind::Uri => "uri",
            ValueKind::Binary => "binary",
            ValueKind::Array => "array",
            ValueKind::Map => "map",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a value is extracted as a kind it does not hold.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("type mismatch: expected {expected}, found {found}")]
pub struct TypeMismatch {
    pub expected: ValueKind,
    pub found: ValueKind,
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Undefined => ValueKind::Undefined,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Integer(_) => ValueKind::Integer,
            Value::Real(_) => ValueKind::Real,
            Value::String(_) => ValueKind::String,
            Value::Uuid(_) => ValueKind::Uuid,
            Value::Date(_) => ValueKind::Date,
            Value::Uri(_) => ValueKind::Uri,
            Value::Binary(_) => ValueKind::Binary,
            Value::Array(_) => ValueKind::Array,
            Value::Map(_) => ValueKind::Map,
        }
    }

    fn mismatch(&self, expected: ValueKind) -> TypeMismatch {
        TypeMismatch {
            expected,
            found: self.kind(),
        }
    }

    pub fn new_array() -> Self {
        Value::Array(Array::new())
    }

    pub fn new_map() -> Self {
        Value::Map(Map::new())
    }

    /// Moves the value out, leaving `Undefined` in its place.
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, Value::Boolean(_))
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_))
    }

    pub fn is_real(&self) -> bool {
        matches!(self, Value::Real(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_uuid(&self) -> bool {
        matches!(self, Value::Uuid(_))
    }

    pub fn is_date(&self) -> bool {
        matches!(self, Value::Date(_))
    }

    pub fn is_uri(&self) -> bool {
        matches!(self, Value::Uri(_))
    }

    pub fn is_binary(&self) -> bool {
        matches!(self, Value::Binary(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    pub fn as_bool(&self) -> Result<bool, TypeMismatch> {
        match self {
            Value::Boolean(b) => Ok(*b),
            other => Err(other.mismatch(ValueKind::Boolean)),
        }
    }

    pub fn as_integer(&self) -> Result<i32, TypeMismatch> {
        match self {
            Value::Integer(i) => Ok(*i),
            other => Err(other.mismatch(ValueKind::Integer)),
        }
    }

    pub fn as_real(&self) -> Result<f64, TypeMismatch> {
        match self {
            Value::Real(r) => Ok(*r),
            other => Err(other.mismatch(ValueKind::Real)),
        }
    }

    pub fn as_str(&self) -> Result<&str, TypeMismatch> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(other.mismatch(ValueKind::String)),
        }
    }

    pub fn as_uuid(&self) -> Result<Uuid, TypeMismatch> {
        match self {
            Value::Uuid(u) => Ok(*u),
            other => Err(other.mismatch(ValueKind::Uuid)),
        }
    }

    pub fn as_date(&self) -> Result<Date, TypeMismatch> {
        match self {
            Value::Date(d) => Ok(*d),
            other => Err(other.mismatch(ValueKind::Date)),
        }
    }

    pub fn as_uri(&self) -> Result<&Uri, TypeMismatch> {
        match self {
            Value::Uri(u) => Ok(u),
            other => Err(other.mismatch(ValueKind::Uri)),
        }
    }

    pub fn as_binary(&self) -> Result<&[u8], TypeMismatch> {
        match self {
            Value::Binary(b) => Ok(b),
            other => Err(other.mismatch(ValueKind::Binary)),
        }
    }

    pub fn as_array(&self) -> Result<&Array, TypeMismatch> {
        match self {
            Value::Array(a) => Ok(a),
            other => Err(other.mismatch(ValueKind::Array)),
        }
    }

    pub fn as_array_mut(&mut self) -> Result<&mut Array, TypeMismatch> {
        match self {
            Value::Array(a) => Ok(a),
            other => Err(other.mismatch(ValueKind::Array)),
        }
    }

    pub fn as_map(&self) -> Result<&Map, TypeMismatch> {
        match self {
            Value::Map(m) => Ok(m),
            other => Err(other.mismatch(ValueKind::Map)),
        }
    }

    pub fn as_map_mut(&mut self) -> Result<&mut Map, TypeMismatch> {
        match self {
            Value::Map(m) => Ok(m),
            other => Err(other.mismatch(ValueKind::Map)),
        }
    }

    /// Looks up `key` when this value is a map.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Map(m) => m.get(key),
            _ => None,
        }
    }

    /// Looks up position `index` when this value is an array.
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        match self {
            Value::Array(a) => a.get(index),
            _ => None,
        }
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v)
                }
            }
        )*
    };
}

impl_from! {
    bool => Boolean,
    i32 => Integer,
    f64 => Real,
    String => String,
    Uuid => Uuid,
    Date => Date,
    Uri => Uri,
    Vec<u8> => Binary,
    Array => Array,
    Map => Map,
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<chrono::DateTime<chrono::Utc>> for Value {
    fn from(instant: chrono::DateTime<chrono::Utc>) -> Self {
        Value::Date(Date::new(instant))
    }
}

macro_rules! impl_try_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl TryFrom<Value> for $ty {
                type Error = TypeMismatch;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    match value {
                        Value::$variant(v) => Ok(v),
                        other => Err(other.mismatch(ValueKind::$variant)),
                    }
                }
            }
        )*
    };
}

impl_try_from! {
    bool => Boolean,
    i32 => Integer,
    f64 => Real,
    String => String,
    Uuid => Uuid,
    Date => Date,
    Uri => Uri,
    Vec<u8> => Binary,
    Array => Array,
    Map => Map,
}
