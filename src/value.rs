//! Decoded value representation.
//!
//! [`PgValue`] is the closed set of shapes a decoded column can take.
//! Every decoder produces one of these variants; nothing outside this
//! enum ever reaches a caller. `Display` renders values back in the
//! server's own text syntax, which keeps log lines and test expectations
//! close to what `psql` shows.

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// A point on a two-dimensional plane, `(x,y)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PgPoint {
    pub x: f64,
    pub y: f64,
}

/// An infinite line `{a,b,c}` satisfying `ax + by + c = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PgLine {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

/// A finite line segment `[(x1,y1),(x2,y2)]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PgLineSegment {
    pub start: PgPoint,
    pub end: PgPoint,
}

/// A rectangle, stored as its upper-right and lower-left corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PgBox {
    pub upper_right: PgPoint,
    pub lower_left: PgPoint,
}

/// A series of connected points.
///
/// The server distinguishes open `[...]` from closed `(...)` paths in its
/// text output but both carry the same point list, which is what this
/// type keeps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PgPath {
    pub points: Vec<PgPoint>,
}

/// A closed polygon, one vertex per point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PgPolygon {
    pub points: Vec<PgPoint>,
}

/// A circle `<(x,y),r>` with center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PgCircle {
    pub center: PgPoint,
    pub radius: f64,
}

/// A physical row location, `(block,offset)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PgTid {
    pub block_number: u64,
    pub offset_number: u64,
}

/// A single decoded column value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PgValue {
    /// SQL NULL, and also the substitute for any value whose text failed
    /// to parse under its type's grammar.
    Null,
    Bool(bool),
    /// `int2` and `int4` columns.
    Int(i32),
    /// `int8` columns, plus `xid`, whose unsigned 32-bit range does not
    /// fit [`PgValue::Int`].
    BigInt(i64),
    /// `float4` columns. `float8` and `numeric` stay [`PgValue::Text`] to
    /// avoid silent precision loss.
    Float(f64),
    /// Character types plus every type kept in its server text form.
    Text(String),
    /// `bytea` columns, decoded from hex or escape notation.
    Bytes(Vec<u8>),
    Date(NaiveDate),
    /// `timestamp` and `timestamptz` columns. Values without an explicit
    /// zone are tagged UTC.
    Timestamp(DateTime<FixedOffset>),
    /// `json` and `jsonb` columns, parsed into a JSON tree.
    Json(serde_json::Value),
    Point(PgPoint),
    Line(PgLine),
    LineSegment(PgLineSegment),
    Box(PgBox),
    Path(PgPath),
    Polygon(PgPolygon),
    Circle(PgCircle),
    Tid(PgTid),
    /// Array columns; elements share the scalar variant of the element
    /// type, with [`PgValue::Null`] for NULL elements and nested arrays
    /// for extra dimensions.
    Array(Vec<PgValue>),
}

impl PgValue {
    /// True for SQL NULL and for contained decode failures.
    pub fn is_null(&self) -> bool {
        matches!(self, PgValue::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PgValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            PgValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// The value as an `i64`, widening [`PgValue::Int`].
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            PgValue::Int(v) => Some(i64::from(*v)),
            PgValue::BigInt(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            PgValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PgValue::Text(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            PgValue::Bytes(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[PgValue]> {
        match self {
            PgValue::Array(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for PgPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl fmt::Display for PgLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{},{},{}}}", self.a, self.b, self.c)
    }
}

impl fmt::Display for PgLineSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.start, self.end)
    }
}

impl fmt::Display for PgBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.upper_right, self.lower_left)
    }
}

impl fmt::Display for PgPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, point) in self.points.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{point}")?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for PgPolygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, point) in self.points.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{point}")?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for PgCircle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{},{}>", self.center, self.radius)
    }
}

impl fmt::Display for PgTid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.block_number, self.offset_number)
    }
}

impl fmt::Display for PgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PgValue::Null => write!(f, "NULL"),
            PgValue::Bool(true) => write!(f, "t"),
            PgValue::Bool(false) => write!(f, "f"),
            PgValue::Int(v) => write!(f, "{v}"),
            PgValue::BigInt(v) => write!(f, "{v}"),
            PgValue::Float(v) => write!(f, "{v}"),
            PgValue::Text(v) => write!(f, "{v}"),
            PgValue::Bytes(v) => {
                write!(f, "\\x")?;
                for byte in v {
                    write!(f, "{byte:02x}")?;
                }
                Ok(())
            }
            PgValue::Date(v) => write!(f, "{v}"),
            PgValue::Timestamp(v) => write!(f, "{v}"),
            PgValue::Json(v) => write!(f, "{v}"),
            PgValue::Point(v) => write!(f, "{v}"),
            PgValue::Line(v) => write!(f, "{v}"),
            PgValue::LineSegment(v) => write!(f, "{v}"),
            PgValue::Box(v) => write!(f, "{v}"),
            PgValue::Path(v) => write!(f, "{v}"),
            PgValue::Polygon(v) => write!(f, "{v}"),
            PgValue::Circle(v) => write!(f, "{v}"),
            PgValue::Tid(v) => write!(f, "{v}"),
            PgValue::Array(items) => {
                write!(f, "{{")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "}}")
            }
        }
    }
}
