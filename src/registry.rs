//! Type registry: OID to decoding category.
//!
//! [`Category::from_oid`] is total over `u32`. Every OID the decoders
//! understand maps to a scalar or array category; everything else, from
//! extension types to types nobody has claimed yet (`interval`, `money`,
//! the `pg_catalog` vectors), maps to [`Category::Unrecognized`] and is
//! passed through as raw text. Unknown never means failure here.

use crate::oid;

/// Scalar decoding kinds. Array categories reuse these for their
/// elements, so `int4` and `int4[]` share one set of parsing rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scalar {
    /// Server text kept verbatim. Includes the character types and every
    /// type that is deliberately not narrowed (`float8`, `numeric`,
    /// `uuid`, the network and `reg*` families, `time`, `timetz`).
    Text,
    /// `float4` only; 32-bit floats fit `f64` exactly.
    Float,
    Int,
    BigInt,
    Bool,
    Bytea,
    Date,
    Timestamp,
    Json,
    Point,
    Line,
    LineSegment,
    Box,
    Path,
    Polygon,
    Circle,
    Tid,
}

impl Scalar {
    /// Element separator inside array literals of this kind.
    ///
    /// `box[]` is the one built-in array that separates elements with a
    /// semicolon, because the box text form itself contains a comma at
    /// nesting depth zero.
    pub const fn array_delimiter(self) -> char {
        match self {
            Scalar::Box => ';',
            _ => ',',
        }
    }

    /// Stable lowercase name, used as a metrics label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Scalar::Text => "text",
            Scalar::Float => "float",
            Scalar::Int => "int",
            Scalar::BigInt => "bigint",
            Scalar::Bool => "bool",
            Scalar::Bytea => "bytea",
            Scalar::Date => "date",
            Scalar::Timestamp => "timestamp",
            Scalar::Json => "json",
            Scalar::Point => "point",
            Scalar::Line => "line",
            Scalar::LineSegment => "lseg",
            Scalar::Box => "box",
            Scalar::Path => "path",
            Scalar::Polygon => "polygon",
            Scalar::Circle => "circle",
            Scalar::Tid => "tid",
        }
    }
}

/// How a column's values should be decoded, resolved from the type OID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// A single value of the given kind.
    Scalar(Scalar),
    /// An array literal whose elements are the given kind.
    Array(Scalar),
    /// OID not in the registry; values pass through as raw text.
    Unrecognized,
}

impl Category {
    /// Resolves a type OID to its decoding category.
    pub const fn from_oid(type_oid: u32) -> Category {
        use Scalar::*;

        match type_oid {
            // Types kept in server text form. float8 and numeric would
            // lose precision in an f64; time, timetz, uuid, the network
            // and reg* families have no narrower representation here.
            oid::BPCHAR
            | oid::CHAR
            | oid::CIDR
            | oid::FLOAT8
            | oid::INET
            | oid::MACADDR
            | oid::NAME
            | oid::NUMERIC
            | oid::OID
            | oid::REGCLASS
            | oid::REGCONFIG
            | oid::REGDICTIONARY
            | oid::REGNAMESPACE
            | oid::REGOPER
            | oid::REGOPERATOR
            | oid::REGPROC
            | oid::REGPROCEDURE
            | oid::REGROLE
            | oid::REGTYPE
            | oid::TEXT
            | oid::TIME
            | oid::TIMETZ
            | oid::UUID
            | oid::VARCHAR
            | oid::VOID => Category::Scalar(Text),

            oid::BPCHAR_ARRAY
            | oid::CHAR_ARRAY
            | oid::CIDR_ARRAY
            | oid::FLOAT8_ARRAY
            | oid::INET_ARRAY
            | oid::MACADDR_ARRAY
            | oid::NAME_ARRAY
            | oid::NUMERIC_ARRAY
            | oid::OID_ARRAY
            | oid::REGCLASS_ARRAY
            | oid::REGCONFIG_ARRAY
            | oid::REGDICTIONARY_ARRAY
            | oid::REGNAMESPACE_ARRAY
            | oid::REGOPER_ARRAY
            | oid::REGOPERATOR_ARRAY
            | oid::REGPROC_ARRAY
            | oid::REGPROCEDURE_ARRAY
            | oid::REGROLE_ARRAY
            | oid::REGTYPE_ARRAY
            | oid::TEXT_ARRAY
            | oid::TIME_ARRAY
            | oid::TIMETZ_ARRAY
            | oid::UUID_ARRAY
            | oid::VARCHAR_ARRAY => Category::Array(Text),

            // Numeric types. xid is unsigned 32-bit on the server, so
            // it takes the 64-bit path.
            oid::FLOAT4 => Category::Scalar(Float),
            oid::FLOAT4_ARRAY => Category::Array(Float),
            oid::INT2 | oid::INT4 => Category::Scalar(Int),
            oid::INT2_ARRAY | oid::INT4_ARRAY => Category::Array(Int),
            oid::INT8 | oid::XID => Category::Scalar(BigInt),
            oid::INT8_ARRAY | oid::XID_ARRAY => Category::Array(BigInt),

            // Boolean
            oid::BOOL => Category::Scalar(Bool),
            oid::BOOL_ARRAY => Category::Array(Bool),

            // Binary data
            oid::BYTEA => Category::Scalar(Bytea),
            oid::BYTEA_ARRAY => Category::Array(Bytea),

            // Date/time
            oid::DATE => Category::Scalar(Date),
            oid::DATE_ARRAY => Category::Array(Date),
            oid::TIMESTAMP | oid::TIMESTAMPTZ => Category::Scalar(Timestamp),
            oid::TIMESTAMP_ARRAY | oid::TIMESTAMPTZ_ARRAY => Category::Array(Timestamp),

            // JSON
            oid::JSON | oid::JSONB => Category::Scalar(Json),
            oid::JSON_ARRAY | oid::JSONB_ARRAY => Category::Array(Json),

            // Geometric types
            oid::POINT => Category::Scalar(Point),
            oid::POINT_ARRAY => Category::Array(Point),
            oid::LINE => Category::Scalar(Line),
            oid::LINE_ARRAY => Category::Array(Line),
            oid::LSEG => Category::Scalar(LineSegment),
            oid::LSEG_ARRAY => Category::Array(LineSegment),
            oid::BOX => Category::Scalar(Box),
            oid::BOX_ARRAY => Category::Array(Box),
            oid::PATH => Category::Scalar(Path),
            oid::PATH_ARRAY => Category::Array(Path),
            oid::POLYGON => Category::Scalar(Polygon),
            oid::POLYGON_ARRAY => Category::Array(Polygon),
            oid::CIRCLE => Category::Scalar(Circle),
            oid::CIRCLE_ARRAY => Category::Array(Circle),

            // Row locations
            oid::TID => Category::Scalar(Tid),
            oid::TID_ARRAY => Category::Array(Tid),

            _ => Category::Unrecognized,
        }
    }

    pub const fn is_array(self) -> bool {
        matches!(self, Category::Array(_))
    }

    /// Stable name for logs and metrics, `kind` or `kind[]`.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Scalar(kind) => kind.as_str(),
            Category::Array(kind) => match kind {
                Scalar::Text => "text[]",
                Scalar::Float => "float[]",
                Scalar::Int => "int[]",
                Scalar::BigInt => "bigint[]",
                Scalar::Bool => "bool[]",
                Scalar::Bytea => "bytea[]",
                Scalar::Date => "date[]",
                Scalar::Timestamp => "timestamp[]",
                Scalar::Json => "json[]",
                Scalar::Point => "point[]",
                Scalar::Line => "line[]",
                Scalar::LineSegment => "lseg[]",
                Scalar::Box => "box[]",
                Scalar::Path => "path[]",
                Scalar::Polygon => "polygon[]",
                Scalar::Circle => "circle[]",
                Scalar::Tid => "tid[]",
            },
            Category::Unrecognized => "unrecognized",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_lookups() {
        assert_eq!(Category::from_oid(oid::BOOL), Category::Scalar(Scalar::Bool));
        assert_eq!(Category::from_oid(oid::INT2), Category::Scalar(Scalar::Int));
        assert_eq!(Category::from_oid(oid::INT4), Category::Scalar(Scalar::Int));
        assert_eq!(
            Category::from_oid(oid::INT8),
            Category::Scalar(Scalar::BigInt)
        );
        assert_eq!(
            Category::from_oid(oid::XID),
            Category::Scalar(Scalar::BigInt)
        );
        assert_eq!(
            Category::from_oid(oid::FLOAT4),
            Category::Scalar(Scalar::Float)
        );
        assert_eq!(
            Category::from_oid(oid::TIMESTAMPTZ),
            Category::Scalar(Scalar::Timestamp)
        );
        assert_eq!(Category::from_oid(oid::JSONB), Category::Scalar(Scalar::Json));
        assert_eq!(Category::from_oid(oid::TID), Category::Scalar(Scalar::Tid));
    }

    #[test]
    fn test_precision_sensitive_types_stay_text() {
        for type_oid in [
            oid::FLOAT8,
            oid::NUMERIC,
            oid::UUID,
            oid::TIME,
            oid::TIMETZ,
            oid::INET,
            oid::MACADDR,
            oid::CIDR,
            oid::VOID,
        ] {
            assert_eq!(
                Category::from_oid(type_oid),
                Category::Scalar(Scalar::Text),
                "oid {type_oid} must stay text"
            );
        }
    }

    #[test]
    fn test_array_lookups() {
        assert_eq!(
            Category::from_oid(oid::INT4_ARRAY),
            Category::Array(Scalar::Int)
        );
        assert_eq!(
            Category::from_oid(oid::TEXT_ARRAY),
            Category::Array(Scalar::Text)
        );
        assert_eq!(
            Category::from_oid(oid::BOX_ARRAY),
            Category::Array(Scalar::Box)
        );
        assert_eq!(
            Category::from_oid(oid::XID_ARRAY),
            Category::Array(Scalar::BigInt)
        );
        assert!(Category::from_oid(oid::UUID_ARRAY).is_array());
        assert!(!Category::from_oid(oid::UUID).is_array());
    }

    #[test]
    fn test_unknown_oids_are_unrecognized() {
        assert_eq!(Category::from_oid(oid::INTERVAL), Category::Unrecognized);
        assert_eq!(Category::from_oid(oid::MONEY), Category::Unrecognized);
        assert_eq!(Category::from_oid(oid::CID), Category::Unrecognized);
        assert_eq!(Category::from_oid(oid::INT2VECTOR), Category::Unrecognized);
        assert_eq!(Category::from_oid(0), Category::Unrecognized);
        assert_eq!(Category::from_oid(u32::MAX), Category::Unrecognized);
    }

    #[test]
    fn test_box_array_uses_semicolon_delimiter() {
        assert_eq!(Scalar::Box.array_delimiter(), ';');
        assert_eq!(Scalar::Int.array_delimiter(), ',');
        assert_eq!(Scalar::Point.array_delimiter(), ',');
    }

    #[test]
    fn test_labels() {
        assert_eq!(Category::Scalar(Scalar::Int).label(), "int");
        assert_eq!(Category::Array(Scalar::Int).label(), "int[]");
        assert_eq!(Category::Array(Scalar::LineSegment).label(), "lseg[]");
        assert_eq!(Category::Unrecognized.label(), "unrecognized");
    }
}
