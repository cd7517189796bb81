//! # pgwren
//!
//! Decoding of PostgreSQL's text wire format into typed Rust values.
//!
//! The server labels every result column with a type OID and a wire
//! format code. [`decode`] resolves the OID through a total type
//! registry and runs the matching text decoder: numbers, booleans,
//! `bytea`, dates and timestamps, JSON, the geometric types and arrays
//! of all of these. Types where narrowing would lose information
//! (`float8`, `numeric`, `uuid`, the network types) and types the
//! registry does not know keep their server text form.
//!
//! Decoding is deliberately forgiving about data and strict about
//! contracts. A value whose text fails its type's grammar is logged and
//! replaced with [`PgValue::Null`] so the rest of the result set
//! survives; an unsupported or impossible wire format is a hard error.
//!
//! ```
//! use pgwren::{Column, PgValue, decode, oid};
//!
//! let column = Column::new("n", 0, 0, oid::INT4, 4, -1, 0)?;
//! assert_eq!(decode(b"42", &column, None)?, PgValue::Int(42));
//!
//! let column = Column::new("tags", 0, 1, oid::TEXT_ARRAY, -1, -1, 0)?;
//! let tags = decode(br#"{backend,"wire protocol"}"#, &column, None)?;
//! assert_eq!(
//!     tags,
//!     PgValue::Array(vec![
//!         PgValue::Text("backend".into()),
//!         PgValue::Text("wire protocol".into()),
//!     ])
//! );
//! # Ok::<(), pgwren::PgError>(())
//! ```

pub mod column;
pub mod controls;
pub mod decode;
pub mod decoders;
pub mod error;
pub mod oid;
pub mod registry;
pub mod value;

pub use column::{Column, Format};
pub use controls::{ClientControls, DecodeStrategy};
pub use decode::{DECODE_FAILURES_METRIC, decode, describe_metrics};
pub use error::{DecodeError, PgError, PgResult};
pub use registry::{Category, Scalar};
pub use value::{
    PgBox, PgCircle, PgLine, PgLineSegment, PgPath, PgPoint, PgPolygon, PgTid, PgValue,
};
