//! Error types for PostgreSQL value decoding.
//!
//! Two severities exist and they never mix: [`PgError`] is fatal and
//! propagates to the caller, [`DecodeError`] is a per-value data problem
//! that the decode pipeline contains (logged, value replaced with null).

use thiserror::Error;

/// Fatal decoding errors.
///
/// These are programmer-facing conditions, not properties of the data:
/// either a feature gap (binary format) or a broken contract with the
/// row-description layer (format code outside the protocol's two values).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PgError {
    /// The column uses the binary wire format, which this crate does not
    /// decode. Never downgraded to a null value.
    #[error("decoding binary format data is not implemented")]
    BinaryNotImplemented,

    /// The row-description layer produced a format code outside {0, 1}.
    #[error("unknown column format code: {0}")]
    UnknownFormat(i16),
}

/// Result type for decoding operations.
pub type PgResult<T> = Result<T, PgError>;

/// Per-value decoding errors.
///
/// Raised when a column's text does not match the grammar of its type
/// category. The pipeline catches these itself: it logs a warning with
/// the type OID and substitutes null, so one bad value never aborts the
/// rest of a result set. Each variant carries the offending text to make
/// that warning actionable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    #[error("invalid integer: {0:?}")]
    InvalidInt(String),

    #[error("invalid bigint: {0:?}")]
    InvalidBigInt(String),

    #[error("invalid float: {0:?}")]
    InvalidFloat(String),

    #[error("invalid boolean token: {0:?}")]
    InvalidBool(String),

    #[error("invalid bytea encoding: {0:?}")]
    InvalidBytea(String),

    #[error("invalid date: {0:?}")]
    InvalidDate(String),

    #[error("invalid timestamp: {0:?}")]
    InvalidTimestamp(String),

    /// JSON syntax error; carries the serde_json message rather than the
    /// source error so the type stays cloneable and comparable.
    #[error("invalid json: {0}")]
    InvalidJson(String),

    #[error("invalid {shape}: {input:?}")]
    InvalidGeometry {
        shape: &'static str,
        input: String,
    },

    #[error("invalid tid: {0:?}")]
    InvalidTid(String),

    #[error("array dimensions not balanced: {0:?}")]
    UnbalancedArray(String),

    /// Carries the bound rather than the source text, which can be
    /// megabytes of braces.
    #[error("array nesting exceeds {0} dimensions")]
    ArrayTooDeep(usize),
}
