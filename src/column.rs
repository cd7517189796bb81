//! Result column descriptors.
//!
//! A [`Column`] mirrors one entry of the wire protocol's RowDescription
//! message. The decoder only consults `type_oid` and `format`; the other
//! fields ride along so callers can label and introspect result sets.

use serde::{Deserialize, Serialize};

use crate::error::{PgError, PgResult};

/// Wire format of a column's values, from the RowDescription format code.
///
/// The protocol defines exactly two codes. Converting from the raw `i16`
/// is the single place the "unknown format" contract is enforced, so a
/// bad code fails at column construction and never reaches value
/// decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Values arrive as UTF-8 text (format code 0).
    #[default]
    Text,
    /// Values arrive in the type-specific binary encoding (format code 1).
    Binary,
}

impl Format {
    /// The wire representation of this format.
    pub fn code(self) -> i16 {
        match self {
            Format::Text => 0,
            Format::Binary => 1,
        }
    }
}

impl TryFrom<i16> for Format {
    type Error = PgError;

    fn try_from(code: i16) -> PgResult<Self> {
        match code {
            0 => Ok(Format::Text),
            1 => Ok(Format::Binary),
            other => Err(PgError::UnknownFormat(other)),
        }
    }
}

/// Description of one column in a query result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column label from the query.
    pub name: String,
    /// OID of the originating table, or 0 for computed columns.
    pub table_oid: u32,
    /// Zero-based position of the column within the row.
    pub index: usize,
    /// OID of the column's data type.
    pub type_oid: u32,
    /// Declared length of the type, or -1 for variable-length types.
    pub column_length: i16,
    /// Type modifier (for example varchar length), or -1 when unused.
    pub type_modifier: i32,
    /// Wire format of the column's values.
    pub format: Format,
}

impl Column {
    /// Builds a column descriptor from raw RowDescription fields.
    ///
    /// Fails with [`PgError::UnknownFormat`] if `format_code` is outside
    /// the two values the protocol defines.
    pub fn new(
        name: impl Into<String>,
        table_oid: u32,
        index: usize,
        type_oid: u32,
        column_length: i16,
        type_modifier: i32,
        format_code: i16,
    ) -> PgResult<Self> {
        Ok(Self {
            name: name.into(),
            table_oid,
            index,
            type_oid,
            column_length,
            type_modifier,
            format: Format::try_from(format_code)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oid;

    #[test]
    fn test_format_round_trip() {
        assert_eq!(Format::try_from(0), Ok(Format::Text));
        assert_eq!(Format::try_from(1), Ok(Format::Binary));
        assert_eq!(Format::Text.code(), 0);
        assert_eq!(Format::Binary.code(), 1);
    }

    #[test]
    fn test_format_rejects_unknown_codes() {
        assert_eq!(Format::try_from(2), Err(PgError::UnknownFormat(2)));
        assert_eq!(Format::try_from(-1), Err(PgError::UnknownFormat(-1)));
    }

    #[test]
    fn test_column_new_validates_format() {
        let column = Column::new("id", 0, 0, oid::INT4, 4, -1, 0).unwrap();
        assert_eq!(column.format, Format::Text);
        assert_eq!(column.type_oid, oid::INT4);

        let err = Column::new("id", 0, 0, oid::INT4, 4, -1, 3).unwrap_err();
        assert_eq!(err, PgError::UnknownFormat(3));
    }
}
