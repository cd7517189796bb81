//! Value decoding entry point.
//!
//! [`decode`] routes on the column's wire format: text values flow into
//! the typed pipeline, binary values fail fast. The pipeline itself
//! never fails. A value whose text does not match its type's grammar is
//! logged and replaced with [`PgValue::Null`], so one corrupt value
//! cannot abort the rest of a result set.

use metrics::{counter, describe_counter};
use tracing::warn;

use crate::column::{Column, Format};
use crate::controls::{ClientControls, DecodeStrategy};
use crate::decoders::{self, array, geometry};
use crate::error::{DecodeError, PgError, PgResult};
use crate::registry::{Category, Scalar};
use crate::value::PgValue;

/// Counter of values replaced with null after a decode failure,
/// labelled by type category.
pub const DECODE_FAILURES_METRIC: &str = "pgwren_decode_failures_total";

/// Registers metric descriptions with the installed recorder. Optional;
/// call once at startup if the exporter surfaces descriptions.
pub fn describe_metrics() {
    describe_counter!(
        DECODE_FAILURES_METRIC,
        "Values replaced with null after a text decode failure"
    );
}

/// Decodes one column's raw bytes into a [`PgValue`].
///
/// Routing is driven by the column's wire format:
///
/// * `Text` values go through the typed pipeline, or straight to
///   [`PgValue::Text`] when `controls` selects the `string` strategy.
/// * `Binary` values fail with [`PgError::BinaryNotImplemented`]; there
///   is no null fallback for an unsupported format.
///
/// The typed pipeline resolves the column's type OID to a category and
/// runs the matching decoder. Invalid UTF-8 decodes lossily to
/// replacement characters first. A value whose text then fails its
/// type's grammar is contained: one warning carrying the type OID and
/// the error is emitted (with a matching [`DECODE_FAILURES_METRIC`]
/// bump) and the value becomes [`PgValue::Null`]. Unrecognized OIDs
/// pass through as text and are never an error.
pub fn decode(
    value: &[u8],
    column: &Column,
    controls: Option<&ClientControls>,
) -> PgResult<PgValue> {
    match column.format {
        Format::Binary => Err(PgError::BinaryNotImplemented),
        Format::Text => {
            let text = String::from_utf8_lossy(value);
            let strategy = controls.map(|c| c.decode_strategy).unwrap_or_default();
            if strategy == DecodeStrategy::String {
                return Ok(PgValue::Text(text.into_owned()));
            }
            Ok(decode_text(&text, column.type_oid))
        }
    }
}

fn decode_text(text: &str, type_oid: u32) -> PgValue {
    let category = Category::from_oid(type_oid);
    let result = match category {
        Category::Scalar(kind) => decode_scalar(text, kind),
        Category::Array(kind) => decode_array(text, kind),
        // Not knowing a type is not an error; hand its text back.
        Category::Unrecognized => return PgValue::Text(text.to_string()),
    };
    result.unwrap_or_else(|error| {
        warn!(type_oid, %error, "error decoding value, defaulting to null");
        counter!(DECODE_FAILURES_METRIC, "category" => category.label()).increment(1);
        PgValue::Null
    })
}

fn decode_scalar(text: &str, kind: Scalar) -> Result<PgValue, DecodeError> {
    match kind {
        Scalar::Text => Ok(PgValue::Text(text.to_string())),
        Scalar::Float => decoders::decode_float(text).map(PgValue::Float),
        Scalar::Int => decoders::decode_int(text).map(PgValue::Int),
        Scalar::BigInt => decoders::decode_bigint(text).map(PgValue::BigInt),
        Scalar::Bool => decoders::decode_boolean(text).map(PgValue::Bool),
        Scalar::Bytea => decoders::decode_bytea(text).map(PgValue::Bytes),
        Scalar::Date => decoders::decode_date(text).map(PgValue::Date),
        Scalar::Timestamp => decoders::decode_datetime(text).map(PgValue::Timestamp),
        Scalar::Json => decoders::decode_json(text).map(PgValue::Json),
        Scalar::Point => geometry::decode_point(text).map(PgValue::Point),
        Scalar::Line => geometry::decode_line(text).map(PgValue::Line),
        Scalar::LineSegment => geometry::decode_lseg(text).map(PgValue::LineSegment),
        Scalar::Box => geometry::decode_box(text).map(PgValue::Box),
        Scalar::Path => geometry::decode_path(text).map(PgValue::Path),
        Scalar::Polygon => geometry::decode_polygon(text).map(PgValue::Polygon),
        Scalar::Circle => geometry::decode_circle(text).map(PgValue::Circle),
        Scalar::Tid => decoders::decode_tid(text).map(PgValue::Tid),
    }
}

fn decode_array(text: &str, kind: Scalar) -> Result<PgValue, DecodeError> {
    array::parse_array(
        text,
        |element| decode_scalar(element, kind),
        kind.array_delimiter(),
    )
    .map(PgValue::Array)
}
