//! Scalar decoders for the server's text output formats.
//!
//! Each function takes the full text of one value and either produces
//! the target representation or reports a [`DecodeError`] carrying the
//! offending input. None of them trim or normalize: the server's output
//! is exact, so surrounding whitespace is a decode failure, not noise.

pub mod array;
pub mod geometry;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::error::DecodeError;
use crate::value::PgTid;

/// Decodes `int2` and `int4` text.
pub fn decode_int(s: &str) -> Result<i32, DecodeError> {
    s.parse()
        .map_err(|_| DecodeError::InvalidInt(s.to_string()))
}

/// Decodes `int8` and `xid` text. `xid` is unsigned 32-bit on the
/// server, so its upper half only fits the wide target.
pub fn decode_bigint(s: &str) -> Result<i64, DecodeError> {
    s.parse()
        .map_err(|_| DecodeError::InvalidBigInt(s.to_string()))
}

/// Decodes `float4` text, including `Infinity`, `-Infinity` and `NaN`.
pub fn decode_float(s: &str) -> Result<f64, DecodeError> {
    s.parse()
        .map_err(|_| DecodeError::InvalidFloat(s.to_string()))
}

/// Decodes boolean text.
///
/// The server itself prints only `t` and `f`, but the input grammar for
/// casts accepts the longer spellings, so all of them are recognized
/// here. Anything else is a decode failure rather than a guess.
pub fn decode_boolean(s: &str) -> Result<bool, DecodeError> {
    match s.to_ascii_lowercase().as_str() {
        "t" | "true" | "y" | "yes" | "on" | "1" => Ok(true),
        "f" | "false" | "n" | "no" | "off" | "0" => Ok(false),
        _ => Err(DecodeError::InvalidBool(s.to_string())),
    }
}

/// Decodes `bytea` text in either of the server's two output formats.
///
/// A `\x` prefix selects hex format; everything else is treated as the
/// legacy escape format (printable bytes verbatim, `\ooo` octal escapes,
/// doubled backslashes). A dangling or unpaired backslash is a decode
/// failure.
pub fn decode_bytea(s: &str) -> Result<Vec<u8>, DecodeError> {
    let decoded = match s.strip_prefix("\\x") {
        Some(hex) => decode_bytea_hex(hex),
        None => decode_bytea_escape(s),
    };
    decoded.ok_or_else(|| DecodeError::InvalidBytea(s.to_string()))
}

fn decode_bytea_hex(hex: &str) -> Option<Vec<u8>> {
    let digits = hex.as_bytes();
    if digits.len() % 2 != 0 {
        return None;
    }
    let mut out = Vec::with_capacity(digits.len() / 2);
    for pair in digits.chunks_exact(2) {
        let hi = char::from(pair[0]).to_digit(16)?;
        let lo = char::from(pair[1]).to_digit(16)?;
        out.push((hi * 16 + lo) as u8);
    }
    Some(out)
}

fn decode_bytea_escape(s: &str) -> Option<Vec<u8>> {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'\\' {
            out.push(bytes[i]);
            i += 1;
        } else if i + 3 < bytes.len()
            && bytes[i + 1..=i + 3].iter().all(|b| (b'0'..=b'7').contains(b))
        {
            // \ooo octal escape.
            let value = u32::from(bytes[i + 1] - b'0') * 64
                + u32::from(bytes[i + 2] - b'0') * 8
                + u32::from(bytes[i + 3] - b'0');
            out.push(value as u8);
            i += 4;
        } else {
            // A run of backslashes encodes half as many literal ones. An
            // odd run is fine only when the leftover backslash starts an
            // octal escape on the next pass.
            let mut run = 1;
            while i + run < bytes.len() && bytes[i + run] == b'\\' {
                run += 1;
            }
            if run == 1 {
                return None;
            }
            for _ in 0..run / 2 {
                out.push(b'\\');
            }
            i += (run / 2) * 2;
        }
    }
    Some(out)
}

/// Decodes a `date` in ISO style, plus the special `infinity` values.
///
/// `infinity` and `-infinity` clamp to the extremes of the representable
/// date range.
pub fn decode_date(s: &str) -> Result<NaiveDate, DecodeError> {
    match s {
        "infinity" => Ok(NaiveDate::MAX),
        "-infinity" => Ok(NaiveDate::MIN),
        _ => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| DecodeError::InvalidDate(s.to_string())),
    }
}

/// Decodes `timestamp` and `timestamptz` text in ISO style.
///
/// `timestamptz` values carry the session's UTC offset and keep it.
/// Plain `timestamp` values have no zone on the wire and are tagged UTC,
/// as is the date-only form. `infinity` and `-infinity` clamp to the
/// representable extremes.
pub fn decode_datetime(s: &str) -> Result<DateTime<FixedOffset>, DecodeError> {
    match s {
        "infinity" => return Ok(DateTime::<Utc>::MAX_UTC.fixed_offset()),
        "-infinity" => return Ok(DateTime::<Utc>::MIN_UTC.fixed_offset()),
        _ => {}
    }
    if let Ok(datetime) = DateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f%#z") {
        return Ok(datetime);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f") {
        return Ok(naive.and_utc().fixed_offset());
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc().fixed_offset());
    }
    Err(DecodeError::InvalidTimestamp(s.to_string()))
}

/// Decodes `json` and `jsonb` text into a JSON tree.
pub fn decode_json(s: &str) -> Result<serde_json::Value, DecodeError> {
    serde_json::from_str(s).map_err(|err| DecodeError::InvalidJson(err.to_string()))
}

/// Decodes a `tid` row locator, `(block,offset)`.
pub fn decode_tid(s: &str) -> Result<PgTid, DecodeError> {
    let invalid = || DecodeError::InvalidTid(s.to_string());
    let inner = s
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(invalid)?;
    let (block, offset) = inner.split_once(',').ok_or_else(invalid)?;
    Ok(PgTid {
        block_number: block.parse().map_err(|_| invalid())?,
        offset_number: offset.parse().map_err(|_| invalid())?,
    })
}
