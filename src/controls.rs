//! Client-side decoding controls.

use serde::{Deserialize, Serialize};

/// How the decoder maps text-format values to Rust types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodeStrategy {
    /// Decode each value according to its type OID.
    #[default]
    Auto,
    /// Return every value as its unparsed text. Useful when round-tripping
    /// values verbatim or when an extension type trips the typed decoders.
    String,
}

/// Decoding options a client hands to [`decode`](crate::decode::decode).
///
/// Kept as a struct rather than a bare enum so future knobs extend it
/// without touching call sites; `..Default::default()` fills the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClientControls {
    /// Strategy for mapping text values, `auto` unless configured.
    #[serde(default)]
    pub decode_strategy: DecodeStrategy,
}
