use proptest::prelude::*;

use pgwren::{ClientControls, Column, DecodeStrategy, Format, PgError, PgValue, decode, oid};

fn column(type_oid: u32) -> Column {
    Column {
        name: "c".to_string(),
        table_oid: 0,
        index: 0,
        type_oid,
        column_length: -1,
        type_modifier: -1,
        format: Format::Text,
    }
}

fn string_controls() -> ClientControls {
    ClientControls {
        decode_strategy: DecodeStrategy::String,
    }
}

proptest! {
    // Text-format decoding is total: arbitrary bytes against an
    // arbitrary OID may produce null, never an error or a panic.
    #[test]
    fn test_text_format_decode_never_fails(
        bytes in proptest::collection::vec(any::<u8>(), 0..256),
        type_oid in any::<u32>(),
    ) {
        let result = decode(&bytes, &column(type_oid), None);
        prop_assert!(result.is_ok());
    }

    #[test]
    fn test_binary_format_always_fails(
        bytes in proptest::collection::vec(any::<u8>(), 0..64),
        type_oid in any::<u32>(),
    ) {
        let mut col = column(type_oid);
        col.format = Format::Binary;
        prop_assert_eq!(decode(&bytes, &col, None), Err(PgError::BinaryNotImplemented));
    }

    // The string strategy is an exact echo regardless of type.
    #[test]
    fn test_string_strategy_echoes_exact_text(
        s in any::<String>(),
        type_oid in any::<u32>(),
    ) {
        let decoded = decode(s.as_bytes(), &column(type_oid), Some(&string_controls())).unwrap();
        prop_assert_eq!(decoded, PgValue::Text(s));
    }

    #[test]
    fn test_text_category_is_identity(s in any::<String>()) {
        let decoded = decode(s.as_bytes(), &column(oid::TEXT), None).unwrap();
        prop_assert_eq!(decoded, PgValue::Text(s));
    }

    #[test]
    fn test_int4_round_trip(n in any::<i32>()) {
        let decoded = decode(n.to_string().as_bytes(), &column(oid::INT4), None).unwrap();
        prop_assert_eq!(decoded, PgValue::Int(n));
    }

    #[test]
    fn test_int8_round_trip(n in any::<i64>()) {
        let decoded = decode(n.to_string().as_bytes(), &column(oid::INT8), None).unwrap();
        prop_assert_eq!(decoded, PgValue::BigInt(n));
    }

    #[test]
    fn test_float4_round_trip(x in any::<f64>().prop_filter("NaN has no equality", |x| !x.is_nan())) {
        let decoded = decode(x.to_string().as_bytes(), &column(oid::FLOAT4), None).unwrap();
        prop_assert_eq!(decoded, PgValue::Float(x));
    }

    #[test]
    fn test_date_round_trip(y in 1i32..=9999, m in 1u32..=12, d in 1u32..=28) {
        let literal = format!("{y:04}-{m:02}-{d:02}");
        let decoded = decode(literal.as_bytes(), &column(oid::DATE), None).unwrap();
        let expected = chrono::NaiveDate::from_ymd_opt(y, m, d).unwrap();
        prop_assert_eq!(decoded, PgValue::Date(expected));
    }

    #[test]
    fn test_bytea_hex_round_trip(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        let mut literal = String::from("\\x");
        for byte in &bytes {
            literal.push_str(&format!("{byte:02x}"));
        }
        let decoded = decode(literal.as_bytes(), &column(oid::BYTEA), None).unwrap();
        prop_assert_eq!(decoded, PgValue::Bytes(bytes));
    }

    #[test]
    fn test_int_array_round_trip(values in proptest::collection::vec(proptest::option::of(any::<i32>()), 0..32)) {
        let rendered: Vec<String> = values
            .iter()
            .map(|v| match v {
                Some(n) => n.to_string(),
                None => "NULL".to_string(),
            })
            .collect();
        let literal = format!("{{{}}}", rendered.join(","));

        let decoded = decode(literal.as_bytes(), &column(oid::INT4_ARRAY), None).unwrap();
        let expected: Vec<PgValue> = values
            .iter()
            .map(|v| match v {
                Some(n) => PgValue::Int(*n),
                None => PgValue::Null,
            })
            .collect();
        prop_assert_eq!(decoded, PgValue::Array(expected));
    }
}
