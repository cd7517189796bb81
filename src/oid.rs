//! PostgreSQL type OIDs.
//!
//! Stable object identifiers from `pg_catalog.pg_type` for the built-in
//! types this crate recognizes, plus a few neighbours that deliberately
//! stay unmapped (they fall back to raw text). Array OIDs carry an
//! `_ARRAY` suffix.

// Boolean
pub const BOOL: u32 = 16;
pub const BOOL_ARRAY: u32 = 1000;

// Binary data
pub const BYTEA: u32 = 17;
pub const BYTEA_ARRAY: u32 = 1001;

// Character types
pub const CHAR: u32 = 18;
pub const CHAR_ARRAY: u32 = 1002;
pub const NAME: u32 = 19;
pub const NAME_ARRAY: u32 = 1003;
pub const TEXT: u32 = 25;
pub const TEXT_ARRAY: u32 = 1009;
pub const BPCHAR: u32 = 1042;
pub const BPCHAR_ARRAY: u32 = 1014;
pub const VARCHAR: u32 = 1043;
pub const VARCHAR_ARRAY: u32 = 1015;

// Integer types
pub const INT8: u32 = 20;
pub const INT8_ARRAY: u32 = 1016;
pub const INT2: u32 = 21;
pub const INT2_ARRAY: u32 = 1005;
pub const INT4: u32 = 23;
pub const INT4_ARRAY: u32 = 1007;

// Object identifier types
pub const OID: u32 = 26;
pub const OID_ARRAY: u32 = 1028;
pub const TID: u32 = 27;
pub const TID_ARRAY: u32 = 1010;
pub const XID: u32 = 28;
pub const XID_ARRAY: u32 = 1011;
pub const CID: u32 = 29;
pub const CID_ARRAY: u32 = 1012;

// Registered-object aliases
pub const REGPROC: u32 = 24;
pub const REGPROC_ARRAY: u32 = 1008;
pub const REGPROCEDURE: u32 = 2202;
pub const REGPROCEDURE_ARRAY: u32 = 2207;
pub const REGOPER: u32 = 2203;
pub const REGOPER_ARRAY: u32 = 2208;
pub const REGOPERATOR: u32 = 2204;
pub const REGOPERATOR_ARRAY: u32 = 2209;
pub const REGCLASS: u32 = 2205;
pub const REGCLASS_ARRAY: u32 = 2210;
pub const REGTYPE: u32 = 2206;
pub const REGTYPE_ARRAY: u32 = 2211;
pub const REGCONFIG: u32 = 3734;
pub const REGCONFIG_ARRAY: u32 = 3735;
pub const REGDICTIONARY: u32 = 3769;
pub const REGDICTIONARY_ARRAY: u32 = 3770;
pub const REGNAMESPACE: u32 = 4089;
pub const REGNAMESPACE_ARRAY: u32 = 4090;
pub const REGROLE: u32 = 4096;
pub const REGROLE_ARRAY: u32 = 4097;

// JSON
pub const JSON: u32 = 114;
pub const JSON_ARRAY: u32 = 199;
pub const JSONB: u32 = 3802;
pub const JSONB_ARRAY: u32 = 3807;

// Geometric types
pub const POINT: u32 = 600;
pub const POINT_ARRAY: u32 = 1017;
pub const LSEG: u32 = 601;
pub const LSEG_ARRAY: u32 = 1018;
pub const PATH: u32 = 602;
pub const PATH_ARRAY: u32 = 1019;
pub const BOX: u32 = 603;
pub const BOX_ARRAY: u32 = 1020;
pub const POLYGON: u32 = 604;
pub const POLYGON_ARRAY: u32 = 1027;
pub const LINE: u32 = 628;
pub const LINE_ARRAY: u32 = 629;
pub const CIRCLE: u32 = 718;
pub const CIRCLE_ARRAY: u32 = 719;

// Network address types
pub const CIDR: u32 = 650;
pub const CIDR_ARRAY: u32 = 651;
pub const MACADDR: u32 = 829;
pub const MACADDR_ARRAY: u32 = 1040;
pub const INET: u32 = 869;
pub const INET_ARRAY: u32 = 1041;

// Floating-point types
pub const FLOAT4: u32 = 700;
pub const FLOAT4_ARRAY: u32 = 1021;
pub const FLOAT8: u32 = 701;
pub const FLOAT8_ARRAY: u32 = 1022;

// Arbitrary-precision numeric
pub const NUMERIC: u32 = 1700;
pub const NUMERIC_ARRAY: u32 = 1231;

// Date/time types
pub const DATE: u32 = 1082;
pub const DATE_ARRAY: u32 = 1182;
pub const TIME: u32 = 1083;
pub const TIME_ARRAY: u32 = 1183;
pub const TIMESTAMP: u32 = 1114;
pub const TIMESTAMP_ARRAY: u32 = 1115;
pub const TIMESTAMPTZ: u32 = 1184;
pub const TIMESTAMPTZ_ARRAY: u32 = 1185;
pub const INTERVAL: u32 = 1186;
pub const INTERVAL_ARRAY: u32 = 1187;
pub const TIMETZ: u32 = 1266;
pub const TIMETZ_ARRAY: u32 = 1270;

// UUID
pub const UUID: u32 = 2950;
pub const UUID_ARRAY: u32 = 2951;

// Pseudo-types
pub const VOID: u32 = 2278;
pub const UNKNOWN: u32 = 705;

// Vector forms used inside pg_catalog; kept unmapped on purpose.
pub const INT2VECTOR: u32 = 22;
pub const OIDVECTOR: u32 = 30;

// Money; locale-dependent output, kept unmapped on purpose.
pub const MONEY: u32 = 790;
pub const MONEY_ARRAY: u32 = 791;
