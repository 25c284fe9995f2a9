//! Geospatial command opcodes (`0x0180`-`0x01BF`).
//!
//! Coordinates travel as opaque 8-byte fields; the core does not interpret
//! them.

use super::{Category, OpcodeTable};
use crate::protocol::grammar::{self, Field, Grammar};

pub const GEOADD: u16 = 0x0180;
pub const GEODIST: u16 = 0x0181;
pub const GEOHASH: u16 = 0x0182;
pub const GEOPOS: u16 = 0x0183;
pub const GEORADIUS: u16 = 0x0184;
pub const GEORADIUSBYMEMBER: u16 = 0x0185;
pub const GEORADIUS_RO: u16 = 0x0186;
pub const GEORADIUSBYMEMBER_RO: u16 = 0x0187;
pub const GEOSEARCH: u16 = 0x0188;
pub const GEOSEARCHSTORE: u16 = 0x0189;

/// `[key, flags:fixed(1), count_u16_then [lon+lat:fixed(16), member]]`
const GEOADD_PAYLOAD: Grammar = &[
    Field::Short,
    Field::Fixed(1),
    Field::Count(&[Field::Fixed(16), Field::Short]),
];

/// `[key, member1, member2, unit:fixed(1)]`
const GEODIST_PAYLOAD: Grammar = &[Field::Short, Field::Short, Field::Short, Field::Fixed(1)];

/// `[key, center+radius+unit+flags:fixed(18)]`
const GEORADIUS_PAYLOAD: Grammar = &[Field::Short, Field::Fixed(18)];

/// `[key, member, radius:fixed(8) + unit:fixed(1) + flags:fixed(1)]`
const GEORADIUSBYMEMBER_PAYLOAD: Grammar = &[Field::Short, Field::Short, Field::Fixed(10)];

/// `[key, flags:fixed(1)]`
const GEOSEARCH_PAYLOAD: Grammar = &[Field::Short, Field::Fixed(1)];

/// `[dst, src, flags:fixed(1)]`
const GEOSEARCHSTORE_PAYLOAD: Grammar = &[Field::Short, Field::Short, Field::Fixed(1)];

pub(crate) fn register(table: &mut OpcodeTable) {
    table.insert(GEOADD, "GEOADD", Category::Geo, GEOADD_PAYLOAD);
    table.insert(GEODIST, "GEODIST", Category::Geo, GEODIST_PAYLOAD);
    table.insert(GEOHASH, "GEOHASH", Category::Geo, grammar::KEY_ELEMS);
    table.insert(GEOPOS, "GEOPOS", Category::Geo, grammar::KEY_ELEMS);
    table.insert(GEORADIUS, "GEORADIUS", Category::Geo, GEORADIUS_PAYLOAD);
    table.insert(GEORADIUSBYMEMBER, "GEORADIUSBYMEMBER", Category::Geo, GEORADIUSBYMEMBER_PAYLOAD);
    table.insert(GEORADIUS_RO, "GEORADIUS_RO", Category::Geo, GEORADIUS_PAYLOAD);
    table.insert(
        GEORADIUSBYMEMBER_RO,
        "GEORADIUSBYMEMBER_RO",
        Category::Geo,
        GEORADIUSBYMEMBER_PAYLOAD,
    );
    table.insert(GEOSEARCH, "GEOSEARCH", Category::Geo, GEOSEARCH_PAYLOAD);
    table.insert(GEOSEARCHSTORE, "GEOSEARCHSTORE", Category::Geo, GEOSEARCHSTORE_PAYLOAD);
}
