//! Round-trip tests: `serialize(parse(bytes)) == bytes` for hand-built frames
//! across every command family, and `parse(serialize(cmd)) == cmd` for
//! commands built from scratch.

use bytes::{BufMut, BytesMut};
use respb::{frame_to_bytes, opcodes, parse_one, write_frame, ParsedCommand};

fn short(buf: &mut BytesMut, data: &[u8]) {
    buf.put_u16(data.len() as u16);
    buf.put_slice(data);
}

fn long(buf: &mut BytesMut, data: &[u8]) {
    buf.put_u32(data.len() as u32);
    buf.put_slice(data);
}

fn assert_bit_exact_roundtrip(frame: &[u8]) {
    let (cmd, consumed) = parse_one(frame, 0)
        .expect("frame must parse")
        .expect("frame must be complete");
    assert_eq!(consumed, frame.len(), "whole frame must be consumed");

    let mut out = vec![0u8; frame.len()];
    let written = write_frame(&cmd, &mut out).expect("serialization must fit");
    assert_eq!(written, frame.len());
    assert_eq!(out, frame, "serializer must reproduce the input bitwise");

    // And the reparse is deep-equal to the original parse.
    let (again, _) = parse_one(&out, 0).unwrap().unwrap();
    assert_eq!(again, cmd);
}

#[test]
fn roundtrip_string_family() {
    // GET
    let mut f = BytesMut::new();
    f.put_u16(opcodes::strings::GET);
    f.put_u16(3);
    short(&mut f, b"user:1000");
    assert_bit_exact_roundtrip(&f);

    // SET with a live expiry block.
    let mut f = BytesMut::new();
    f.put_u16(opcodes::strings::SET);
    f.put_u16(0);
    short(&mut f, b"session");
    long(&mut f, b"token-abc123");
    f.put_u8(0x05);
    f.put_u64(1_999_999_999);
    assert_bit_exact_roundtrip(&f);

    // MSET with two pairs.
    let mut f = BytesMut::new();
    f.put_u16(opcodes::strings::MSET);
    f.put_u16(0);
    f.put_u16(2);
    short(&mut f, b"a");
    long(&mut f, b"1");
    short(&mut f, b"b");
    long(&mut f, b"2");
    assert_bit_exact_roundtrip(&f);

    // INCRBY carries its operand opaquely.
    let mut f = BytesMut::new();
    f.put_u16(opcodes::strings::INCRBY);
    f.put_u16(0);
    short(&mut f, b"counter");
    f.put_i64(-17);
    assert_bit_exact_roundtrip(&f);
}

#[test]
fn roundtrip_list_family() {
    let mut f = BytesMut::new();
    f.put_u16(opcodes::lists::LPUSH);
    f.put_u16(1);
    short(&mut f, b"queue");
    f.put_u16(3);
    short(&mut f, b"job-1");
    short(&mut f, b"job-2");
    short(&mut f, b"job-3");
    assert_bit_exact_roundtrip(&f);

    // BLPOP: key list then timeout.
    let mut f = BytesMut::new();
    f.put_u16(opcodes::lists::BLPOP);
    f.put_u16(1);
    f.put_u16(2);
    short(&mut f, b"q1");
    short(&mut f, b"q2");
    f.put_u64(5000);
    assert_bit_exact_roundtrip(&f);
}

#[test]
fn roundtrip_set_and_hash_families() {
    let mut f = BytesMut::new();
    f.put_u16(opcodes::sets::SADD);
    f.put_u16(0);
    short(&mut f, b"tags");
    f.put_u16(2);
    short(&mut f, b"rust");
    short(&mut f, b"protocol");
    assert_bit_exact_roundtrip(&f);

    let mut f = BytesMut::new();
    f.put_u16(opcodes::hashes::HSET);
    f.put_u16(0);
    short(&mut f, b"user:1");
    f.put_u16(2);
    short(&mut f, b"name");
    long(&mut f, b"Ada");
    short(&mut f, b"email");
    long(&mut f, b"ada@example.com");
    assert_bit_exact_roundtrip(&f);

    // HEXPIRE: ttl+flags block, then field list.
    let mut f = BytesMut::new();
    f.put_u16(opcodes::hashes::HEXPIRE);
    f.put_u16(0);
    short(&mut f, b"user:1");
    f.put_u64(3600);
    f.put_u8(0);
    f.put_u16(2);
    short(&mut f, b"name");
    short(&mut f, b"email");
    assert_bit_exact_roundtrip(&f);
}

#[test]
fn roundtrip_sorted_set_family() {
    // ZADD parses the full score/member pair list; scores stay opaque.
    let mut f = BytesMut::new();
    f.put_u16(opcodes::sorted_sets::ZADD);
    f.put_u16(0);
    short(&mut f, b"leaderboard");
    f.put_u8(0x02);
    f.put_u16(2);
    f.put_f64(99.5);
    short(&mut f, b"alice");
    f.put_f64(88.25);
    short(&mut f, b"bob");
    assert_bit_exact_roundtrip(&f);

    let (cmd, _) = parse_one(&f, 0).unwrap().unwrap();
    assert_eq!(
        cmd.args(),
        [b"leaderboard".as_slice(), b"alice", b"bob"],
        "members surface as arguments, scores do not"
    );

    let mut f = BytesMut::new();
    f.put_u16(opcodes::sorted_sets::ZRANGEBYSCORE);
    f.put_u16(0);
    short(&mut f, b"leaderboard");
    f.put_i64(0);
    f.put_i64(100);
    f.put_u8(0x01);
    assert_bit_exact_roundtrip(&f);
}

#[test]
fn roundtrip_remaining_families() {
    // Bitmap
    let mut f = BytesMut::new();
    f.put_u16(opcodes::bitmap::SETBIT);
    f.put_u16(0);
    short(&mut f, b"bits");
    f.put_u64(1024);
    f.put_u8(1);
    assert_bit_exact_roundtrip(&f);

    // HyperLogLog
    let mut f = BytesMut::new();
    f.put_u16(opcodes::hyperloglog::PFCOUNT);
    f.put_u16(0);
    f.put_u16(2);
    short(&mut f, b"hll:a");
    short(&mut f, b"hll:b");
    assert_bit_exact_roundtrip(&f);

    // Geo: coordinate pairs are opaque 16-byte blocks.
    let mut f = BytesMut::new();
    f.put_u16(opcodes::geo::GEOADD);
    f.put_u16(0);
    short(&mut f, b"points");
    f.put_u8(0);
    f.put_u16(1);
    f.put_f64(13.361389);
    f.put_f64(38.115556);
    short(&mut f, b"Palermo");
    assert_bit_exact_roundtrip(&f);

    // Streams
    let mut f = BytesMut::new();
    f.put_u16(opcodes::streams::XADD);
    f.put_u16(0);
    short(&mut f, b"events");
    short(&mut f, b"*");
    f.put_u16(1);
    short(&mut f, b"type");
    long(&mut f, b"login");
    assert_bit_exact_roundtrip(&f);

    // Pub/Sub
    let mut f = BytesMut::new();
    f.put_u16(opcodes::pubsub::PUBLISH);
    f.put_u16(0);
    short(&mut f, b"news");
    long(&mut f, b"hello subscribers");
    assert_bit_exact_roundtrip(&f);

    // Transactions
    let mut f = BytesMut::new();
    f.put_u16(opcodes::transactions::WATCH);
    f.put_u16(0);
    f.put_u16(1);
    short(&mut f, b"balance");
    assert_bit_exact_roundtrip(&f);

    // Scripting: two independent counted lists.
    let mut f = BytesMut::new();
    f.put_u16(opcodes::scripting::EVAL);
    f.put_u16(0);
    long(&mut f, b"return redis.call('GET', KEYS[1])");
    f.put_u16(1);
    short(&mut f, b"mykey");
    f.put_u16(2);
    short(&mut f, b"arg1");
    short(&mut f, b"arg2");
    assert_bit_exact_roundtrip(&f);

    // Generic keys
    let mut f = BytesMut::new();
    f.put_u16(opcodes::keys::RESTORE);
    f.put_u16(0);
    short(&mut f, b"dst");
    f.put_u64(0);
    long(&mut f, &[0xDE, 0xAD, 0xBE, 0xEF]);
    f.put_u8(0);
    assert_bit_exact_roundtrip(&f);

    // Connection / cluster / server
    let mut f = BytesMut::new();
    f.put_u16(opcodes::connection::SELECT);
    f.put_u16(0);
    f.put_u16(3);
    assert_bit_exact_roundtrip(&f);

    let mut f = BytesMut::new();
    f.put_u16(opcodes::cluster::ASKING);
    f.put_u16(0);
    assert_bit_exact_roundtrip(&f);

    let mut f = BytesMut::new();
    f.put_u16(opcodes::server_cmds::REPLICAOF);
    f.put_u16(0);
    short(&mut f, b"10.0.0.1");
    f.put_u16(6379);
    assert_bit_exact_roundtrip(&f);
}

#[test]
fn roundtrip_module_frames() {
    // BF.ADD
    let mut f = BytesMut::new();
    f.put_u16(0xF000);
    f.put_u16(5);
    f.put_u32(0x0001_0000);
    short(&mut f, b"seen");
    short(&mut f, b"item-42");
    assert_bit_exact_roundtrip(&f);

    // JSON.GET with two paths.
    let mut f = BytesMut::new();
    f.put_u16(0xF000);
    f.put_u16(0);
    f.put_u32(0x0000_0001);
    short(&mut f, b"doc");
    f.put_u16(2);
    short(&mut f, b"$.a");
    short(&mut f, b"$.b");
    assert_bit_exact_roundtrip(&f);

    // Unknown module falls back to single-key framing.
    let mut f = BytesMut::new();
    f.put_u16(0xF000);
    f.put_u16(0);
    f.put_u32(0x7777_0001);
    short(&mut f, b"whatever");
    assert_bit_exact_roundtrip(&f);
}

#[test]
fn synthesized_commands_reparse_identically() {
    let cases: Vec<ParsedCommand<'_>> = vec![
        ParsedCommand::new(opcodes::strings::GET, 1, &[b"k"]),
        ParsedCommand::new(opcodes::strings::SET, 2, &[b"k", b"v"]),
        ParsedCommand::new(opcodes::strings::MGET, 3, &[b"a", b"b", b"c"]),
        ParsedCommand::new(opcodes::hashes::HSET, 4, &[b"h", b"f1", b"v1", b"f2", b"v2"]),
        ParsedCommand::new(opcodes::transactions::MULTI, 5, &[]),
        ParsedCommand::module(6, 0x0002, 0x0001, &[b"idx", b"query"]),
        ParsedCommand::passthrough(7, b"*1\r\n$4\r\nPING\r\n"),
    ];

    for cmd in &cases {
        let bytes = frame_to_bytes(cmd).unwrap();
        let (parsed, consumed) = parse_one(&bytes, 0).unwrap().unwrap();
        assert_eq!(consumed, bytes.len());
        assert_eq!(parsed.opcode(), cmd.opcode());
        assert_eq!(parsed.mux_id(), cmd.mux_id());
        assert_eq!(parsed.args(), cmd.args());
        assert_eq!(parsed.module_command(), cmd.module_command());
        assert_eq!(parsed.resp_data(), cmd.resp_data());
    }
}

#[test]
fn every_registered_opcode_roundtrips_when_synthesized() {
    // Walking the whole table: synthesize a plausible command for each
    // opcode, serialize, reparse, and re-serialize. The two serializations
    // must agree bitwise even where the grammars carry opaque fields.
    let a: &[u8] = b"alpha";
    let b: &[u8] = b"beta";
    let c: &[u8] = b"gamma";
    let args = [a, b, c];

    for (opcode, spec) in opcodes::table().iter() {
        let cmd = ParsedCommand::new(opcode, 0x0101, &args);
        let first = frame_to_bytes(&cmd)
            .unwrap_or_else(|e| panic!("{} failed to serialize: {e}", spec.name));
        let (parsed, consumed) = parse_one(&first, 0)
            .unwrap_or_else(|e| panic!("{} failed to reparse: {e}", spec.name))
            .unwrap_or_else(|| panic!("{} reparse incomplete", spec.name));
        assert_eq!(consumed, first.len(), "{}", spec.name);

        let second = frame_to_bytes(&parsed).unwrap();
        assert_eq!(first, second, "{} must round-trip bitwise", spec.name);
    }
}
