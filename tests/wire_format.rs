//! Wire-format conformance tests.
//!
//! Each scenario pins the exact bytes of one frame shape: core, module, and
//! passthrough headers, truncation behavior, and the opcode-space partition.

use bytes::{BufMut, BytesMut};
use respb::protocol::{OP_MODULE, OP_RESP_PASSTHROUGH};
use respb::{opcodes, parse_one, peek_header, CommandStream, FrameError};

#[test]
fn simple_get() {
    let frame: &[u8] = &[
        0x00, 0x00, 0x00, 0x00, 0x00, 0x05, 0x6D, 0x79, 0x6B, 0x65, 0x79,
    ];
    let (cmd, offset) = parse_one(frame, 0).unwrap().unwrap();
    assert_eq!(cmd.opcode(), 0x0000);
    assert_eq!(cmd.mux_id(), 0);
    assert_eq!(cmd.argc(), 1);
    assert_eq!(cmd.arg(0), Some(b"mykey".as_slice()));
    assert_eq!(offset, 11);
}

#[test]
fn set_with_flags_and_expiry() {
    let frame: &[u8] = &[
        0x00, 0x01, 0x00, 0x00, // SET, mux 0
        0x00, 0x05, 0x6D, 0x79, 0x6B, 0x65, 0x79, // key "mykey"
        0x00, 0x00, 0x00, 0x07, 0x6D, 0x79, 0x76, 0x61, 0x6C, 0x75, 0x65, // value "myvalue"
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // flags + expiry
    ];
    assert_eq!(frame.len(), 31);
    let (cmd, offset) = parse_one(frame, 0).unwrap().unwrap();
    assert_eq!(cmd.opcode(), 0x0001);
    assert_eq!(cmd.mux_id(), 0);
    assert_eq!(cmd.args(), [b"mykey".as_slice(), b"myvalue".as_slice()]);
    assert_eq!(offset, 31, "the trailing nine bytes belong to the frame");
}

#[test]
fn mget_three_keys() {
    let frame: &[u8] = &[
        0x00, 0x0C, 0x00, 0x00, 0x00, 0x03, 0x00, 0x04, 0x6B, 0x65, 0x79, 0x31, 0x00, 0x04,
        0x6B, 0x65, 0x79, 0x32, 0x00, 0x04, 0x6B, 0x65, 0x79, 0x33,
    ];
    assert_eq!(frame.len(), 24);
    let (cmd, offset) = parse_one(frame, 0).unwrap().unwrap();
    assert_eq!(cmd.opcode(), 0x000C);
    assert_eq!(cmd.args(), [b"key1".as_slice(), b"key2", b"key3"]);
    assert_eq!(offset, 24);
}

#[test]
fn json_set_module_frame() {
    let frame: &[u8] = &[
        0xF0, 0x00, 0x00, 0x00, // module sentinel, mux 0
        0x00, 0x00, 0x00, 0x00, // subcommand: JSON.SET
        0x00, 0x07, 0x70, 0x72, 0x6F, 0x66, 0x69, 0x6C, 0x65, // "profile"
        0x00, 0x05, 0x2E, 0x6E, 0x61, 0x6D, 0x65, // ".name"
        0x00, 0x00, 0x00, 0x0A, 0x22, 0x4A, 0x6F, 0x68, 0x6E, 0x20, 0x44, 0x6F, 0x65, 0x22, // "\"John Doe\""
        0x00, // flags
    ];
    let (cmd, offset) = parse_one(frame, 0).unwrap().unwrap();
    assert_eq!(cmd.opcode(), OP_MODULE);
    let module = cmd.module_command().unwrap();
    assert_eq!(module.module_id, 0x0000);
    assert_eq!(module.command_id, 0x0000);
    assert_eq!(
        cmd.args(),
        [b"profile".as_slice(), b".name", b"\"John Doe\""]
    );
    assert_eq!(offset, frame.len(), "trailing flags byte is consumed");
    assert_eq!(
        opcodes::modules::name_for(module.module_id, module.command_id),
        "JSON.SET"
    );
}

#[test]
fn resp_passthrough() {
    let resp = b"*3\r\n$3\r\nSET\r\n$3\r\nfoo\r\n$3\r\nbar\r\n";
    let mut frame = BytesMut::new();
    frame.put_u16(0xFFFF);
    frame.put_u16(0);
    frame.put_u32(resp.len() as u32);
    frame.put_slice(resp);

    let (cmd, offset) = parse_one(&frame, 0).unwrap().unwrap();
    assert_eq!(cmd.opcode(), OP_RESP_PASSTHROUGH);
    assert_eq!(cmd.mux_id(), 0);
    assert_eq!(cmd.argc(), 0);
    assert_eq!(cmd.resp_length(), resp.len() as u32);
    assert_eq!(cmd.resp_data(), Some(resp.as_slice()));
    assert_eq!(offset, 8 + resp.len());
}

#[test]
fn bitfield_operations_list_is_consumed() {
    // BITFIELD key with two op/args entries; the operations are opaque to
    // the core but their count-prefixed extent belongs to the frame.
    let mut frame = BytesMut::new();
    frame.put_u16(opcodes::bitmap::BITFIELD);
    frame.put_u16(0);
    frame.put_u16(4);
    frame.put_slice(b"bits");
    frame.put_u16(2);
    frame.put_u8(0x01); // GET
    frame.put_slice(&[0x08, 0x00]);
    frame.put_u8(0x02); // SET
    frame.put_slice(&[0x08, 0x04]);
    // A following frame that must not be swallowed by the operations tail.
    let boundary = frame.len();
    frame.put_slice(b"\x03\x00\x00\x0B"); // PING, mux 11

    let (cmd, offset) = parse_one(&frame, 0).unwrap().unwrap();
    assert_eq!(cmd.opcode(), opcodes::bitmap::BITFIELD);
    assert_eq!(cmd.args(), [b"bits".as_slice()]);
    assert_eq!(offset, boundary, "count and op/args entries are consumed");

    let (next, end) = parse_one(&frame, offset).unwrap().unwrap();
    assert_eq!(next.opcode(), opcodes::connection::PING);
    assert_eq!(next.mux_id(), 11);
    assert_eq!(end, frame.len());

    // The opaque operations round-trip bitwise.
    let mut out = vec![0u8; boundary];
    let written = respb::write_frame(&cmd, &mut out).unwrap();
    assert_eq!(written, boundary);
    assert_eq!(out, frame[..boundary]);
}

#[test]
fn truncated_header() {
    assert!(parse_one(b"\x00\x00", 0).unwrap().is_none());
}

#[test]
fn unknown_opcode() {
    assert_eq!(
        parse_one(b"\xBE\xEF\x00\x00", 0).unwrap_err(),
        FrameError::UnknownOpcode(0xBEEF)
    );
}

#[test]
fn reserved_opcodes_rejected() {
    // Spot-check the reserved band between the module sentinel and the
    // passthrough sentinel; every value must be refused.
    for opcode in (0xF001u16..0xFFFE).step_by(0x111).chain([0xF001, 0xFFFE]) {
        let mut frame = BytesMut::new();
        frame.put_u16(opcode);
        frame.put_u16(0);
        frame.put_slice(&[0u8; 16]);
        assert_eq!(
            parse_one(&frame, 0).unwrap_err(),
            FrameError::UnknownOpcode(opcode),
            "opcode {opcode:#06x} must be reserved"
        );
    }
}

#[test]
fn sentinels_need_eight_byte_headers() {
    // Module frame with only six of its eight header bytes.
    assert!(parse_one(&[0xF0, 0x00, 0x00, 0x00, 0x00, 0x00], 0).unwrap().is_none());
    // Passthrough frame missing part of its length word.
    assert!(parse_one(&[0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00], 0).unwrap().is_none());
    // Passthrough frame whose declared body is not all there yet.
    assert!(
        parse_one(&[0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x05, b'*'], 0)
            .unwrap()
            .is_none()
    );
}

#[test]
fn streaming_safety_on_every_prefix() {
    // A frame is parseable at exactly its full length and at no prefix.
    let frame: &[u8] = &[
        0x00, 0x01, 0x12, 0x34, 0x00, 0x03, b'k', b'e', b'y', 0x00, 0x00, 0x00, 0x05, b'v',
        b'a', b'l', b'u', b'e', 0x07, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x2A,
    ];
    for len in 0..frame.len() {
        assert!(
            parse_one(&frame[..len], 0).unwrap().is_none(),
            "prefix of {len} bytes must be incomplete"
        );
    }

    let (_, offset) = parse_one(frame, 0).unwrap().unwrap();
    assert_eq!(offset, frame.len());

    // Extra trailing bytes are left for the next call.
    let mut extended = frame.to_vec();
    extended.extend_from_slice(b"\x03\x00\x00\x09");
    let (_, offset) = parse_one(&extended, 0).unwrap().unwrap();
    assert_eq!(offset, frame.len());
    let (ping, end) = parse_one(&extended, offset).unwrap().unwrap();
    assert_eq!(ping.opcode(), opcodes::connection::PING);
    assert_eq!(ping.mux_id(), 9);
    assert_eq!(end, extended.len());
}

#[test]
fn zero_copy_arguments_alias_input() {
    let frame = b"\x00\x00\x00\x00\x00\x05mykey".to_vec();
    let (cmd, _) = parse_one(&frame, 0).unwrap().unwrap();
    let arg = cmd.arg(0).unwrap();

    let buf_start = frame.as_ptr() as usize;
    let buf_end = buf_start + frame.len();
    let arg_start = arg.as_ptr() as usize;
    assert!(arg_start >= buf_start && arg_start + arg.len() <= buf_end);

    let raw = cmd.raw_payload();
    let raw_start = raw.as_ptr() as usize;
    assert!(raw_start >= buf_start && raw_start + raw.len() <= buf_end);
}

#[test]
fn header_peek_matches_parse() {
    let frame = b"\x02\x40\x00\x2A"; // MULTI, mux 42
    let (opcode, mux_id) = peek_header(frame, 0).unwrap();
    let (cmd, _) = parse_one(frame, 0).unwrap().unwrap();
    assert_eq!((opcode, mux_id), (cmd.opcode(), cmd.mux_id()));
    assert_eq!(opcodes::name_for(opcode), "MULTI");
}

#[test]
fn stream_stops_at_malformed_frame() {
    let mut buf = BytesMut::new();
    buf.put_slice(b"\x03\x00\x00\x01"); // PING
    buf.put_slice(b"\xBE\xEF\x00\x00"); // unknown
    buf.put_slice(b"\x03\x00\x00\x02"); // never reached

    let mut stream = CommandStream::new(&buf);
    assert!(stream.next().unwrap().is_ok());
    assert_eq!(
        stream.next().unwrap().unwrap_err(),
        FrameError::UnknownOpcode(0xBEEF)
    );
    assert!(stream.next().is_none());
}
