//! Differential tests between the binary path and the text-RESP path.
//!
//! The same logical command is framed both ways: once as a native binary
//! frame, once as verbatim text RESP inside a passthrough frame. The argument
//! vectors recovered by the two parsers must agree, which is the property the
//! A/B comparison harness of the original benchmark relied on.

use bytes::{BufMut, BytesMut};
use respb::opcodes::dispatch::{module_subcommand_for_name, opcode_for_name};
use respb::protocol::resp_text::parse_multibulk;
use respb::{parse_one, ParsedCommand};

/// Encode `args` as a text-RESP multibulk command.
fn to_multibulk(args: &[&[u8]]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(format!("*{}\r\n", args.len()).as_bytes());
    for arg in args {
        out.extend_from_slice(format!("${}\r\n", arg.len()).as_bytes());
        out.extend_from_slice(arg);
        out.extend_from_slice(b"\r\n");
    }
    out
}

#[test]
fn passthrough_text_agrees_with_binary_frame() {
    // (textual command line, binary key argument)
    let cases: Vec<(Vec<&[u8]>, &[u8])> = vec![
        (vec![b"GET", b"mykey"], b"mykey"),
        (vec![b"STRLEN", b"another"], b"another"),
        (vec![b"LLEN", b"queue"], b"queue"),
    ];

    for (text_args, key) in cases {
        // Text side: wrap in a passthrough frame, unwrap, parse the text.
        let resp = to_multibulk(&text_args);
        let mut frame = BytesMut::new();
        frame.put_u16(0xFFFF);
        frame.put_u16(0);
        frame.put_u32(resp.len() as u32);
        frame.put_slice(&resp);

        let (cmd, _) = parse_one(&frame, 0).unwrap().unwrap();
        let embedded = cmd.resp_data().unwrap();
        let (parsed_text, consumed) = parse_multibulk(embedded, 0).unwrap().unwrap();
        assert_eq!(consumed, embedded.len());
        assert_eq!(parsed_text, text_args);

        // Binary side: resolve the name, synthesize, parse.
        let opcode = opcode_for_name(text_args[0]).unwrap();
        let binary = respb::frame_to_bytes(&ParsedCommand::new(opcode, 0, &[key])).unwrap();
        let (parsed_bin, _) = parse_one(&binary, 0).unwrap().unwrap();

        assert_eq!(
            parsed_bin.args(),
            &parsed_text[1..],
            "binary and text parses must agree for {:?}",
            String::from_utf8_lossy(text_args[0])
        );
    }
}

#[test]
fn multi_key_commands_agree() {
    let keys: [&[u8]; 3] = [b"k1", b"k2", b"k3"];
    let mut text_args: Vec<&[u8]> = vec![b"MGET"];
    text_args.extend_from_slice(&keys);

    let resp = to_multibulk(&text_args);
    let (parsed_text, _) = parse_multibulk(&resp, 0).unwrap().unwrap();

    let opcode = opcode_for_name(b"MGET").unwrap();
    let binary = respb::frame_to_bytes(&ParsedCommand::new(opcode, 0, &keys)).unwrap();
    let (parsed_bin, _) = parse_one(&binary, 0).unwrap().unwrap();

    assert_eq!(parsed_bin.args(), &parsed_text[1..]);
}

#[test]
fn module_names_resolve_both_ways() {
    let sub = module_subcommand_for_name(b"BF.ADD").unwrap();
    let module_id = (sub >> 16) as u16;
    let command_id = (sub & 0xFFFF) as u16;

    let binary = respb::frame_to_bytes(&ParsedCommand::module(
        0,
        module_id,
        command_id,
        &[b"filter", b"item"],
    ))
    .unwrap();
    let (cmd, _) = parse_one(&binary, 0).unwrap().unwrap();
    let module = cmd.module_command().unwrap();
    assert_eq!(
        respb::opcodes::modules::name_for(module.module_id, module.command_id),
        "BF.ADD"
    );
    assert_eq!(cmd.args(), [b"filter".as_slice(), b"item"]);
}

#[test]
fn unknown_names_have_no_binary_form() {
    assert_eq!(opcode_for_name(b"GETWHATEVER"), None);
    assert_eq!(module_subcommand_for_name(b"TS.ADD"), None);
}
