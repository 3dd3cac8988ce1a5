use crate::errors::DecodeError;

use super::parser::{parse_field, varint, WireValue};
use super::{decode, DanmakuElement};

fn put_varint(buf: &mut Vec<u8>, mut value: u64) {
    loop {
        let byte = (value & 0x7f) as u8;
        value >>= 7;
        if value == 0 {
            buf.push(byte);
            return;
        }
        buf.push(byte | 0x80);
    }
}

fn put_int(buf: &mut Vec<u8>, number: u32, value: u64) {
    put_varint(buf, u64::from(number) << 3);
    put_varint(buf, value);
}

fn put_bytes(buf: &mut Vec<u8>, number: u32, value: &[u8]) {
    put_varint(buf, u64::from(number) << 3 | 2);
    put_varint(buf, value.len() as u64);
    buf.extend_from_slice(value);
}

fn encode_element(elem: &DanmakuElement) -> Vec<u8> {
    let mut buf = Vec::new();
    put_int(&mut buf, 1, elem.id as u64);
    put_int(&mut buf, 2, i64::from(elem.progress) as u64);
    put_int(&mut buf, 3, i64::from(elem.mode) as u64);
    put_int(&mut buf, 4, i64::from(elem.font_size) as u64);
    put_int(&mut buf, 5, u64::from(elem.color));
    put_bytes(&mut buf, 6, elem.mid_hash.as_bytes());
    put_bytes(&mut buf, 7, elem.content.as_bytes());
    put_int(&mut buf, 8, elem.ctime as u64);
    put_int(&mut buf, 9, i64::from(elem.weight) as u64);
    put_bytes(&mut buf, 10, elem.action.as_bytes());
    put_int(&mut buf, 11, i64::from(elem.pool) as u64);
    put_bytes(&mut buf, 12, elem.id_str.as_bytes());
    put_int(&mut buf, 13, i64::from(elem.attr) as u64);
    buf
}

fn encode_segment(elements: &[Vec<u8>]) -> Vec<u8> {
    let mut buf = Vec::new();
    for elem in elements {
        put_bytes(&mut buf, 1, elem);
    }
    buf
}

fn sample_elements() -> [DanmakuElement; 2] {
    [
        DanmakuElement {
            id: 54109805459813888,
            progress: 13094,
            mode: 1,
            font_size: 25,
            color: 16777215,
            mid_hash: "8a9bd4e3".to_string(),
            content: "前方高能".to_string(),
            ctime: 1626324624,
            weight: 10,
            action: String::new(),
            pool: 0,
            id_str: "54109805459813888".to_string(),
            attr: 0,
        },
        DanmakuElement {
            id: 54109892081901568,
            progress: 2051,
            mode: 4,
            font_size: 18,
            color: 0xfe_03_02,
            mid_hash: "1f2e3d4c".to_string(),
            content: "2333".to_string(),
            ctime: 1626324700,
            weight: 3,
            action: "picture:".to_string(),
            pool: 1,
            id_str: "54109892081901568".to_string(),
            attr: 0b1_0100,
        },
    ]
}

#[test]
fn must_parse_varint() {
    assert_eq!(varint(b"\x01"), Ok((&b""[..], 1)));
    assert_eq!(varint(b"\xac\x02\xff"), Ok((&b"\xff"[..], 300)));
    assert_eq!(
        varint(b"\xff\xff\xff\xff\xff\xff\xff\xff\xff\x01"),
        Ok((&b""[..], u64::MAX))
    );
    assert!(varint(&[0x80, 0x80]).is_err());
    assert!(varint(&[0x80; 11]).is_err());
    // a tenth byte above 1 overflows 64 bits
    assert!(varint(b"\xff\xff\xff\xff\xff\xff\xff\xff\xff\x7f").is_err());
    assert!(varint(b"\x80\x80\x80\x80\x80\x80\x80\x80\x80\x02").is_err());
}

#[test]
fn must_parse_field() {
    // field 7, length-delimited, "hi"
    let (rest, (number, value)) = parse_field(&[0x3a, 0x02, b'h', b'i', 0x08]).unwrap();
    assert_eq!(number, 7);
    assert_eq!(value, WireValue::Bytes(b"hi"));
    assert_eq!(rest, b"\x08");
}

#[test]
fn must_decode_literal_segment() {
    // DmSegMobileReply { elems: [{ id: 1, content: "hi" }, { id: 2, color: 255 }] }
    let raw = [
        0x0a, 0x06, 0x08, 0x01, 0x3a, 0x02, b'h', b'i', //
        0x0a, 0x05, 0x08, 0x02, 0x28, 0xff, 0x01,
    ];
    let elements = decode(&raw).expect("unable to decode segment");
    assert_eq!(
        elements,
        [
            DanmakuElement {
                id: 1,
                content: "hi".to_string(),
                ..DanmakuElement::default()
            },
            DanmakuElement {
                id: 2,
                color: 255,
                ..DanmakuElement::default()
            }
        ]
    );
}

#[test]
fn must_decode_two_elements() {
    let expected = sample_elements();
    let raw = encode_segment(&[encode_element(&expected[0]), encode_element(&expected[1])]);
    let elements = decode(&raw).expect("unable to decode segment");
    assert_eq!(elements, expected);
}

#[test]
fn must_preserve_wire_order() {
    let ids = [3, 1, 2];
    let raw = encode_segment(
        &ids.iter()
            .map(|id| {
                encode_element(&DanmakuElement {
                    id: *id,
                    ..DanmakuElement::default()
                })
            })
            .collect::<Vec<_>>(),
    );
    let decoded: Vec<i64> = decode(&raw).unwrap().into_iter().map(|e| e.id).collect();
    assert_eq!(decoded, ids);
}

#[test]
fn must_decode_negative_int32() {
    let mut elem = Vec::new();
    put_int(&mut elem, 2, u64::MAX);
    put_int(&mut elem, 13, i64::from(i32::MIN) as u64);
    let elements = decode(&encode_segment(&[elem])).unwrap();
    assert_eq!(elements[0].progress, -1);
    assert_eq!(elements[0].attr, i32::MIN);
}

#[test]
fn must_skip_unknown_fields() {
    let expected = sample_elements();
    let mut elem = encode_element(&expected[0]);
    // animation (22), colorful (24), and some fixed width fields from the future
    put_bytes(&mut elem, 22, b"{\"type\":\"up\"}");
    put_int(&mut elem, 24, 60001);
    put_varint(&mut elem, 30 << 3 | 5);
    elem.extend_from_slice(&[0x01, 0x02, 0x03, 0x04]);
    put_varint(&mut elem, 31 << 3 | 1);
    elem.extend_from_slice(&[0; 8]);

    let mut raw = encode_segment(&[elem]);
    // state (2) and ai_flag (3) of DmSegMobileReply
    put_int(&mut raw, 2, 1);
    put_bytes(&mut raw, 3, &[0x0a, 0x00]);

    let elements = decode(&raw).expect("unknown fields must be ignored");
    assert_eq!(elements, [expected[0].clone()]);
}

#[test]
fn must_take_last_scalar_occurrence() {
    let mut elem = Vec::new();
    put_int(&mut elem, 3, 1);
    put_int(&mut elem, 3, 7);
    assert_eq!(decode(&encode_segment(&[elem])).unwrap()[0].mode, 7);
}

#[test]
fn must_decode_empty_segment() {
    assert!(decode(&[]).unwrap().is_empty());
}

#[test]
fn must_reject_truncated_buffer() {
    let expected = sample_elements();
    let raw = encode_segment(&[encode_element(&expected[0]), encode_element(&expected[1])]);
    let first = encode_segment(&[encode_element(&expected[0])]).len();
    for len in [1, 2, first - 1, first + 1, first + 2, raw.len() - 1] {
        assert!(
            matches!(decode(&raw[..len]), Err(DecodeError::Protobuf(_))),
            "truncated at {}",
            len
        );
    }
}

#[test]
fn must_reject_invalid_tag() {
    // wire type 3 (start group)
    assert!(matches!(decode(&[0x0b]), Err(DecodeError::Protobuf(_))));
    // field number 0
    assert!(matches!(decode(&[0x00, 0x01]), Err(DecodeError::Protobuf(_))));
    // wire type 7
    assert!(matches!(decode(&[0x0a, 0x01, 0x0f]), Err(DecodeError::Protobuf(_))));
}

#[test]
fn must_reject_mismatched_wire_type() {
    // content (7) as varint
    let mut elem = Vec::new();
    put_int(&mut elem, 7, 1);
    assert!(matches!(
        decode(&encode_segment(&[elem])),
        Err(DecodeError::Protobuf(_))
    ));
    // elems (1) as varint
    assert!(matches!(decode(&[0x08, 0x01]), Err(DecodeError::Protobuf(_))));
}

#[test]
fn must_reject_invalid_utf8() {
    let mut elem = Vec::new();
    put_bytes(&mut elem, 7, &[0xff, 0xfe]);
    assert!(matches!(
        decode(&encode_segment(&[elem])),
        Err(DecodeError::Utf8 { field: 7, .. })
    ));
}

#[test]
fn must_decode_idempotently() {
    let expected = sample_elements();
    let raw = encode_segment(&[encode_element(&expected[0]), encode_element(&expected[1])]);
    assert_eq!(decode(&raw).unwrap(), decode(&raw).unwrap());
}
