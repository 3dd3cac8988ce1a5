//! Danmaku segment decoder.
//!
//! Danmaku of a video are served as protobuf encoded segments (`DmSegMobileReply`), each covering a
//! fixed window of playback time and indexed from 1. This module decodes a single segment;
//! fetching and iterating segments is up to the caller.
use log::trace;
use nom::Err;

pub use types::DanmakuElement;

use crate::errors::DecodeError;

use self::parser::WireValue;
use self::types::field;

mod parser;
mod types;

#[cfg(test)]
mod tests;

type Result<T, E = DecodeError> = std::result::Result<T, E>;

/// Decode one danmaku segment.
///
/// Elements are returned in wire order. Unknown fields are skipped.
///
/// # Errors
/// Returns an error if the buffer is truncated or otherwise not valid protobuf, or if a known
/// field carries an unexpected wire type or invalid utf-8.
pub fn decode(input: &[u8]) -> Result<Vec<DanmakuElement>> {
    let mut elements = Vec::new();
    for (number, value) in parse_message(input)? {
        match (number, value) {
            (field::ELEMS, WireValue::Bytes(bytes)) => elements.push(decode_element(bytes)?),
            (field::ELEMS, value) => return Err(unexpected(number, "length-delimited", value)),
            _ => trace!("skipping unknown segment field {}", number),
        }
    }
    Ok(elements)
}

fn decode_element(input: &[u8]) -> Result<DanmakuElement> {
    let mut elem = DanmakuElement::default();
    for (number, value) in parse_message(input)? {
        match number {
            field::ID => elem.id = as_varint(number, value)? as i64,
            field::PROGRESS => elem.progress = as_varint(number, value)? as i32,
            field::MODE => elem.mode = as_varint(number, value)? as i32,
            field::FONT_SIZE => elem.font_size = as_varint(number, value)? as i32,
            field::COLOR => elem.color = as_varint(number, value)? as u32,
            field::MID_HASH => elem.mid_hash = as_string(number, value)?,
            field::CONTENT => elem.content = as_string(number, value)?,
            field::CTIME => elem.ctime = as_varint(number, value)? as i64,
            field::WEIGHT => elem.weight = as_varint(number, value)? as i32,
            field::ACTION => elem.action = as_string(number, value)?,
            field::POOL => elem.pool = as_varint(number, value)? as i32,
            field::ID_STR => elem.id_str = as_string(number, value)?,
            field::ATTR => elem.attr = as_varint(number, value)? as i32,
            _ => trace!("skipping unknown danmaku field {}", number),
        }
    }
    Ok(elem)
}

fn parse_message(input: &[u8]) -> Result<Vec<(u32, WireValue<'_>)>> {
    match parser::parse_message(input) {
        Ok((_, fields)) => Ok(fields),
        Err(Err::Incomplete(needed)) => Err(DecodeError::Protobuf(format!(
            "incomplete buffer: {:?} needed",
            needed
        ))),
        Err(Err::Error(e) | Err::Failure(e)) => Err(DecodeError::Protobuf(format!(
            "{:?} at offset {}",
            e.code,
            input.len() - e.input.len()
        ))),
    }
}

fn unexpected(number: u32, expected: &str, value: WireValue<'_>) -> DecodeError {
    DecodeError::Protobuf(format!(
        "field {} expects {}, got {}",
        number,
        expected,
        value.wire_type()
    ))
}

fn as_varint(number: u32, value: WireValue<'_>) -> Result<u64> {
    match value {
        WireValue::Varint(v) => Ok(v),
        value => Err(unexpected(number, "varint", value)),
    }
}

fn as_string(number: u32, value: WireValue<'_>) -> Result<String> {
    match value {
        WireValue::Bytes(bytes) => String::from_utf8(bytes.to_vec())
            .map_err(|source| DecodeError::Utf8 { field: number, source }),
        value => Err(unexpected(number, "length-delimited", value)),
    }
}
