use nom::bytes::complete::take;
use nom::combinator::{map, map_res};
use nom::error::{Error, ErrorKind};
use nom::number::complete::{le_u32, le_u64};
use nom::{Err, IResult};

/// A protobuf field value as found on the wire.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum WireValue<'a> {
    Varint(u64),
    Fixed64(u64),
    Bytes(&'a [u8]),
    Fixed32(u32),
}

impl WireValue<'_> {
    pub const fn wire_type(&self) -> &'static str {
        match self {
            Self::Varint(_) => "varint",
            Self::Fixed64(_) => "fixed64",
            Self::Bytes(_) => "length-delimited",
            Self::Fixed32(_) => "fixed32",
        }
    }
}

/// Base 128 varint, at most 10 bytes.
pub fn varint(input: &[u8]) -> IResult<&[u8], u64> {
    let mut value = 0_u64;
    for (i, byte) in input.iter().take(10).enumerate() {
        // only the lowest bit of the tenth byte fits in 64 bits
        if i == 9 && *byte > 1 {
            return Err(Err::Error(Error::new(input, ErrorKind::TooLarge)));
        }
        value |= u64::from(byte & 0x7f) << (7 * i);
        if byte & 0x80 == 0 {
            return Ok((&input[i + 1..], value));
        }
    }
    let kind = if input.len() < 10 {
        ErrorKind::Eof
    } else {
        ErrorKind::TooLarge
    };
    Err(Err::Error(Error::new(input, kind)))
}

fn parse_key(input: &[u8]) -> IResult<&[u8], (u32, u64)> {
    map_res(varint, |key| match u32::try_from(key >> 3) {
        Ok(0) | Err(_) => Err(()),
        Ok(number) => Ok((number, key & 0x07)),
    })(input)
}

fn parse_bytes(input: &[u8]) -> IResult<&[u8], &[u8]> {
    let (input, len) = map_res(varint, usize::try_from)(input)?;
    take(len)(input)
}

pub fn parse_field(input: &[u8]) -> IResult<&[u8], (u32, WireValue<'_>)> {
    let (rest, (number, wire_type)) = parse_key(input)?;
    let (rest, value) = match wire_type {
        0 => map(varint, WireValue::Varint)(rest)?,
        1 => map(le_u64, WireValue::Fixed64)(rest)?,
        2 => map(parse_bytes, WireValue::Bytes)(rest)?,
        5 => map(le_u32, WireValue::Fixed32)(rest)?,
        // groups (3, 4) are long deprecated and never used by bilibili
        _ => return Err(Err::Error(Error::new(input, ErrorKind::Tag))),
    };
    Ok((rest, (number, value)))
}

/// Parse every field of a message, consuming the whole input.
pub fn parse_message(mut input: &[u8]) -> IResult<&[u8], Vec<(u32, WireValue<'_>)>> {
    let mut fields = Vec::new();
    while !input.is_empty() {
        let (rest, field) = parse_field(input)?;
        fields.push(field);
        input = rest;
    }
    Ok((input, fields))
}
