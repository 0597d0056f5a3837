use super::error::BencodeError;
use super::value::Value;
use bytes::Bytes;
use std::collections::BTreeMap;

/// Default bound on list/dictionary nesting.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Decodes a complete bencode value, rejecting trailing bytes.
///
/// # Examples
///
/// ```
/// use bitlet::bencode::{decode, Value};
///
/// assert_eq!(decode(b"i42e").unwrap(), Value::Integer(42));
/// assert!(decode(b"i42eextra").is_err());
/// ```
pub fn decode(data: &[u8]) -> Result<Value, BencodeError> {
    Decoder::new().decode(data)
}

/// Decodes one value starting at `offset` and returns it together with the
/// number of bytes it occupied. Bytes after the value are left untouched.
///
/// ```
/// use bitlet::bencode::{decode_prefix, Value};
///
/// let (value, consumed) = decode_prefix(b"4:spami1e", 0).unwrap();
/// assert_eq!(value, Value::string("spam"));
/// assert_eq!(consumed, 6);
/// ```
pub fn decode_prefix(data: &[u8], offset: usize) -> Result<(Value, usize), BencodeError> {
    Decoder::new().decode_prefix(data, offset)
}

/// A bencode decoder with a configurable nesting limit.
///
/// Input is untrusted, so recursion is bounded: a value nested deeper than
/// `max_depth` fails with [`BencodeError::NestingTooDeep`].
#[derive(Debug, Clone, Copy)]
pub struct Decoder {
    max_depth: usize,
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder {
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn decode(&self, data: &[u8]) -> Result<Value, BencodeError> {
        let (value, consumed) = self.decode_prefix(data, 0)?;

        if consumed != data.len() {
            return Err(BencodeError::TrailingData);
        }

        Ok(value)
    }

    pub fn decode_prefix(
        &self,
        data: &[u8],
        offset: usize,
    ) -> Result<(Value, usize), BencodeError> {
        let mut pos = offset;
        let value = self.decode_value(data, &mut pos, 0)?;
        Ok((value, pos - offset))
    }

    fn decode_value(
        &self,
        data: &[u8],
        pos: &mut usize,
        depth: usize,
    ) -> Result<Value, BencodeError> {
        if depth > self.max_depth {
            return Err(BencodeError::NestingTooDeep);
        }

        if *pos >= data.len() {
            return Err(BencodeError::UnexpectedEof);
        }

        match data[*pos] {
            b'i' => decode_integer(data, pos),
            b'l' => self.decode_list(data, pos, depth),
            b'd' => self.decode_dict(data, pos, depth),
            b'0'..=b'9' => decode_bytes(data, pos),
            c => Err(BencodeError::UnexpectedChar(c as char)),
        }
    }

    fn decode_list(
        &self,
        data: &[u8],
        pos: &mut usize,
        depth: usize,
    ) -> Result<Value, BencodeError> {
        *pos += 1;
        let mut list = Vec::new();

        while *pos < data.len() && data[*pos] != b'e' {
            list.push(self.decode_value(data, pos, depth + 1)?);
        }

        if *pos >= data.len() {
            return Err(BencodeError::UnexpectedEof);
        }

        *pos += 1;
        Ok(Value::List(list))
    }

    fn decode_dict(
        &self,
        data: &[u8],
        pos: &mut usize,
        depth: usize,
    ) -> Result<Value, BencodeError> {
        *pos += 1;
        let mut dict = BTreeMap::new();

        while *pos < data.len() && data[*pos] != b'e' {
            let key = match self.decode_value(data, pos, depth + 1)? {
                Value::Bytes(b) => b,
                _ => return Err(BencodeError::InvalidKey),
            };

            // Duplicate keys: the last occurrence wins.
            let value = self.decode_value(data, pos, depth + 1)?;
            dict.insert(key, value);
        }

        if *pos >= data.len() {
            return Err(BencodeError::UnexpectedEof);
        }

        *pos += 1;
        Ok(Value::Dict(dict))
    }
}

fn decode_integer(data: &[u8], pos: &mut usize) -> Result<Value, BencodeError> {
    *pos += 1;

    let start = *pos;
    while *pos < data.len() && data[*pos] != b'e' {
        *pos += 1;
    }

    if *pos >= data.len() {
        return Err(BencodeError::UnexpectedEof);
    }

    let int_str = std::str::from_utf8(&data[start..*pos])
        .map_err(|_| BencodeError::InvalidInteger("invalid utf8".into()))?;

    let digits = int_str.strip_prefix('-').unwrap_or(int_str);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BencodeError::InvalidInteger(int_str.into()));
    }

    if int_str.starts_with("-0") || (digits.starts_with('0') && digits.len() > 1) {
        return Err(BencodeError::InvalidInteger("leading zeros".into()));
    }

    let value: i64 = int_str
        .parse()
        .map_err(|_| BencodeError::InvalidInteger(int_str.into()))?;

    *pos += 1;
    Ok(Value::Integer(value))
}

fn decode_bytes(data: &[u8], pos: &mut usize) -> Result<Value, BencodeError> {
    let start = *pos;
    while *pos < data.len() && data[*pos] != b':' {
        *pos += 1;
    }

    if *pos >= data.len() {
        return Err(BencodeError::UnexpectedEof);
    }

    let len_bytes = &data[start..*pos];
    if !len_bytes.iter().all(u8::is_ascii_digit) {
        return Err(BencodeError::InvalidStringLength);
    }

    let len: usize = std::str::from_utf8(len_bytes)
        .map_err(|_| BencodeError::InvalidStringLength)?
        .parse()
        .map_err(|_| BencodeError::InvalidStringLength)?;

    *pos += 1;

    let end = pos
        .checked_add(len)
        .filter(|&end| end <= data.len())
        .ok_or(BencodeError::UnexpectedEof)?;

    let bytes = Bytes::copy_from_slice(&data[*pos..end]);
    *pos = end;

    Ok(Value::Bytes(bytes))
}
