use std::collections::BTreeMap;

use bytes::Bytes;

use super::*;

#[test]
fn test_decode_integer() {
    assert_eq!(decode(b"i42e").unwrap(), Value::Integer(42));
    assert_eq!(decode(b"i-42e").unwrap(), Value::Integer(-42));
    assert_eq!(decode(b"i0e").unwrap(), Value::Integer(0));
    assert_eq!(
        decode(b"i9223372036854775807e").unwrap(),
        Value::Integer(i64::MAX)
    );
}

#[test]
fn test_decode_integer_invalid() {
    assert!(decode(b"i-0e").is_err());
    assert!(decode(b"i03e").is_err());
    assert!(decode(b"ie").is_err());
    assert!(decode(b"i-e").is_err());
    assert!(decode(b"i+5e").is_err());
    assert!(decode(b"i4x2e").is_err());
    assert!(decode(b"i9223372036854775808e").is_err());
    assert_eq!(decode(b"i42"), Err(BencodeError::UnexpectedEof));
}

#[test]
fn test_decode_bytes() {
    assert_eq!(
        decode(b"4:spam").unwrap(),
        Value::Bytes(Bytes::from_static(b"spam"))
    );
    assert_eq!(
        decode(b"0:").unwrap(),
        Value::Bytes(Bytes::from_static(b""))
    );
}

#[test]
fn test_decode_bytes_not_utf8() {
    let value = decode(b"3:\xff\x00\xfe").unwrap();
    assert_eq!(value.as_bytes().map(|b| b.as_ref()), Some(&b"\xff\x00\xfe"[..]));
    assert_eq!(value.as_str(), None);
}

#[test]
fn test_decode_bytes_invalid() {
    assert_eq!(decode(b"5:spam"), Err(BencodeError::UnexpectedEof));
    assert_eq!(decode(b"4spam"), Err(BencodeError::UnexpectedEof));
    assert_eq!(decode(b"1a:x"), Err(BencodeError::InvalidStringLength));
    assert_eq!(
        decode(b"99999999999999999999999:x"),
        Err(BencodeError::InvalidStringLength)
    );
    assert_eq!(
        decode(b"18446744073709551615:x"),
        Err(BencodeError::UnexpectedEof)
    );
}

#[test]
fn test_decode_prefix_reports_consumed() {
    let (value, consumed) = decode_prefix(b"4:spam", 0).unwrap();
    assert_eq!(value, Value::string("spam"));
    assert_eq!(consumed, 6);

    let data = b"i1e4:spamle";
    let (value, consumed) = decode_prefix(data, 3).unwrap();
    assert_eq!(value, Value::string("spam"));
    assert_eq!(consumed, 6);

    let (value, consumed) = decode_prefix(data, 9).unwrap();
    assert_eq!(value, Value::List(vec![]));
    assert_eq!(consumed, 2);
}

#[test]
fn test_decode_prefix_past_end() {
    assert_eq!(decode_prefix(b"i1e", 3), Err(BencodeError::UnexpectedEof));
    assert_eq!(decode_prefix(b"", 0), Err(BencodeError::UnexpectedEof));
}

#[test]
fn test_decode_list() {
    let result = decode(b"l4:spami42ee").unwrap();
    match result {
        Value::List(l) => {
            assert_eq!(l.len(), 2);
            assert_eq!(l[0], Value::Bytes(Bytes::from_static(b"spam")));
            assert_eq!(l[1], Value::Integer(42));
        }
        _ => panic!("expected list"),
    }
}

#[test]
fn test_decode_empty_list() {
    assert_eq!(decode(b"le").unwrap(), Value::List(vec![]));
    assert_eq!(decode(b"l"), Err(BencodeError::UnexpectedEof));
}

#[test]
fn test_decode_dict() {
    let result = decode(b"d3:cow3:moo4:spam4:eggse").unwrap();
    match result {
        Value::Dict(d) => {
            assert_eq!(d.len(), 2);
            assert_eq!(
                d.get(&Bytes::from_static(b"cow")),
                Some(&Value::Bytes(Bytes::from_static(b"moo")))
            );
        }
        _ => panic!("expected dict"),
    }
}

#[test]
fn test_decode_dict_bar_foo() {
    let value = decode(b"d3:bar4:spam3:fooi42ee").unwrap();
    assert_eq!(value.get(b"bar"), Some(&Value::string("spam")));
    assert_eq!(value.get(b"foo"), Some(&Value::Integer(42)));
    assert_eq!(value.as_dict().map(|d| d.len()), Some(2));
}

#[test]
fn test_decode_dict_duplicate_key_last_wins() {
    let value = decode(b"d3:fooi1e3:fooi2ee").unwrap();
    assert_eq!(value.get(b"foo"), Some(&Value::Integer(2)));
    assert_eq!(value.as_dict().map(|d| d.len()), Some(1));
}

#[test]
fn test_decode_dict_non_string_key() {
    assert_eq!(decode(b"di1e3:fooe"), Err(BencodeError::InvalidKey));
    assert_eq!(decode(b"dle3:fooe"), Err(BencodeError::InvalidKey));
}

#[test]
fn test_decode_unknown_tag() {
    assert_eq!(decode(b"x"), Err(BencodeError::UnexpectedChar('x')));
    assert_eq!(decode(b"l-e"), Err(BencodeError::UnexpectedChar('-')));
}

#[test]
fn test_nesting_limit() {
    let mut deep = vec![b'l'; 100];
    deep.extend(std::iter::repeat(b'e').take(100));
    assert_eq!(decode(&deep), Err(BencodeError::NestingTooDeep));

    let decoder = Decoder::with_max_depth(128);
    assert!(decoder.decode(&deep).is_ok());

    let shallow = Decoder::with_max_depth(1);
    assert_eq!(shallow.max_depth(), 1);
    assert!(shallow.decode(b"lli1eee").is_err());
    assert!(shallow.decode(b"li1ee").is_ok());
}

#[test]
fn test_nesting_limit_without_terminators() {
    let deep = vec![b'l'; 1_000_000];
    assert_eq!(decode(&deep), Err(BencodeError::NestingTooDeep));
}

#[test]
fn test_encode_integer() {
    assert_eq!(encode(&Value::Integer(42)), b"i42e");
    assert_eq!(encode(&Value::Integer(-42)), b"i-42e");
    assert_eq!(encode(&Value::Integer(0)), b"i0e");
}

#[test]
fn test_encode_bytes() {
    assert_eq!(
        encode(&Value::Bytes(Bytes::from_static(b"spam"))),
        b"4:spam"
    );
    assert_eq!(encode(&Value::Bytes(Bytes::new())), b"0:");
}

#[test]
fn test_encode_list() {
    let list = Value::List(vec![
        Value::Bytes(Bytes::from_static(b"spam")),
        Value::Integer(42),
    ]);
    assert_eq!(encode(&list), b"l4:spami42ee");
    assert_eq!(encode(&Value::List(vec![])), b"le");
}

#[test]
fn test_encode_dict() {
    let mut dict = BTreeMap::new();
    dict.insert(
        Bytes::from_static(b"cow"),
        Value::Bytes(Bytes::from_static(b"moo")),
    );
    let value = Value::Dict(dict);
    assert_eq!(encode(&value), b"d3:cow3:mooe");
}

#[test]
fn test_encode_dict_sorts_keys() {
    let mut dict = BTreeMap::new();
    dict.insert(Bytes::from_static(b"foo"), Value::Integer(42));
    dict.insert(Bytes::from_static(b"bar"), Value::string("spam"));
    dict.insert(Bytes::from_static(b"Zed"), Value::Integer(1));
    dict.insert(Bytes::from_static(b"ba"), Value::Integer(2));

    assert_eq!(
        encode(&Value::Dict(dict)),
        b"d3:Zedi1e2:bai2e3:bar4:spam3:fooi42ee"
    );
}

#[test]
fn test_encode_into_appends() {
    let mut buf = b"prefix".to_vec();
    encode_into(&Value::Integer(7), &mut buf);
    assert_eq!(buf, b"prefixi7e");
}

#[test]
fn test_roundtrip() {
    // Keys must be sorted lexicographically for bencode roundtrip
    let original = b"d8:announce15:http://test.com4:infod4:name4:test12:piece lengthi16384eee";
    let decoded = decode(original).unwrap();
    let encoded = encode(&decoded);
    assert_eq!(encoded, original);
}

#[test]
fn test_value_roundtrip() {
    let mut inner = BTreeMap::new();
    inner.insert(Bytes::from_static(b"x"), Value::Integer(-7));
    inner.insert(Bytes::from_static(b"\x00\xff"), Value::List(vec![]));

    let mut outer = BTreeMap::new();
    outer.insert(Bytes::from_static(b"nested"), Value::Dict(inner));
    outer.insert(
        Bytes::from_static(b"list"),
        Value::List(vec![
            Value::Integer(0),
            Value::Bytes(Bytes::from_static(b"\x01\x02\x03")),
            Value::Dict(BTreeMap::new()),
        ]),
    );

    let value = Value::Dict(outer);
    assert_eq!(decode(&encode(&value)).unwrap(), value);
}

#[test]
fn test_unsorted_input_normalizes() {
    let unsorted = decode(b"d3:fooi42e3:bar4:spame").unwrap();
    let sorted = decode(b"d3:bar4:spam3:fooi42ee").unwrap();
    assert_eq!(unsorted, sorted);
    assert_eq!(encode(&unsorted), b"d3:bar4:spam3:fooi42ee");
    assert_eq!(encode(&unsorted), encode(&sorted));
}

#[test]
fn test_canonical_fixed_point() {
    let source = b"d4:infod6:lengthi10e4:name1:ae1:ai1e1:zl1:b1:aee";
    let once = encode(&decode(source).unwrap());
    let twice = encode(&decode(&once).unwrap());
    assert_ne!(once.as_slice(), source.as_slice());
    assert_eq!(once, twice);
}

#[test]
fn test_nested_structures() {
    let data = b"d4:listl4:spami42eee";
    let decoded = decode(data).unwrap();
    let encoded = encode(&decoded);
    assert_eq!(encoded, data);
}

#[test]
fn test_trailing_data_error() {
    assert_eq!(decode(b"i42eextra"), Err(BencodeError::TrailingData));
}

#[test]
fn test_value_accessors() {
    let value = Value::Integer(42);
    assert_eq!(value.as_integer(), Some(42));
    assert!(value.as_bytes().is_none());
    assert_eq!(value.kind(), "integer");

    let value = Value::Bytes(Bytes::from_static(b"test"));
    assert_eq!(value.as_str(), Some("test"));
    assert!(value.as_integer().is_none());

    let value = Value::List(vec![]);
    assert!(value.as_list().is_some());
    assert!(value.as_dict().is_none());
    assert!(value.into_dict().is_none());
}
