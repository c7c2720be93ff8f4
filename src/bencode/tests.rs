use std::collections::BTreeMap;

use bytes::Bytes;

use super::*;

#[test]
fn test_decode_integer() {
    assert_eq!(decode(b"i42e").unwrap(), Value::Integer(42));
    assert_eq!(decode(b"i-42e").unwrap(), Value::Integer(-42));
    assert_eq!(decode(b"i0e").unwrap(), Value::Integer(0));
    assert_eq!(decode(b"i-1e").unwrap(), Value::Integer(-1));
    assert_eq!(
        decode(format!("i{}e", i64::MAX).as_bytes()).unwrap(),
        Value::Integer(i64::MAX)
    );
    assert_eq!(
        decode(format!("i{}e", i64::MIN).as_bytes()).unwrap(),
        Value::Integer(i64::MIN)
    );
}

#[test]
fn test_decode_integer_lenient_forms() {
    // Accepted as the integer parser accepts them; re-encoding normalises.
    assert_eq!(decode(b"i00e").unwrap(), Value::Integer(0));
    assert_eq!(decode(b"i-0e").unwrap(), Value::Integer(0));
    assert_eq!(decode(b"i007e").unwrap(), Value::Integer(7));
    assert_eq!(encode(&decode(b"i007e").unwrap()).unwrap(), b"i7e");
}

#[test]
fn test_decode_integer_invalid() {
    assert!(matches!(
        decode(b"i42"),
        Err(BencodeError::TruncatedInteger { position: 0 })
    ));
    assert!(matches!(
        decode(b"i"),
        Err(BencodeError::TruncatedInteger { .. })
    ));
    assert!(matches!(
        decode(b"ie"),
        Err(BencodeError::MalformedInteger { .. })
    ));
    assert!(matches!(
        decode(b"i4x2e"),
        Err(BencodeError::MalformedInteger { .. })
    ));
    assert!(matches!(
        decode(b"i-e"),
        Err(BencodeError::MalformedInteger { .. })
    ));
    assert!(matches!(
        decode(b"i99999999999999999999e"),
        Err(BencodeError::MalformedInteger { .. })
    ));
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

    let long = "a".repeat(256);
    let encoded = format!("256:{}", long);
    assert_eq!(decode(encoded.as_bytes()).unwrap(), Value::string(&long));
}

#[test]
fn test_decode_bytes_not_utf8() {
    let value = decode(b"3:\xff\x00\xfe").unwrap();
    assert_eq!(
        value.as_bytes().map(|b| b.as_ref()),
        Some(b"\xff\x00\xfe".as_slice())
    );
    assert_eq!(value.as_str(), None);
}

#[test]
fn test_decode_bytes_invalid() {
    assert!(matches!(
        decode(b"4spam"),
        Err(BencodeError::TruncatedLength { position: 0 })
    ));
    assert!(matches!(
        decode(b"4x:spam"),
        Err(BencodeError::MalformedLength { position: 0 })
    ));
    assert!(matches!(
        decode(b"99999999999999999999999:a"),
        Err(BencodeError::MalformedLength { .. })
    ));

    match decode(b"10:short") {
        Err(BencodeError::BufferUnderrun {
            position,
            needed,
            available,
        }) => {
            assert_eq!(position, 3);
            assert_eq!(needed, 10);
            assert_eq!(available, 5);
        }
        other => panic!("expected buffer underrun, got {:?}", other),
    }
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

    assert_eq!(decode(b"le").unwrap(), Value::List(vec![]));
}

#[test]
fn test_decode_list_truncated() {
    assert!(matches!(
        decode(b"l3:foo3:bar"),
        Err(BencodeError::TruncatedList { position: 0 })
    ));
    assert!(matches!(
        decode(b"l"),
        Err(BencodeError::TruncatedList { .. })
    ));
    assert!(matches!(
        decode(b"lli1ee"),
        Err(BencodeError::TruncatedList { position: 0 })
    ));
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

    assert_eq!(decode(b"de").unwrap(), Value::Dict(BTreeMap::new()));
}

#[test]
fn test_decode_dict_duplicate_key_keeps_last() {
    let value = decode(b"d3:fooi1e3:fooi2ee").unwrap();
    let dict = value.as_dict().unwrap();
    assert_eq!(dict.len(), 1);
    assert_eq!(value.get(b"foo"), Some(&Value::Integer(2)));
}

#[test]
fn test_decode_dict_non_string_key() {
    assert!(matches!(
        decode(b"di1ei2ee"),
        Err(BencodeError::NonStringKey { position: 1 })
    ));
    assert!(matches!(
        decode(b"dl3:fooei123ee"),
        Err(BencodeError::NonStringKey { position: 1 })
    ));
    assert!(matches!(
        decode(b"d3:fooi1edeee"),
        Err(BencodeError::NonStringKey { position: 9 })
    ));
}

#[test]
fn test_decode_dict_truncated() {
    assert!(matches!(
        decode(b"d3:fooi123e"),
        Err(BencodeError::TruncatedDictionary { position: 0 })
    ));
    assert!(matches!(
        decode(b"d3:foo"),
        Err(BencodeError::TruncatedDictionary { position: 0 })
    ));
    assert!(matches!(
        decode(b"d"),
        Err(BencodeError::TruncatedDictionary { .. })
    ));
}

#[test]
fn test_decode_unrecognized_tag() {
    assert!(matches!(decode(b""), Err(BencodeError::EmptyInput)));
    assert!(matches!(
        decode(b"x"),
        Err(BencodeError::UnrecognizedTag {
            byte: b'x',
            position: 0
        })
    ));
    assert!(matches!(
        decode(b"l-e"),
        Err(BencodeError::UnrecognizedTag {
            byte: b'-',
            position: 1
        })
    ));
}

#[test]
fn test_decode_prefix_reports_consumed() {
    let (value, consumed) = decode_prefix(b"i3e").unwrap();
    assert_eq!(value, Value::Integer(3));
    assert_eq!(consumed, 3);

    let (value, consumed) = decode_prefix(b"l1:ai2eeTRAILER").unwrap();
    assert_eq!(value.as_list().map(|l| l.len()), Some(2));
    assert_eq!(consumed, 8);

    let (_, consumed) = decode_prefix(b"d1:k0:e").unwrap();
    assert_eq!(consumed, 7);
}

#[test]
fn test_trailing_data_error() {
    assert!(matches!(
        decode(b"i42eextra"),
        Err(BencodeError::TrailingData { position: 4 })
    ));
}

#[test]
fn test_nesting_limit() {
    let depth = crate::constants::DEFAULT_MAX_DEPTH;

    let ok = format!("{}{}", "l".repeat(depth), "e".repeat(depth));
    assert!(decode(ok.as_bytes()).is_ok());

    let too_deep = format!("{}{}", "l".repeat(depth + 1), "e".repeat(depth + 1));
    assert!(matches!(
        decode(too_deep.as_bytes()),
        Err(BencodeError::NestingTooDeep { limit, position }) if limit == depth && position == depth
    ));

    let limits = DecodeLimits {
        max_depth: 2,
        ..DecodeLimits::default()
    };
    assert!(decode_with(b"d1:ald1:bi1eeee", &limits).is_err());
    assert!(decode_with(b"d1:ali1eee", &limits).is_ok());
}

#[test]
fn test_size_limit() {
    let limits = DecodeLimits {
        max_len: Some(4),
        ..DecodeLimits::default()
    };
    assert!(decode_with(b"i42e", &limits).is_ok());
    assert!(matches!(
        decode_with(b"i420e", &limits),
        Err(BencodeError::InputTooLarge { len: 5, limit: 4 })
    ));
}

#[test]
fn test_encode_integer() {
    assert_eq!(encode(&Value::Integer(42)).unwrap(), b"i42e");
    assert_eq!(encode(&Value::Integer(-42)).unwrap(), b"i-42e");
    assert_eq!(encode(&Value::Integer(0)).unwrap(), b"i0e");
}

#[test]
fn test_encode_bytes() {
    assert_eq!(
        encode(&Value::Bytes(Bytes::from_static(b"spam"))).unwrap(),
        b"4:spam"
    );
    assert_eq!(encode(&Value::Bytes(Bytes::new())).unwrap(), b"0:");
}

#[test]
fn test_encode_list() {
    let list = Value::List(vec![
        Value::Bytes(Bytes::from_static(b"spam")),
        Value::Integer(42),
    ]);
    assert_eq!(encode(&list).unwrap(), b"l4:spami42ee");
    assert_eq!(encode(&Value::List(vec![])).unwrap(), b"le");
}

#[test]
fn test_encode_dict_sorted() {
    let mut dict = BTreeMap::new();
    dict.insert(Bytes::from_static(b"zeta"), Value::Integer(1));
    dict.insert(Bytes::from_static(b"alpha"), Value::Integer(2));
    dict.insert(Bytes::from_static(b"Beta"), Value::Integer(3));
    dict.insert(Bytes::from_static(b"al"), Value::Integer(4));

    assert_eq!(
        encode(&Value::Dict(dict)).unwrap(),
        b"d4:Betai3e2:ali4e5:alphai2e4:zetai1ee"
    );
    assert_eq!(encode(&Value::Dict(BTreeMap::new())).unwrap(), b"de");
}

#[test]
fn test_encode_to_writer() {
    let mut out = Vec::new();
    encode_to(&Value::string("ab"), &mut out).unwrap();
    encode_to(&Value::Integer(1), &mut out).unwrap();
    assert_eq!(out, b"2:abi1e");
}

struct FailingWriter;

impl std::io::Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::other("disk full"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_encode_to_writer_error() {
    let value = decode(b"d1:ali1eee").unwrap();
    match encode_to(&value, &mut FailingWriter) {
        Err(BencodeError::Io(e)) => assert_eq!(e.to_string(), "disk full"),
        other => panic!("expected io error, got {:?}", other),
    }
}

#[test]
fn test_roundtrip() {
    // Keys must be sorted lexicographically for a byte-exact roundtrip
    let original = b"d8:announce15:http://test.com4:infod4:name4:test12:piece lengthi16384eee";
    let decoded = decode(original).unwrap();
    let encoded = encode(&decoded).unwrap();
    assert_eq!(encoded, original);
}

#[test]
fn test_roundtrip_unsorted_input() {
    let unsorted = b"d4:spaml1:xi-3ee3:cowd1:zi0e1:ai1eee";
    let decoded = decode(unsorted).unwrap();
    let encoded = encode(&decoded).unwrap();

    assert_eq!(encoded, b"d3:cowd1:ai1e1:zi0ee4:spaml1:xi-3eee");
    assert_eq!(decode(&encoded).unwrap(), decoded);
}

#[test]
fn test_nested_structures() {
    let data = b"d4:listl4:spami42eee";
    let decoded = decode(data).unwrap();
    let encoded = encode(&decoded).unwrap();
    assert_eq!(encoded, data);
}

#[test]
fn test_value_accessors() {
    let value = Value::Integer(42);
    assert_eq!(value.as_integer(), Some(42));
    assert_eq!(value.kind(), ValueKind::Integer);
    assert!(value.as_bytes().is_none());

    let value = Value::Bytes(Bytes::from_static(b"test"));
    assert_eq!(value.as_str(), Some("test"));
    assert_eq!(value.kind(), ValueKind::Bytes);
    assert!(value.as_integer().is_none());

    let value = Value::List(vec![]);
    assert!(value.as_list().is_some());
    assert_eq!(value.kind(), ValueKind::List);
    assert!(value.as_dict().is_none());

    let value = decode(b"d1:ki1ee").unwrap();
    assert_eq!(value.kind(), ValueKind::Dict);
    assert_eq!(value.clone().into_dict().map(|d| d.len()), Some(1));
    assert_eq!(value.get(b"k"), Some(&Value::Integer(1)));
}

#[test]
fn test_value_kind_display() {
    assert_eq!(ValueKind::Bytes.to_string(), "byte string");
    assert_eq!(ValueKind::Dict.to_string(), "dictionary");
}
