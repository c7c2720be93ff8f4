use super::error::BencodeError;
use super::value::Value;
use std::io::Write;

/// Encodes a bencode value to a byte vector.
///
/// The output is canonical: dictionary keys are emitted in ascending byte
/// order, integers carry no leading zeros and zero has no sign. Decoding the
/// output yields a value equal to the input.
///
/// # Errors
///
/// Returns an error if writing to the internal buffer fails.
///
/// # Examples
///
/// ```
/// use bmeta::bencode::{decode, encode, Value};
///
/// assert_eq!(encode(&Value::Integer(-42)).unwrap(), b"i-42e");
/// assert_eq!(encode(&Value::string("hello")).unwrap(), b"5:hello");
///
/// // Keys come out sorted no matter how the input was ordered.
/// let value = decode(b"d1:bi2e1:ai1ee").unwrap();
/// assert_eq!(encode(&value).unwrap(), b"d1:ai1e1:bi2ee");
/// ```
pub fn encode(value: &Value) -> Result<Vec<u8>, BencodeError> {
    let mut buf = Vec::new();
    encode_to(value, &mut buf)?;
    Ok(buf)
}

/// Encodes a bencode value into any writer.
///
/// # Errors
///
/// Returns [`BencodeError::Io`] if the writer fails.
pub fn encode_to<W: Write>(value: &Value, writer: &mut W) -> Result<(), BencodeError> {
    match value {
        Value::Integer(i) => {
            write!(writer, "i{}e", i)?;
        }
        Value::Bytes(b) => {
            write_bytes(b, writer)?;
        }
        Value::List(l) => {
            writer.write_all(b"l")?;
            for item in l {
                encode_to(item, writer)?;
            }
            writer.write_all(b"e")?;
        }
        Value::Dict(d) => {
            writer.write_all(b"d")?;
            for (key, val) in d {
                write_bytes(key, writer)?;
                encode_to(val, writer)?;
            }
            writer.write_all(b"e")?;
        }
    }
    Ok(())
}

fn write_bytes<W: Write>(bytes: &[u8], writer: &mut W) -> Result<(), BencodeError> {
    write!(writer, "{}:", bytes.len())?;
    writer.write_all(bytes)?;
    Ok(())
}
