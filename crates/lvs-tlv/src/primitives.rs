use crate::cursor::Cursor;
use crate::types::Error;
use crate::types::Result;
use crate::varnum::peek_varnum;
use crate::varnum::read_varnum;

/// Reads `TYPE LENGTH VALUE` and returns the `VALUE` slice, failing if the
/// type word doesn't match `expected_type` or the buffer is short.
pub fn read_block<'a>(cur: &mut Cursor<'a>, expected_type: u64) -> Result<&'a [u8]> {
    let actual = read_varnum(cur)?;
    if actual != expected_type {
        return Err(Error::TypeMismatch {
            expected: expected_type,
            actual,
        });
    }
    let len = read_varnum(cur)? as usize;
    cur.read_bytes(len)
}

/// Like `read_block`, but returns `Ok(None)` without consuming anything if
/// the next type word isn't `expected_type`.
pub fn try_read_block<'a>(cur: &mut Cursor<'a>, expected_type: u64) -> Result<Option<&'a [u8]>> {
    if cur.is_empty() {
        return Ok(None);
    }
    match peek_varnum(cur) {
        Ok(t) if t == expected_type => Ok(Some(read_block(cur, expected_type)?)),
        _ => Ok(None),
    }
}

/// Reads a block of unknown type, returning the type word alongside its
/// value slice. Used where a field is a union over several block types
/// (e.g. a constraint option is one of `COMPONENT_VALUE`, `PATTERN_TAG`, or
/// `USER_FN_CALL`).
pub fn read_block_any<'a>(cur: &mut Cursor<'a>) -> Result<(u64, &'a [u8])> {
    let t = read_varnum(cur)?;
    let len = read_varnum(cur)? as usize;
    Ok((t, cur.read_bytes(len)?))
}

pub fn peek_block_type(cur: &Cursor<'_>) -> Result<u64> {
    peek_varnum(cur)
}

/// Decodes a natural number over an *exactly*-sized slice: 1, 2, 4, or 8
/// bytes, big-endian. Any other width is malformed.
pub fn decode_natural(bytes: &[u8]) -> Result<u64> {
    match bytes.len() {
        1 => Ok(bytes[0] as u64),
        2 => Ok(u16::from_be_bytes(bytes.try_into().unwrap()) as u64),
        4 => Ok(u32::from_be_bytes(bytes.try_into().unwrap()) as u64),
        8 => Ok(u64::from_be_bytes(bytes.try_into().unwrap())),
        n => Err(Error::InvalidNaturalWidth(n)),
    }
}

/// Reads a `TYPE LENGTH VALUE` block of `expected_type` whose value is a
/// natural number.
pub fn read_natural_block(cur: &mut Cursor<'_>, expected_type: u64) -> Result<u64> {
    decode_natural(read_block(cur, expected_type)?)
}

/// Reads an optional natural-number block; absent is represented as `None`.
pub fn try_read_natural_block(cur: &mut Cursor<'_>, expected_type: u64) -> Result<Option<u64>> {
    try_read_block(cur, expected_type)?
        .map(decode_natural)
        .transpose()
}

/// Reads a block of `expected_type` and decodes its value as UTF-8.
pub fn read_utf8_block(cur: &mut Cursor<'_>, expected_type: u64) -> Result<String> {
    let bytes = read_block(cur, expected_type)?;
    std::str::from_utf8(bytes)
        .map(str::to_owned)
        .map_err(|_| Error::InvalidUtf8)
}

/// Reads a single name component *verbatim*, including its own inner
/// type/length header, returning it as an owned byte vector (so it can
/// outlive the decode call the way `lvs_model`'s owned schema model needs
/// to).
pub fn read_component_verbatim(cur: &mut Cursor<'_>) -> Result<Vec<u8>> {
    let start = cur.pos();
    let _type = read_varnum(cur)?;
    let len = read_varnum(cur)? as usize;
    cur.skip(len)?;
    Ok(cur.bytes_since(start).to_vec())
}

/// Greedily decodes zero or more blocks of `expected_type`, stopping at the
/// first type mismatch or end of buffer. Each match's value slice is handed
/// to `decode_one`.
pub fn read_repeated<'a, T>(
    cur: &mut Cursor<'a>,
    expected_type: u64,
    mut decode_one: impl FnMut(&'a [u8]) -> Result<T>,
) -> Result<Vec<T>> {
    let mut out = Vec::new();
    while let Some(inner) = try_read_block(cur, expected_type)? {
        out.push(decode_one(inner)?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natural_widths() {
        assert_eq!(decode_natural(&[0x01]).unwrap(), 1);
        assert_eq!(decode_natural(&[0x0F, 0xA0]).unwrap(), 0x0FA0);
        assert_eq!(decode_natural(&[0, 0, 0, 1]).unwrap(), 1);
        assert!(decode_natural(&[0, 0, 0]).is_err());
    }

    #[test]
    fn block_type_mismatch() {
        let buf = [0x05, 0x01, 0xAB];
        let mut cur = Cursor::new(&buf);
        assert_eq!(
            read_block(&mut cur, 0x04),
            Err(Error::TypeMismatch {
                expected: 0x04,
                actual: 0x05
            })
        );
    }

    #[test]
    fn optional_absent_consumes_nothing() {
        let buf = [0x05, 0x01, 0xAB];
        let mut cur = Cursor::new(&buf);
        assert_eq!(try_read_block(&mut cur, 0x04).unwrap(), None);
        assert_eq!(cur.pos(), 0);
    }

    #[test]
    fn component_verbatim_round_trip() {
        // generic name component "ndn": type 0x08, length 3, "ndn"
        let buf = [0x08, 0x03, b'n', b'd', b'n'];
        let mut cur = Cursor::new(&buf);
        let comp = read_component_verbatim(&mut cur).unwrap();
        assert_eq!(comp, buf.to_vec());
        assert!(cur.is_empty());
    }
}
