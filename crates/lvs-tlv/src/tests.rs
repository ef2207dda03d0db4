use crate::cursor::Cursor;
use crate::primitives::read_natural_block;
use crate::primitives::read_repeated;
use crate::types::Error;
use crate::types::Result;

// The exact MetaInfo buffer used to validate natural-number and
// name-component field decode: contentType=1, freshnessPeriod=0x0FA0,
// finalBlockId=verbatim component "ndn".
const META_INFO: [u8; 14] = [
    0x18, 0x01, 0x01, 0x19, 0x02, 0x0F, 0xA0, 0x1A, 0x05, 0x08, 0x03, b'n', b'd', b'n',
];

struct MetaInfo {
    content_type: u64,
    freshness_period: u64,
    final_block_id: Vec<u8>,
}

fn parse_meta_info(bytes: &[u8]) -> Result<MetaInfo> {
    let mut cur = Cursor::new(bytes);
    let content_type = read_natural_block(&mut cur, 0x18)?;
    let freshness_period = read_natural_block(&mut cur, 0x19)?;
    let final_block_id = crate::primitives::read_block(&mut cur, 0x1A)?.to_vec();
    Ok(MetaInfo {
        content_type,
        freshness_period,
        final_block_id,
    })
}

#[test]
fn test_meta_info_decodes_exactly() -> Result<()> {
    let meta = parse_meta_info(&META_INFO)?;
    assert_eq!(meta.content_type, 1);
    assert_eq!(meta.freshness_period, 0x0FA0);
    assert_eq!(meta.final_block_id, vec![0x08, 0x03, b'n', b'd', b'n']);
    Ok(())
}

#[test]
fn test_truncated_varnum_is_decode_error() {
    let buf = [0xFD, 0x01];
    let mut cur = Cursor::new(&buf);
    assert_eq!(crate::varnum::read_varnum(&mut cur), Err(Error::UnexpectedEnd));
}

#[test]
fn test_trailing_unknown_type_inside_repeated_stops_cleanly() -> Result<()> {
    // A repeated field of type 0x41 followed by bytes of a different type:
    // the repetition stops, and the caller decides what to do with the
    // remainder (tolerated mid-struct, rejected at the outermost decode).
    let buf = [0x41, 0x01, 0xAA, 0x42, 0x01, 0xBB];
    let mut cur = Cursor::new(&buf);
    let items: Vec<Vec<u8>> = read_repeated(&mut cur, 0x41, |inner| Ok(inner.to_vec()))?;
    assert_eq!(items, vec![vec![0xAA]]);
    assert_eq!(cur.remaining(), 3);
    Ok(())
}
