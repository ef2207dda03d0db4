use crate::cursor::Cursor;
use crate::types::Error;
use crate::types::Result;

/// Reads one VarNum: `b <= 0xFC` is the value itself; `0xFD`/`0xFE`/`0xFF`
/// mean 2/4/8 follow-on bytes, big-endian.
pub fn read_varnum(cur: &mut Cursor<'_>) -> Result<u64> {
    let b = cur.read_byte()?;
    match b {
        0..=0xFC => Ok(b as u64),
        0xFD => Ok(u16::from_be_bytes(cur.read_bytes(2)?.try_into().unwrap()) as u64),
        0xFE => Ok(u32::from_be_bytes(cur.read_bytes(4)?.try_into().unwrap()) as u64),
        0xFF => Ok(u64::from_be_bytes(cur.read_bytes(8)?.try_into().unwrap())),
    }
}

/// Reads a VarNum without advancing `cur`.
pub fn peek_varnum(cur: &Cursor<'_>) -> Result<u64> {
    let mut probe = *cur;
    read_varnum(&mut probe)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_byte() {
        let buf = [0x7F];
        let mut cur = Cursor::new(&buf);
        assert_eq!(read_varnum(&mut cur).unwrap(), 0x7F);
        assert_eq!(cur.pos(), 1);
    }

    #[test]
    fn two_byte_prefix() {
        let buf = [0xFD, 0x01, 0x00];
        let mut cur = Cursor::new(&buf);
        assert_eq!(read_varnum(&mut cur).unwrap(), 0x0100);
        assert_eq!(cur.pos(), 3);
    }

    #[test]
    fn truncated() {
        let buf = [0xFD, 0x01];
        let mut cur = Cursor::new(&buf);
        assert_eq!(read_varnum(&mut cur), Err(Error::UnexpectedEnd));
    }
}
