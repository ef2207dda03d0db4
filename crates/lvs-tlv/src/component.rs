use crate::cursor::Cursor;
use crate::primitives::read_component_verbatim;
use crate::types::Result;
use crate::varnum::read_varnum;

/// One name component, stored verbatim including its own TLV type/length
/// header. Equality is byte equality over that verbatim form, matching the
/// schema's literal comparisons.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Component(Vec<u8>);

/// The generic component type number used throughout the hierarchical
/// naming convention this schema format targets.
pub const GENERIC_COMPONENT_TYPE: u64 = 0x08;

impl Component {
    /// Builds a well-formed generic-type component from its raw value bytes
    /// (e.g. `Component::generic(b"ndn")` is the bytes for name component
    /// `ndn`). `value` must encode to a length that fits in a VarNum, which
    /// in practice is never a concern for names.
    pub fn generic(value: &[u8]) -> Self {
        Self::with_type(GENERIC_COMPONENT_TYPE, value)
    }

    /// Builds a component of an arbitrary type number with the given value
    /// bytes.
    pub fn with_type(type_num: u64, value: &[u8]) -> Self {
        let mut bytes = encode_varnum(type_num);
        bytes.extend(encode_varnum(value.len() as u64));
        bytes.extend_from_slice(value);
        Self(bytes)
    }

    /// The verbatim wire bytes (type + length + value).
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn from_verbatim(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

fn encode_varnum(v: u64) -> Vec<u8> {
    if v <= 0xFC {
        vec![v as u8]
    } else if v <= u16::MAX as u64 {
        let mut out = vec![0xFD];
        out.extend((v as u16).to_be_bytes());
        out
    } else if v <= u32::MAX as u64 {
        let mut out = vec![0xFE];
        out.extend((v as u32).to_be_bytes());
        out
    } else {
        let mut out = vec![0xFF];
        out.extend(v.to_be_bytes());
        out
    }
}

/// An ordered sequence of components.
pub type Name = Vec<Component>;

/// Greedily decodes a name from raw wire bytes: each component is read
/// verbatim until the buffer is exhausted or a malformed component header is
/// hit. Mirrors the TLV primitives' "repeated block" semantics, specialized
/// to components (whose type number varies, unlike a schema's homogeneous
/// repeated fields).
pub fn decode_name_greedy(bytes: &[u8]) -> Result<Name> {
    let mut cur = Cursor::new(bytes);
    let mut out = Vec::new();
    while !cur.is_empty() {
        out.push(Component::from_verbatim(read_component_verbatim(
            &mut cur,
        )?));
    }
    Ok(out)
}

/// Parses a `/`-delimited textual name (e.g. `/a/b/c`) into generic-typed
/// components. Leading/trailing/empty segments are ignored, matching the
/// convention used throughout the embedded test schemas and their
/// hand-written name literals.
pub fn parse_name(text: &str) -> Name {
    text.split('/')
        .filter(|s| !s.is_empty())
        .map(|s| Component::generic(s.as_bytes()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generic_matches_hand_encoded() {
        let c = Component::generic(b"ndn");
        assert_eq!(c.as_bytes(), &[0x08, 0x03, b'n', b'd', b'n']);
    }

    #[test]
    fn parse_name_splits_on_slash() {
        let name = parse_name("/a/b/c");
        assert_eq!(name, vec![
            Component::generic(b"a"),
            Component::generic(b"b"),
            Component::generic(b"c"),
        ]);
    }

    #[test]
    fn greedy_decode_round_trip() {
        let name = parse_name("/example/testApp");
        let bytes: Vec<u8> = name.iter().flat_map(|c| c.as_bytes().to_vec()).collect();
        let decoded = decode_name_greedy(&bytes).unwrap();
        assert_eq!(decoded, name);
    }
}
