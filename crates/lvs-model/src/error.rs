use crate::types::NodeId;

/// Failures decoding a schema: either a primitive-level TLV failure, or a
/// structural problem only visible once whole records are assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Tlv(lvs_tlv::Error),
    /// A union field's type tag wasn't any of the tags that union allows.
    UnknownUnionTag(u64),
    /// An edge or `start_id` names a node index outside `nodes`.
    DanglingNodeId(NodeId),
    /// More than one node (or none) has `parent == None`.
    NotExactlyOneRoot,
    /// Two symbols claim the same tag identifier.
    DuplicateSymbol(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Tlv(e) => write!(f, "{e}"),
            Error::UnknownUnionTag(t) => write!(f, "unrecognized union member type {t:#x}"),
            Error::DanglingNodeId(id) => write!(f, "node id {id} is out of range"),
            Error::NotExactlyOneRoot => write!(f, "schema does not have exactly one root node"),
            Error::DuplicateSymbol(ident) => write!(f, "tag symbol {ident:?} declared twice"),
        }
    }
}

impl std::error::Error for Error {}

impl From<lvs_tlv::Error> for Error {
    fn from(e: lvs_tlv::Error) -> Self {
        Error::Tlv(e)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
