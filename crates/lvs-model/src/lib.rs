//! Typed records for a trust schema, decoded from the wire grammar defined
//! by `lvs-tlv`.
//!
//! The model is immutable once built (`decode_model` is the only way to get
//! one) and is meant to be shared by reference across many match/check
//! invocations, not copied.

pub mod decode;
pub mod error;
pub mod tlv_types;
pub mod types;

pub use decode::decode_model;
pub use error::Error;
pub use error::Result;
pub use lvs_tlv::Component;
pub use lvs_tlv::Name;
pub use types::CallArg;
pub use types::ConstraintOption;
pub use types::LvsModel;
pub use types::Node;
pub use types::NodeId;
pub use types::PatternConstraint;
pub use types::PatternEdge;
pub use types::TagId;
pub use types::TagSymbol;
pub use types::UserFnCall;
pub use types::ValueEdge;
