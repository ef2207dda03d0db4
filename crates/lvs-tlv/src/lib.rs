//! Cursor-based decoder for the VarNum TLV wire grammar the schema format
//! (and the names it operates over) is built on.
//!
//! - **VarNum**: `b <= 0xFC` is the value; `0xFD`/`0xFE`/`0xFF` prefix a
//!   2/4/8-byte big-endian tail.
//! - **Blocks**: `TYPE(VarNum) LENGTH(VarNum) VALUE(LENGTH bytes)`.
//! - **Names**: a sequence of components, each a block whose verbatim bytes
//!   (header included) are the unit of comparison.
//!
//! This is decode-only: schema authoring and name construction for wire
//! transmission are out of scope, so there's no encoder here beyond the
//! small `Component::generic` builder tests and downstream crates need.

pub mod component;
pub mod cursor;
pub mod primitives;
pub mod types;
pub mod varnum;

pub use component::decode_name_greedy;
pub use component::parse_name;
pub use component::Component;
pub use component::Name;
pub use cursor::Cursor;
pub use types::Error;
pub use types::Result;
pub use varnum::peek_varnum;
pub use varnum::read_varnum;

pub use primitives::decode_natural;
pub use primitives::peek_block_type;
pub use primitives::read_block;
pub use primitives::read_block_any;
pub use primitives::read_component_verbatim;
pub use primitives::read_natural_block;
pub use primitives::read_repeated;
pub use primitives::read_utf8_block;
pub use primitives::try_read_block;
pub use primitives::try_read_natural_block;

#[cfg(test)]
mod tests;
