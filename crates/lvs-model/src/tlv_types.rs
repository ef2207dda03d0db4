//! TLV type numbers for the schema wire format. Fixed: part of wire
//! compatibility, not an implementation choice.

pub const COMPONENT_VALUE: u64 = 0x01;
pub const PATTERN_TAG: u64 = 0x02;
pub const NODE_ID: u64 = 0x03;
pub const USER_FN_ID: u64 = 0x04;
pub const IDENTIFIER: u64 = 0x05;

pub const USER_FN_CALL: u64 = 0x11;
pub const FN_ARGS: u64 = 0x12;

pub const CONS_OPTION: u64 = 0x21;
pub const CONSTRAINT: u64 = 0x22;

pub const VALUE_EDGE: u64 = 0x31;
pub const PATTERN_EDGE: u64 = 0x32;
pub const KEY_NODE_ID: u64 = 0x33;
pub const PARENT_ID: u64 = 0x34;

pub const VERSION: u64 = 0x40;
pub const NODE: u64 = 0x41;
pub const TAG_SYMBOL: u64 = 0x42;
pub const NAMED_PATTERN_NUM: u64 = 0x43;
