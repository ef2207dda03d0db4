//! Wires a decoded trust schema to a registry of named predicates and
//! exposes the two public match shapes: rule lookup (`match_name`) and the
//! signing-policy decision (`check`).

pub mod checker;
pub mod error;
pub mod registry;

pub use checker::Checker;
pub use checker::MatchEntry;
pub use error::ModelError;
pub use error::Result;
pub use registry::FnRegistry;
