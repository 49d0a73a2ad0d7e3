//! Shape checks for policy records arriving as untyped JSON.
//!
//! The store trusts its inputs: a [`charter_store::Policy`] handed to it is
//! assumed to have a well-formed name. This crate is the gate in front of it.
//! [`Shape`] turns a [`serde_json::Value`] into a checked `Policy` (or a
//! checked policy reference) and reports the first constraint it violates as a
//! [`ShapeError`].
//!
//! Record constraints:
//!
//! | Field | Constraint |
//! |-------|------------|
//! | `name` | required string, at most `name_max_len` characters, matches `name_pattern` |
//! | `description` | required string |
//! | `type` | required, `"Arupa"` or `"Frisco"` |
//!
//! Fields beyond these are ignored.

mod config;
mod error;
mod shape;

pub use config::{DEFAULT_NAME_MAX_LEN, DEFAULT_NAME_PATTERN, ShapeConfig};
pub use error::ShapeError;
pub use shape::Shape;
