//! JSON text facade over the policy registry.
//!
//! [`PolicyApi`] accepts and returns JSON strings. Every input is parsed and
//! shape-checked by [`charter_schema::Shape`] before the underlying
//! [`charter_store::PolicyStore`] sees it, so a rejected call never reaches the
//! store.
//!
//! | Call | Input | Output |
//! |------|-------|--------|
//! | [`PolicyApi::create_policy`] | record | `{"policy_id": ...}` |
//! | [`PolicyApi::read_policy`] | reference | record |
//! | [`PolicyApi::update_policy`] | reference, record | nothing |
//! | [`PolicyApi::delete_policy`] | reference | nothing |
//! | [`PolicyApi::list_policies`] | nothing | array of records |
//!
//! A record is `{"name", "description", "type"}`; a reference is
//! `{"policy_id"}`. Failures are classified by [`ApiError::kind`].

mod api;
mod config;
mod error;

pub use api::{PolicyApi, PolicyRef};
pub use config::{CharterConfig, ConfigError};
pub use error::{ApiError, ErrorKind};
