//! In-memory policy registry.
//!
//! # Purpose
//!
//! Stores policy records of two kinds and keeps them addressable by an opaque
//! identifier. Policies are only stored and indexed here; nothing interprets
//! them.
//!
//! # Mental Model
//!
//! 1. **Kinds:** [`PolicyKind::Arupa`] policies live in a table keyed by name,
//!    which is what makes their names unique. [`PolicyKind::Frisco`] policies
//!    live in a table keyed by identifier and may share names.
//! 2. **Index:** A single identifier → slot map resolves any identifier to its
//!    table and key without scanning either table.
//! 3. **Operations:** [`PolicyStore`] exposes create/read/update/delete/list.
//!    Each one validates everything it needs before its first write.
//! 4. **Sharing:** [`SharedPolicyStore`] runs the same operations under a single
//!    mutex.
//!
//! # Invariants
//!
//! - Every live identifier has exactly one index slot, and that slot resolves
//!   to exactly one record carrying the same identifier.
//!   - Enforced in: [`PolicyStore::create`], [`PolicyStore::update`], [`PolicyStore::delete`].
//!   - Tested by: `invariants::test_random_operations_keep_index_consistent`
//!   - Failure symptom: `unreachable!` panic on read, or phantom entries in `list`.
//!
//! - No two live `Arupa` policies share a table key.
//!   - Enforced in: `PolicyStore::ensure_arupa_name_free`.
//!   - Tested by: `invariants::test_arupa_keys_unique`
//!   - Failure symptom: a second `Arupa` create silently replaces the first.
//!
//! - A failed operation changes nothing observable.
//!   - Enforced in: every operation returns before its first write on any error.
//!   - Tested by: `invariants::test_failed_operations_leave_store_untouched`
//!   - Failure symptom: `list` differs before and after a rejected call.

mod config;
mod error;
mod id;
mod policy;
mod shared;
mod store;

pub use config::{RenameCheck, StoreConfig};
pub use error::StoreError;
pub use id::PolicyId;
pub use policy::{ParseKindError, Policy, PolicyKind};
pub use shared::SharedPolicyStore;
pub use store::PolicyStore;

#[cfg(test)]
pub(crate) mod invariants;
