//! Thread-safe handle over a [`PolicyStore`].

use std::sync::Arc;

use parking_lot::Mutex;

use crate::{Policy, PolicyId, PolicyStore, StoreConfig, StoreError};

/// Cloneable handle that runs every store operation under one lock.
///
/// The lock covers both kind tables and the index together, so no thread can
/// observe a record without its index slot or the reverse. No guard escapes a
/// method call.
#[derive(Debug, Clone, Default)]
pub struct SharedPolicyStore {
	inner: Arc<Mutex<PolicyStore>>,
}

impl SharedPolicyStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_config(config: StoreConfig) -> Self {
		Self::from(PolicyStore::with_config(config))
	}

	pub fn create(&self, policy: Policy) -> Result<PolicyId, StoreError> {
		self.inner.lock().create(policy)
	}

	pub fn read(&self, id: &PolicyId) -> Result<Policy, StoreError> {
		self.inner.lock().read(id)
	}

	pub fn update(&self, id: &PolicyId, policy: Policy) -> Result<(), StoreError> {
		self.inner.lock().update(id, policy)
	}

	pub fn delete(&self, id: &PolicyId) -> Result<(), StoreError> {
		self.inner.lock().delete(id)
	}

	pub fn list(&self) -> Vec<Policy> {
		self.inner.lock().list()
	}

	pub fn len(&self) -> usize {
		self.inner.lock().len()
	}

	pub fn is_empty(&self) -> bool {
		self.inner.lock().is_empty()
	}

	/// Runs `f` with exclusive access to the underlying store.
	///
	/// Several operations issued inside `f` are applied without any other
	/// handle interleaving.
	pub fn with<R>(&self, f: impl FnOnce(&mut PolicyStore) -> R) -> R {
		f(&mut self.inner.lock())
	}
}

impl From<PolicyStore> for SharedPolicyStore {
	fn from(store: PolicyStore) -> Self {
		Self {
			inner: Arc::new(Mutex::new(store)),
		}
	}
}
