//! Policy tables and the identifier index.
//!
//! # Role
//!
//! [`PolicyStore`] owns one table per [`PolicyKind`] plus a single index that
//! maps every live identifier to the slot holding its record. `Arupa` records
//! are keyed by name so name collisions are a single lookup; `Frisco` records
//! are keyed by identifier since their names may repeat.
//!
//! Every operation checks all of its preconditions before touching any table,
//! so a failed call leaves the store exactly as it found it.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;

use crate::{Policy, PolicyId, PolicyKind, RenameCheck, StoreConfig, StoreError};

/// Location of a record, as recorded in the identifier index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Slot {
	/// In the `Arupa` table under this name key.
	Arupa(String),
	/// In the `Frisco` table under the identifier itself.
	Frisco,
}

impl Slot {
	pub(crate) fn kind(&self) -> PolicyKind {
		match self {
			Slot::Arupa(_) => PolicyKind::Arupa,
			Slot::Frisco => PolicyKind::Frisco,
		}
	}
}

#[derive(Debug, Clone)]
pub(crate) struct Record {
	pub(crate) id: PolicyId,
	pub(crate) policy: Policy,
}

/// In-memory registry of policies.
///
/// The store is a plain owned value: callers construct one, and every
/// operation borrows it for its whole duration. Wrap it in
/// [`crate::SharedPolicyStore`] to share it across threads.
#[derive(Debug, Default)]
pub struct PolicyStore {
	pub(crate) config: StoreConfig,
	pub(crate) arupa: IndexMap<String, Record>,
	pub(crate) frisco: IndexMap<PolicyId, Record>,
	pub(crate) index: FxHashMap<PolicyId, Slot>,
}

impl PolicyStore {
	/// Creates an empty store with default configuration.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an empty store with the given configuration.
	pub fn with_config(config: StoreConfig) -> Self {
		Self {
			config,
			..Self::default()
		}
	}

	#[inline]
	pub fn config(&self) -> &StoreConfig {
		&self.config
	}

	/// Returns the number of live policies.
	#[inline]
	pub fn len(&self) -> usize {
		self.index.len()
	}

	/// Returns true if no policy is live.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.index.is_empty()
	}

	/// Returns true if `id` names a live policy.
	#[inline]
	pub fn contains(&self, id: &PolicyId) -> bool {
		self.index.contains_key(id)
	}

	/// Stores a new policy and returns its freshly minted identifier.
	///
	/// Fails with [`StoreError::DuplicateName`] if `policy` is `Arupa` and its
	/// name is already taken by a live `Arupa` policy.
	pub fn create(&mut self, policy: Policy) -> Result<PolicyId, StoreError> {
		let id = self.mint_id();
		let kind = policy.kind;

		let slot = match kind {
			PolicyKind::Arupa => {
				self.ensure_arupa_name_free(&policy.name)?;
				let name = policy.name.clone();
				self.arupa.insert(name.clone(), Record { id: id.clone(), policy });
				Slot::Arupa(name)
			}
			PolicyKind::Frisco => {
				self.frisco.insert(id.clone(), Record { id: id.clone(), policy });
				Slot::Frisco
			}
		};
		self.index.insert(id.clone(), slot);

		tracing::debug!(id = %id, kind = %kind, "policy created");
		Ok(id)
	}

	/// Returns a borrow of the policy stored under `id`.
	pub fn get(&self, id: &PolicyId) -> Result<&Policy, StoreError> {
		let slot = self.index.get(id).ok_or_else(|| not_found(id))?;
		let record = match slot {
			Slot::Arupa(key) => self.arupa.get(key),
			Slot::Frisco => self.frisco.get(id),
		};
		match record {
			Some(record) => Ok(&record.policy),
			None => dangling(id, slot),
		}
	}

	/// Returns a snapshot of the policy stored under `id`.
	pub fn read(&self, id: &PolicyId) -> Result<Policy, StoreError> {
		self.get(id).cloned()
	}

	/// Overwrites the policy stored under `id` with `policy`.
	///
	/// Moving a policy between kinds moves its record between tables and
	/// repoints its index slot. Moving into `Arupa` requires the new name to be
	/// free among live `Arupa` policies; a renamed `Arupa` policy is checked the
	/// same way unless the store runs with [`RenameCheck::Legacy`].
	pub fn update(&mut self, id: &PolicyId, policy: Policy) -> Result<(), StoreError> {
		let Some(slot) = self.index.get(id).cloned() else {
			tracing::debug!(id = %id, "update of unknown policy");
			return Err(not_found(id));
		};
		let from = slot.kind();
		let to = policy.kind;

		match (slot, to) {
			(Slot::Arupa(key), PolicyKind::Frisco) => {
				let Some(mut record) = self.arupa.shift_remove(&key) else {
					dangling(id, &Slot::Arupa(key))
				};
				record.policy = policy;
				self.frisco.insert(id.clone(), record);
				self.index.insert(id.clone(), Slot::Frisco);
			}
			(Slot::Frisco, PolicyKind::Arupa) => {
				self.ensure_arupa_name_free(&policy.name)?;
				let Some(mut record) = self.frisco.shift_remove(id) else {
					dangling(id, &Slot::Frisco)
				};
				let name = policy.name.clone();
				record.policy = policy;
				self.arupa.insert(name.clone(), record);
				self.index.insert(id.clone(), Slot::Arupa(name));
			}
			(Slot::Arupa(key), PolicyKind::Arupa) if key != policy.name && self.config.rename_check == RenameCheck::Enforce => {
				self.ensure_arupa_name_free(&policy.name)?;
				let Some(mut record) = self.arupa.shift_remove(&key) else {
					dangling(id, &Slot::Arupa(key))
				};
				let name = policy.name.clone();
				record.policy = policy;
				self.arupa.insert(name.clone(), record);
				self.index.insert(id.clone(), Slot::Arupa(name));
			}
			(Slot::Arupa(key), PolicyKind::Arupa) => match self.arupa.get_mut(&key) {
				Some(record) => record.policy = policy,
				None => dangling(id, &Slot::Arupa(key)),
			},
			(Slot::Frisco, PolicyKind::Frisco) => match self.frisco.get_mut(id) {
				Some(record) => record.policy = policy,
				None => dangling(id, &Slot::Frisco),
			},
		}

		tracing::debug!(id = %id, from = %from, to = %to, "policy updated");
		Ok(())
	}

	/// Removes the policy stored under `id`.
	pub fn delete(&mut self, id: &PolicyId) -> Result<(), StoreError> {
		let Some(slot) = self.index.remove(id) else {
			tracing::debug!(id = %id, "delete of unknown policy");
			return Err(not_found(id));
		};
		let removed = match &slot {
			Slot::Arupa(key) => self.arupa.shift_remove(key),
			Slot::Frisco => self.frisco.shift_remove(id),
		};
		if removed.is_none() {
			dangling(id, &slot);
		}

		tracing::debug!(id = %id, kind = %slot.kind(), "policy deleted");
		Ok(())
	}

	/// Iterates live policies with their identifiers, `Arupa` first.
	pub fn entries(&self) -> impl Iterator<Item = (&PolicyId, &Policy)> + '_ {
		self.arupa
			.values()
			.chain(self.frisco.values())
			.map(|record| (&record.id, &record.policy))
	}

	/// Returns a snapshot of every live policy, `Arupa` first.
	pub fn list(&self) -> Vec<Policy> {
		self.entries().map(|(_, policy)| policy.clone()).collect()
	}

	fn ensure_arupa_name_free(&self, name: &str) -> Result<(), StoreError> {
		if self.arupa.contains_key(name) {
			tracing::debug!(policy_name = name, "arupa name already in use");
			return Err(StoreError::DuplicateName { name: name.to_string() });
		}
		Ok(())
	}

	fn mint_id(&self) -> PolicyId {
		loop {
			let id = PolicyId::mint();
			if !self.index.contains_key(&id) {
				return id;
			}
		}
	}
}

fn not_found(id: &PolicyId) -> StoreError {
	StoreError::NotFound { id: id.clone() }
}

#[cold]
fn dangling(id: &PolicyId, slot: &Slot) -> ! {
	unreachable!("index slot does not resolve to a record (id={id}, slot={slot:?}); every table mutation must update the index in the same call")
}
