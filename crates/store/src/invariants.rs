//! Store invariants, checked against the internal tables.

use proptest::prelude::*;

use crate::store::Slot;
use crate::{Policy, PolicyId, PolicyKind, PolicyStore, RenameCheck, StoreConfig, StoreError};

/// Panics unless the index and both tables agree exactly.
pub(crate) fn assert_consistent(store: &PolicyStore) {
	assert_eq!(
		store.index.len(),
		store.arupa.len() + store.frisco.len(),
		"index size must equal the total number of records"
	);

	for (id, slot) in &store.index {
		match slot {
			Slot::Arupa(key) => {
				let record = store
					.arupa
					.get(key)
					.unwrap_or_else(|| panic!("arupa slot {key:?} for {id} has no record"));
				assert_eq!(&record.id, id);
				assert_eq!(record.policy.kind, PolicyKind::Arupa);
				if store.config.rename_check == RenameCheck::Enforce {
					assert_eq!(key, &record.policy.name, "arupa key must track the current name");
				}
			}
			Slot::Frisco => {
				let record = store
					.frisco
					.get(id)
					.unwrap_or_else(|| panic!("frisco slot for {id} has no record"));
				assert_eq!(&record.id, id);
				assert_eq!(record.policy.kind, PolicyKind::Frisco);
			}
		}
	}

	let kinds: Vec<_> = store.list().into_iter().map(|p| p.kind).collect();
	assert!(
		kinds.windows(2).all(|w| !(w[0] == PolicyKind::Frisco && w[1] == PolicyKind::Arupa)),
		"list must yield every Arupa policy before any Frisco policy"
	);
}

/// Invariant: no two live `Arupa` policies share a key, whichever path tries to
/// introduce the second one.
pub(crate) fn inv_arupa_keys_unique() {
	let mut store = PolicyStore::new();
	let foo = store.create(Policy::arupa("foo", "d")).unwrap();
	let bar = store.create(Policy::frisco("foo", "d")).unwrap();
	let baz = store.create(Policy::arupa("baz", "d")).unwrap();

	assert!(matches!(
		store.create(Policy::arupa("foo", "again")),
		Err(StoreError::DuplicateName { .. })
	));
	assert!(matches!(
		store.update(&bar, Policy::arupa("foo", "moved")),
		Err(StoreError::DuplicateName { .. })
	));
	assert!(matches!(
		store.update(&baz, Policy::arupa("foo", "renamed")),
		Err(StoreError::DuplicateName { .. })
	));

	assert_eq!(store.arupa.len(), 2);
	assert_eq!(store.read(&foo).unwrap(), Policy::arupa("foo", "d"));
	assert_consistent(&store);
}

#[cfg_attr(test, test)]
pub(crate) fn test_arupa_keys_unique() {
	inv_arupa_keys_unique()
}

/// Invariant: a rejected call leaves both `list` and every `read` unchanged.
pub(crate) fn inv_failed_operations_leave_store_untouched() {
	let mut store = PolicyStore::new();
	let foo = store.create(Policy::arupa("foo", "d1")).unwrap();
	let bar = store.create(Policy::frisco("bar", "d2")).unwrap();
	let ghost = PolicyId::from("not-a-live-id");

	let before = store.list();
	let foo_before = store.read(&foo).unwrap();
	let bar_before = store.read(&bar).unwrap();

	let failures = [
		store.create(Policy::arupa("foo", "dup")).map(drop),
		store.update(&bar, Policy::arupa("foo", "dup")),
		store.update(&ghost, Policy::frisco("x", "y")),
		store.delete(&ghost),
		store.read(&ghost).map(drop),
	];
	assert!(failures.iter().all(Result::is_err));

	assert_eq!(store.list(), before);
	assert_eq!(store.read(&foo).unwrap(), foo_before);
	assert_eq!(store.read(&bar).unwrap(), bar_before);
	assert_eq!(store.index[&bar], Slot::Frisco);
	assert_consistent(&store);
}

#[cfg_attr(test, test)]
pub(crate) fn test_failed_operations_leave_store_untouched() {
	inv_failed_operations_leave_store_untouched()
}

#[derive(Debug, Clone)]
enum Op {
	Create { kind: PolicyKind, name: u8 },
	Update { target: usize, kind: PolicyKind, name: u8, description: u8 },
	Delete { target: usize },
}

fn arb_kind() -> impl Strategy<Value = PolicyKind> {
	prop_oneof![Just(PolicyKind::Arupa), Just(PolicyKind::Frisco)]
}

fn arb_op() -> impl Strategy<Value = Op> {
	prop_oneof![
		3 => (arb_kind(), 0..4u8).prop_map(|(kind, name)| Op::Create { kind, name }),
		3 => (any::<usize>(), arb_kind(), 0..4u8, 0..3u8)
			.prop_map(|(target, kind, name, description)| Op::Update { target, kind, name, description }),
		1 => any::<usize>().prop_map(|target| Op::Delete { target }),
	]
}

/// Reference model: live policies in creation order, no indexing at all.
#[derive(Default)]
struct Model {
	live: Vec<(PolicyId, Policy)>,
}

impl Model {
	fn arupa_name_taken(&self, name: &str, except: Option<&PolicyId>) -> bool {
		self.live
			.iter()
			.any(|(id, p)| p.kind == PolicyKind::Arupa && p.name == name && Some(id) != except)
	}

	fn position(&self, id: &PolicyId) -> Option<usize> {
		self.live.iter().position(|(live, _)| live == id)
	}

	fn sorted(&self) -> Vec<Policy> {
		sorted(self.live.iter().map(|(_, p)| p.clone()).collect())
	}
}

fn pick(issued: &[PolicyId], target: usize) -> PolicyId {
	if issued.is_empty() {
		PolicyId::from("never-issued")
	} else {
		issued[target % issued.len()].clone()
	}
}

fn sorted(mut policies: Vec<Policy>) -> Vec<Policy> {
	policies.sort_by(|a, b| (a.kind.as_str(), &a.name, &a.description).cmp(&(b.kind.as_str(), &b.name, &b.description)));
	policies
}

proptest! {
	/// Random operation sequences agree with a scan-everything model and never
	/// break the index.
	#[test]
	fn test_random_operations_keep_index_consistent(ops in prop::collection::vec(arb_op(), 0..64)) {
		let mut store = PolicyStore::with_config(StoreConfig::default());
		let mut model = Model::default();
		let mut issued: Vec<PolicyId> = Vec::new();

		for op in ops {
			match op {
				Op::Create { kind, name } => {
					let policy = Policy::new(format!("p{name}"), "created", kind);
					let expect_dup = kind == PolicyKind::Arupa && model.arupa_name_taken(&policy.name, None);
					match store.create(policy.clone()) {
						Ok(id) => {
							prop_assert!(!expect_dup);
							prop_assert!(!issued.contains(&id), "identifiers must never repeat");
							issued.push(id.clone());
							model.live.push((id, policy));
						}
						Err(StoreError::DuplicateName { name }) => {
							prop_assert!(expect_dup);
							prop_assert_eq!(name, policy.name);
						}
						Err(other) => prop_assert!(false, "unexpected create error: {other}"),
					}
				}
				Op::Update { target, kind, name, description } => {
					let id = pick(&issued, target);
					let policy = Policy::new(format!("p{name}"), format!("d{description}"), kind);
					let result = store.update(&id, policy.clone());
					match model.position(&id) {
						None => prop_assert_eq!(result, Err(StoreError::NotFound { id: id.clone() })),
						Some(pos) => {
							let expect_dup = kind == PolicyKind::Arupa && model.arupa_name_taken(&policy.name, Some(&id));
							if expect_dup {
								prop_assert_eq!(result, Err(StoreError::DuplicateName { name: policy.name.clone() }));
							} else {
								prop_assert_eq!(result, Ok(()));
								model.live[pos].1 = policy;
							}
						}
					}
				}
				Op::Delete { target } => {
					let id = pick(&issued, target);
					let result = store.delete(&id);
					match model.position(&id) {
						None => prop_assert_eq!(result, Err(StoreError::NotFound { id: id.clone() })),
						Some(pos) => {
							prop_assert_eq!(result, Ok(()));
							model.live.remove(pos);
						}
					}
				}
			}

			assert_consistent(&store);
			prop_assert_eq!(sorted(store.list()), model.sorted());
			for (id, policy) in &model.live {
				let read = store.read(id);
				prop_assert_eq!(read.as_ref(), Ok(policy));
			}
		}
	}
}
