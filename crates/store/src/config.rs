//! Store behavior knobs.

use serde::{Deserialize, Serialize};

/// How `update` treats an `Arupa` policy that keeps its kind but changes name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenameCheck {
	/// The new name must not belong to another live `Arupa` policy, and the
	/// name slot is re-keyed so the `Arupa` table is always keyed by current name.
	#[default]
	Enforce,
	/// The name is overwritten in place. No uniqueness check runs and the slot
	/// keeps the key it was created under.
	Legacy,
}

/// Configuration for a [`crate::PolicyStore`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
	pub rename_check: RenameCheck,
}
