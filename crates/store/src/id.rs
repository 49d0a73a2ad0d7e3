use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier assigned to a policy when it is created.
///
/// Identifiers are random v4 UUIDs rendered as strings. They stay attached to
/// a policy for its whole lifetime, across kind changes, and are never handed
/// out again once the policy is deleted.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PolicyId(Box<str>);

impl PolicyId {
	/// Mints a fresh random identifier.
	pub fn mint() -> Self {
		Self(Uuid::new_v4().to_string().into_boxed_str())
	}

	/// Returns the identifier as a string slice.
	#[inline]
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl core::fmt::Display for PolicyId {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<String> for PolicyId {
	fn from(v: String) -> Self {
		PolicyId(v.into_boxed_str())
	}
}

impl From<&str> for PolicyId {
	fn from(v: &str) -> Self {
		PolicyId(Box::from(v))
	}
}

impl AsRef<str> for PolicyId {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
