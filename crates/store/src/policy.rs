use serde::{Deserialize, Serialize};

/// The two kinds of policy the store knows about.
///
/// The kinds differ only in their naming discipline. The wire spelling of each
/// variant is its exact name (`"Arupa"`, `"Frisco"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyKind {
	/// Names are unique among live `Arupa` policies.
	Arupa,
	/// Names may repeat freely.
	Frisco,
}

impl PolicyKind {
	/// Every kind, in list order.
	pub const ALL: [PolicyKind; 2] = [PolicyKind::Arupa, PolicyKind::Frisco];

	/// Returns the wire spelling of this kind.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Arupa => "Arupa",
			Self::Frisco => "Frisco",
		}
	}

	/// Returns true if live policies of this kind must have distinct names.
	pub const fn unique_names(self) -> bool {
		match self {
			Self::Arupa => true,
			Self::Frisco => false,
		}
	}
}

impl core::fmt::Display for PolicyKind {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Error returned when a string names no known [`PolicyKind`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown policy kind: {0:?}")]
pub struct ParseKindError(pub String);

impl core::str::FromStr for PolicyKind {
	type Err = ParseKindError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		PolicyKind::ALL
			.into_iter()
			.find(|kind| kind.as_str() == s)
			.ok_or_else(|| ParseKindError(s.to_string()))
	}
}

/// The public fields of a policy.
///
/// This is both what callers submit on create/update and what the store hands
/// back on read/list. The identifier is addressed separately and is not part
/// of the payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Policy {
	pub name: String,
	pub description: String,
	#[serde(rename = "type")]
	pub kind: PolicyKind,
}

impl Policy {
	pub fn new(name: impl Into<String>, description: impl Into<String>, kind: PolicyKind) -> Self {
		Self {
			name: name.into(),
			description: description.into(),
			kind,
		}
	}

	/// Shorthand for an `Arupa` policy.
	pub fn arupa(name: impl Into<String>, description: impl Into<String>) -> Self {
		Self::new(name, description, PolicyKind::Arupa)
	}

	/// Shorthand for a `Frisco` policy.
	pub fn frisco(name: impl Into<String>, description: impl Into<String>) -> Self {
		Self::new(name, description, PolicyKind::Frisco)
	}
}
