use serde::{Deserialize, Serialize};

/// Name pattern applied when no override is configured.
pub const DEFAULT_NAME_PATTERN: &str = "^[A-Za-z0-9_]{1,32}$";

/// Longest name, in characters, accepted when no override is configured.
pub const DEFAULT_NAME_MAX_LEN: usize = 32;

/// User-facing knobs for [`crate::Shape`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShapeConfig {
	/// Regular expression every policy name must match.
	pub name_pattern: String,
	/// Upper bound on name length in characters.
	pub name_max_len: usize,
}

impl Default for ShapeConfig {
	fn default() -> Self {
		Self {
			name_pattern: DEFAULT_NAME_PATTERN.to_string(),
			name_max_len: DEFAULT_NAME_MAX_LEN,
		}
	}
}
