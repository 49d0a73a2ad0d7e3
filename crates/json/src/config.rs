//! Registry configuration loaded from TOML.
//!
//! ```toml
//! [shape]
//! name_pattern = "^[A-Za-z0-9_]{1,32}$"
//! name_max_len = 32
//!
//! [store]
//! rename_check = "enforce"
//! ```
//!
//! Every table and field is optional; omitted values take their defaults.

use std::path::{Path, PathBuf};

use charter_schema::ShapeConfig;
use charter_store::StoreConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CharterConfig {
	pub shape: ShapeConfig,
	pub store: StoreConfig,
}

impl CharterConfig {
	pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
		toml::from_str(content)
	}

	/// Reads and parses a config file.
	pub fn load(path: &Path) -> Result<Self, ConfigError> {
		let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
			path: path.to_path_buf(),
			source,
		})?;
		let config = Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
			path: path.to_path_buf(),
			source,
		})?;
		tracing::debug!(path = %path.display(), "loaded registry config");
		Ok(config)
	}
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("failed to read {}: {source}", path.display())]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to parse {}: {source}", path.display())]
	Parse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("invalid name pattern: {0}")]
	Pattern(#[from] regex::Error),
}
