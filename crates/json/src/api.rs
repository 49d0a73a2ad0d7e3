use charter_schema::Shape;
use charter_store::{PolicyId, PolicyStore};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{ApiError, CharterConfig, ConfigError};

/// Wire form of a policy reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyRef {
	pub policy_id: PolicyId,
}

/// Policy registry driven by JSON strings.
#[derive(Debug, Default)]
pub struct PolicyApi {
	store: PolicyStore,
	shape: Shape,
}

impl PolicyApi {
	/// Creates an empty registry with the default shape and store settings.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an empty registry from loaded configuration.
	pub fn with_config(config: &CharterConfig) -> Result<Self, ConfigError> {
		Ok(Self {
			store: PolicyStore::with_config(config.store.clone()),
			shape: Shape::new(&config.shape)?,
		})
	}

	/// The store behind this facade.
	pub fn store(&self) -> &PolicyStore {
		&self.store
	}

	/// Creates a policy from a JSON record and returns `{"policy_id": ...}`.
	pub fn create_policy(&mut self, json: &str) -> Result<String, ApiError> {
		let policy = self.shape.policy(&parse(json)?).inspect_err(log_rejected)?;
		let policy_id = self.store.create(policy)?;
		encode(&PolicyRef { policy_id })
	}

	/// Returns the JSON record of the referenced policy.
	pub fn read_policy(&self, json_ref: &str) -> Result<String, ApiError> {
		let id = parse_ref(json_ref)?;
		encode(self.store.get(&id)?)
	}

	/// Overwrites the referenced policy with a JSON record.
	///
	/// Both inputs are checked before the store is touched.
	pub fn update_policy(&mut self, json_ref: &str, json: &str) -> Result<(), ApiError> {
		let id = parse_ref(json_ref)?;
		let policy = self.shape.policy(&parse(json)?).inspect_err(log_rejected)?;
		Ok(self.store.update(&id, policy)?)
	}

	/// Deletes the referenced policy.
	pub fn delete_policy(&mut self, json_ref: &str) -> Result<(), ApiError> {
		let id = parse_ref(json_ref)?;
		Ok(self.store.delete(&id)?)
	}

	/// Returns every live policy as a JSON array, `Arupa` first.
	pub fn list_policies(&self) -> Result<String, ApiError> {
		let policies: Vec<_> = self.store.entries().map(|(_, policy)| policy).collect();
		encode(&policies)
	}
}

fn parse(input: &str) -> Result<Value, ApiError> {
	serde_json::from_str(input).map_err(|e| {
		tracing::debug!(error = %e, "rejected malformed JSON");
		ApiError::Malformed(e)
	})
}

fn parse_ref(input: &str) -> Result<PolicyId, ApiError> {
	Shape::policy_ref(&parse(input)?)
		.inspect_err(log_rejected)
		.map_err(ApiError::from)
}

fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String, ApiError> {
	serde_json::to_string(value).map_err(ApiError::Encode)
}

fn log_rejected(error: &charter_schema::ShapeError) {
	tracing::debug!(error = %error, "rejected input shape");
}
