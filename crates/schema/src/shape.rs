use std::sync::LazyLock;

use charter_store::{Policy, PolicyId, PolicyKind};
use regex::Regex;
use serde_json::{Map, Value};

use crate::{DEFAULT_NAME_MAX_LEN, DEFAULT_NAME_PATTERN, ShapeConfig, ShapeError};

static DEFAULT_NAME_RE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(DEFAULT_NAME_PATTERN).expect("default name pattern is a valid regex"));

/// Compiled record shape.
#[derive(Debug, Clone)]
pub struct Shape {
	name_pattern: Regex,
	name_max_len: usize,
}

impl Default for Shape {
	fn default() -> Self {
		Self {
			name_pattern: DEFAULT_NAME_RE.clone(),
			name_max_len: DEFAULT_NAME_MAX_LEN,
		}
	}
}

impl Shape {
	/// Compiles a shape from configuration. Fails only if the name pattern is
	/// not a valid regular expression.
	pub fn new(config: &ShapeConfig) -> Result<Self, regex::Error> {
		Ok(Self {
			name_pattern: Regex::new(&config.name_pattern)?,
			name_max_len: config.name_max_len,
		})
	}

	/// Checks a submitted record and converts it into a [`Policy`].
	pub fn policy(&self, value: &Value) -> Result<Policy, ShapeError> {
		let fields = value.as_object().ok_or(ShapeError::NotAnObject)?;
		let name = string_field(fields, "name")?;
		let description = string_field(fields, "description")?;
		let kind = string_field(fields, "type")?;

		self.check_name(name)?;
		let kind = kind
			.parse::<PolicyKind>()
			.map_err(|_| ShapeError::UnknownKind { value: kind.to_string() })?;

		Ok(Policy::new(name, description, kind))
	}

	/// Checks a policy reference (`{"policy_id": "..."}`) and extracts the id.
	pub fn policy_ref(value: &Value) -> Result<PolicyId, ShapeError> {
		let fields = value.as_object().ok_or(ShapeError::NotAnObject)?;
		string_field(fields, "policy_id").map(PolicyId::from)
	}

	/// Checks an already typed policy. Only the name can be malformed.
	pub fn check(&self, policy: &Policy) -> Result<(), ShapeError> {
		self.check_name(&policy.name)
	}

	pub fn check_name(&self, name: &str) -> Result<(), ShapeError> {
		let len = name.chars().count();
		if len > self.name_max_len {
			return Err(ShapeError::NameTooLong {
				len,
				max: self.name_max_len,
			});
		}
		if !self.name_pattern.is_match(name) {
			return Err(ShapeError::NamePattern { name: name.to_string() });
		}
		Ok(())
	}
}

fn string_field<'a>(fields: &'a Map<String, Value>, field: &'static str) -> Result<&'a str, ShapeError> {
	match fields.get(field) {
		None => Err(ShapeError::MissingField { field }),
		Some(Value::String(s)) => Ok(s.as_str()),
		Some(_) => Err(ShapeError::WrongType {
			field,
			expected: "string",
		}),
	}
}
