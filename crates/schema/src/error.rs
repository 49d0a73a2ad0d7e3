/// A submitted record or reference that does not have the expected shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
	#[error("expected a JSON object")]
	NotAnObject,

	#[error("missing required field {field:?}")]
	MissingField { field: &'static str },

	#[error("field {field:?} must be a {expected}")]
	WrongType {
		field: &'static str,
		expected: &'static str,
	},

	#[error("name {name:?} does not match the allowed pattern")]
	NamePattern { name: String },

	#[error("name is {len} characters long, at most {max} allowed")]
	NameTooLong { len: usize, max: usize },

	#[error("unknown policy type {value:?}")]
	UnknownKind { value: String },
}
