use charter_schema::ShapeError;
use charter_store::StoreError;

/// Discriminable failure classes of the text API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
	/// Input was not JSON, or did not have the expected shape.
	Validation,
	/// An `Arupa` name collided with a live `Arupa` policy.
	DuplicateName,
	/// The referenced policy does not exist.
	NotFound,
	/// Output could not be encoded.
	Internal,
}

impl core::fmt::Display for ErrorKind {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			Self::Validation => write!(f, "validation"),
			Self::DuplicateName => write!(f, "duplicate_name"),
			Self::NotFound => write!(f, "not_found"),
			Self::Internal => write!(f, "internal"),
		}
	}
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
	#[error("malformed JSON input: {0}")]
	Malformed(#[source] serde_json::Error),

	#[error("invalid input: {0}")]
	Validation(#[from] ShapeError),

	#[error(transparent)]
	Store(#[from] StoreError),

	#[error("failed to encode response: {0}")]
	Encode(#[source] serde_json::Error),
}

impl ApiError {
	pub fn kind(&self) -> ErrorKind {
		match self {
			Self::Malformed(_) | Self::Validation(_) => ErrorKind::Validation,
			Self::Store(StoreError::DuplicateName { .. }) => ErrorKind::DuplicateName,
			Self::Store(StoreError::NotFound { .. }) => ErrorKind::NotFound,
			Self::Encode(_) => ErrorKind::Internal,
		}
	}
}
