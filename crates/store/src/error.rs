use crate::PolicyId;

/// Errors returned by [`crate::PolicyStore`] operations.
///
/// A failed operation never leaves a partial mutation behind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
	/// An `Arupa` policy with this name is already live.
	#[error("policy name already in use: {name:?}")]
	DuplicateName { name: String },

	/// No live policy has this identifier.
	#[error("policy not found: {id}")]
	NotFound { id: PolicyId },
}
