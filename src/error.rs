use thiserror::Error;

/// Error returned by the fallible tree operations.
///
/// A failed operation leaves the tree unchanged.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
	/// The inserted key is already present in the tree.
	#[error("key already present in the tree")]
	DuplicateKey,

	/// The target key is not present in the tree.
	#[error("key not found in the tree")]
	NotFound,
}
