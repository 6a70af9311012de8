//! Error handling and result types for AvlTreeMap operations.
//!
//! Point operations only ever fail with [`AvlTreeError::KeyAlreadyExists`] or
//! [`AvlTreeError::KeyNotFound`]. The remaining variants are produced by the
//! validation layer when a structural invariant does not hold.

/// Error type for AVL tree operations.
#[derive(Debug, Clone, PartialEq)]
pub enum AvlTreeError {
    /// Insertion of a key that is already stored.
    KeyAlreadyExists,
    /// Key not found in the tree (or the tree is empty).
    KeyNotFound,
    /// Internal data structure integrity violation.
    DataIntegrityError(String),
    /// Tree corruption detected (dangling or leaked nodes).
    CorruptedTree(String),
}

impl AvlTreeError {
    /// Create a DataIntegrityError with context
    pub fn data_integrity(context: &str, details: &str) -> Self {
        Self::DataIntegrityError(format!("{}: {}", context, details))
    }

    /// Create a CorruptedTree error with context
    pub fn corrupted_tree(component: &str, details: &str) -> Self {
        Self::CorruptedTree(format!("{} corruption: {}", component, details))
    }

    /// Check if this error is one of the two key errors raised by point operations
    pub fn is_key_error(&self) -> bool {
        matches!(self, Self::KeyAlreadyExists | Self::KeyNotFound)
    }
}

impl std::fmt::Display for AvlTreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AvlTreeError::KeyAlreadyExists => write!(f, "Key already exists in tree"),
            AvlTreeError::KeyNotFound => write!(f, "Key not found in tree"),
            AvlTreeError::DataIntegrityError(msg) => write!(f, "Data integrity error: {}", msg),
            AvlTreeError::CorruptedTree(msg) => write!(f, "Corrupted tree: {}", msg),
        }
    }
}

impl std::error::Error for AvlTreeError {}

/// Internal result type for tree operations
pub(crate) type TreeResult<T> = Result<T, AvlTreeError>;

/// Result type for key lookup operations
pub type KeyResult<T> = Result<T, AvlTreeError>;

/// Result type for tree modification operations
pub type ModifyResult<T> = Result<T, AvlTreeError>;

/// Result extension trait for attaching operation context to validation errors
pub trait TreeResultExt<T> {
    /// Prefix the error message with additional context
    fn with_context(self, context: &str) -> KeyResult<T>;

    /// Prefix the error message with the name of the failing operation
    fn with_operation(self, operation: &str) -> KeyResult<T>;
}

impl<T> TreeResultExt<T> for Result<T, AvlTreeError> {
    fn with_context(self, context: &str) -> KeyResult<T> {
        self.map_err(|e| match e {
            AvlTreeError::KeyAlreadyExists => AvlTreeError::KeyAlreadyExists,
            AvlTreeError::KeyNotFound => AvlTreeError::KeyNotFound,
            AvlTreeError::DataIntegrityError(msg) => AvlTreeError::data_integrity(context, &msg),
            AvlTreeError::CorruptedTree(msg) => {
                AvlTreeError::CorruptedTree(format!("{}: {}", context, msg))
            }
        })
    }

    fn with_operation(self, operation: &str) -> KeyResult<T> {
        self.with_context(&format!("Operation '{}'", operation))
    }
}
