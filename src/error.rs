//! Error type shared by every fallible [`Steque`](crate::Steque) operation.

/// Errors reported by a [`Steque`](crate::Steque) or its iterator.
///
/// A failed operation never mutates the steque; it stays usable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StequeError {
    /// An absent (`None`) element was offered to `try_push` or `try_enqueue`.
    #[error("cannot insert an absent element")]
    InvalidArgument,
    /// `pop` was called on an empty steque.
    #[error("stack underflow")]
    EmptyContainer,
    /// Removal was attempted through an iterator.
    #[error("remove is not supported by the steque iterator")]
    UnsupportedOperation,
}

/// Result alias with [`StequeError`] as the default error.
pub type Result<T, E = StequeError> = core::result::Result<T, E>;
