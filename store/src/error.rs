use thiserror::Error;

/// Errors from typed credential access.
///
/// `E` is the error type of the underlying [`CredentialStore`](crate::CredentialStore).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error<E> {
    #[error("credential store: {0}")]
    Store(E),

    #[error(transparent)]
    Credentials(#[from] envelope::error::Error),
}
