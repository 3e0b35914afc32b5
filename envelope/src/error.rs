use thiserror::Error;

use crate::TokenType;

/// Errors raised while turning a stored string back into a credential.
///
/// There is a single kind. The message names the credential kind the
/// caller expected, and the [`Reason`] says what went wrong.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("{message}")]
    CredentialsNotParseable {
        message: String,
        #[source]
        reason: Reason,
    },
}

impl Error {
    pub fn not_parseable(credential_name: &str, reason: Reason) -> Self {
        Error::CredentialsNotParseable {
            message: format!("Expected valid {credential_name} credentials"),
            reason,
        }
    }

    pub fn reason(&self) -> &Reason {
        match self {
            Error::CredentialsNotParseable { reason, .. } => reason,
        }
    }
}

/// Why a stored string could not be parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Reason {
    /// The stored string is not JSON and the credential kind has no opaque form
    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    /// A tagged object whose `t`/`v` members are missing or malformed
    #[error("invalid envelope: {0}")]
    InvalidEnvelope(String),

    /// The envelope carries the tag of another credential kind
    #[error("token type mismatch: expected {expected}, found {found}")]
    TokenTypeMismatch {
        expected: TokenType,
        found: TokenType,
    },

    /// The payload does not have the shape of the expected credential
    #[error("invalid payload: {0}")]
    InvalidPayload(String),
}
