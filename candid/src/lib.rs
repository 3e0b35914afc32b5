//! Stored form of Candid credentials.
//!
//! [`marshal_candid_credentials`] always writes the tagged form
//! `{"t":"macaroon","v":<macaroon>}`. [`unmarshal_candid_credentials`] also
//! reads the forms written before the token type was stored:
//!
//! 1. a tagged envelope produced by [`marshal_candid_credentials`];
//! 2. JSON without a token type, holding a serialized macaroon;
//! 3. a string that is not JSON, holding the macaroon itself.
//!
//! JSON that *has* a token type other than `macaroon` is rejected with
//! `CredentialsNotParseable`.

use std::{
    convert::Infallible,
    fmt::{Display, Formatter},
};

use creds::{
    decoder::{DecodableFrom, Decoder},
    encoder::{EncodableTo, Encoder},
};
use envelope::{Payload, Stored, TaggedEnvelope, TokenType, decode_tagged, error::Error};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An opaque Candid macaroon.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidCredential(String);

impl CandidCredential {
    pub fn new(macaroon: impl Into<String>) -> Self {
        CandidCredential(macaroon.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Serialize for storage, tagged as a Candid macaroon.
    pub fn marshal(&self) -> String {
        TaggedEnvelope::new(self.clone()).to_string()
    }

    /// Recover a Candid credential from a stored string in any known form.
    pub fn unmarshal(marshalled_creds: &str) -> Result<Self, Error> {
        match Stored::classify(marshalled_creds) {
            Stored::Tagged(raw) => decode_tagged(raw),
            Stored::Untagged { raw, object } => {
                log::debug!("reading candid credentials stored without a token type");
                let legacy = if object { legacy_value(raw) } else { None };
                Ok(legacy.unwrap_or_else(|| CandidCredential::new(raw)))
            }
            Stored::Opaque { raw, .. } => {
                log::debug!("reading candid credentials stored as an opaque string");
                Ok(CandidCredential::new(raw))
            }
        }
    }
}

#[derive(Deserialize)]
struct LegacyValue {
    v: String,
}

// An untagged object whose `v` member is a string already names the
// macaroon; anything else is a serialized macaroon kept verbatim.
fn legacy_value(raw: &str) -> Option<CandidCredential> {
    serde_json::from_str::<LegacyValue>(raw)
        .ok()
        .map(|legacy| CandidCredential(legacy.v))
}

impl Display for CandidCredential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for CandidCredential {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for CandidCredential {
    fn from(macaroon: String) -> Self {
        CandidCredential(macaroon)
    }
}

impl From<&str> for CandidCredential {
    fn from(macaroon: &str) -> Self {
        CandidCredential(macaroon.to_string())
    }
}

impl Payload for CandidCredential {
    const TOKEN_TYPE: TokenType = TokenType::Macaroon;
    const NAME: &'static str = "Candid";

    fn to_json_value(&self) -> Value {
        Value::String(self.0.clone())
    }
}

impl DecodableFrom<&str> for CandidCredential {}

impl Decoder<&str, CandidCredential> for &str {
    type Error = Error;

    fn decode(&self) -> Result<CandidCredential, Self::Error> {
        CandidCredential::unmarshal(self)
    }
}

impl DecodableFrom<String> for CandidCredential {}

impl Decoder<String, CandidCredential> for String {
    type Error = Error;

    fn decode(&self) -> Result<CandidCredential, Self::Error> {
        CandidCredential::unmarshal(self)
    }
}

impl EncodableTo<CandidCredential> for String {}

impl Encoder<CandidCredential, String> for CandidCredential {
    type Error = Infallible;

    fn encode(&self) -> Result<String, Self::Error> {
        Ok(self.marshal())
    }
}

/// Serialize Candid credentials for storage.
///
/// The result also records the token type, so that
/// [`unmarshal_candid_credentials`] can tell it apart from other kinds.
pub fn marshal_candid_credentials(candid_creds: &str) -> String {
    CandidCredential::new(candid_creds).marshal()
}

/// Deserialize Candid credentials read back from a credential store.
///
/// # Errors
///
/// Returns `CredentialsNotParseable` when the stored string is a tagged
/// envelope for another credential kind, or a malformed Candid envelope.
pub fn unmarshal_candid_credentials(marshalled_creds: &str) -> Result<String, Error> {
    CandidCredential::unmarshal(marshalled_creds).map(CandidCredential::into_inner)
}
