//! Stored form of Ubuntu One SSO credentials.
//!
//! Ubuntu One credentials are a root macaroon and a discharge macaroon. They
//! are stored as `{"t":"u1-macaroon","v":{"r":<root>,"d":<discharge>}}`.
//! Pairs written before the token type was stored (`{"r":..,"d":..}`) are
//! still read. Unlike Candid credentials there is no non-JSON legacy form.

use std::convert::Infallible;

use creds::{
    decoder::{DecodableFrom, Decoder},
    encoder::{EncodableTo, Encoder},
};
use envelope::{
    Payload, Stored, TaggedEnvelope, TokenType, decode_tagged,
    error::{Error, Reason},
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// The set of macaroons used in Ubuntu SSO.
///
/// `root` stays the same for the lifetime of the login while `discharge`
/// is replaced whenever it is refreshed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UbuntuOneMacaroons {
    #[serde(rename = "r")]
    root: String,
    #[serde(rename = "d")]
    discharge: String,
}

impl UbuntuOneMacaroons {
    pub fn new(root: impl Into<String>, discharge: impl Into<String>) -> Self {
        UbuntuOneMacaroons {
            root: root.into(),
            discharge: discharge.into(),
        }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn discharge(&self) -> &str {
        &self.discharge
    }

    /// A copy of this pair with a different discharge macaroon.
    pub fn with_discharge(&self, discharge: impl Into<String>) -> Self {
        UbuntuOneMacaroons {
            root: self.root.clone(),
            discharge: discharge.into(),
        }
    }

    /// Serialize for storage, tagged as Ubuntu One macaroons.
    pub fn marshal(&self) -> String {
        TaggedEnvelope::new(self.clone()).to_string()
    }

    /// Recover the pair from a stored string, tagged or not.
    pub fn unmarshal(marshalled_creds: &str) -> Result<Self, Error> {
        match Stored::classify(marshalled_creds) {
            Stored::Tagged(raw) => decode_tagged(raw),
            Stored::Untagged { raw, object } => {
                log::debug!("reading ubuntu one credentials stored without a token type");
                let payload = if object {
                    <Self as Payload>::from_json_str(raw)
                } else {
                    Err(Reason::InvalidPayload(
                        "expected a JSON object with root and discharge".to_string(),
                    ))
                };
                payload.map_err(|reason| {
                    log::debug!("rejecting untagged ubuntu one credentials: {reason}");
                    Error::not_parseable(Self::NAME, reason)
                })
            }
            Stored::Opaque { error, .. } => {
                log::debug!("rejecting ubuntu one credentials that are not JSON: {error}");
                Err(Error::not_parseable(Self::NAME, Reason::InvalidJson(error)))
            }
        }
    }
}

impl Payload for UbuntuOneMacaroons {
    const TOKEN_TYPE: TokenType = TokenType::U1Macaroon;
    const NAME: &'static str = "Ubuntu One";

    fn to_json_value(&self) -> Value {
        json!({
            "r": self.root,
            "d": self.discharge,
        })
    }
}

impl DecodableFrom<&str> for UbuntuOneMacaroons {}

impl Decoder<&str, UbuntuOneMacaroons> for &str {
    type Error = Error;

    fn decode(&self) -> Result<UbuntuOneMacaroons, Self::Error> {
        UbuntuOneMacaroons::unmarshal(self)
    }
}

impl DecodableFrom<String> for UbuntuOneMacaroons {}

impl Decoder<String, UbuntuOneMacaroons> for String {
    type Error = Error;

    fn decode(&self) -> Result<UbuntuOneMacaroons, Self::Error> {
        UbuntuOneMacaroons::unmarshal(self)
    }
}

impl EncodableTo<UbuntuOneMacaroons> for String {}

impl Encoder<UbuntuOneMacaroons, String> for UbuntuOneMacaroons {
    type Error = Infallible;

    fn encode(&self) -> Result<String, Self::Error> {
        Ok(self.marshal())
    }
}

/// Serialize Ubuntu One credentials for storage.
pub fn marshal_u1_credentials(u1_creds: &UbuntuOneMacaroons) -> String {
    u1_creds.marshal()
}

/// Deserialize Ubuntu One credentials read back from a credential store.
///
/// # Errors
///
/// Returns `CredentialsNotParseable` when the stored string is not JSON,
/// carries the token type of another credential kind, or lacks either
/// macaroon.
pub fn unmarshal_u1_credentials(marshalled_creds: &str) -> Result<UbuntuOneMacaroons, Error> {
    UbuntuOneMacaroons::unmarshal(marshalled_creds)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::Error;
    use crate::Reason;
    use crate::UbuntuOneMacaroons;
    use crate::marshal_u1_credentials;
    use crate::unmarshal_u1_credentials;
    use creds::decoder::Decoder;
    use creds::encoder::Encoder;
    use envelope::TokenType;

    #[test]
    fn test_marshal() {
        let macaroons = UbuntuOneMacaroons::new("root", "discharge");
        assert_eq!(
            r#"{"t":"u1-macaroon","v":{"d":"discharge","r":"root"}}"#,
            marshal_u1_credentials(&macaroons)
        );
    }

    #[rstest]
    #[case::plain("root", "discharge")]
    #[case::empty("", "")]
    #[case::json_looking(r#"{"t": "macaroon", "v": "m"}"#, r#"["d"]"#)]
    #[case::unicode("ルート", "disch\"arge\n")]
    fn test_roundtrip(#[case] root: &str, #[case] discharge: &str) {
        let macaroons = UbuntuOneMacaroons::new(root, discharge);
        let marshalled = marshal_u1_credentials(&macaroons);
        let got = unmarshal_u1_credentials(&marshalled).unwrap();
        assert_eq!(macaroons, got);
        assert_eq!(root, got.root());
        assert_eq!(discharge, got.discharge());

        let again = unmarshal_u1_credentials(&marshal_u1_credentials(&got)).unwrap();
        assert_eq!(macaroons, again);
    }

    #[rstest(
        input,
        case(r#"{"t": "u1-macaroon", "v": {"r": "root", "d": "discharge"}}"#),
        case(r#"{"v": {"d": "discharge", "r": "root", "x": 1}, "t": "u1-macaroon"}"#),
        case(r#"{"r": "root", "d": "discharge"}"#),
        case(r#"{"d": "discharge", "r": "root", "extra": [1, 2]}"#),
        case(r#"{"t": "u1-macaroon", "v": {"r": "root", "d": "discharge", "exp": 1e400}}"#),
        case(r#"{"r": "root", "d": "discharge", "exp": 1e400}"#)
    )]
    fn test_unmarshal(input: &str) {
        let got = unmarshal_u1_credentials(input).unwrap();
        assert_eq!(UbuntuOneMacaroons::new("root", "discharge"), got);
    }

    #[rstest]
    #[case::not_json("not json")]
    #[case::empty("")]
    #[case::candid(r#"{"t": "macaroon", "v": "m"}"#)]
    #[case::unknown_tag(r#"{"t": "password", "v": {"r": "root", "d": "discharge"}}"#)]
    #[case::missing_value(r#"{"t": "u1-macaroon"}"#)]
    #[case::missing_discharge(r#"{"t": "u1-macaroon", "v": {"r": "root"}}"#)]
    #[case::string_value(r#"{"t": "u1-macaroon", "v": "root"}"#)]
    #[case::untagged_missing_root(r#"{"d": "discharge"}"#)]
    #[case::untagged_number_root(r#"{"r": 1, "d": "discharge"}"#)]
    #[case::untagged_list(r#"["root", "discharge"]"#)]
    #[case::untagged_string(r#""root""#)]
    #[case::candid_with_huge_number(r#"{"t": "macaroon", "v": "m", "exp": 1e400}"#)]
    fn test_unmarshal_with_error(#[case] input: &str) {
        match unmarshal_u1_credentials(input) {
            Err(Error::CredentialsNotParseable { message, .. }) => {
                assert_eq!("Expected valid Ubuntu One credentials", message);
            }
            Ok(v) => panic!("this test should return an error, got {v:?}"),
        }
    }

    #[test]
    fn test_unmarshal_not_json_reason() {
        let err = unmarshal_u1_credentials("not json").unwrap_err();
        assert!(matches!(err.reason(), Reason::InvalidJson(_)));
    }

    #[test]
    fn test_unmarshal_candid_reason() {
        let err = unmarshal_u1_credentials(r#"{"t":"macaroon","v":"m"}"#).unwrap_err();
        assert_eq!(
            &Reason::TokenTypeMismatch {
                expected: TokenType::U1Macaroon,
                found: TokenType::Macaroon,
            },
            err.reason()
        );
    }

    #[test]
    fn test_with_discharge() {
        let original = UbuntuOneMacaroons::new("R", "D1");
        let refreshed = original.with_discharge("D2");
        assert_eq!(UbuntuOneMacaroons::new("R", "D2"), refreshed);
        assert_eq!(UbuntuOneMacaroons::new("R", "D1"), original);
    }

    #[test]
    fn test_decoder_and_encoder() {
        let macaroons = UbuntuOneMacaroons::new("root", "discharge");
        let stored: String = macaroons.encode().unwrap();
        let decoded: UbuntuOneMacaroons = stored.decode().unwrap();
        assert_eq!(macaroons, decoded);

        let legacy: Result<UbuntuOneMacaroons, _> = "opaque".decode();
        assert!(legacy.is_err());
    }
}
