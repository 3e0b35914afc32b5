pub mod error;

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use error::{Error, Reason};
use serde::{
    Deserialize, Deserializer, Serialize,
    de::{DeserializeOwned, IgnoredAny, MapAccess, SeqAccess, Visitor},
};
use serde_json::{Map, Value};

const MACAROON_TAG: &str = "macaroon";
const U1_MACAROON_TAG: &str = "u1-macaroon";

const TOKEN_TYPE_KEY: &str = "t";
const VALUE_KEY: &str = "v";

/// The closed set of credential kinds a stored envelope can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    /// Candid macaroon
    #[serde(rename = "macaroon")]
    Macaroon,
    /// Ubuntu One root and discharge macaroons
    #[serde(rename = "u1-macaroon")]
    U1Macaroon,
}

impl Display for TokenType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenType::Macaroon => write!(f, "{}", MACAROON_TAG),
            TokenType::U1Macaroon => write!(f, "{}", U1_MACAROON_TAG),
        }
    }
}

impl FromStr for TokenType {
    type Err = Reason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            MACAROON_TAG => Ok(TokenType::Macaroon),
            U1_MACAROON_TAG => Ok(TokenType::U1Macaroon),
            _ => Err(Reason::InvalidEnvelope(format!("unknown token type {s:?}"))),
        }
    }
}

/// A credential value that can travel inside a [`TaggedEnvelope`].
pub trait Payload: DeserializeOwned {
    /// The tag written next to this payload
    const TOKEN_TYPE: TokenType;

    /// Human readable name of the credential kind, used in error messages
    const NAME: &'static str;

    /// Build the JSON form of the payload.
    fn to_json_value(&self) -> Value;

    /// Parse a bare payload, without any envelope around it.
    fn from_json_str(s: &str) -> Result<Self, Reason> {
        serde_json::from_str(s).map_err(|e| Reason::InvalidPayload(e.to_string()))
    }
}

/*
wire shape: {"t": <token type>, "v": <payload>}
*/

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedEnvelope<T> {
    token_type: TokenType,
    value: T,
}

// Members other than the one being read are skipped by serde_json without
// being turned into values, so they never hit number range or depth limits.
#[derive(Deserialize)]
struct RawTokenType {
    #[serde(rename = "t")]
    token_type: TokenType,
}

#[derive(Deserialize)]
struct RawValue<T> {
    #[serde(rename = "v")]
    value: T,
}

impl<T: Payload> TaggedEnvelope<T> {
    pub fn new(value: T) -> Self {
        TaggedEnvelope {
            token_type: T::TOKEN_TYPE,
            value,
        }
    }

    pub fn token_type(&self) -> TokenType {
        self.token_type
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn to_json_value(&self) -> Value {
        let mut map = Map::new();
        map.insert(
            TOKEN_TYPE_KEY.to_string(),
            Value::String(self.token_type.to_string()),
        );
        map.insert(VALUE_KEY.to_string(), self.value.to_json_value());
        Value::Object(map)
    }

    /// Parse a tagged JSON object. The tag must be `T::TOKEN_TYPE`; any other
    /// tag, known or not, is rejected before the payload is looked at.
    pub fn from_json_str(s: &str) -> Result<Self, Reason> {
        let raw: RawTokenType =
            serde_json::from_str(s).map_err(|e| Reason::InvalidEnvelope(e.to_string()))?;
        if raw.token_type != T::TOKEN_TYPE {
            return Err(Reason::TokenTypeMismatch {
                expected: T::TOKEN_TYPE,
                found: raw.token_type,
            });
        }
        let payload: RawValue<T> =
            serde_json::from_str(s).map_err(|e| Reason::InvalidPayload(e.to_string()))?;
        Ok(TaggedEnvelope {
            token_type: raw.token_type,
            value: payload.value,
        })
    }
}

impl<T: Payload> Display for TaggedEnvelope<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_json_value())
    }
}

/// The shape of a string handed back by a credential store.
///
/// Whether the string is JSON, and then whether it is an object with a `t`
/// key, decides which variant it is. Nothing else is inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stored<'a> {
    /// JSON object carrying a token type key
    Tagged(&'a str),
    /// Any other JSON value, written before token types were stored
    Untagged { raw: &'a str, object: bool },
    /// Not JSON at all
    Opaque { raw: &'a str, error: String },
}

impl<'a> Stored<'a> {
    pub fn classify(stored: &'a str) -> Self {
        match serde_json::from_str::<Shape>(stored) {
            Err(e) => Stored::Opaque {
                raw: stored,
                error: e.to_string(),
            },
            Ok(Shape::Tagged) => Stored::Tagged(stored),
            Ok(Shape::Object) => Stored::Untagged {
                raw: stored,
                object: true,
            },
            Ok(Shape::Other) => Stored::Untagged {
                raw: stored,
                object: false,
            },
        }
    }
}

// Top level shape of a JSON document. Only the keys of a top level object
// are read; every nested value is skipped.
enum Shape {
    Tagged,
    Object,
    Other,
}

impl<'de> Deserialize<'de> for Shape {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ShapeVisitor)
    }
}

struct ShapeVisitor;

impl<'de> Visitor<'de> for ShapeVisitor {
    type Value = Shape;

    fn expecting(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("a JSON value")
    }

    fn visit_bool<E>(self, _: bool) -> Result<Shape, E> {
        Ok(Shape::Other)
    }

    fn visit_i64<E>(self, _: i64) -> Result<Shape, E> {
        Ok(Shape::Other)
    }

    fn visit_u64<E>(self, _: u64) -> Result<Shape, E> {
        Ok(Shape::Other)
    }

    fn visit_f64<E>(self, _: f64) -> Result<Shape, E> {
        Ok(Shape::Other)
    }

    fn visit_str<E>(self, _: &str) -> Result<Shape, E> {
        Ok(Shape::Other)
    }

    fn visit_unit<E>(self) -> Result<Shape, E> {
        Ok(Shape::Other)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Shape, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(Shape::Other)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Shape, A::Error> {
        let mut shape = Shape::Object;
        while let Some(key) = map.next_key::<String>()? {
            if key == TOKEN_TYPE_KEY {
                shape = Shape::Tagged;
            }
            map.next_value::<IgnoredAny>()?;
        }
        Ok(shape)
    }
}

/// Decode a tagged object into `T`, reporting failures as
/// `CredentialsNotParseable` for `T`.
pub fn decode_tagged<T: Payload>(stored: &str) -> Result<T, Error> {
    TaggedEnvelope::<T>::from_json_str(stored)
        .map(TaggedEnvelope::into_value)
        .map_err(|reason| {
            log::debug!("rejecting tagged {} credentials: {reason}", T::NAME);
            Error::not_parseable(T::NAME, reason)
        })
}
