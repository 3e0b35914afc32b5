//! Decoder trait for type-safe conversions.
//!
//! The `Decoder` trait converts a source type `T` into a destination type
//! `D`. In this workspace the source is the string kept by a credential store
//! and the destination is a typed credential.
//!
//! # Design Pattern
//!
//! 1. `Decoder<T, D>` - Performs the actual conversion
//! 2. `DecodableFrom<T>` - Marker trait constraining valid conversions
//!
//! # Implementation Guide
//!
//! ```no_run
//! use creds::decoder::{Decoder, DecodableFrom};
//!
//! struct Token(String);
//!
//! #[derive(Debug)]
//! struct MyError;
//!
//! impl DecodableFrom<&str> for Token {}
//!
//! impl Decoder<&str, Token> for &str {
//!     type Error = MyError;
//!
//!     fn decode(&self) -> Result<Token, Self::Error> {
//!         Ok(Token(self.to_string()))
//!     }
//! }
//! ```

/// Decoder trait for converting from type `T` to type `D`.
///
/// This trait is implemented by the source type `T`. The destination type
/// must implement `DecodableFrom<T>`.
///
/// # Type Parameters
///
/// * `T` - The source type (usually `Self`)
/// * `D` - The destination type that can be decoded from `T`
///
/// # Examples
///
/// ```ignore
/// use creds::decoder::Decoder;
/// use ubuntu_one::UbuntuOneMacaroons;
///
/// let stored = r#"{"t":"u1-macaroon","v":{"r":"root","d":"discharge"}}"#;
/// let macaroons: UbuntuOneMacaroons = stored.decode()?;
/// ```
pub trait Decoder<T, D: DecodableFrom<T>> {
    /// The error type returned when decoding fails.
    type Error;

    /// Decodes `self` into type `D`.
    ///
    /// # Errors
    ///
    /// Returns an error if the conversion fails. The specific error
    /// conditions depend on the implementing type.
    fn decode(&self) -> Result<D, Self::Error>;
}

/// Marker trait indicating that type `D` can be decoded from type `T`.
///
/// This trait has no methods. Implement it for destination types that can
/// be decoded from a source type:
///
/// ```no_run
/// use creds::decoder::DecodableFrom;
///
/// struct Stored;
/// struct Token;
///
/// impl DecodableFrom<Stored> for Token {}
/// ```
pub trait DecodableFrom<T> {}
