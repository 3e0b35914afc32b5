//! # creds
//!
//! Core traits for encoding and decoding credentials kept in an external
//! credential store.
//!
//! This crate defines the `Decoder` and `Encoder` traits that every
//! credential codec in the workspace implements.
//!
//! ## Overview
//!
//! A credential travels between two representations:
//! ```text
//! credential value ⇄ tagged envelope ⇄ stored string
//! ```
//!
//! `Encoder` produces the stored string from a credential value, and
//! `Decoder` recovers the credential value from whatever string the store
//! hands back, including strings written by older formats.
//!
//! ## Type Safety
//!
//! The traits use marker traits (`DecodableFrom` and `EncodableTo`) so that
//! only conversions a codec crate has declared are possible.
//!
//! ## Example
//!
//! ```ignore
//! use creds::decoder::Decoder;
//! use creds::encoder::Encoder;
//! use candid::CandidCredential;
//!
//! let stored: String = CandidCredential::new("macaroon").encode()?;
//! let creds: CandidCredential = stored.decode()?;
//! ```

#![forbid(unsafe_code)]

pub mod decoder;
pub mod encoder;
