/// A key/value store that keeps credentials as opaque strings.
///
/// Implementations know nothing about the credential kinds; the strings
/// they keep are produced and read by the codecs.
pub trait CredentialStore {
    /// The error type representing all the ways a store operation can fail.
    type Error;

    /// Retrieve the string stored under `key`.
    ///
    /// If the store itself did not experience an error, but the key was not
    /// found, the result will be `Ok(None)`.
    fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: String) -> Result<(), Self::Error>;

    /// Remove the value stored under `key`. Removing a missing key is not an error.
    fn delete(&mut self, key: &str) -> Result<(), Self::Error>;
}
