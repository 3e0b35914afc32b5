//! Credential store contract and typed access to it.
//!
//! A [`CredentialStore`] only keeps strings. [`Credentials`] sits on top of a
//! store and moves Candid and Ubuntu One credentials in and out of it
//! through their codecs, so everything written is in the tagged form while
//! legacy entries are still readable.

pub mod error;
mod memory;
mod traits;

use candid::{marshal_candid_credentials, unmarshal_candid_credentials};
use ubuntu_one::{UbuntuOneMacaroons, marshal_u1_credentials, unmarshal_u1_credentials};

pub use error::Error;
pub use memory::MemoryStore;
pub use traits::CredentialStore;

/// Typed credential access over a [`CredentialStore`].
#[derive(Debug, Clone, Default)]
pub struct Credentials<S> {
    store: S,
}

impl<S: CredentialStore> Credentials<S> {
    pub fn new(store: S) -> Self {
        Credentials { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    pub fn set_candid(&mut self, key: &str, candid_creds: &str) -> Result<(), Error<S::Error>> {
        log::debug!("storing candid credentials under {key:?}");
        self.store
            .set(key, marshal_candid_credentials(candid_creds))
            .map_err(Error::Store)
    }

    pub fn get_candid(&self, key: &str) -> Result<Option<String>, Error<S::Error>> {
        let Some(stored) = self.store.get(key).map_err(Error::Store)? else {
            log::debug!("no candid credentials under {key:?}");
            return Ok(None);
        };
        Ok(Some(unmarshal_candid_credentials(&stored)?))
    }

    pub fn set_u1(&mut self, key: &str, u1_creds: &UbuntuOneMacaroons) -> Result<(), Error<S::Error>> {
        log::debug!("storing ubuntu one credentials under {key:?}");
        self.store
            .set(key, marshal_u1_credentials(u1_creds))
            .map_err(Error::Store)
    }

    pub fn get_u1(&self, key: &str) -> Result<Option<UbuntuOneMacaroons>, Error<S::Error>> {
        let Some(stored) = self.store.get(key).map_err(Error::Store)? else {
            log::debug!("no ubuntu one credentials under {key:?}");
            return Ok(None);
        };
        Ok(Some(unmarshal_u1_credentials(&stored)?))
    }

    /// Replace the discharge macaroon stored under `key`, keeping its root.
    ///
    /// Returns the refreshed pair, or `None` when nothing is stored under `key`.
    pub fn refresh_u1_discharge(
        &mut self,
        key: &str,
        discharge: &str,
    ) -> Result<Option<UbuntuOneMacaroons>, Error<S::Error>> {
        let Some(current) = self.get_u1(key)? else {
            return Ok(None);
        };
        let refreshed = current.with_discharge(discharge);
        self.set_u1(key, &refreshed)?;
        Ok(Some(refreshed))
    }

    pub fn delete(&mut self, key: &str) -> Result<(), Error<S::Error>> {
        log::debug!("deleting credentials under {key:?}");
        self.store.delete(key).map_err(Error::Store)
    }
}
