use anyhow::Context;
use classdesk_core::credentials::CredentialStore;
use keyring::Entry;

const SERVICE: &str = "classdesk";
const ACCOUNT: &str = "admin-token";

/// OS-keyring-backed credential slot. One token under a fixed
/// service/account pair; a missing entry reads as `None`.
pub struct KeyringCredentials;

impl KeyringCredentials {
    fn entry() -> anyhow::Result<Entry> {
        Entry::new(SERVICE, ACCOUNT).context("open keyring entry")
    }
}

impl CredentialStore for KeyringCredentials {
    fn get(&self) -> anyhow::Result<Option<String>> {
        match Self::entry()?.get_password() {
            Ok(token) => Ok(Some(token)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(err) => Err(err).context("read admin token from keyring"),
        }
    }

    fn set(&self, token: &str) -> anyhow::Result<()> {
        Self::entry()?
            .set_password(token)
            .context("write admin token to keyring")
    }

    fn clear(&self) -> anyhow::Result<()> {
        match Self::entry()?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(err) => Err(err).context("remove admin token from keyring"),
        }
    }
}
