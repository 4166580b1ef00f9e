use std::sync::Mutex;

/// Single-slot storage for the admin credential. Implementations persist at
/// most one opaque token at a time; `set` overwrites and `clear` is
/// idempotent. Callers treat `Ok(None)` as "not authenticated".
pub trait CredentialStore: Send + Sync {
    fn get(&self) -> anyhow::Result<Option<String>>;
    fn set(&self, token: &str) -> anyhow::Result<()>;
    fn clear(&self) -> anyhow::Result<()>;
}

/// Process-local credential slot. Used by tests and by the `--token` flag,
/// where the credential should not outlive the invocation.
#[derive(Default)]
pub struct MemoryCredentials {
    slot: Mutex<Option<String>>,
}

impl MemoryCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(token.into())),
        }
    }
}

impl CredentialStore for MemoryCredentials {
    fn get(&self) -> anyhow::Result<Option<String>> {
        Ok(self
            .slot
            .lock()
            .map_err(|_| anyhow::anyhow!("credential slot poisoned"))?
            .clone())
    }

    fn set(&self, token: &str) -> anyhow::Result<()> {
        *self
            .slot
            .lock()
            .map_err(|_| anyhow::anyhow!("credential slot poisoned"))? = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> anyhow::Result<()> {
        *self
            .slot
            .lock()
            .map_err(|_| anyhow::anyhow!("credential slot poisoned"))? = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_overwrites_previous_token() {
        let store = MemoryCredentials::new();
        assert_eq!(store.get().unwrap(), None);
        store.set("first").unwrap();
        store.set("second").unwrap();
        assert_eq!(store.get().unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn clear_is_idempotent() {
        let store = MemoryCredentials::with_token("abc123");
        store.clear().unwrap();
        store.clear().unwrap();
        assert_eq!(store.get().unwrap(), None);
    }
}
