use crate::utils::navigation::{Navigator, LOGIN_PATH};
use leptos::*;
use std::{cell::RefCell, collections::HashMap, rc::Rc};
use thiserror::Error;

pub const ACCESS_TOKEN_KEY: &str = "access_token";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("session storage unavailable: {0}")]
    Unavailable(String),
    #[error("session storage rejected access: {0}")]
    Access(String),
}

/// Key/value storage holding the credential.
pub trait SessionStore {
    fn read(&self, key: &str) -> Result<Option<String>, SessionError>;
    fn write(&self, key: &str, value: &str) -> Result<(), SessionError>;
    fn delete(&self, key: &str) -> Result<(), SessionError>;
}

#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl SessionStore for LocalStorageStore {
    fn read(&self, key: &str) -> Result<Option<String>, SessionError> {
        crate::utils::storage::local_storage()?
            .get_item(key)
            .map_err(|_| SessionError::Access(format!("Failed to read {}", key)))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), SessionError> {
        crate::utils::storage::local_storage()?
            .set_item(key, value)
            .map_err(|_| SessionError::Access(format!("Failed to write {}", key)))
    }

    fn delete(&self, key: &str) -> Result<(), SessionError> {
        crate::utils::storage::local_storage()?
            .remove_item(key)
            .map_err(|_| SessionError::Access(format!("Failed to remove {}", key)))
    }
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), SessionError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// The page's view of the signed-in session. Only presence of the access
/// token is checked here; expiry and signature are the backend's business.
#[derive(Clone)]
pub struct SessionContext {
    store: Rc<dyn SessionStore>,
}

impl SessionContext {
    pub fn new(store: impl SessionStore + 'static) -> Self {
        Self {
            store: Rc::new(store),
        }
    }

    pub fn platform() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::new(LocalStorageStore)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::new(MemoryStore::new())
        }
    }

    /// Storage failures count as "no token".
    pub fn access_token(&self) -> Option<String> {
        match self.store.read(ACCESS_TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(err) => {
                log::warn!("Treating session as signed out: {}", err);
                None
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }

    pub fn store_access_token(&self, token: &str) -> Result<(), SessionError> {
        self.store.write(ACCESS_TOKEN_KEY, token)
    }

    pub fn clear(&self) -> Result<(), SessionError> {
        self.store.delete(ACCESS_TOKEN_KEY)
    }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(SessionContext::platform)
}

/// Drops the credential and sends the user to the login page. Safe to call
/// when already signed out.
pub fn logout(session: &SessionContext, navigator: &dyn Navigator) {
    if let Err(err) = session.clear() {
        log::error!("Failed to clear session: {}", err);
    }
    navigator.navigate(LOGIN_PATH);
}
