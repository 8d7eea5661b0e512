use web_sys::{Storage, Window};

use crate::state::session::SessionError;

pub fn window() -> Result<Window, SessionError> {
    web_sys::window().ok_or_else(|| SessionError::Unavailable("No window object".into()))
}

pub fn local_storage() -> Result<Storage, SessionError> {
    window()?
        .local_storage()
        .map_err(|_| SessionError::Unavailable("No localStorage".into()))?
        .ok_or_else(|| SessionError::Unavailable("No localStorage".into()))
}
