use leptos::*;
use std::{cell::RefCell, rc::Rc};

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const PROFILE_PATH: &str = "/profile";

/// Opaque "go to path" capability. `replace` swaps the current history entry,
/// `navigate` pushes a new one.
pub trait Navigator {
    fn navigate(&self, path: &str);
    fn replace(&self, path: &str);
}

pub type NavigatorHandle = Rc<dyn Navigator>;

#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

#[cfg(target_arch = "wasm32")]
impl Navigator for BrowserNavigator {
    fn navigate(&self, path: &str) {
        if let Some(win) = web_sys::window() {
            if let Err(err) = win.location().set_href(path) {
                log::error!("Failed to navigate to {}: {:?}", path, err);
            }
        }
    }

    fn replace(&self, path: &str) {
        if let Some(win) = web_sys::window() {
            if let Err(err) = win.location().replace(path) {
                log::error!("Failed to redirect to {}: {:?}", path, err);
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Visit {
    pub path: String,
    pub replaced: bool,
}

/// Keeps navigation in memory. Used off the browser and by tests to observe
/// where the page tried to go.
#[derive(Clone, Debug, Default)]
pub struct MemoryNavigator {
    visits: Rc<RefCell<Vec<Visit>>>,
}

impl MemoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visits(&self) -> Vec<Visit> {
        self.visits.borrow().clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.visits.borrow().iter().map(|v| v.path.clone()).collect()
    }

    pub fn current(&self) -> Option<String> {
        self.visits.borrow().last().map(|v| v.path.clone())
    }

    fn record(&self, path: &str, replaced: bool) {
        self.visits.borrow_mut().push(Visit {
            path: path.to_string(),
            replaced,
        });
    }
}

impl Navigator for MemoryNavigator {
    fn navigate(&self, path: &str) {
        self.record(path, false);
    }

    fn replace(&self, path: &str) {
        self.record(path, true);
    }
}

pub fn platform_navigator() -> NavigatorHandle {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(BrowserNavigator)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(MemoryNavigator::new())
    }
}

pub fn use_navigator() -> NavigatorHandle {
    use_context::<NavigatorHandle>().unwrap_or_else(platform_navigator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_navigator_records_push_and_replace() {
        let nav = MemoryNavigator::new();
        nav.replace(LOGIN_PATH);
        nav.navigate(DASHBOARD_PATH);

        assert_eq!(
            nav.visits(),
            vec![
                Visit {
                    path: "/login".into(),
                    replaced: true
                },
                Visit {
                    path: "/dashboard".into(),
                    replaced: false
                },
            ]
        );
        assert_eq!(nav.current().as_deref(), Some("/dashboard"));
    }

    #[test]
    fn clones_share_history() {
        let nav = MemoryNavigator::new();
        let handle: NavigatorHandle = Rc::new(nav.clone());
        handle.navigate(PROFILE_PATH);
        assert_eq!(nav.paths(), vec!["/profile".to_string()]);
    }
}
