use leptos::*;
use std::{cell::RefCell, rc::Rc};

/// Blocking user-facing notification.
pub trait Alerts {
    fn alert(&self, message: &str);
}

pub type AlertsHandle = Rc<dyn Alerts>;

#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserAlerts;

#[cfg(target_arch = "wasm32")]
impl Alerts for BrowserAlerts {
    fn alert(&self, message: &str) {
        match web_sys::window() {
            Some(win) => {
                if let Err(err) = win.alert_with_message(message) {
                    log::error!("Failed to show alert: {:?}", err);
                }
            }
            None => log::warn!("No window to alert: {}", message),
        }
    }
}

/// Collects alerts instead of showing them.
#[derive(Clone, Debug, Default)]
pub struct RecordedAlerts {
    messages: Rc<RefCell<Vec<String>>>,
}

impl RecordedAlerts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    pub fn count(&self) -> usize {
        self.messages.borrow().len()
    }
}

impl Alerts for RecordedAlerts {
    fn alert(&self, message: &str) {
        log::warn!("alert: {}", message);
        self.messages.borrow_mut().push(message.to_string());
    }
}

pub fn platform_alerts() -> AlertsHandle {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(BrowserAlerts)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(RecordedAlerts::new())
    }
}

pub fn use_alerts() -> AlertsHandle {
    use_context::<AlertsHandle>().unwrap_or_else(platform_alerts)
}
