#[cfg(not(target_arch = "wasm32"))]
pub mod ssr;

pub mod helpers {
    use crate::state::session::{MemoryStore, SessionContext};
    use crate::utils::{
        dialog::{AlertsHandle, RecordedAlerts},
        navigation::{MemoryNavigator, NavigatorHandle},
    };
    use leptos::*;
    use std::rc::Rc;

    /// Fakes standing in for the browser while a page is exercised.
    #[derive(Clone)]
    pub struct PageEnv {
        pub session: SessionContext,
        pub navigator: MemoryNavigator,
        pub alerts: RecordedAlerts,
    }

    pub fn page_env(access_token: Option<&str>) -> PageEnv {
        let session = SessionContext::new(MemoryStore::new());
        if let Some(token) = access_token {
            session
                .store_access_token(token)
                .expect("memory store accepts writes");
        }
        PageEnv {
            session,
            navigator: MemoryNavigator::new(),
            alerts: RecordedAlerts::new(),
        }
    }

    pub fn provide_page_env(access_token: Option<&str>) -> PageEnv {
        let env = page_env(access_token);
        provide_context(env.session.clone());
        provide_context::<NavigatorHandle>(Rc::new(env.navigator.clone()));
        provide_context::<AlertsHandle>(Rc::new(env.alerts.clone()));
        env
    }
}
