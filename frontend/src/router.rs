use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::{
    api::ApiClient,
    pages::home::HomePage,
    state::session::SessionContext,
    utils::{
        dialog::{platform_alerts, AlertsHandle},
        navigation::{platform_navigator, NavigatorHandle},
    },
};

/// Routes served by this bundle. Login, dashboard and profile live in other
/// bundles and are reached by full navigation.
pub const ROUTE_PATHS: &[&str] = &["/", "/home"];

pub fn mount_app() {
    mount_to_body(app_root);
}

/// Browser-backed services shared by every page.
pub fn provide_app_services() {
    provide_meta_context();
    provide_context(ApiClient::new());
    provide_context(SessionContext::platform());
    provide_context::<NavigatorHandle>(platform_navigator());
    provide_context::<AlertsHandle>(platform_alerts());
}

pub fn app_root() -> impl IntoView {
    provide_app_services();
    view! {
        <Router>
            <Routes>
                <Route path="/" view=HomePage/>
                <Route path="/home" view=HomePage/>
            </Routes>
        </Router>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn app_services_are_available_from_context() {
        with_runtime(|| {
            provide_app_services();
            assert!(use_context::<ApiClient>().is_some());
            assert!(use_context::<SessionContext>().is_some());
            assert!(use_context::<NavigatorHandle>().is_some());
            assert!(use_context::<AlertsHandle>().is_some());
        });
    }
}
