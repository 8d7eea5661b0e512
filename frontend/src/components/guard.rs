use crate::{
    state::session::{use_session, SessionContext},
    utils::navigation::{use_navigator, Navigator, LOGIN_PATH},
};
use leptos::*;

/// Lets the page render only when an access token is present; otherwise
/// replaces the current location with the login page.
pub fn enforce_session_gate(session: &SessionContext, navigator: &dyn Navigator) -> bool {
    if session.is_authenticated() {
        return true;
    }
    log::info!("No access token, redirecting to {}", LOGIN_PATH);
    navigator.replace(LOGIN_PATH);
    false
}

/// Runs the gate once when mounted. Children are never built for a visitor
/// without a token, so nothing of the page leaks before the redirect.
#[component]
pub fn RequireSession(children: Children) -> impl IntoView {
    let session = use_session();
    let navigator = use_navigator();
    if enforce_session_gate(&session, navigator.as_ref()) {
        children().into_view()
    } else {
        ().into_view()
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::RequireSession;
    use crate::test_support::helpers::provide_page_env;
    use crate::test_support::ssr::render_to_string;
    use leptos::*;

    #[test]
    fn require_session_renders_children_with_token() {
        let html = render_to_string(move || {
            provide_page_env(Some("tok-123"));
            view! {
                <RequireSession>
                    <div>"plan-travel-content"</div>
                </RequireSession>
            }
        });
        assert!(html.contains("plan-travel-content"));
    }

    #[test]
    fn require_session_renders_nothing_and_redirects_without_token() {
        let env = std::rc::Rc::new(std::cell::RefCell::new(None));
        let env_slot = env.clone();
        let html = render_to_string(move || {
            *env_slot.borrow_mut() = Some(provide_page_env(None));
            view! {
                <RequireSession>
                    <div>"plan-travel-content"</div>
                </RequireSession>
            }
        });
        assert!(!html.contains("plan-travel-content"));

        let env = env.borrow_mut().take().unwrap();
        assert_eq!(env.navigator.paths(), vec!["/login".to_string()]);
        assert_eq!(env.alerts.count(), 0);
    }
}
