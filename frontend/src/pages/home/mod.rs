use crate::components::guard::RequireSession;
use leptos::*;
use leptos_meta::Title;

pub mod components;
pub mod repository;
pub mod submission;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::HomePanel;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="GoPlan" />
        <RequireSession>
            <HomePanel />
        </RequireSession>
    }
}
