use super::{
    components::{form::TravelPlanForm, header::ProfileHeader},
    view_model::{use_home_view_model, HomeViewModel},
};
use crate::{api::TravelPlanData, components::layout::SuccessBanner};
use leptos::*;

#[component]
pub fn HomePanel() -> impl IntoView {
    let vm = use_context::<HomeViewModel>().unwrap_or_else(use_home_view_model);

    let menu_open = vm.menu_open;
    let submission = vm.submission;
    let in_flight = vm.in_flight;
    let banner = Signal::derive(move || submission.get().banner_message());
    let busy = Signal::derive(move || in_flight.get() > 0);

    let on_toggle = {
        let vm = vm.clone();
        Callback::new(move |_: ()| vm.toggle_menu())
    };
    let on_profile = {
        let vm = vm.clone();
        Callback::new(move |_: ()| vm.open_profile())
    };
    let on_dashboard = {
        let vm = vm.clone();
        Callback::new(move |_: ()| vm.open_dashboard())
    };
    let on_logout = {
        let vm = vm.clone();
        Callback::new(move |_: ()| vm.logout())
    };
    let on_submit = Callback::new(move |plan: TravelPlanData| vm.submit(plan));

    view! {
        <div class="homepage min-h-screen bg-surface">
            <ProfileHeader
                menu_open=menu_open
                on_toggle=on_toggle
                on_profile=on_profile
                on_dashboard=on_dashboard
                on_logout=on_logout
            />
            <SuccessBanner message=banner />
            <main class="flex flex-col items-center justify-center text-center px-4 py-8">
                <h1 class="text-3xl font-bold text-status-success-text">{"Plan Travel"}</h1>
                <Show when=move || busy.get()>
                    <p class="mt-2 text-sm text-fg-muted">
                        {move || match in_flight.get() {
                            1 => "Submitting…".to_string(),
                            n => format!("Submitting {} plans…", n),
                        }}
                    </p>
                </Show>
                <TravelPlanForm on_submit=on_submit busy=busy />
            </main>
        </div>
    }
}
