use super::{
    repository::TravelPlanRepository,
    submission::{SubmissionController, SubmissionState},
};
use crate::{
    api::{ApiClient, TravelPlanData},
    state::session::{self, use_session, SessionContext},
    utils::{
        dialog::use_alerts,
        navigation::{use_navigator, NavigatorHandle, DASHBOARD_PATH, PROFILE_PATH},
        tasks::PendingWork,
    },
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone)]
pub struct HomeViewModel {
    pub submission: RwSignal<SubmissionState>,
    pub in_flight: RwSignal<usize>,
    pub menu_open: RwSignal<bool>,
    controller: SubmissionController,
    session: SessionContext,
    navigator: NavigatorHandle,
}

impl HomeViewModel {
    pub fn submit(&self, plan: TravelPlanData) {
        self.controller.submit(plan);
    }

    pub fn banner_message(&self) -> Option<String> {
        self.submission.get().banner_message()
    }

    pub fn toggle_menu(&self) {
        self.menu_open.update(|open| *open = !*open);
    }

    pub fn open_profile(&self) {
        self.menu_open.set(false);
        self.navigator.navigate(PROFILE_PATH);
    }

    pub fn open_dashboard(&self) {
        self.menu_open.set(false);
        self.navigator.navigate(DASHBOARD_PATH);
    }

    pub fn logout(&self) {
        self.menu_open.set(false);
        session::logout(&self.session, self.navigator.as_ref());
    }
}

pub fn use_home_view_model() -> HomeViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = TravelPlanRepository::new_with_client(Rc::new(api));
    let session = use_session();
    let navigator = use_navigator();
    let work = use_context::<PendingWork>().unwrap_or_default();

    let controller = SubmissionController::new(
        repository,
        session.clone(),
        navigator.clone(),
        use_alerts(),
        work,
    );

    let on_teardown = controller.clone();
    on_cleanup(move || on_teardown.teardown());

    HomeViewModel {
        submission: controller.state(),
        in_flight: controller.in_flight(),
        menu_open: create_rw_signal(false),
        controller,
        session,
        navigator,
    }
}
