use super::repository::TravelPlanRepository;
use crate::{
    api::{ApiError, TravelPlanData},
    state::session::SessionContext,
    utils::{
        dialog::AlertsHandle,
        navigation::{NavigatorHandle, DASHBOARD_PATH},
        tasks::{PendingWork, TaskHandle},
        timer::sleep,
    },
};
use leptos::*;
use serde_json::Value;
use std::{cell::RefCell, rc::Rc, time::Duration};

pub const SUCCESS_MESSAGE: &str = "Travel plan created successfully!";
pub const FAILURE_ALERT: &str = "There was an error creating your travel plan. Please try again.";
pub const REDIRECT_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Success(String),
    /// Kept for inspection only; the page shows the alert and nothing else.
    Failed(ApiError),
}

impl SubmissionState {
    pub fn banner_message(&self) -> Option<String> {
        match self {
            SubmissionState::Success(message) => Some(message.clone()),
            _ => None,
        }
    }
}

/// Decrements the in-flight count however the request future ends,
/// including being cancelled mid-request.
struct InFlight(RwSignal<usize>);

impl InFlight {
    fn enter(count: RwSignal<usize>) -> Self {
        count.update(|n| *n += 1);
        Self(count)
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.try_update(|n| *n = n.saturating_sub(1));
    }
}

/// Turns a travel plan into `POST /travel-plans` and drives the page's
/// feedback: banner plus delayed dashboard redirect on success, a single alert
/// on any failure.
///
/// Submissions are independent. Each runs in its own future; the only state
/// they share is the last outcome and the one pending redirect, which a newer
/// success replaces.
#[derive(Clone)]
pub struct SubmissionController {
    repository: TravelPlanRepository,
    session: SessionContext,
    navigator: NavigatorHandle,
    alerts: AlertsHandle,
    work: PendingWork,
    state: RwSignal<SubmissionState>,
    in_flight: RwSignal<usize>,
    redirect: Rc<RefCell<Option<TaskHandle>>>,
    redirect_delay: Duration,
}

impl SubmissionController {
    pub fn new(
        repository: TravelPlanRepository,
        session: SessionContext,
        navigator: NavigatorHandle,
        alerts: AlertsHandle,
        work: PendingWork,
    ) -> Self {
        Self {
            repository,
            session,
            navigator,
            alerts,
            work,
            state: create_rw_signal(SubmissionState::Idle),
            in_flight: create_rw_signal(0),
            redirect: Rc::new(RefCell::new(None)),
            redirect_delay: REDIRECT_DELAY,
        }
    }

    pub fn with_redirect_delay(mut self, delay: Duration) -> Self {
        self.redirect_delay = delay;
        self
    }

    pub fn state(&self) -> RwSignal<SubmissionState> {
        self.state
    }

    pub fn in_flight(&self) -> RwSignal<usize> {
        self.in_flight
    }

    /// Fire-and-forget entry point for the form. The outcome shows up in
    /// [`Self::state`]; the handle only cancels.
    pub fn submit(&self, plan: TravelPlanData) -> TaskHandle {
        let controller = self.clone();
        self.work.spawn(async move {
            let _ = controller.process(plan).await;
        })
    }

    /// One full submission: request, then success or failure side effects.
    pub async fn process(&self, plan: TravelPlanData) -> Result<(), ApiError> {
        let result = {
            let _in_flight = InFlight::enter(self.in_flight);
            self.send(&plan).await
        };
        match result {
            Ok(payload) => {
                self.on_success(payload);
                Ok(())
            }
            Err(err) => {
                self.on_failure(&err);
                Err(err)
            }
        }
    }

    /// Releases the in-flight request and any pending redirect.
    pub fn teardown(&self) {
        self.work.cancel_all();
        self.redirect.borrow_mut().take();
    }

    async fn send(&self, plan: &TravelPlanData) -> Result<Value, ApiError> {
        let token = self
            .session
            .access_token()
            .ok_or(ApiError::MissingCredential)?;
        self.repository.create(&token, plan).await
    }

    fn on_success(&self, payload: Value) {
        log::info!("Travel plan created: {}", payload);
        self.state
            .set(SubmissionState::Success(SUCCESS_MESSAGE.to_string()));
        self.schedule_redirect();
    }

    /// A failure never takes back an earlier success: while its redirect is
    /// pending the banner stays and the dashboard visit still happens.
    fn on_failure(&self, err: &ApiError) {
        log::error!("Error creating travel plan ({}): {}", err.kind(), err);
        if !self.redirect_pending() {
            self.state.set(SubmissionState::Failed(err.clone()));
        }
        self.alerts.alert(FAILURE_ALERT);
    }

    fn redirect_pending(&self) -> bool {
        self.redirect
            .borrow()
            .as_ref()
            .is_some_and(|handle| !handle.is_cancelled())
    }

    fn schedule_redirect(&self) -> TaskHandle {
        let navigator = self.navigator.clone();
        let slot = Rc::clone(&self.redirect);
        let delay = self.redirect_delay;
        let handle = self.work.spawn(async move {
            sleep(delay).await;
            // A replaced redirect is cancelled before it gets here.
            slot.borrow_mut().take();
            navigator.navigate(DASHBOARD_PATH);
        });
        if let Some(previous) = self.redirect.borrow_mut().replace(handle.clone()) {
            previous.cancel();
        }
        handle
    }
}
