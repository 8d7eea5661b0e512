use crate::{
    api::TravelPlanData,
    components::{
        common::{ButtonVariant, SubmitButton},
        layout::ErrorMessage,
    },
    pages::home::utils::{build_travel_plan, TravelPlanFormState},
};
use leptos::{ev::SubmitEvent, *};

const INPUT_CLASS: &str = "block w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-fg focus:outline-none focus:ring-2 focus:ring-action-primary-focus";
const LABEL_CLASS: &str = "block text-left text-sm font-medium text-fg-muted mb-1";

/// Collects a travel plan and hands it to `on_submit` once it validates.
/// Fields keep their values after a submit so the plan can be resent.
#[component]
pub fn TravelPlanForm(
    on_submit: Callback<TravelPlanData>,
    #[prop(optional, into)] busy: MaybeSignal<bool>,
) -> impl IntoView {
    let form = TravelPlanFormState::default();
    let error = create_rw_signal(None::<String>);

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match build_travel_plan(&form.snapshot()) {
            Ok(plan) => {
                error.set(None);
                on_submit.call(plan);
            }
            Err(msg) => error.set(Some(msg)),
        }
    };

    view! {
        <form class="w-full max-w-lg space-y-4 mt-6" on:submit=handle_submit>
            {move || error.get().map(|msg| view! { <ErrorMessage message=msg /> })}
            <div>
                <label for="destination" class=LABEL_CLASS>{"Destination"}</label>
                <input
                    id="destination"
                    name="destination"
                    type="text"
                    required
                    class=INPUT_CLASS
                    placeholder="Where are you going?"
                    prop:value=move || form.destination.get()
                    on:input=move |ev| form.destination.set(event_target_value(&ev))
                />
            </div>
            <div class="grid grid-cols-2 gap-4">
                <div>
                    <label for="start_date" class=LABEL_CLASS>{"Start date"}</label>
                    <input
                        id="start_date"
                        name="start_date"
                        type="date"
                        required
                        class=INPUT_CLASS
                        prop:value=move || form.start_date.get()
                        on:input=move |ev| form.start_date.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label for="end_date" class=LABEL_CLASS>{"End date"}</label>
                    <input
                        id="end_date"
                        name="end_date"
                        type="date"
                        required
                        class=INPUT_CLASS
                        prop:value=move || form.end_date.get()
                        on:input=move |ev| form.end_date.set(event_target_value(&ev))
                    />
                </div>
            </div>
            <div class="grid grid-cols-2 gap-4">
                <div>
                    <label for="travelers" class=LABEL_CLASS>{"Travelers"}</label>
                    <input
                        id="travelers"
                        name="travelers"
                        type="number"
                        min="1"
                        required
                        class=INPUT_CLASS
                        prop:value=move || form.travelers.get()
                        on:input=move |ev| form.travelers.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label for="budget" class=LABEL_CLASS>{"Budget"}</label>
                    <input
                        id="budget"
                        name="budget"
                        type="number"
                        min="0"
                        step="0.01"
                        class=INPUT_CLASS
                        placeholder="Optional"
                        prop:value=move || form.budget.get()
                        on:input=move |ev| form.budget.set(event_target_value(&ev))
                    />
                </div>
            </div>
            <div>
                <label for="notes" class=LABEL_CLASS>{"Notes"}</label>
                <textarea
                    id="notes"
                    name="notes"
                    rows="3"
                    class=INPUT_CLASS
                    prop:value=move || form.notes.get()
                    on:input=move |ev| form.notes.set(event_target_value(&ev))
                ></textarea>
            </div>
            <SubmitButton variant=ButtonVariant::Primary loading=busy>
                {"Create Travel Plan"}
            </SubmitButton>
        </form>
    }
}
