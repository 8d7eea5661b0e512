use crate::components::layout::LoadingSpinner;
use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Ghost,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-action-primary-bg hover:bg-action-primary-bg-hover text-action-primary-text shadow-sm focus-visible:outline focus-visible:outline-2 focus-visible:outline-offset-2 focus-visible:outline-action-primary-focus",
            ButtonVariant::Ghost => "text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover",
        }
    }
}

/// Submit button that shows a spinner while `loading`. It stays clickable;
/// callers decide whether repeated presses are allowed.
#[component]
pub fn SubmitButton(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            class=format!(
                "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold transition-colors duration-200 {}",
                variant.classes(),
            )
        >
            <Show when=move || loading.get()>
                <LoadingSpinner />
            </Show>
            {children()}
        </button>
    }
}
