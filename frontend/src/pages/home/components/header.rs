use crate::components::common::ButtonVariant;
use leptos::*;

#[component]
pub fn ProfileHeader(
    #[prop(into)] menu_open: Signal<bool>,
    on_toggle: Callback<()>,
    on_profile: Callback<()>,
    on_dashboard: Callback<()>,
    on_logout: Callback<()>,
) -> impl IntoView {
    let item_class = format!(
        "dropdown-item block w-full text-left px-4 py-2 text-sm cursor-pointer {}",
        ButtonVariant::Ghost.classes()
    );

    view! {
        <header class="flex justify-between items-center px-4 py-2 border-b border-border-subtle">
            <img src="/assets/images/goplanlogo.png" alt="GoPlan Logo" class="logo h-10" />
            <div class="profile-icon relative">
                <button
                    type="button"
                    class="rounded-full focus:outline-none"
                    aria-haspopup="menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| on_toggle.call(())
                >
                    <img src="/assets/images/maleuser.png" alt="Profile" class="h-9 w-9 rounded-full" />
                </button>
                <Show when=move || menu_open.get()>
                    <div
                        class="dropdown-menu absolute right-0 mt-2 w-44 rounded-md shadow-lg bg-surface-elevated py-1 z-10"
                        role="menu"
                    >
                        <button type="button" role="menuitem" class=item_class.clone() on:click=move |_| on_profile.call(())>
                            {"Your Profile"}
                        </button>
                        <button type="button" role="menuitem" class=item_class.clone() on:click=move |_| on_dashboard.call(())>
                            {"Dashboard"}
                        </button>
                        <button type="button" role="menuitem" class=item_class.clone() on:click=move |_| on_logout.call(())>
                            {"Logout"}
                        </button>
                    </div>
                </Show>
            </div>
        </header>
    }
}
