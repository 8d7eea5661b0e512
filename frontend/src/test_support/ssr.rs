use crate::utils::tasks::PendingWork;
use leptos::*;
use std::future::Future;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Drives an async body on a `LocalSet` with a live reactive runtime, the way
/// the browser event loop would. Work still pending at the end is dropped.
pub async fn run_in_page<F, Fut, T>(f: F) -> T
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
{
    let local = tokio::task::LocalSet::new();
    local
        .run_until(async move {
            let runtime = leptos::create_runtime();
            let result = f().await;
            runtime.dispose();
            result
        })
        .await
}

/// Pending-work registry that spawns onto the surrounding `LocalSet`.
pub fn local_work() -> PendingWork {
    PendingWork::with_spawner(|fut| {
        tokio::task::spawn_local(fut);
    })
}
