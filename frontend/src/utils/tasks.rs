use futures::future::{AbortHandle, Abortable, LocalBoxFuture};
use std::{cell::RefCell, collections::HashMap, future::Future, rc::Rc};

type Spawner = Rc<dyn Fn(LocalBoxFuture<'static, ()>)>;

/// Cancels one unit of spawned work. Cancelling finished work is a no-op.
#[derive(Clone, Debug)]
pub struct TaskHandle {
    abort: AbortHandle,
}

impl TaskHandle {
    pub fn cancel(&self) {
        self.abort.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.abort.is_aborted()
    }
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    live: HashMap<u64, AbortHandle>,
    closed: bool,
}

/// Owns every future a page spawns so teardown can release them together.
///
/// Work finishing on its own removes itself from the registry. After
/// [`PendingWork::cancel_all`] the registry is closed and anything spawned
/// later is cancelled before it first runs.
#[derive(Clone)]
pub struct PendingWork {
    registry: Rc<RefCell<Registry>>,
    spawner: Spawner,
}

impl Default for PendingWork {
    fn default() -> Self {
        Self::new()
    }
}

impl PendingWork {
    pub fn new() -> Self {
        Self::with_spawner(|fut| leptos::spawn_local(fut))
    }

    pub fn with_spawner(spawner: impl Fn(LocalBoxFuture<'static, ()>) + 'static) -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry::default())),
            spawner: Rc::new(spawner),
        }
    }

    pub fn spawn<F>(&self, fut: F) -> TaskHandle
    where
        F: Future<Output = ()> + 'static,
    {
        let (abort, registration) = AbortHandle::new_pair();
        let id = {
            let mut registry = self.registry.borrow_mut();
            if registry.closed {
                abort.abort();
                return TaskHandle { abort };
            }
            let id = registry.next_id;
            registry.next_id += 1;
            registry.live.insert(id, abort.clone());
            id
        };

        let registry = Rc::downgrade(&self.registry);
        let task = Abortable::new(fut, registration);
        (self.spawner)(Box::pin(async move {
            let _ = task.await;
            if let Some(registry) = registry.upgrade() {
                registry.borrow_mut().live.remove(&id);
            }
        }));

        TaskHandle { abort }
    }

    pub fn cancel_all(&self) {
        let handles: Vec<AbortHandle> = {
            let mut registry = self.registry.borrow_mut();
            registry.closed = true;
            registry.live.drain().map(|(_, handle)| handle).collect()
        };
        if !handles.is_empty() {
            log::debug!("Cancelling {} pending task(s)", handles.len());
        }
        for handle in handles {
            handle.abort();
        }
    }

    pub fn len(&self) -> usize {
        self.registry.borrow().live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_closed(&self) -> bool {
        self.registry.borrow().closed
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::local_work;
    use std::cell::Cell;
    use std::time::Duration;
    use tokio::task::LocalSet;

    #[tokio::test]
    async fn finished_work_leaves_the_registry() {
        LocalSet::new()
            .run_until(async {
                let work = local_work();
                let ran = Rc::new(Cell::new(false));
                let flag = ran.clone();
                work.spawn(async move { flag.set(true) });
                assert_eq!(work.len(), 1);

                tokio::time::sleep(Duration::from_millis(5)).await;

                assert!(ran.get());
                assert!(work.is_empty());
            })
            .await;
    }

    #[tokio::test]
    async fn cancel_all_stops_sleeping_work() {
        LocalSet::new()
            .run_until(async {
                let work = local_work();
                let ran = Rc::new(Cell::new(false));
                let flag = ran.clone();
                let handle = work.spawn(async move {
                    tokio::time::sleep(Duration::from_millis(30)).await;
                    flag.set(true);
                });

                work.cancel_all();
                tokio::time::sleep(Duration::from_millis(60)).await;

                assert!(handle.is_cancelled());
                assert!(!ran.get());
                assert!(work.is_empty());
                assert!(work.is_closed());
            })
            .await;
    }

    #[tokio::test]
    async fn spawning_after_teardown_never_runs() {
        LocalSet::new()
            .run_until(async {
                let work = local_work();
                work.cancel_all();

                let ran = Rc::new(Cell::new(false));
                let flag = ran.clone();
                let handle = work.spawn(async move { flag.set(true) });
                tokio::task::yield_now().await;

                assert!(handle.is_cancelled());
                assert!(!ran.get());
            })
            .await;
    }

    #[tokio::test]
    async fn single_handle_cancels_only_its_task() {
        LocalSet::new()
            .run_until(async {
                let work = local_work();
                let first = Rc::new(Cell::new(false));
                let second = Rc::new(Cell::new(false));
                let (f, s) = (first.clone(), second.clone());
                let handle = work.spawn(async move {
                    tokio::time::sleep(Duration::from_millis(20)).await;
                    f.set(true);
                });
                work.spawn(async move {
                    tokio::time::sleep(Duration::from_millis(20)).await;
                    s.set(true);
                });

                handle.cancel();
                tokio::time::sleep(Duration::from_millis(50)).await;

                assert!(!first.get());
                assert!(second.get());
                assert!(!work.is_closed());
            })
            .await;
    }
}
