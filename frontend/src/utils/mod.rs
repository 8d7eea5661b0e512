pub mod dialog;
pub mod navigation;
#[cfg(target_arch = "wasm32")]
pub mod storage;
pub mod tasks;
pub mod timer;
