pub mod carousel;
pub mod config;
pub mod content;
pub mod error;
pub mod logging;
pub mod placeholder;
pub mod scroll;
pub mod theme;

#[cfg(target_arch = "wasm32")]
pub mod frontend;
