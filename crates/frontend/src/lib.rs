pub mod app;
pub mod components;
pub mod config;
pub mod elements;
pub mod hooks;
pub mod logging;
pub mod services;
pub mod state;

pub use app::{App, AppProps};
pub use state::{PopupHandle, PopupModel};
