pub mod api;
pub mod config;
pub mod error;
mod main_lib;

pub use main_lib::{build_state, build_state_with_provider, init_tracing, spawn_initial_refresh, AppState};
