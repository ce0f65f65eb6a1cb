//! mintel-app - Application state and orchestration for Market Intel
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! client's view state machine: `AppState` is the model, `Message` the event,
//! `handler::update` the transition function and `UpdateAction` the side
//! effects (backend request, loading timers, clipboard, export, browser) that
//! the event loop performs on its behalf.

pub mod actions;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod state;

// Re-export primary types
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use process::process_message;
pub use state::{AppState, Screen, ViewState};
