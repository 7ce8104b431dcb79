//! matrix96-app - Application state and orchestration for Matrix96
//!
//! This crate implements the TEA (The Elm Architecture) pattern: the
//! [`GridController`] owns the grid, `handler::update` turns [`Message`]s
//! into state transitions, and the [`Engine`] dispatches the resulting
//! [`UpdateAction`]s as tokio tasks. It also loads configuration.
//!
//! Nothing here depends on a terminal library; input arrives as
//! [`input_key::InputKey`] / [`input_key::InputMouse`].

pub mod actions;
pub mod config;
pub mod controller;
pub mod editor;
pub mod engine;
pub mod geometry;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod signals;
pub mod state;

// Re-export primary types
pub use controller::{GridController, OperationStatus};
pub use engine::Engine;
pub use geometry::GridGeometry;
pub use handler::{UpdateAction, UpdateResult};
pub use message::Message;
pub use state::{AppState, StatusLevel, StatusMessage, UiMode};
