//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `editor`: Cell editor handlers

pub(crate) mod editor;
pub(crate) mod keys;
pub(crate) mod update;


use std::path::PathBuf;

use matrix96_core::Grid;

use crate::message::Message;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Ask the AI service for a grid
    GenerateGrid { theme: String },

    /// Ask the AI service to describe a grid snapshot taken at `epoch`
    AnalyzeGrid { epoch: u64, grid: Box<Grid> },

    /// Write an exported snapshot to disk
    SaveSnapshot { path: PathBuf, bytes: Vec<u8> },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
