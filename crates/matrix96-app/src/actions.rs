//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every action runs on its own tokio task and reports back to the TEA loop
//! with a result message. Nothing here touches `AppState`.

use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::mpsc;

use matrix96_ai::AiGateway;
use matrix96_core::prelude::*;
use matrix96_core::Grid;

use crate::handler::UpdateAction;
use crate::message::Message;

/// Execute an action by spawning a background task
pub fn handle_action<G>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, gateway: Arc<G>)
where
    G: AiGateway + Sync + 'static,
{
    match action {
        UpdateAction::GenerateGrid { theme } => {
            spawn_reply(msg_tx, async move { request_grid(gateway.as_ref(), &theme).await });
        }

        UpdateAction::AnalyzeGrid { epoch, grid } => {
            spawn_reply(msg_tx, async move {
                request_analysis(gateway.as_ref(), epoch, &grid).await
            });
        }

        UpdateAction::SaveSnapshot { path, bytes } => {
            spawn_reply(msg_tx, save_snapshot(path, bytes));
        }
    }
}

/// Run `task` in the background and deliver its result message
fn spawn_reply<F>(msg_tx: mpsc::Sender<Message>, task: F)
where
    F: Future<Output = Message> + Send + 'static,
{
    tokio::spawn(async move {
        let msg = task.await;
        // The loop is gone once the user quits; the result has nowhere to go
        if let Err(e) = send(&msg_tx, msg).await {
            debug!("Dropping action result: {}", e);
        }
    });
}

async fn request_grid<G: AiGateway + Sync>(gateway: &G, theme: &str) -> Message {
    match gateway.generate_grid(theme).await {
        Ok(grid) => Message::GenerationCompleted {
            grid: Box::new(grid),
        },
        Err(e) => Message::GenerationFailed {
            error: e.to_string(),
        },
    }
}

async fn request_analysis<G: AiGateway + Sync>(gateway: &G, epoch: u64, grid: &Grid) -> Message {
    match gateway.analyze_grid(grid).await {
        Ok(text) => Message::AnalysisCompleted { epoch, text },
        Err(e) => Message::AnalysisFailed {
            error: e.to_string(),
        },
    }
}

async fn save_snapshot(path: PathBuf, bytes: Vec<u8>) -> Message {
    match tokio::fs::write(&path, bytes).await {
        Ok(()) => {
            info!("Exported grid to {}", path.display());
            Message::SnapshotSaved { path }
        }
        Err(e) => {
            let err = Error::export(&path, e.to_string());
            warn!("{}", err);
            Message::SnapshotSaveFailed {
                error: err.to_string(),
            }
        }
    }
}

async fn send(msg_tx: &mpsc::Sender<Message>, msg: Message) -> Result<()> {
    msg_tx
        .send(msg)
        .await
        .map_err(|_| Error::channel_send("event loop stopped"))
}
