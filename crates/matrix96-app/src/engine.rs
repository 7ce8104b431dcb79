//! Engine - orchestration state for the TUI runner
//!
//! Owns the TEA state, the message channel, and the shared AI gateway. The
//! frontend feeds input into the channel and calls `process_message`; any
//! resulting `UpdateAction` is spawned on the tokio runtime.

use std::sync::Arc;

use tokio::sync::mpsc;

use matrix96_ai::AiGateway;

use crate::actions::handle_action;
use crate::config::Settings;
use crate::handler;
use crate::message::Message;
use crate::signals;
use crate::state::AppState;

/// Message channel capacity
const CHANNEL_CAPACITY: usize = 256;

/// Orchestration engine for Matrix96
pub struct Engine<G> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the message channel; clone for input sources.
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half, drained by the frontend event loop.
    pub msg_rx: mpsc::Receiver<Message>,

    gateway: Arc<G>,
}

impl<G> Engine<G>
where
    G: AiGateway + Sync + 'static,
{
    /// Create the engine and spawn the signal handler.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(settings: Settings, gateway: Arc<G>) -> Self {
        let state = AppState::with_settings(settings);
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(CHANNEL_CAPACITY);

        signals::spawn_signal_handler(msg_tx.clone());

        Self {
            state,
            msg_tx,
            msg_rx,
            gateway,
        }
    }

    /// Run one message and its follow-ups through `update`, dispatching
    /// actions as they appear.
    pub fn process_message(&mut self, message: Message) {
        let mut msg = Some(message);
        while let Some(m) = msg {
            let result = handler::update(&mut self.state, m);
            if let Some(action) = result.action {
                handle_action(action, self.msg_tx.clone(), self.gateway.clone());
            }
            msg = result.message;
        }
    }

    /// Process everything currently queued. Returns the number processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn gateway(&self) -> &Arc<G> {
        &self.gateway
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input_key::InputKey;
    use matrix96_ai::test_utils::{sample_generated_grid, ScriptedGateway};
    use matrix96_core::CellPos;
    use std::time::Duration;

    async fn settle<G: AiGateway + Sync + 'static>(engine: &mut Engine<G>) {
        let msg = tokio::time::timeout(Duration::from_secs(2), engine.msg_rx.recv())
            .await
            .expect("action result in time")
            .expect("channel open");
        engine.process_message(msg);
    }

    #[tokio::test]
    async fn test_generation_roundtrip_through_engine() {
        let gateway = Arc::new(ScriptedGateway::new());
        gateway.push_grid(Ok(sample_generated_grid("e")));
        let mut engine = Engine::new(Settings::default(), gateway.clone());

        engine.process_message(Message::Key(InputKey::Char('2')));
        assert!(engine.state.controller.is_generating());

        settle(&mut engine).await;

        assert!(!engine.state.controller.is_generating());
        let origin = CellPos::new(0, 0).unwrap();
        assert_eq!(engine.state.controller.grid().get(origin).value, "e00");
        assert_eq!(gateway.last_theme().as_deref(), Some("Periodic Table Mini"));
    }

    #[tokio::test]
    async fn test_failed_analysis_through_engine() {
        let gateway = Arc::new(ScriptedGateway::new());
        let mut engine = Engine::new(Settings::default(), gateway.clone());

        engine.process_message(Message::Analyze);
        settle(&mut engine).await;

        assert!(!engine.state.controller.is_analyzing());
        assert!(engine.state.controller.analysis().is_none());
        assert_eq!(gateway.analyze_calls(), 1);
    }

    #[tokio::test]
    async fn test_quit_key() {
        let mut engine = Engine::new(Settings::default(), Arc::new(ScriptedGateway::new()));
        engine.msg_sender().send(Message::Key(InputKey::Char('q'))).await.unwrap();
        assert_eq!(engine.drain_pending_messages(), 1);
        assert!(engine.should_quit());
    }
}
