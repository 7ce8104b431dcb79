//! Main TUI runner - entry point and event loop

use std::sync::Arc;

use matrix96_ai::AiGateway;
use matrix96_app::config::Settings;
use matrix96_app::Engine;
use matrix96_core::prelude::*;

use crate::{event, render, terminal};

/// Run the interactive grid editor until the user quits.
///
/// AI requests run on the tokio runtime while this loop polls the terminal,
/// so a multi-threaded runtime is required.
pub async fn run<G>(settings: Settings, gateway: Arc<G>) -> Result<()>
where
    G: AiGateway + Sync + 'static,
{
    terminal::install_panic_hook();

    let mut term = ratatui::init();
    if let Err(e) = terminal::enable_mouse() {
        // Keyboard still works without the mouse
        warn!("{}", e);
    }

    let mut engine = Engine::new(settings, gateway);
    info!("Matrix96 started");

    let result = run_loop(&mut term, &mut engine);

    terminal::restore();
    info!("Matrix96 exiting");

    result
}

fn run_loop<G>(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine<G>) -> Result<()>
where
    G: AiGateway + Sync + 'static,
{
    while !engine.should_quit() {
        // Action results and signals
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &mut engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }
    Ok(())
}
