//! Main TUI runner - entry point and event loop

use mintel_app::config::Settings;
use mintel_app::{process_message, AppState, Message};
use mintel_client::AnalysisClient;
use mintel_core::prelude::*;
use tokio::sync::mpsc;

use super::{event, render, signals, terminal};

/// Run the interactive client until the user quits
pub async fn run(settings: Settings, client: AnalysisClient) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    info!(
        "Starting TUI: server={}, icons={}",
        client.base_url(),
        settings.ui.icons
    );

    let mut term = ratatui::init();
    let mut state = AppState::with_settings(settings);

    // Unified message channel for background tasks and the signal handler
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Sends Message::Quit on SIGINT/SIGTERM
    signals::spawn_signal_handler(msg_tx.clone());

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &client);

    // Dropping the state stops any loading timers still running
    drop(state);
    ratatui::restore();

    if let Err(e) = &result {
        error!("TUI exited with error: {}", e);
    } else {
        info!("TUI exited");
    }
    result
}

fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    client: &AnalysisClient,
) -> Result<()> {
    while !state.should_quit() {
        // Results from background tasks (request, timers, clipboard, export)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, client);
        }

        terminal
            .draw(|frame| render::view(frame, state))
            .context("Failed to draw frame")?;

        if let Some(message) = event::poll().context("Failed to read terminal event")? {
            process_message(state, message, &msg_tx, client);
        }
    }

    Ok(())
}
