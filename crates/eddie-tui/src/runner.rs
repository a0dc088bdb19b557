//! Main TUI runner - entry point and event loop

use std::sync::Arc;

use eddie_app::message::Message;
use eddie_app::state::AppState;
use eddie_app::{process_message, SubmissionScheduler, SubmissionSink};
use eddie_core::prelude::*;
use tokio::sync::mpsc;

use crate::{event, render, terminal};

/// Run the page until the visitor quits.
///
/// `sink` receives every accepted contact submission.
pub async fn run<S>(mut state: AppState, sink: S) -> Result<()>
where
    S: SubmissionSink + Sync + 'static,
{
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    info!(
        "Starting page: {} catalog items, sink={}",
        state.catalog.item_count(),
        sink.name()
    );

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;

    // Unified channel for timer and sink results
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    let sink = Arc::new(sink);
    let mut scheduler = SubmissionScheduler::new();

    let result = run_loop(
        &mut term,
        &mut state,
        msg_rx,
        msg_tx,
        &sink,
        &mut scheduler,
    );

    // No delivery may fire after the page is gone
    scheduler.cancel();

    ratatui::restore();

    result
}

/// Main event loop
fn run_loop<S>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    sink: &Arc<S>,
    scheduler: &mut SubmissionScheduler,
) -> Result<()>
where
    S: SubmissionSink + Sync + 'static,
{
    while !state.should_quit() {
        // Process background messages (delivery timer, sink outcomes)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, sink, scheduler);
        }

        // Render
        terminal
            .draw(|frame| render::view(frame, state))
            .map_err(|e| Error::terminal(e.to_string()))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, sink, scheduler);
        }
    }

    debug!("Event loop finished");
    Ok(())
}
