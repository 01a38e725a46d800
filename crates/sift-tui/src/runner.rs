//! Main TUI runner - entry point and event loop
//!
//! Contains the application lifecycle:
//! - `run`: spawn ingestion and pick the interactive or inline path
//! - `run_loop`: full-screen loop draining messages, ticking and drawing
//! - `run_inline`: wait for end of stream and print the result once

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use sift_app::ingest::IngestReport;
use sift_app::{signals, spawn_ingest, update, AppState, Message, Options, TestStore};
use sift_core::prelude::*;
use tokio::io::AsyncRead;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::{event, inline, render, terminal};

const SPINNER_INTERVAL: Duration = Duration::from_millis(100);

/// Width used for inline output when stdout has no terminal size
const FALLBACK_WIDTH: u16 = 80;

/// Run sift over `input`, a `go test -json` stream
pub async fn run<R>(options: Options, input: R) -> Result<()>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    let store = Arc::new(TestStore::new(options.pretty));
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Sends Message::Quit on SIGINT/SIGTERM
    signals::spawn_signal_handler(msg_tx.clone());

    let ingest = spawn_ingest(input, store.clone(), options.input_mode, msg_tx);
    let mut state = AppState::new(store, options);
    info!(
        "Starting sift (interactive={}, pretty={})",
        state.options.interactive, state.options.pretty
    );

    let result = if state.options.interactive {
        terminal::install_panic_hook();
        let mut term = ratatui::init();
        let result = run_loop(&mut term, &mut state, msg_rx);
        ratatui::restore();
        result
    } else {
        run_inline(&mut state, msg_rx).await
    };

    result?;
    finish_ingest(&state, ingest).await
}

/// Surface a fatal ingestion error once the UI is gone
async fn finish_ingest(state: &AppState, ingest: JoinHandle<Result<IngestReport>>) -> Result<()> {
    if !state.ingest.is_done() {
        debug!("Quit before end of stream, stopping ingestion");
        ingest.abort();
        return Ok(());
    }

    match ingest.await {
        Ok(Ok(report)) => {
            info!(
                "Read {} lines, {} events, {} rejected",
                report.lines, report.events, report.rejected
            );
            Ok(())
        }
        Ok(Err(e)) => Err(e),
        Err(e) => Err(Error::terminal(format!("Ingestion task failed: {}", e))),
    }
}

/// Apply `msg` and every follow-up message it produces
fn process_message(state: &mut AppState, msg: Message) {
    let mut next = Some(msg);
    while let Some(msg) = next.take() {
        next = update(state, msg).message;
    }
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
) -> Result<()> {
    let frame_interval = state.options.frame_interval();
    let layout_interval = state.options.layout_interval();
    let mut last_layout = Instant::now();
    let mut last_tick = Instant::now();

    while !state.should_quit() {
        // Process external messages (ingestion, signal handler)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg);
        }

        if last_layout.elapsed() >= layout_interval {
            process_message(state, Message::RecalculateLayout);
            last_layout = Instant::now();
        }
        if last_tick.elapsed() >= SPINNER_INTERVAL {
            process_message(state, Message::Tick);
            last_tick = Instant::now();
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events
        if let Some(message) = event::poll(frame_interval)? {
            process_message(state, message);
        }
    }

    Ok(())
}

/// Wait for the stream to end, then print every row and the summary
async fn run_inline(state: &mut AppState, mut msg_rx: mpsc::Receiver<Message>) -> Result<()> {
    let width = crossterm::terminal::size()
        .map(|(width, _)| width)
        .unwrap_or(FALLBACK_WIDTH);
    process_message(
        state,
        Message::Resize {
            width,
            height: u16::MAX,
        },
    );

    while !state.should_quit() {
        match msg_rx.recv().await {
            Some(msg) => process_message(state, msg),
            None => break,
        }
    }

    // Interrupted runs print what arrived so far
    state.recalculate_layout();

    let color = state.options.color && terminal::stdout_is_terminal();
    let lines = inline::inline_lines(state);
    let mut stdout = io::stdout().lock();
    inline::write_lines(&mut stdout, &lines, color).context("Failed to write the report")?;

    if let Some(notice) = state.ingest.rejection_notice() {
        eprintln!("{}", notice);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{finish, run as run_event};
    use sift_app::config::InputMode;

    fn stream(events: &[String]) -> Vec<u8> {
        let mut bytes = Vec::new();
        for event in events {
            bytes.extend_from_slice(event.as_bytes());
            bytes.push(b'\n');
        }
        bytes
    }

    fn inline_options(mode: InputMode) -> Options {
        Options {
            interactive: false,
            input_mode: mode,
            ..Options::default()
        }
    }

    #[test]
    fn test_process_message_follows_up() {
        let mut state = AppState::new(Arc::new(TestStore::default()), Options::default());
        process_message(&mut state, Message::Quit);
        assert!(state.should_quit());
    }

    #[tokio::test]
    async fn test_inline_run_reads_to_end() {
        let input = stream(&[run_event("TestA"), finish("TestA", "pass", 0.1)]);
        let result = run(inline_options(InputMode::Lenient), io::Cursor::new(input)).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_inline_strict_run_returns_input_error() {
        let mut input = stream(&[run_event("TestA")]);
        input.extend_from_slice(b"PASS\n");

        let err = run(inline_options(InputMode::Strict), io::Cursor::new(input))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput { line: 2, .. }));
    }

    #[tokio::test]
    async fn test_inline_lenient_run_skips_bad_lines() {
        let mut input = b"FAIL\n".to_vec();
        input.extend(stream(&[run_event("TestA"), finish("TestA", "fail", 0.1)]));
        let result = run(inline_options(InputMode::Lenient), io::Cursor::new(input)).await;
        assert!(result.is_ok());
    }
}
