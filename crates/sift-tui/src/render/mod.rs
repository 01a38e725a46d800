//! Main render/view function (View in TEA pattern)


use ratatui::buffer::Buffer;
use ratatui::style::Color;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use sift_app::state::IngestStatus;
use sift_app::{update, AppState, Message};

use super::layout;
use crate::theme::styles;
use crate::widgets::{help, summary, Header, TestTree};

const WAITING: &str = "Waiting for test results...";

/// Summary, notices, outcome and help below the test view
fn footer_lines(state: &AppState, width: u16) -> Vec<Line<'static>> {
    let run = state.summary();
    let mut lines = vec![Line::default()];
    lines.extend(summary::summary_lines(&run));

    if let Some(notice) = state.ingest.rejection_notice() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(notice, styles::log_level("warn"))));
    }
    if let IngestStatus::Failed(error) = &state.ingest.status {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("Input stopped: {error}"),
            styles::failed(),
        )));
    }
    if let Some(outcome) = run.outcome() {
        lines.push(Line::default());
        lines.push(summary::outcome_line(outcome));
    }

    lines.push(Line::default());
    lines.extend(help::help_lines(state.show_help, usize::from(width)));
    lines
}

/// Render the complete UI (View function in TEA)
///
/// Keeps the layout width and viewport height in step with the frame; a
/// size change is fed through [`update`] as [`Message::Resize`] before the
/// test view is walked.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    let body = layout::body(area);

    let footer = footer_lines(state, body.width);
    let footer_height = u16::try_from(footer.len()).unwrap_or(u16::MAX);
    let header_height = Header::new(state).height();
    let content_lines = |state: &AppState| {
        if state.has_started() {
            state.layout.total_lines()
        } else {
            1
        }
    };

    let mut areas = layout::create(area, header_height, footer_height, content_lines(state));
    let width_changed = usize::from(body.width).max(1) != state.layout.width();
    let height_changed = usize::from(areas.tests_capacity) != state.scroll.visible_lines;
    if width_changed || height_changed {
        update(
            state,
            Message::Resize {
                width: body.width,
                height: areas.tests_capacity,
            },
        );
        areas = layout::create(area, header_height, footer_height, content_lines(state));
    }

    frame.render_widget(Header::new(state), areas.header);
    if state.has_started() {
        frame.render_widget(TestTree::new(state), areas.tests);
    } else {
        frame.render_widget(Paragraph::new(WAITING), areas.tests);
    }
    frame.render_widget(Paragraph::new(footer), areas.footer);

    if !state.options.color {
        strip_colors(frame.buffer_mut());
    }
}

/// Drop every colour, keeping bold and the other modifiers
pub fn strip_colors(buf: &mut Buffer) {
    for cell in buf.content.iter_mut() {
        cell.set_fg(Color::Reset);
        cell.set_bg(Color::Reset);
    }
}
