//! Run summary lines and the outcome badge

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use sift_app::summary::{format_duration, StatusCounts};
use sift_app::{Outcome, Summary};

use crate::theme::styles;

const LABEL_WIDTH: usize = 9;
const START_FORMAT: &str = "%H:%M:%S";

fn label(text: &str) -> Span<'static> {
    Span::styled(
        format!("{text:>width$} ", width = LABEL_WIDTH),
        styles::text_secondary(),
    )
}

/// `3 passed 1 failed (4)`; zero counts are left out
fn counts_line(name: &str, counts: &StatusCounts) -> Line<'static> {
    let segments: [(usize, &str, Style); 5] = [
        (counts.passed, "passed", styles::passed()),
        (counts.failed, "failed", styles::failed()),
        (counts.skipped, "skipped", styles::skipped()),
        (counts.running, "running", styles::text_secondary()),
        (counts.build_errors, "build failed", styles::failed()),
    ];

    let mut spans = vec![label(name)];
    for (count, what, style) in segments {
        if count > 0 {
            spans.push(Span::styled(format!("{count} {what} "), style));
        }
    }
    spans.push(Span::styled(
        format!("({})", counts.total()),
        styles::text_secondary(),
    ));
    Line::from(spans)
}

/// Packages, Tests, Start At and Duration
pub fn summary_lines(summary: &Summary) -> Vec<Line<'static>> {
    let start = summary
        .started_at
        .map(|t| t.format(START_FORMAT).to_string())
        .unwrap_or_default();
    let duration = summary.duration.map(format_duration).unwrap_or_default();

    vec![
        counts_line("Packages", &summary.packages),
        counts_line("Tests", &summary.tests),
        Line::from(vec![label("Start At"), Span::raw(start)]),
        Line::from(vec![label("Duration"), Span::raw(duration)]),
    ]
}

/// ` PASSED ` / ` FAILED ` badge
pub fn outcome_line(outcome: Outcome) -> Line<'static> {
    Line::from(Span::styled(
        format!(" {} ", outcome.label()),
        styles::outcome(outcome),
    ))
}
