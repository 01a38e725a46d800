//! Inline (non-interactive) output, written once when the stream ends.
//!
//! Uses the same document walk as the interactive view through an unbounded
//! window, so every laid out row is materialized.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{self as ct, Attribute, ContentStyle, Print, PrintStyledContent, StyledContent};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use sift_app::{AppState, VirtualWindow};

use crate::widgets::summary;
use crate::widgets::test_tree::{self, WalkStyle};

/// Every visible test row, then the summary and outcome
pub fn inline_lines(state: &AppState) -> Vec<Line<'static>> {
    let mut window = VirtualWindow::unbounded();
    test_tree::walk(state, &mut window, WalkStyle::default());

    let mut lines: Vec<Line<'static>> = window
        .into_items()
        .into_iter()
        .flat_map(|item| item.content)
        .collect();

    let run = state.summary();
    lines.push(Line::default());
    lines.extend(summary::summary_lines(&run));
    if let Some(outcome) = run.outcome() {
        lines.push(Line::default());
        lines.push(summary::outcome_line(outcome));
    }
    lines
}

/// Write `lines` to `out`, styled with ANSI sequences when `color` is set
pub fn write_lines<W: Write>(out: &mut W, lines: &[Line<'_>], color: bool) -> io::Result<()> {
    for line in lines {
        for span in &line.spans {
            if color {
                let style = line.style.patch(span.style);
                queue!(
                    out,
                    PrintStyledContent(StyledContent::new(content_style(style), &*span.content))
                )?;
            } else {
                queue!(out, Print(&*span.content))?;
            }
        }
        queue!(out, Print("\n"))?;
    }
    out.flush()
}

fn content_style(style: Style) -> ContentStyle {
    let mut content = ContentStyle {
        foreground_color: style.fg.map(to_crossterm),
        background_color: style.bg.map(to_crossterm),
        ..ContentStyle::default()
    };

    let attributes = [
        (Modifier::BOLD, Attribute::Bold),
        (Modifier::DIM, Attribute::Dim),
        (Modifier::ITALIC, Attribute::Italic),
        (Modifier::UNDERLINED, Attribute::Underlined),
        (Modifier::SLOW_BLINK, Attribute::SlowBlink),
        (Modifier::REVERSED, Attribute::Reverse),
        (Modifier::CROSSED_OUT, Attribute::CrossedOut),
    ];
    for (modifier, attribute) in attributes {
        if style.add_modifier.contains(modifier) {
            content.attributes.set(attribute);
        }
    }
    content
}

fn to_crossterm(color: Color) -> ct::Color {
    match color {
        Color::Reset => ct::Color::Reset,
        Color::Black => ct::Color::Black,
        Color::Red => ct::Color::DarkRed,
        Color::Green => ct::Color::DarkGreen,
        Color::Yellow => ct::Color::DarkYellow,
        Color::Blue => ct::Color::DarkBlue,
        Color::Magenta => ct::Color::DarkMagenta,
        Color::Cyan => ct::Color::DarkCyan,
        Color::Gray => ct::Color::Grey,
        Color::DarkGray => ct::Color::DarkGrey,
        Color::LightRed => ct::Color::Red,
        Color::LightGreen => ct::Color::Green,
        Color::LightYellow => ct::Color::Yellow,
        Color::LightBlue => ct::Color::Blue,
        Color::LightMagenta => ct::Color::Magenta,
        Color::LightCyan => ct::Color::Cyan,
        Color::White => ct::Color::White,
        Color::Rgb(r, g, b) => ct::Color::Rgb { r, g, b },
        Color::Indexed(i) => ct::Color::AnsiValue(i),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{finish, output, run, state_with};
    use sift_app::{update, Message};

    fn render(lines: &[Line], color: bool) -> String {
        let mut out = Vec::new();
        write_lines(&mut out, lines, color).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn finished() -> AppState {
        let mut state = state_with(
            &[
                run("TestA"),
                output("TestA", "hello"),
                finish("TestA", "pass", 0.25),
                run("TestA/sub"),
                finish("TestA/sub", "pass", 0.1),
                run("TestB"),
                finish("TestB", "skip", 0.0),
            ],
            80,
            24,
        );
        state.store.mark_finished();
        update(&mut state, Message::IngestFinished);
        state
    }

    #[test]
    fn test_inline_output() {
        let state = finished();
        let text = render(&inline_lines(&state), false);
        let text: Vec<&str> = text.lines().map(str::trim_end).collect();
        let text = text.join("\n");

        insta::with_settings!({filters => vec![
            (r"\d{2}:\d{2}:\d{2}", "[TIME]"),
            (r"Duration \S+", "Duration [DURATION]"),
        ]}, {
            insta::assert_snapshot!(text, @r"
            ✓ TestA (0.25s)
            │ ✓ sub (0.10s)
            ⏭ TestB (0.00s)

             Packages 1 passed (1)
                Tests 2 passed 1 skipped (3)
             Start At [TIME]
             Duration [DURATION]

             PASSED
            ");
        });
    }

    #[test]
    fn test_no_outcome_before_end_of_stream() {
        let state = state_with(&[run("TestA")], 80, 24);
        let text = render(&inline_lines(&state), false);
        assert!(text.starts_with("• TestA\n"));
        assert!(!text.contains("PASSED"));
    }

    #[test]
    fn test_color_output_uses_ansi() {
        let state = finished();
        let lines = inline_lines(&state);
        assert!(!render(&lines, false).contains('\x1b'));
        assert!(render(&lines, true).contains("\x1b["));
    }

    #[test]
    fn test_search_filter_applies_inline() {
        let mut state = finished();
        update(&mut state, Message::SearchInput { text: "tb".into() });
        let text = render(&inline_lines(&state), false);
        assert!(text.contains("TestB"));
        assert!(!text.contains("TestA"));
        assert!(!text.contains("sub"));
    }

    #[test]
    fn test_color_mapping() {
        assert_eq!(to_crossterm(Color::Red), ct::Color::DarkRed);
        assert_eq!(to_crossterm(Color::Indexed(28)), ct::Color::AnsiValue(28));
        let style = content_style(Style::default().add_modifier(Modifier::BOLD));
        assert!(style.attributes.has(Attribute::Bold));
    }
}
