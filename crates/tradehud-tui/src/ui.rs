//! Ribbon layout and drawing.
//!
//! The display surface proper: applies the controller's latest render
//! instruction to a one-line bordered ribbon. Value slots sit left of a
//! flexible headline region; the message panel reuses the headline region,
//! mirroring the mutual exclusion in the render instruction.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use tradehud_core::{ErrorCode, HudFrame, RenderInstruction, Slot, Tone, PLACEHOLDER};

use crate::app::App;

const BAR_CELLS: u16 = 10;

// Widths of the fixed cells left and right of the headline region,
// including the input field and the outer border.
const FIXED_COLS: u16 = 2 // border
    + 10 // input
    + 7 // symbol
    + 9 // last
    + 15 // bid/ask
    + 11 // 1m
    + 11 // 5m
    + 3 // sma arrow
    + 7 // sentiment mean
    + 7 // sentiment sigma
    + 5 // strategy code
    + 12 // confidence bar
    + 5 // confidence label
    + 7; // cache age

/// Headline width budget, in cells, for a terminal of `total_cols` columns.
pub fn headline_budget(total_cols: u16) -> f64 {
    f64::from(total_cols.saturating_sub(FIXED_COLS))
}

pub fn draw(frame: &mut Frame, app: &App) {
    let block = Block::bordered()
        .title(" TradeHUD ")
        .title_bottom(" Enter submit · Ctrl-O link · Esc quit ");
    let inner = block.inner(frame.area());
    frame.render_widget(block, frame.area());
    if inner.height == 0 {
        return;
    }

    // The ribbon is one line tall; anything beyond stays empty.
    let row = Rect { height: 1, ..inner };
    let cells = Layout::horizontal([
        Constraint::Length(10), // input
        Constraint::Length(7),  // symbol
        Constraint::Length(9),  // last
        Constraint::Length(15), // bid/ask
        Constraint::Length(11), // 1m
        Constraint::Length(11), // 5m
        Constraint::Length(3),  // sma arrow
        Constraint::Length(7),  // sentiment mean
        Constraint::Length(7),  // sentiment sigma
        Constraint::Length(5),  // strategy code
        Constraint::Length(12), // confidence bar
        Constraint::Length(5),  // confidence label
        Constraint::Min(10),    // headline / message panel
        Constraint::Length(7),  // cache age
    ])
    .split(row);

    draw_input(frame, cells[0], &app.input);

    match app.instruction.as_ref() {
        None => {
            draw_placeholders(frame, &cells);
            draw_panel(frame, cells[12], "", Style::default());
        }
        Some(RenderInstruction::Loading) => {
            draw_placeholders(frame, &cells);
            draw_panel(
                frame,
                cells[12],
                "Fetching data…",
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            );
        }
        Some(RenderInstruction::Message { code, text }) => {
            draw_placeholders(frame, &cells);
            draw_panel(frame, cells[12], text, message_style(*code));
        }
        Some(RenderInstruction::Hud(hud)) => draw_hud(frame, &cells, hud),
    }
}

fn draw_input(frame: &mut Frame, area: Rect, input: &str) {
    let line = Line::from(vec![
        Span::styled("> ", Style::default().fg(Color::DarkGray)),
        Span::styled(input.to_string(), Style::default().fg(Color::White)),
        Span::styled("_", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_hud(frame: &mut Frame, cells: &[Rect], hud: &HudFrame) {
    let slot_cells = [
        (Slot::Symbol, 1),
        (Slot::Last, 2),
        (Slot::BidAsk, 3),
        (Slot::Ret1m, 4),
        (Slot::Ret5m, 5),
        (Slot::SmaTrend, 6),
        (Slot::SentimentMean, 7),
        (Slot::SentimentSigma, 8),
        (Slot::StrategyCode, 9),
        (Slot::ConfidenceLabel, 11),
        (Slot::Headline, 12),
        (Slot::CacheAge, 13),
    ];
    for (slot, index) in slot_cells {
        let value = Span::styled(hud.text(slot).to_string(), tone_style(hud.tone(slot)));
        frame.render_widget(Paragraph::new(Line::from(value)), cells[index]);
    }

    frame.render_widget(confidence_bar(hud.confidence_bar_px), cells[10]);
}

fn draw_placeholders(frame: &mut Frame, cells: &[Rect]) {
    let dim = Style::default().fg(Color::DarkGray);
    // Every value cell except the input (0), bar (10), and panel (12).
    for index in [1, 2, 3, 4, 5, 6, 7, 8, 9, 11, 13] {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(PLACEHOLDER, dim))),
            cells[index],
        );
    }
    frame.render_widget(confidence_bar(0.0), cells[10]);
}

fn draw_panel(frame: &mut Frame, area: Rect, text: &str, style: Style) {
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(text.to_string(), style))),
        area,
    );
}

/// Scale the controller's pixel fill (0..=80) onto a fixed run of cells.
fn confidence_bar(bar_px: f64) -> Paragraph<'static> {
    let filled = ((bar_px / 80.0) * f64::from(BAR_CELLS)).round() as u16;
    let filled = filled.min(BAR_CELLS);
    let mut bar = "█".repeat(usize::from(filled));
    bar.push_str(&"░".repeat(usize::from(BAR_CELLS - filled)));
    Paragraph::new(Line::from(Span::styled(
        bar,
        Style::default().fg(Color::Cyan),
    )))
}

fn tone_style(tone: Tone) -> Style {
    match tone {
        Tone::Positive => Style::default().fg(Color::Green),
        Tone::Negative => Style::default().fg(Color::Red),
        Tone::Neutral => Style::default().fg(Color::Gray),
    }
}

fn message_style(code: ErrorCode) -> Style {
    match code {
        // Local validation problems are warnings; gateway failures are errors.
        ErrorCode::Empty | ErrorCode::InvalidFormat => Style::default().fg(Color::Yellow),
        ErrorCode::NotFound | ErrorCode::NetworkError | ErrorCode::Unknown => {
            Style::default().fg(Color::Red)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headline_budget_tracks_terminal_width() {
        assert_eq!(headline_budget(FIXED_COLS + 30), 30.0);
        // Narrower than the fixed cells: degenerate budget, fitter skips.
        assert_eq!(headline_budget(40), 0.0);
    }
}
