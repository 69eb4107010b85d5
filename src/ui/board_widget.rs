//! Board drawing shared by the full-screen and the plain text front ends.
//!
//! Each row prints its cells right-aligned in a 4-wide field, empty cells
//! blank, joined by `|`. Rows are separated by a dashed rule. When a palette
//! is given, numbers are coloured by their exponent.

use ratatui::text::{Line, Span};

use super::palette::Palette;
use crate::game::board::{cell_text, row_rule};
use crate::game::{Board, SIZE};

/// Board as ratatui lines, ready for a `Paragraph`.
pub fn board_lines(board: &Board, palette: Option<&Palette>) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(SIZE * 2 - 1);

    for row in 0..SIZE {
        let mut spans = Vec::with_capacity(SIZE * 2 - 1);
        for col in 0..SIZE {
            let cell = board.get(row, col);
            let text = cell_text(cell);
            let entry = cell.zip(palette).and_then(|(tile, p)| p.entry_for(tile));
            spans.push(match entry {
                Some(entry) => Span::styled(text, entry.style()),
                None => Span::raw(text),
            });
            if col != SIZE - 1 {
                spans.push(Span::raw("|"));
            }
        }
        lines.push(Line::from(spans));

        if row != SIZE - 1 {
            lines.push(Line::from(row_rule()));
        }
    }

    lines
}

/// Board as text, with ANSI colour escapes when a palette is given.
/// Every line, the last included, ends with a newline.
pub fn board_text(board: &Board, palette: Option<&Palette>) -> String {
    let Some(palette) = palette else {
        return board.to_string();
    };
    let mut out = String::new();

    for row in 0..SIZE {
        for col in 0..SIZE {
            let cell = board.get(row, col);
            let text = cell_text(cell);
            match cell.and_then(|tile| palette.entry_for(tile)) {
                Some(entry) => {
                    out.push_str(&entry.ansi_prefix());
                    out.push_str(&text);
                    out.push_str("\x1b[0m");
                }
                None => out.push_str(&text),
            }
            if col != SIZE - 1 {
                out.push('|');
            }
        }
        out.push('\n');

        if row != SIZE - 1 {
            out.push_str(&row_rule());
            out.push('\n');
        }
    }

    out
}
