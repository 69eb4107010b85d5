use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

use crate::game::Tile;

/// Largest number of entries a palette may hold.
pub const MAX_PALETTE_LEN: usize = 12;

/// One foreground colour from the 8-colour ANSI set, optionally bold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    /// ANSI colour number, 0 (black) to 7 (white)
    pub color: u8,
    #[serde(default)]
    pub bold: bool,
}

impl PaletteEntry {
    pub const fn new(color: u8, bold: bool) -> Self {
        PaletteEntry { color, bold }
    }

    /// SGR escape sequence selecting this entry
    pub fn ansi_prefix(&self) -> String {
        if self.bold {
            format!("\x1b[3{};1m", self.color)
        } else {
            format!("\x1b[3{}m", self.color)
        }
    }

    pub fn style(&self) -> Style {
        let fg = match self.color {
            0 => Color::Black,
            1 => Color::Red,
            2 => Color::Green,
            3 => Color::Yellow,
            4 => Color::Blue,
            5 => Color::Magenta,
            6 => Color::Cyan,
            _ => Color::Gray,
        };
        let style = Style::default().fg(fg);
        if self.bold {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }
}

/// Tile colours indexed by the tile's exponent. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette(Vec<PaletteEntry>);

impl Palette {
    pub fn new(entries: Vec<PaletteEntry>) -> Self {
        Palette(entries)
    }

    /// The classic 12-colour table: plain colours for 2..64, bold from 128 up.
    pub fn standard() -> Self {
        Palette(vec![
            PaletteEntry::new(0, false),
            PaletteEntry::new(1, false),
            PaletteEntry::new(2, false),
            PaletteEntry::new(4, false),
            PaletteEntry::new(5, false),
            PaletteEntry::new(3, false),
            PaletteEntry::new(6, false),
            PaletteEntry::new(1, true),
            PaletteEntry::new(2, true),
            PaletteEntry::new(4, true),
            PaletteEntry::new(5, true),
            PaletteEntry::new(3, true),
        ])
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.0
    }

    /// Entry for a tile. Exponents past the end wrap around.
    pub fn entry_for(&self, tile: Tile) -> Option<&PaletteEntry> {
        if self.0.is_empty() {
            return None;
        }
        self.0.get(tile.exponent() as usize % self.0.len())
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::standard()
    }
}
