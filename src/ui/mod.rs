//! Terminal front ends: a full-screen ratatui view and a plain line-mode
//! view, both driven by the same turn loop.

mod app;
pub mod board_widget;
mod game_view;
pub mod input;
pub mod palette;

pub use app::{App, PlainRenderer, Renderer, SessionEnd, TerminalRenderer};
pub use input::{Directive, InputSource, KeyInput, KeyMap, LineInput};
pub use palette::{Palette, PaletteEntry};
