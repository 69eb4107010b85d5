use std::io::{self, Write};

use rand::rngs::StdRng;
use rand::Rng;
use ratatui::{backend::Backend, Terminal};

use super::board_widget;
use super::game_view;
use super::input::{Directive, InputSource, KeyMap};
use super::palette::Palette;
use crate::error::{PlayError, SpawnError};
use crate::game::{GameState, Spawner};

/// Draws the board and score once per turn.
pub trait Renderer {
    fn render(&mut self, state: &GameState) -> io::Result<()>;

    /// Final draw when no new tile fits on the board
    fn board_full(&mut self, state: &GameState) -> io::Result<()> {
        self.render(state)
    }
}

/// How a play session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The player quit or the input ran out
    Quit,
    /// A spawn found no empty cell
    BoardFull,
}

/// Full-screen renderer drawing through ratatui.
pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
    palette: Option<Palette>,
    keys: KeyMap,
    message: Option<String>,
}

impl<B: Backend> TerminalRenderer<B> {
    pub fn new(terminal: Terminal<B>, palette: Option<Palette>, keys: KeyMap) -> Self {
        TerminalRenderer {
            terminal,
            palette,
            keys,
            message: None,
        }
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}

impl<B: Backend> Renderer for TerminalRenderer<B>
where
    B::Error: std::fmt::Display,
{
    fn render(&mut self, state: &GameState) -> io::Result<()> {
        let palette = self.palette.as_ref();
        let keys = &self.keys;
        let message = self.message.as_deref();
        self.terminal
            .draw(|f| game_view::render(f, state, palette, keys, message))
            .map_err(|e| io::Error::other(e.to_string()))?;
        Ok(())
    }

    fn board_full(&mut self, state: &GameState) -> io::Result<()> {
        self.message = Some(format!("Board full! Final score: {}", state.score()));
        self.render(state)
    }
}

/// Line-oriented renderer writing plain or ANSI-coloured text.
pub struct PlainRenderer<W> {
    out: W,
    palette: Option<Palette>,
}

impl<W: Write> PlainRenderer<W> {
    pub fn new(out: W, palette: Option<Palette>) -> Self {
        PlainRenderer { out, palette }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for PlainRenderer<W> {
    fn render(&mut self, state: &GameState) -> io::Result<()> {
        writeln!(self.out, "Score: {}", state.score())?;
        let board = board_widget::board_text(state.board(), self.palette.as_ref());
        self.out.write_all(board.as_bytes())?;
        self.out.flush()
    }
}

/// The turn loop: spawn, render, read a directive, move.
pub struct App<R, I, G: Rng = StdRng> {
    state: GameState,
    spawner: Spawner<G>,
    renderer: R,
    input: I,
}

impl<R: Renderer, I: InputSource, G: Rng> App<R, I, G> {
    pub fn new(spawner: Spawner<G>, renderer: R, input: I) -> Self {
        App {
            state: GameState::new(),
            spawner,
            renderer,
            input,
        }
    }

    /// Start from an existing board and score instead of an empty board
    pub fn with_state(mut self, state: GameState) -> Self {
        self.state = state;
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Main loop. Runs until the player quits or the board fills up.
    pub fn run(&mut self) -> Result<SessionEnd, PlayError> {
        tracing::info!(
            four_chance_divider = self.spawner.four_chance_divider(),
            "session started"
        );

        // the opening tile; every turn adds one more before drawing
        let mut pending = self.spawn()?;
        let end = loop {
            if let Some(end) = pending {
                break end;
            }
            pending = self.turn()?;
        };

        tracing::info!(score = self.state.score(), ?end, "session ended");
        Ok(end)
    }

    fn turn(&mut self) -> Result<Option<SessionEnd>, PlayError> {
        if let Some(end) = self.spawn()? {
            return Ok(Some(end));
        }

        self.renderer
            .render(&self.state)
            .map_err(PlayError::Render)?;

        match self.input.next_directive().map_err(PlayError::Input)? {
            Directive::Move(direction) => {
                let outcome = self.state.apply_move(direction);
                tracing::debug!(
                    direction = direction.name(),
                    score_delta = outcome.score_delta,
                    changed = outcome.changed,
                    "move"
                );
                Ok(None)
            }
            Directive::Quit => Ok(Some(SessionEnd::Quit)),
            Directive::Unrecognized => {
                tracing::debug!("ignored unrecognized input");
                Ok(None)
            }
        }
    }

    fn spawn(&mut self) -> Result<Option<SessionEnd>, PlayError> {
        match self.state.spawn(&mut self.spawner) {
            Ok(spawned) => {
                tracing::debug!(
                    row = spawned.row,
                    col = spawned.col,
                    value = spawned.tile.value(),
                    "spawned tile"
                );
                Ok(None)
            }
            Err(SpawnError::BoardFull) => {
                tracing::info!(score = self.state.score(), "board full");
                self.renderer
                    .board_full(&self.state)
                    .map_err(PlayError::Render)?;
                Ok(Some(SessionEnd::BoardFull))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Board, Direction, DEFAULT_FOUR_CHANCE_DIVIDER, SIZE};
    use ratatui::backend::TestBackend;
    use std::collections::VecDeque;

    /// Plays back a fixed list of directives, then quits.
    struct Scripted(VecDeque<Directive>);

    impl Scripted {
        fn new(directives: &[Directive]) -> Self {
            Scripted(directives.iter().copied().collect())
        }
    }

    impl InputSource for Scripted {
        fn next_directive(&mut self) -> io::Result<Directive> {
            Ok(self.0.pop_front().unwrap_or(Directive::Quit))
        }
    }

    struct Failing;

    impl InputSource for Failing {
        fn next_directive(&mut self) -> io::Result<Directive> {
            Err(io::Error::new(io::ErrorKind::UnexpectedEof, "closed"))
        }
    }

    #[derive(Default)]
    struct Recorder {
        frames: Vec<GameState>,
        full: Option<GameState>,
    }

    impl Renderer for Recorder {
        fn render(&mut self, state: &GameState) -> io::Result<()> {
            self.frames.push(*state);
            Ok(())
        }

        fn board_full(&mut self, state: &GameState) -> io::Result<()> {
            self.full = Some(*state);
            Ok(())
        }
    }

    fn app<I: InputSource>(input: I) -> App<Recorder, I> {
        App::new(
            Spawner::seeded(17, DEFAULT_FOUR_CHANCE_DIVIDER),
            Recorder::default(),
            input,
        )
    }

    #[test]
    fn test_first_frame_shows_two_tiles() {
        let mut app = app(Scripted::new(&[]));
        assert_eq!(app.run().unwrap(), SessionEnd::Quit);
        let frames = &app.renderer().frames;
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].board().tile_count(), 2);
        assert_eq!(frames[0].score(), 0);
    }

    #[test]
    fn test_unrecognized_input_still_spawns() {
        let script = [Directive::Unrecognized, Directive::Unrecognized];
        let mut app = app(Scripted::new(&script));
        app.run().unwrap();
        let counts: Vec<usize> = app
            .renderer()
            .frames
            .iter()
            .map(|s| s.board().tile_count())
            .collect();
        assert_eq!(counts, vec![2, 3, 4]);
    }

    #[test]
    fn test_score_never_decreases() {
        let script: Vec<Directive> = (0..200)
            .map(|i| Directive::Move(Direction::ALL[i % 4]))
            .collect();
        let mut app = app(Scripted::new(&script));
        app.run().unwrap();

        let frames = &app.renderer().frames;
        assert!(frames.windows(2).all(|w| w[0].score() <= w[1].score()));
        for frame in frames {
            for value in frame.board().to_values().iter().flatten() {
                assert!(*value == 0 || (*value >= 2 && value.is_power_of_two()));
            }
        }
    }

    #[test]
    fn test_board_full_ends_session() {
        // never moving fills the board: 16 cells, one spawn per turn
        let script = vec![Directive::Unrecognized; SIZE * SIZE + 5];
        let mut app = app(Scripted::new(&script));
        assert_eq!(app.run().unwrap(), SessionEnd::BoardFull);

        let full = app.renderer().full.expect("board_full was not reported");
        assert!(full.board().is_full());
        assert_eq!(app.renderer().frames.len(), SIZE * SIZE - 1);
        assert!(app.state().board().is_full());
    }

    #[derive(Clone, Default)]
    struct SharedLog(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl Write for SharedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_full_board_before_first_turn() {
        let full = Board::from_values([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]])
            .unwrap();
        let log = SharedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .without_time()
            .with_writer(move || writer.clone())
            .finish();

        let mut app = app(Scripted::new(&[])).with_state(GameState::from_parts(full, 36));
        let end = tracing::subscriber::with_default(subscriber, || app.run().unwrap());

        assert_eq!(end, SessionEnd::BoardFull);
        assert!(app.renderer().frames.is_empty());
        assert_eq!(app.renderer().full.map(|s| s.score()), Some(36));

        let text = String::from_utf8(log.0.lock().unwrap().clone()).unwrap();
        assert!(text.contains("session started"), "{text}");
        assert!(text.contains("session ended"), "{text}");
    }

    #[test]
    fn test_input_failure_is_fatal() {
        let mut app = app(Failing);
        assert!(matches!(app.run(), Err(PlayError::Input(_))));
    }

    #[test]
    fn test_plain_renderer_output() {
        let mut renderer = PlainRenderer::new(Vec::new(), None);
        renderer.render(&GameState::new()).unwrap();
        let out = String::from_utf8(renderer.into_inner()).unwrap();
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("Score: 0"));
        assert_eq!(lines.next(), Some("    |    |    |    "));
        assert_eq!(out.lines().count(), 1 + SIZE * 2 - 1);
    }

    #[test]
    fn test_terminal_renderer_draws_score() {
        let terminal = Terminal::new(TestBackend::new(48, 20)).unwrap();
        let mut renderer =
            TerminalRenderer::new(terminal, Some(Palette::standard()), KeyMap::default());
        renderer.board_full(&GameState::new()).unwrap();

        let buffer = renderer.terminal().backend().buffer();
        let width = buffer.area.width as usize;
        let rows: Vec<String> = buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect();
        assert!(rows.iter().any(|r| r.contains("Score: 0")));
        assert!(rows.iter().any(|r| r.contains("Board full! Final score: 0")));
    }
}
