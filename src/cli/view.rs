use std::io::Write;
use std::time::Duration;

use crate::cli::interface::render_board;
use crate::cli::messages::{Locale, Messages};
use crate::engine::{BoardError, Coord, Game, ShotKind, ShotObserver, ShotOutcome};

/// Terminal presentation: redraws the board, counters and a message after
/// every shot.
pub struct TerminalView<W: Write> {
    out: W,
    messages: Messages,
    reveal: bool,
    win_delay: Duration,
}

impl TerminalView<std::io::Stdout> {
    pub fn stdout(locale: Locale) -> Self {
        Self::new(std::io::stdout(), locale)
    }
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W, locale: Locale) -> Self {
        Self {
            out,
            messages: Messages::new(locale),
            reveal: false,
            win_delay: Duration::from_millis(100),
        }
    }

    /// Draw intact ship cells too.
    pub fn reveal(mut self, reveal: bool) -> Self {
        self.reveal = reveal;
        self
    }

    /// Pause before announcing the win so the final board is seen first.
    pub fn win_delay(mut self, delay: Duration) -> Self {
        self.win_delay = delay;
        self
    }

    /// Print the board and counters without a shot message.
    pub fn show(&mut self, game: &Game) {
        let _ = write!(self.out, "{}", render_board(game, self.reveal));
        let _ = writeln!(
            self.out,
            "    {}",
            self.messages.counters(game.hit_count(), game.shot_count())
        );
        let _ = self.out.flush();
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ShotObserver for TerminalView<W> {
    fn on_shot(&mut self, game: &Game, coord: Coord, outcome: &ShotOutcome) {
        if outcome.kind == ShotKind::IgnoredGameOver {
            let _ = writeln!(self.out, "{}", self.messages.game_over());
            return;
        }
        self.show(game);
        let message = match (outcome.kind, outcome.ship_size) {
            (ShotKind::Hit, Some(size)) => self.messages.hit(size),
            (ShotKind::Repeated, _) => self.messages.repeated().to_string(),
            _ => self.messages.miss().to_string(),
        };
        let _ = writeln!(self.out, "{}: {}", coord, message);
        if outcome.won {
            let _ = self.out.flush();
            if !self.win_delay.is_zero() {
                std::thread::sleep(self.win_delay);
            }
            let _ = writeln!(self.out, "\n{}", self.messages.victory());
        }
        let _ = self.out.flush();
    }

    fn on_rejected(&mut self, row: usize, col: usize, err: &BoardError) {
        let message = match err {
            BoardError::OutOfBounds { .. } => self.messages.out_of_bounds(row, col),
            other => other.to_string(),
        };
        let _ = writeln!(self.out, "{}", message);
        let _ = self.out.flush();
    }
}
