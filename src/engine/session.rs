//! Observer wiring between the game controller and whatever presents it.
//!
//! The controller only returns outcomes. A `Session` forwards every outcome to
//! its subscribers, which is where rendering, counters on screen and messages
//! live.

use alloc::boxed::Box;
use alloc::vec::Vec;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::engine::common::BoardError;
use crate::engine::coord::Coord;
use crate::engine::game::{Game, ShotOutcome};

/// Receives the result of every fire request made through a `Session`.
pub trait ShotObserver {
    /// Called after the game has resolved a shot at `coord`.
    fn on_shot(&mut self, game: &Game, coord: Coord, outcome: &ShotOutcome);

    /// Called when a fire request was rejected without touching the game.
    fn on_rejected(&mut self, _row: usize, _col: usize, _err: &BoardError) {}
}

/// A game plus its subscribed observers.
pub struct Session {
    game: Game,
    observers: Vec<Box<dyn ShotObserver>>,
}

impl Session {
    pub fn new(game: Game) -> Self {
        Self {
            game,
            observers: Vec::new(),
        }
    }

    /// Observers are notified in subscription order.
    pub fn subscribe(&mut self, observer: Box<dyn ShotObserver>) {
        self.observers.push(observer);
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Fire through the game and notify every observer of the result.
    pub fn fire(&mut self, row: usize, col: usize) -> Result<ShotOutcome, BoardError> {
        match self.game.fire(row, col) {
            Ok(outcome) => {
                let coord = Coord::new(row, col);
                for observer in self.observers.iter_mut() {
                    observer.on_shot(&self.game, coord, &outcome);
                }
                Ok(outcome)
            }
            Err(err) => {
                for observer in self.observers.iter_mut() {
                    observer.on_rejected(row, col, &err);
                }
                Err(err)
            }
        }
    }

    /// Fire at unshot cells in random order until the game is won.
    /// Returns the total shot count.
    pub fn play_out<G: Rng + ?Sized>(&mut self, rng: &mut G) -> Result<usize, BoardError> {
        let mut targets: Vec<Coord> = self.game.board().unshot().collect();
        targets.shuffle(rng);
        for target in targets {
            if self.game.is_won() {
                break;
            }
            self.fire(target.row, target.col)?;
        }
        Ok(self.game.shot_count())
    }

    pub fn into_game(self) -> Game {
        self.game
    }
}
