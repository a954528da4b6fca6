//! Commonly used types and utilities for ease of import.

pub use crate::engine::{
    build_fleet, BoardError, Coord, Fleet, Game, GameStatus, Session, Ship, ShotKind,
    ShotObserver, ShotOutcome,
};

#[cfg(feature = "std")]
pub use crate::cli::{parse_coord, render_board, Locale, Messages, TerminalView};
