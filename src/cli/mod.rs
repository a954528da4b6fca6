//! Terminal front end
//!
//! This module provides:
//! - Board rendering and `E4`-style coordinate parsing
//! - Localized player messages
//! - `TerminalView`, a `ShotObserver` that redraws after every shot
//! - The interactive input loop

#![cfg(feature = "std")]

pub mod interface;
pub mod messages;
pub mod view;

pub use interface::*;
pub use messages::{Locale, Messages};
pub use view::TerminalView;

use std::io::{self, BufRead, Write};

use crate::engine::Session;

/// Read targets from `input` and fire them through `session` until the game
/// is won, the input ends, or the player types `quit`.
///
/// Returns `true` if the game was won.
pub fn run_interactive<R: BufRead>(
    session: &mut Session,
    mut input: R,
    messages: Messages,
) -> anyhow::Result<bool> {
    while !session.game().is_won() {
        print!("{}", messages.prompt());
        io::stdout().flush()?;

        let mut buf = String::new();
        if input.read_line(&mut buf)? == 0 {
            break;
        }
        let line = buf.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("q") {
            break;
        }
        match parse_coord(line) {
            Ok(coord) => {
                // Rejections are reported to the observers; keep reading.
                let _ = session.fire(coord.row, coord.col);
            }
            Err(reason) => println!("{}", messages.invalid_input(&reason)),
        }
    }
    Ok(session.game().is_won())
}
