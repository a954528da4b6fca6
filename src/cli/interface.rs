//! Board rendering and coordinate parsing for the terminal.

use std::fmt::Write as _;
use std::string::String;

use crate::engine::{CellView, Coord, Game, BOARD_COLS, BOARD_ROWS};

/// Parse `E4`-style input: a column letter followed by a 1-based row number.
pub fn parse_coord(input: &str) -> Result<Coord, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let last_col = (b'A' + BOARD_COLS as u8 - 1) as char;
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-{}", col_ch, last_col));
    }
    let col = (col_ch as u8).wrapping_sub(b'A') as usize;
    if col >= BOARD_COLS {
        return Err(format!("Column '{}' out of bounds - must be A-{}", col_ch, last_col));
    }
    let row_str: String = chars.collect();
    let row_str = row_str.trim();
    if row_str.is_empty() || !row_str.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("Invalid row '{}' - must be a number 1-{}", row_str, BOARD_ROWS));
    }
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-{}", row_str, BOARD_ROWS))?;
    if row == 0 {
        return Err(format!("Row cannot be 0 - must be 1-{}", BOARD_ROWS));
    }
    if row > BOARD_ROWS {
        return Err(format!("Row {} out of bounds - must be 1-{}", row, BOARD_ROWS));
    }
    Ok(Coord::new(row - 1, col))
}

/// Draw the board with column letters and row numbers.
///
/// Hit cells show the size of the ship they belong to. With `reveal`, intact
/// ship cells are drawn as `S`.
pub fn render_board(game: &Game, reveal: bool) -> String {
    let mut out = String::new();
    let width = BOARD_COLS * 2 + 3;
    let rule = "═".repeat(width);

    let _ = writeln!(out, "    ╔{}╗", rule);
    let _ = write!(out, "    ║  ");
    for c in 0..BOARD_COLS {
        let _ = write!(out, " {}", (b'A' + c as u8) as char);
    }
    let _ = writeln!(out, " ║");
    let _ = writeln!(out, "    ╠{}╣", rule);
    for r in 0..BOARD_ROWS {
        let _ = write!(out, "    ║{:2}", r + 1);
        for c in 0..BOARD_COLS {
            let coord = Coord::new(r, c);
            let ch = match game.cell(coord) {
                Ok(CellView::Hit { ship_size }) => char::from_digit(ship_size as u32, 10).unwrap_or('X'),
                Ok(CellView::Water) => 'o',
                Ok(CellView::Unknown) if reveal && game.fleet().occupied().contains(coord) => 'S',
                _ => '.',
            };
            let _ = write!(out, " {}", ch);
        }
        let _ = writeln!(out, " ║");
    }
    let _ = writeln!(out, "    ╚{}╝", rule);

    if reveal {
        let _ = writeln!(out, "    Legend: 1-5=Hit (ship size)  S=Ship  o=Water  .=Unknown");
    } else {
        let _ = writeln!(out, "    Legend: 1-5=Hit (ship size)  o=Water  .=Unknown");
    }
    out
}

pub fn print_board(game: &Game, reveal: bool) {
    std::print!("{}", render_board(game, reveal));
}
