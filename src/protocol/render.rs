//! Console layout for protocol responses. Every response is framed by a
//! leading newline and a trailing blank line.

use std::fmt::Write;

use crate::game::{Board, MoveError, PutOutcome};

/// Response to a `PUT`. Rejections read `> ERROR` unless `verbose` asks for
/// the reason.
pub fn put_result(result: Result<PutOutcome, MoveError>, verbose: bool) -> String {
    match result {
        Ok(PutOutcome::Ok) => framed("> OK"),
        Ok(PutOutcome::Win) => framed("> WIN"),
        Ok(PutOutcome::Draw) => framed("> DRAW"),
        Err(e) if verbose => framed(&format!("> ERROR: {e}")),
        Err(_) => error(),
    }
}

/// Response to an unrecognized or malformed command
pub fn error() -> String {
    framed("> ERROR")
}

/// Response to `GET`: one column per line, or just the framing when empty
pub fn moves(moves: impl IntoIterator<Item = usize>) -> String {
    let mut out = String::from("\n");
    let mut any = false;
    for column in moves {
        let _ = writeln!(out, "{column}");
        any = true;
    }
    if any {
        out.push('\n');
    }
    out
}

/// Response to `BOARD`
///
/// ```text
/// | 0 0 0 0
/// | 0 0 0 0
/// | 0 2 0 0
/// | 1 1 0 0
/// +--------
///   1 2 3 4
/// ```
pub fn board(board: &Board) -> String {
    let size = board.size();
    let mut out = String::from("\n");

    for row in board.rows() {
        out.push_str("| ");
        for cell in row {
            let _ = write!(out, "{} ", cell.value());
        }
        out.push('\n');
    }

    out.push('+');
    out.push_str(&"-".repeat(2 * size));
    out.push('\n');

    out.push_str("  ");
    for column in 1..=size {
        let _ = write!(out, "{column} ");
    }
    out.push_str("\n\n");
    out
}

fn framed(line: &str) -> String {
    format!("\n{line}\n\n")
}
