//! Line-oriented command session: reads protocol commands, applies them to a
//! single [`GameEngine`], and writes the rendered responses.

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::game::{GameEngine, GameStatus, PutOutcome};
use crate::protocol::{render, Command, CommandReader};

#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    /// Append the rejection reason to `ERROR` responses
    pub verbose_errors: bool,
}

/// What a finished session did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub commands: usize,
    pub moves: usize,
    pub status: GameStatus,
}

pub struct Session {
    engine: GameEngine,
    options: SessionOptions,
    commands: usize,
}

impl Session {
    pub fn new(engine: GameEngine, options: SessionOptions) -> Self {
        Session {
            engine,
            options,
            commands: 0,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Apply one command and return its rendered response, or `None` when
    /// the command ends the session.
    pub fn execute(&mut self, command: &Command) -> Option<String> {
        self.commands += 1;
        debug!(?command, "executing command");

        let response = match command {
            Command::Exit => return None,
            Command::Get => render::moves(self.engine.moves()),
            Command::Board => render::board(&self.engine.board()),
            Command::Put(column) => {
                let player = self.engine.current_player();
                let result = self.engine.put(*column);
                match result {
                    Ok(PutOutcome::Ok) => debug!(column, ?player, "token dropped"),
                    Ok(PutOutcome::Win) => {
                        info!(column, ?player, moves = self.engine.move_count(), "game won")
                    }
                    Ok(PutOutcome::Draw) => {
                        info!(column, moves = self.engine.move_count(), "game drawn")
                    }
                    Err(e) => debug!(column, reason = %e, "placement rejected"),
                }
                render::put_result(result, self.options.verbose_errors)
            }
            Command::Invalid(token) => {
                debug!(token = %token, "malformed command");
                render::error()
            }
        };
        Some(response)
    }

    /// Run commands from `reader` until `EXIT` or end of input, writing each
    /// response to `writer` as soon as it is produced.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        reader: R,
        mut writer: W,
    ) -> io::Result<SessionSummary> {
        info!(size = self.engine.size(), "session started");

        for command in CommandReader::new(reader) {
            let command = command?;
            match self.execute(&command) {
                Some(response) => {
                    writer.write_all(response.as_bytes())?;
                    writer.flush()?;
                }
                None => break,
            }
        }

        let summary = self.summary();
        info!(
            commands = summary.commands,
            moves = summary.moves,
            status = ?summary.status,
            "session ended"
        );
        Ok(summary)
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            commands: self.commands,
            moves: self.engine.move_count(),
            status: self.engine.status(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Line, Player};
    use std::io::Cursor;

    fn run_script(script: &str, options: SessionOptions) -> (String, SessionSummary) {
        let mut session = Session::new(GameEngine::new(4).unwrap(), options);
        let mut out = Vec::new();
        let summary = session.run(Cursor::new(script), &mut out).unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    #[test]
    fn test_scripted_game_output() {
        let (out, summary) = run_script(
            "PUT 1\nPUT 2\nGET\nBOARD\nEXIT\n",
            SessionOptions::default(),
        );

        let expected = "\n> OK\n\n\
            \n> OK\n\n\
            \n1\n2\n\n\
            \n| 0 0 0 0 \n| 0 0 0 0 \n| 0 0 0 0 \n| 1 2 0 0 \n+--------\n  1 2 3 4 \n\n";
        assert_eq!(out, expected);
        assert_eq!(summary.commands, 5);
        assert_eq!(summary.moves, 2);
        assert_eq!(summary.status, GameStatus::InProgress);
    }

    #[test]
    fn test_get_before_any_move() {
        let (out, _) = run_script("GET EXIT", SessionOptions::default());
        assert_eq!(out, "\n");
    }

    #[test]
    fn test_exit_stops_processing() {
        let (out, summary) = run_script("EXIT PUT 1", SessionOptions::default());
        assert!(out.is_empty());
        assert_eq!(summary.moves, 0);
        assert_eq!(summary.commands, 1);
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let (out, summary) = run_script("PUT 3", SessionOptions::default());
        assert_eq!(out, "\n> OK\n\n");
        assert_eq!(summary.moves, 1);
    }

    #[test]
    fn test_malformed_commands_report_error() {
        let (out, summary) = run_script("JUMP PUT abc PUT 9", SessionOptions::default());
        assert_eq!(out, "\n> ERROR\n\n".repeat(3));
        assert_eq!(summary.moves, 0);
    }

    #[test]
    fn test_win_then_game_over() {
        let (out, summary) = run_script(
            "PUT 1 PUT 1 PUT 2 PUT 2 PUT 3 PUT 3 PUT 4 PUT 4",
            SessionOptions::default(),
        );
        let expected = format!(
            "{}{}{}",
            "\n> OK\n\n".repeat(6),
            "\n> WIN\n\n",
            "\n> ERROR\n\n"
        );
        assert_eq!(out, expected);
        assert_eq!(
            summary.status,
            GameStatus::Won {
                player: Player::One,
                line: Line::Row(3),
            }
        );
        assert_eq!(summary.moves, 7);
    }

    #[test]
    fn test_verbose_errors() {
        let options = SessionOptions {
            verbose_errors: true,
        };
        let (out, _) = run_script("PUT 1 PUT 1 PUT 1 PUT 1 PUT 1 PUT 7", options);
        assert!(out.ends_with("\n> ERROR: column is full\n\n\n> ERROR: column out of range\n\n"));
    }

    #[test]
    fn test_draw() {
        let (out, summary) = run_script(
            "PUT 3 PUT 1 PUT 4 PUT 2 PUT 1 PUT 3 PUT 2 PUT 4 \
             PUT 3 PUT 1 PUT 4 PUT 2 PUT 1 PUT 3 PUT 2 PUT 4 PUT 1",
            SessionOptions::default(),
        );
        assert!(out.ends_with("\n> DRAW\n\n\n> ERROR\n\n"));
        assert_eq!(summary.status, GameStatus::Draw);
        assert_eq!(summary.moves, 16);
    }

    #[test]
    fn test_invalid_utf8_token_is_an_error_not_fatal() {
        let mut session = Session::new(GameEngine::new(4).unwrap(), SessionOptions::default());
        let mut out = Vec::new();
        let summary = session
            .run(Cursor::new(b"\xff\nPUT 1\nGET\n".to_vec()), &mut out)
            .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\n> ERROR\n\n\n> OK\n\n\n1\n\n"
        );
        assert_eq!(summary.commands, 3);
        assert_eq!(summary.moves, 1);
    }

    #[test]
    fn test_execute_directly() {
        let mut session = Session::new(GameEngine::new(4).unwrap(), SessionOptions::default());
        assert_eq!(session.execute(&Command::Put(2)).as_deref(), Some("\n> OK\n\n"));
        assert_eq!(session.execute(&Command::Exit), None);
        assert_eq!(session.engine().moves().collect::<Vec<_>>(), vec![2]);
    }
}
