use std::io::{self, BufRead};

use super::Tokens;

/// A parsed protocol command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Get,
    /// Drop a token into a 1-indexed column
    Put(usize),
    Board,
    Exit,
    /// Unrecognized word, or `PUT` with a non-integer argument. Holds the
    /// offending token.
    Invalid(String),
}

impl Command {
    /// Interpret a command word. `PUT` takes its argument from `next_arg`;
    /// no other command consumes a second token.
    pub fn parse<F>(word: &str, next_arg: F) -> io::Result<Command>
    where
        F: FnOnce() -> Option<io::Result<String>>,
    {
        let command = match word.to_ascii_lowercase().as_str() {
            "get" => Command::Get,
            "board" => Command::Board,
            "exit" => Command::Exit,
            "put" => match next_arg().transpose()? {
                Some(arg) => match arg.parse::<usize>() {
                    Ok(column) => Command::Put(column),
                    Err(_) => Command::Invalid(arg),
                },
                None => Command::Invalid(word.to_owned()),
            },
            _ => Command::Invalid(word.to_owned()),
        };
        Ok(command)
    }
}

/// Reads commands from a token stream until input runs out.
pub struct CommandReader<R> {
    tokens: Tokens<R>,
}

impl<R: BufRead> CommandReader<R> {
    pub fn new(reader: R) -> Self {
        CommandReader {
            tokens: Tokens::new(reader),
        }
    }
}

impl<R: BufRead> Iterator for CommandReader<R> {
    type Item = io::Result<Command>;

    fn next(&mut self) -> Option<Self::Item> {
        let word = match self.tokens.next()? {
            Ok(word) => word,
            Err(e) => return Some(Err(e)),
        };
        let tokens = &mut self.tokens;
        Some(Command::parse(&word, || tokens.next()))
    }
}
