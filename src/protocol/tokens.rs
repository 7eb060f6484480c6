use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Whitespace-separated tokens read lazily, one line at a time.
///
/// Line breaks carry no meaning: a command and its argument may sit on
/// different lines. Invalid UTF-8 is replaced with U+FFFD, so a garbled token
/// still reaches the parser.
pub struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
    line: Vec<u8>,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Tokens {
            reader,
            pending: VecDeque::new(),
            line: Vec::new(),
        }
    }
}

impl<R: BufRead> Iterator for Tokens<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(Ok(token));
            }

            self.line.clear();
            match self.reader.read_until(b'\n', &mut self.line) {
                Ok(0) => return None,
                Ok(_) => self.pending.extend(
                    String::from_utf8_lossy(&self.line)
                        .split_whitespace()
                        .map(str::to_owned),
                ),
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
