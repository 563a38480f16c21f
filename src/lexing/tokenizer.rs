//! Split input lines into Text and Delimiter tokens

use std::collections::VecDeque;
use std::io::BufRead;
use tracing::{debug, warn};

use super::token::Token;
use crate::language::TokenizationWarning;

/// Lazily tokenize the lines read from `reader`.
pub fn tokenize<R: BufRead>(reader: R) -> Tokens<R> {
    Tokens {
        reader,
        line: 0,
        pending: VecDeque::new(),
        warnings: Vec::new(),
        finished: false,
    }
}

/// Lazily tokenize a string already held in memory.
pub fn tokenize_str(content: &str) -> Tokens<&[u8]> {
    tokenize(content.as_bytes())
}

/// A single pass over the input. Lines are only read when the tokens of the
/// previous line have all been consumed.
pub struct Tokens<R> {
    reader: R,
    line: usize,
    pending: VecDeque<Token>,
    warnings: Vec<TokenizationWarning>,
    finished: bool,
}

impl<R: BufRead> Tokens<R> {
    /// Lines that were skipped so far. Complete only once the iterator has
    /// been exhausted.
    pub fn warnings(&self) -> &[TokenizationWarning] {
        &self.warnings
    }

    fn read_line(&mut self) {
        let mut buffer = Vec::new();

        match self
            .reader
            .read_until(b'\n', &mut buffer)
        {
            Ok(0) => {
                debug!("Tokenized {} lines", self.line);
                self.finished = true;
            }
            Ok(_) => {
                self.line += 1;
                match String::from_utf8(buffer) {
                    Ok(text) => self
                        .pending
                        .extend(split_line(&text, self.line)),
                    Err(_) => self.skip("line is not valid UTF-8".to_string()),
                }
            }
            Err(error) => {
                self.line += 1;
                self.skip(error.to_string());
                self.finished = true;
            }
        }
    }

    fn skip(&mut self, problem: String) {
        warn!("couldn't tokenize line {}: {}", self.line, problem);
        self.warnings
            .push(TokenizationWarning {
                line: self.line,
                problem,
            });
    }
}

impl<R: BufRead> Iterator for Tokens<R> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            if let Some(token) = self
                .pending
                .pop_front()
            {
                return Some(token);
            }
            if self.finished {
                return None;
            }
            self.read_line();
        }
    }
}

/// Split one line into alternating Text and Delimiter tokens. Empty
/// fragments between adjacent delimiters are dropped.
pub(crate) fn split_line(line: &str, number: usize) -> Vec<Token> {
    let re = regex!(r#"[()\[\]{};,]|["']|:\s+|\s+"#);

    let mut tokens = Vec::new();
    let mut start = 0;

    for found in re.find_iter(line) {
        if is_quote(found.as_str()) && is_escaped(line, found.start()) {
            // stays part of the surrounding text
            continue;
        }

        if found.start() > start {
            tokens.push(Token::text(&line[start..found.start()], number));
        }
        tokens.push(Token::delimiter(found.as_str(), number));
        start = found.end();
    }

    if start < line.len() {
        tokens.push(Token::text(&line[start..], number));
    }

    tokens
}

fn is_quote(lexeme: &str) -> bool {
    lexeme == "\"" || lexeme == "'"
}

// A quote is escaped by a single backslash; a doubled backslash escapes
// itself and leaves the quote live.
pub(crate) fn is_escaped(line: &str, position: usize) -> bool {
    let bytes = line.as_bytes();
    position >= 1
        && bytes[position - 1] == b'\\'
        && (position < 2 || bytes[position - 2] != b'\\')
}
