use std::fmt;

use crate::model::ContainerKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Text,
    Delimiter,
}

/// A single fragment of input, as split by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: usize,
    attached: Option<ContainerKind>,
}

impl Token {
    pub fn text(lexeme: impl Into<String>, line: usize) -> Token {
        Token {
            kind: TokenKind::Text,
            lexeme: lexeme.into(),
            line,
            attached: None,
        }
    }

    pub fn delimiter(lexeme: impl Into<String>, line: usize) -> Token {
        Token {
            kind: TokenKind::Delimiter,
            lexeme: lexeme.into(),
            line,
            attached: None,
        }
    }

    pub fn is_text(&self) -> bool {
        self.kind == TokenKind::Text
    }

    pub fn is_delimiter(&self) -> bool {
        self.kind == TokenKind::Delimiter
    }

    /// The kind of container this token opens, if the object model builder
    /// resolved one for it.
    pub fn attached(&self) -> Option<ContainerKind> {
        self.attached
    }

    pub fn attach(&mut self, kind: Option<ContainerKind>) {
        self.attached = kind;
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lexeme)
    }
}
