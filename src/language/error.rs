use std::{fmt, path::Path};

use crate::model::ContainerKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingError<'i> {
    pub problem: String,
    pub details: String,
    pub filename: &'i Path,
}

impl<'i> fmt::Display for LoadingError<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.problem, self.details)
    }
}

/// A line the tokenizer had to skip. Not fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizationWarning {
    pub line: usize,
    pub problem: String,
}

impl fmt::Display for TokenizationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "skipped line {}: {}", self.line, self.problem)
    }
}

/// The ways the shape of a document can be wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Structure {
    Unfinished { pending: String, started: String },
    ChildrenAlreadySet(String),
    StringWithClasses(String),
    StringWithProperties(String),
    StringWithChildren(String),
    WithoutElement(ContainerKind),
    Unterminated(ContainerKind),
    TrailingInput(String),
}

/// Errors are reported with the line number they originated from first; a
/// line of 0 means the location isn't known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwalpaError {
    UnknownElement(usize, String),
    InvalidStructure(usize, Structure),
    Delimiter(usize, String, String),
    InvalidContainerHierarchy(usize, ContainerKind, String),
    InvalidTokenInContainer(usize, ContainerKind, String),
    PropertyParsing(usize, String, Vec<String>),
    InvalidClass(usize),
    MissingDefaultProperty(usize, String),
    InvalidParentage(usize, String, Vec<String>),
    InvalidParentElement(usize, String, String),
    Template(String, String),
}

impl SwalpaError {
    pub fn line(&self) -> usize {
        match self {
            SwalpaError::UnknownElement(line, _) => *line,
            SwalpaError::InvalidStructure(line, _) => *line,
            SwalpaError::Delimiter(line, _, _) => *line,
            SwalpaError::InvalidContainerHierarchy(line, _, _) => *line,
            SwalpaError::InvalidTokenInContainer(line, _, _) => *line,
            SwalpaError::PropertyParsing(line, _, _) => *line,
            SwalpaError::InvalidClass(line) => *line,
            SwalpaError::MissingDefaultProperty(line, _) => *line,
            SwalpaError::InvalidParentage(line, _, _) => *line,
            SwalpaError::InvalidParentElement(line, _, _) => *line,
            SwalpaError::Template(_, _) => 0,
        }
    }

    pub fn message(&self) -> String {
        match self {
            SwalpaError::UnknownElement(_, name) => format!("element '{}' is not defined", name),
            SwalpaError::InvalidStructure(_, structure) => match structure {
                Structure::Unfinished { pending, started } => format!(
                    "element '{}' started before '{}' was finished",
                    started, pending
                ),
                Structure::ChildrenAlreadySet(element) => {
                    format!("element '{}' already has children set", element)
                }
                Structure::StringWithClasses(string) => {
                    format!("string {} cannot have classes", string)
                }
                Structure::StringWithProperties(string) => {
                    format!("string {} cannot have properties", string)
                }
                Structure::StringWithChildren(string) => {
                    format!("string {} cannot have children", string)
                }
                Structure::WithoutElement(kind) => {
                    format!("{} given without an element to apply it to", kind)
                }
                Structure::Unterminated(kind) => format!("unterminated {}", kind),
                Structure::TrailingInput(lexeme) => {
                    format!("unexpected '{}' after the end of the document", lexeme)
                }
            },
            SwalpaError::Delimiter(_, element, delimiter) => format!(
                "element '{}' doesn't know how to process delimiter '{}'",
                element,
                delimiter.trim()
            ),
            SwalpaError::InvalidContainerHierarchy(_, outer, lexeme) => {
                format!("found '{}' inside {}", lexeme, outer)
            }
            SwalpaError::InvalidTokenInContainer(_, kind, lexeme) => {
                format!("{} doesn't accept token '{}'", kind, lexeme.trim())
            }
            SwalpaError::PropertyParsing(_, problem, group) => {
                format!("{}: {}", problem, group.join(" "))
            }
            SwalpaError::InvalidClass(_) => "invalid class declaration".to_string(),
            SwalpaError::MissingDefaultProperty(_, element) => {
                format!("no default property defined for '{}' element", element)
            }
            SwalpaError::InvalidParentage(_, element, ancestors) => format!(
                "element '{}' can't be used under '{}' hierarchy",
                element,
                ancestors.join(" -> ")
            ),
            SwalpaError::InvalidParentElement(_, element, parent) => format!(
                "'{}' named by element '{}' is not a valid parent element",
                parent, element
            ),
            SwalpaError::Template(kind, problem) => {
                format!("template for '{}' failed: {}", kind, problem)
            }
        }
    }
}

impl fmt::Display for SwalpaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line() {
            0 => write!(f, "{}", self.message()),
            line => write!(f, "{}, at line {}", self.message(), line),
        }
    }
}

impl std::error::Error for SwalpaError {}
