//! Containers group the flat token stream into strings, class lists,
//! property lists and content blocks.

use regex::Regex;
use std::fmt;

use crate::language::SwalpaError;
use crate::lexing::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    String,
    ClassList,
    PropertyList,
    ContentBlock,
}

impl ContainerKind {
    /// Pattern matched against the start of a lexeme to decide whether the
    /// token opens a container of this kind.
    pub fn trigger(&self) -> &'static Regex {
        match self {
            ContainerKind::String => regex!(r#"^["']"#),
            ContainerKind::ClassList => regex!(r"^\("),
            ContainerKind::PropertyList => regex!(r"^\["),
            ContainerKind::ContentBlock => regex!(r"^\{"),
        }
    }

    pub fn is_triggered_by(&self, token: &Token) -> bool {
        self.trigger()
            .is_match(&token.lexeme)
    }

    // Strings close on whichever quote opened them.
    fn closing(&self) -> Option<&'static str> {
        match self {
            ContainerKind::String => None,
            ContainerKind::ClassList => Some(")"),
            ContainerKind::PropertyList => Some("]"),
            ContainerKind::ContentBlock => Some("}"),
        }
    }

    fn accepts_container(&self, kind: ContainerKind) -> bool {
        match self {
            ContainerKind::String => false,
            ContainerKind::ClassList => kind == ContainerKind::String,
            ContainerKind::PropertyList => kind == ContainerKind::String,
            ContainerKind::ContentBlock => true,
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContainerKind::String => "String",
            ContainerKind::ClassList => "ClassList",
            ContainerKind::PropertyList => "PropertyList",
            ContainerKind::ContentBlock => "ContentBlock",
        };
        f.write_str(name)
    }
}

/// The container kinds known to a parse, in the order their triggers are
/// tried.
#[derive(Debug, Clone)]
pub struct ContainerFactory {
    kinds: Vec<ContainerKind>,
}

impl Default for ContainerFactory {
    fn default() -> Self {
        ContainerFactory {
            kinds: vec![
                ContainerKind::String,
                ContainerKind::ClassList,
                ContainerKind::PropertyList,
                ContainerKind::ContentBlock,
            ],
        }
    }
}

impl ContainerFactory {
    pub fn resolve(&self, token: &Token) -> Option<ContainerKind> {
        self.kinds
            .iter()
            .copied()
            .find(|kind| kind.is_triggered_by(token))
    }
}

/// What happened to a token handed to a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Digest {
    Continue,
    Terminated,
}

/// Either a literal token or a nested, sealed container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Token(Token),
    Container(Container),
}

impl Item {
    pub fn line(&self) -> usize {
        match self {
            Item::Token(token) => token.line,
            Item::Container(container) => container.line,
        }
    }

    fn value(&self) -> Option<String> {
        match self {
            Item::Token(token) if token.is_text() => Some(
                token
                    .lexeme
                    .clone(),
            ),
            Item::Container(container) if container.kind == ContainerKind::String => {
                Some(container.quoted())
            }
            _ => None,
        }
    }

    // a key written as a string is taken without its quotes
    fn key(&self) -> Option<String> {
        match self {
            Item::Container(container) if container.kind == ContainerKind::String => {
                Some(container.literal())
            }
            _ => self.value(),
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Token(token) => write!(f, "{}", token),
            Item::Container(container) => write!(f, "{}", container),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classes {
    pub id: Option<String>,
    pub classes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    pub default: Option<String>,
    pub named: Vec<(String, String)>,
}

/// The semantic payload of a sealed container.
#[derive(Debug, PartialEq, Eq)]
pub enum Contents<'c> {
    String(String),
    Classes(Classes),
    Properties(Properties),
    Block(&'c [Item]),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub kind: ContainerKind,
    pub start: String,
    pub line: usize,
    children: Vec<Item>,
    active: Option<Box<Container>>,
    end: Option<String>,
}

impl Container {
    pub fn open(kind: ContainerKind, start: impl Into<String>, line: usize) -> Container {
        Container {
            kind,
            start: start.into(),
            line,
            children: Vec::new(),
            active: None,
            end: None,
        }
    }

    pub fn children(&self) -> &[Item] {
        &self.children
    }

    pub fn into_children(self) -> Vec<Item> {
        self.children
    }

    pub fn is_terminated(&self) -> bool {
        self.end
            .is_some()
    }

    /// The deepest container still waiting for its terminator, if any.
    pub fn innermost_open(&self) -> Option<&Container> {
        let mut current = self
            .active
            .as_deref()?;
        while let Some(next) = current
            .active
            .as_deref()
        {
            current = next;
        }
        Some(current)
    }

    /// Hand a token to this container, or to whichever nested container is
    /// currently open within it.
    pub fn digest(&mut self, token: Token) -> Result<Digest, SwalpaError> {
        if let Some(active) = self
            .active
            .as_mut()
        {
            if active.digest(token)? == Digest::Terminated {
                if let Some(child) = self
                    .active
                    .take()
                {
                    self.children
                        .push(Item::Container(*child));
                }
            }
            return Ok(Digest::Continue);
        }

        match self.kind {
            ContainerKind::String => self.process_string(token),
            _ => self.process(token),
        }
    }

    fn process_string(&mut self, token: Token) -> Result<Digest, SwalpaError> {
        if self.is_terminator(&token) {
            self.end = Some(token.lexeme);
            return Ok(Digest::Terminated);
        }

        self.children
            .push(Item::Token(token));
        Ok(Digest::Continue)
    }

    fn process(&mut self, token: Token) -> Result<Digest, SwalpaError> {
        if let Some(kind) = token.attached() {
            if !self
                .kind
                .accepts_container(kind)
            {
                return Err(SwalpaError::InvalidContainerHierarchy(
                    token.line,
                    self.kind,
                    token.lexeme,
                ));
            }
            self.active = Some(Box::new(Container::open(kind, token.lexeme, token.line)));
            return Ok(Digest::Continue);
        }

        if self.is_ignored(&token) {
            return Ok(Digest::Continue);
        }

        if !self.is_acceptable(&token) {
            return Err(SwalpaError::InvalidTokenInContainer(
                token.line,
                self.kind,
                token.lexeme,
            ));
        }

        if self.is_terminator(&token) {
            self.end = Some(token.lexeme);
            return Ok(Digest::Terminated);
        }

        self.children
            .push(Item::Token(token));
        Ok(Digest::Continue)
    }

    fn is_terminator(&self, token: &Token) -> bool {
        match self
            .kind
            .closing()
        {
            Some(closing) => token.lexeme == closing,
            None => token.lexeme == self.start,
        }
    }

    // Nothing is ignored inside a string.
    fn is_ignored(&self, token: &Token) -> bool {
        if self.kind == ContainerKind::String {
            return false;
        }
        let re = regex!(r"^\s+");
        token
            .lexeme
            .is_empty()
            || re.is_match(&token.lexeme)
    }

    fn is_acceptable(&self, token: &Token) -> bool {
        if !token.is_delimiter() {
            return true;
        }
        match self.kind {
            ContainerKind::ClassList => self.is_terminator(token) || self.is_ignored(token),
            ContainerKind::PropertyList => {
                let re = regex!(r"^;");
                !re.is_match(&token.lexeme)
            }
            _ => true,
        }
    }

    /// The literal text of a string, without its quotes.
    pub fn literal(&self) -> String {
        self.children
            .iter()
            .map(|item| item.to_string())
            .collect()
    }

    /// The text of a string, always rendered with double quotes.
    pub fn quoted(&self) -> String {
        format!("\"{}\"", self.literal())
    }

    pub fn contents(&self) -> Result<Contents<'_>, SwalpaError> {
        match self.kind {
            ContainerKind::String => Ok(Contents::String(self.quoted())),
            ContainerKind::ClassList => Ok(Contents::Classes(self.classes()?)),
            ContainerKind::PropertyList => Ok(Contents::Properties(self.properties()?)),
            ContainerKind::ContentBlock => Ok(Contents::Block(&self.children)),
        }
    }

    fn classes(&self) -> Result<Classes, SwalpaError> {
        let re = regex!(r"^#\w+");
        let mut result = Classes::default();

        for child in &self.children {
            match child {
                Item::Token(token) if token.is_text() => {
                    if re.is_match(&token.lexeme) {
                        result.id = Some(token.lexeme[1..].to_string());
                    } else {
                        result
                            .classes
                            .push(
                                token
                                    .lexeme
                                    .clone(),
                            );
                    }
                }
                Item::Container(container) if container.kind == ContainerKind::String => {
                    result
                        .classes
                        .push(container.literal());
                }
                _ => return Err(SwalpaError::InvalidClass(child.line())),
            }
        }

        Ok(result)
    }

    fn properties(&self) -> Result<Properties, SwalpaError> {
        let mut groups: Vec<Vec<&Item>> = Vec::new();
        let mut current: Vec<&Item> = Vec::new();

        for item in &self.children {
            if let Item::Token(token) = item {
                if token.is_delimiter()
                    && token
                        .lexeme
                        .trim()
                        == ","
                {
                    if current.is_empty() {
                        return Err(SwalpaError::PropertyParsing(
                            token.line,
                            "Empty property".to_string(),
                            vec![",".to_string()],
                        ));
                    }
                    groups.push(std::mem::take(&mut current));
                    continue;
                }
            }
            current.push(item);
        }
        if !current.is_empty() {
            groups.push(current);
        }

        let mut result = Properties::default();

        for group in groups {
            match group.as_slice() {
                [single] => match single.value() {
                    Some(value) => result.default = Some(value),
                    None => return Err(group_error("Expected a value", &group)),
                },
                [key, separator, value] => {
                    let separator = match separator {
                        Item::Token(token) if token.is_delimiter() => token,
                        other => {
                            return Err(group_error(
                                &format!("Unknown delimiter '{}'", other.to_string().trim()),
                                &group,
                            ))
                        }
                    };
                    if separator
                        .lexeme
                        .trim()
                        != ":"
                    {
                        return Err(group_error(
                            &format!(
                                "Unknown delimiter '{}'",
                                separator
                                    .lexeme
                                    .trim()
                            ),
                            &group,
                        ));
                    }
                    match (key.key(), value.value()) {
                        (Some(key), Some(value)) => result
                            .named
                            .push((key, value)),
                        _ => return Err(group_error("Expected a key and a value", &group)),
                    }
                }
                _ => return Err(group_error("Unable to parse", &group)),
            }
        }

        Ok(result)
    }
}

fn group_error(problem: &str, group: &[&Item]) -> SwalpaError {
    let line = group
        .first()
        .map(|item| item.line())
        .unwrap_or(0);
    let rendered = group
        .iter()
        .map(|item| item.to_string())
        .collect();
    SwalpaError::PropertyParsing(line, problem.to_string(), rendered)
}

// Flattening back to text reproduces the structural punctuation of the
// input; whitespace inside strings is kept, elsewhere it is normalized.
impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.start)?;
        if self.kind == ContainerKind::String {
            f.write_str(&self.literal())?;
        } else {
            for child in &self.children {
                write!(f, " {}", child)?;
            }
            if !self
                .children
                .is_empty()
            {
                f.write_str(" ")?;
            }
        }
        if let Some(end) = &self.end {
            f.write_str(end)?;
        }
        Ok(())
    }
}
