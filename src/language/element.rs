//! The semantic nodes a document is assembled into

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use super::error::{Structure, SwalpaError};
use super::kind::ElementKind;
use crate::lexing::Token;
use crate::model::{Classes, Properties};

/// Configuration applied to an element when it turns out to sit directly
/// under a particular parent kind.
pub type Configure = fn(&mut Element<'_>);

pub struct Element<'r> {
    kind: &'r dyn ElementKind,
    line: usize,
    id: Option<String>,
    classes: BTreeSet<String>,
    properties: BTreeMap<String, String>,
    // normalized key to the key as it was written
    spellings: BTreeMap<String, String>,
    default_property: Option<String>,
    default_value: Option<String>,
    children: Option<Vec<Node<'r>>>,
    // each chain runs from outermost to innermost ancestor
    desired: Vec<Vec<String>>,
    hooks: BTreeMap<String, Vec<Configure>>,
}

impl<'r> Element<'r> {
    pub(crate) fn new(kind: &'r dyn ElementKind, line: usize) -> Element<'r> {
        Element {
            kind,
            line,
            id: None,
            classes: BTreeSet::new(),
            properties: BTreeMap::new(),
            spellings: BTreeMap::new(),
            default_property: None,
            default_value: None,
            children: None,
            desired: Vec::new(),
            hooks: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind
            .name()
    }

    pub fn kind(&self) -> &'r dyn ElementKind {
        self.kind
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn id(&self) -> Option<&str> {
        self.id
            .as_deref()
    }

    pub fn set_id(&mut self, id: &str) {
        self.id = Some(
            id.trim_start_matches('#')
                .to_string(),
        );
    }

    pub fn classes(&self) -> &BTreeSet<String> {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes
            .contains(class)
    }

    pub fn add_class(&mut self, class: impl Into<String>) {
        self.classes
            .insert(class.into());
    }

    pub fn add_classes<I, S>(&mut self, classes: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for class in classes {
            self.add_class(class);
        }
    }

    /// Drop every class added so far, typically those a more general kind
    /// put there during construction.
    pub fn purge_classes(&mut self) {
        self.classes
            .clear();
    }

    pub fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties
            .get(&normalize_key(key))
            .map(String::as_str)
    }

    /// Keys are written with underscores in documents and kinds; `_` becomes
    /// `-` and an escaped `__` becomes `_`.
    pub fn set_property(&mut self, key: &str, value: impl Into<String>) {
        let normal = normalize_key(key);
        self.spellings
            .insert(normal.clone(), key.to_string());
        self.properties
            .insert(normal, value.into());
    }

    /// The key as it was last written for a normalized property name.
    pub fn written_key<'a>(&'a self, key: &'a str) -> &'a str {
        self.spellings
            .get(key)
            .map(String::as_str)
            .unwrap_or(key)
    }

    pub fn default_property(&self) -> Option<&str> {
        self.default_property
            .as_deref()
    }

    pub fn set_default_property(&mut self, key: &str) {
        self.default_property = Some(normalize_key(key));
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default_value
            .as_deref()
    }

    pub fn set_default_value(&mut self, value: impl Into<String>) -> Result<(), SwalpaError> {
        if self
            .default_property
            .is_none()
        {
            return Err(SwalpaError::MissingDefaultProperty(
                self.line,
                self.name()
                    .to_string(),
            ));
        }
        self.default_value = Some(value.into());
        Ok(())
    }

    /// Every property as it should appear on output, the default value
    /// included under its property name.
    pub fn attributes(&self) -> Vec<(&str, &str)> {
        let mut result: Vec<(&str, &str)> = self
            .properties
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
            .collect();

        if let (Some(key), Some(value)) = (self.default_property(), self.default_value()) {
            result.push((key, value));
        }
        result
    }

    pub fn apply_classes(&mut self, classes: Classes) {
        if let Some(id) = classes.id {
            self.set_id(&id);
        }
        self.add_classes(classes.classes);
    }

    pub fn apply_properties(&mut self, properties: Properties) -> Result<(), SwalpaError> {
        if let Some(value) = properties.default {
            self.set_default_value(value)?;
        }
        for (key, value) in properties.named {
            self.set_property(&key, value);
        }
        Ok(())
    }

    /// Declare one alternative chain of ancestors, outermost first, that this
    /// element may be placed under. The ancestors need not be contiguous.
    pub fn add_desired_ancestor_chain<I, S>(&mut self, chain: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.desired
            .push(
                chain
                    .into_iter()
                    .map(Into::into)
                    .collect(),
            );
    }

    pub fn desired_ancestor_chains(&self) -> &[Vec<String>] {
        &self.desired
    }

    pub fn set_parent_specific_hook(&mut self, parent: &str, action: Configure) {
        self.hooks
            .entry(parent.to_string())
            .or_default()
            .push(action);
    }

    pub(crate) fn hooked_parents(&self) -> impl Iterator<Item = &str> {
        self.hooks
            .keys()
            .map(String::as_str)
    }

    pub fn has_children(&self) -> bool {
        self.children
            .is_some()
    }

    pub fn children(&self) -> &[Node<'r>] {
        self.children
            .as_deref()
            .unwrap_or(&[])
    }

    pub fn children_mut(&mut self) -> &mut [Node<'r>] {
        self.children
            .as_deref_mut()
            .unwrap_or(&mut [])
    }

    /// Children can be given exactly once.
    pub fn set_children(&mut self, children: Vec<Node<'r>>) -> Result<(), SwalpaError> {
        if self
            .children
            .is_some()
        {
            return Err(SwalpaError::InvalidStructure(
                self.line,
                Structure::ChildrenAlreadySet(
                    self.name()
                        .to_string(),
                ),
            ));
        }
        self.children = Some(children);
        Ok(())
    }

    /// Check the actual ancestors of this element, outermost first and not
    /// including the element itself, against the chains it declared. Any one
    /// declared chain appearing in order within the ancestors is enough.
    pub fn validate_ancestry(&self, ancestors: &[&str]) -> Result<(), SwalpaError> {
        if self
            .desired
            .is_empty()
        {
            return Ok(());
        }

        let matched = self
            .desired
            .iter()
            .filter(|chain| chain.len() <= ancestors.len())
            .any(|chain| is_subsequence(chain, ancestors));

        if matched {
            Ok(())
        } else {
            Err(SwalpaError::InvalidParentage(
                self.line,
                self.name()
                    .to_string(),
                ancestors
                    .iter()
                    .map(|kind| kind.to_string())
                    .collect(),
            ))
        }
    }

    /// Run the hooks registered for the given parent kind, in the order they
    /// were registered.
    pub fn configure_for_parent(&mut self, parent: &str) {
        let actions = match self
            .hooks
            .get(parent)
        {
            Some(actions) => actions.clone(),
            None => return,
        };
        for action in actions {
            action(self);
        }
    }

    pub fn begin_fragment(&self) -> Result<String, SwalpaError> {
        crate::templating::begin(self)
    }

    pub fn end_fragment(&self) -> Result<String, SwalpaError> {
        crate::templating::end(self)
    }
}

// Greedy matching finds the earliest position for each desired kind, so a
// kind repeated among the ancestors can be matched at any occurrence.
fn is_subsequence(desired: &[String], actual: &[&str]) -> bool {
    let mut remaining = actual.iter();
    desired
        .iter()
        .all(|kind| remaining.any(|candidate| *candidate == kind.as_str()))
}

fn normalize_key(key: &str) -> String {
    key.replace('_', "-")
        .replace("--", "_")
}

impl fmt::Debug for Element<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("kind", &self.name())
            .field("line", &self.line)
            .field("id", &self.id)
            .field("classes", &self.classes)
            .field("properties", &self.properties)
            .field("default_value", &self.default_value)
            .field("children", &self.children)
            .finish()
    }
}

/// A literal string in element position. It has no classes, properties, or
/// children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringElement {
    pub content: String,
    pub line: usize,
}

impl StringElement {
    /// The content without its surrounding quotes.
    pub fn literal(&self) -> &str {
        self.content
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
            .unwrap_or(&self.content)
    }
}

#[derive(Debug)]
pub enum Node<'r> {
    Element(Element<'r>),
    Text(StringElement),
}

impl<'r> Node<'r> {
    pub fn name(&self) -> &str {
        match self {
            Node::Element(element) => element.name(),
            Node::Text(text) => &text.content,
        }
    }

    pub fn line(&self) -> usize {
        match self {
            Node::Element(element) => element.line(),
            Node::Text(text) => text.line,
        }
    }

    pub fn as_element(&self) -> Option<&Element<'r>> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    pub fn has_children(&self) -> bool {
        match self {
            Node::Element(element) => element.has_children(),
            Node::Text(_) => false,
        }
    }

    pub fn children(&self) -> &[Node<'r>] {
        match self {
            Node::Element(element) => element.children(),
            Node::Text(_) => &[],
        }
    }

    pub fn children_mut(&mut self) -> &mut [Node<'r>] {
        match self {
            Node::Element(element) => element.children_mut(),
            Node::Text(_) => &mut [],
        }
    }

    /// Offer a delimiter as the end of this node. Only `;` is accepted.
    pub fn parse_delimiter(&self, delimiter: &Token) -> Result<(), SwalpaError> {
        let re = regex!(r"^;");
        if re.is_match(&delimiter.lexeme) {
            Ok(())
        } else {
            Err(SwalpaError::Delimiter(
                delimiter.line,
                self.name()
                    .to_string(),
                delimiter
                    .lexeme
                    .clone(),
            ))
        }
    }

    pub fn parse_classes(&mut self, classes: Classes) -> Result<(), SwalpaError> {
        match self {
            Node::Element(element) => {
                element.apply_classes(classes);
                Ok(())
            }
            Node::Text(text) => Err(SwalpaError::InvalidStructure(
                text.line,
                Structure::StringWithClasses(
                    text.content
                        .clone(),
                ),
            )),
        }
    }

    pub fn parse_properties(&mut self, properties: Properties) -> Result<(), SwalpaError> {
        match self {
            Node::Element(element) => element.apply_properties(properties),
            Node::Text(text) => Err(SwalpaError::InvalidStructure(
                text.line,
                Structure::StringWithProperties(
                    text.content
                        .clone(),
                ),
            )),
        }
    }

    pub fn set_children(&mut self, children: Vec<Node<'r>>) -> Result<(), SwalpaError> {
        match self {
            Node::Element(element) => element.set_children(children),
            Node::Text(text) => Err(SwalpaError::InvalidStructure(
                text.line,
                Structure::StringWithChildren(
                    text.content
                        .clone(),
                ),
            )),
        }
    }
}
