//! Element kinds and the registry they are looked up in

use std::collections::BTreeMap;
use tracing::debug;

use super::element::Element;
use super::error::SwalpaError;

/// Begin and end templates, rendered around the children of an element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Templates {
    pub begin: &'static str,
    pub end: &'static str,
}

/// A kind of element the language knows about. Implementations describe how
/// a freshly created element of their kind is set up; the parser never
/// looks inside them beyond this.
pub trait ElementKind: Send + Sync {
    /// The name used for this kind in documents.
    fn name(&self) -> &'static str;

    /// The property an anonymous value in a property list is assigned to.
    fn default_property(&self) -> Option<&'static str> {
        None
    }

    /// Add classes, properties, desired ancestor chains and parent specific
    /// hooks to a new element. Called once, before anything from the
    /// document is applied.
    fn construct(&self, _element: &mut Element<'_>) {}

    fn templates(&self) -> Templates {
        Templates::default()
    }
}

/// The element kinds available to a parse, keyed by name. Built once and
/// then only read.
#[derive(Default)]
pub struct Registry {
    kinds: BTreeMap<&'static str, Box<dyn ElementKind>>,
}

impl Registry {
    pub fn new() -> Registry {
        Registry::default()
    }

    pub fn register(&mut self, kind: impl ElementKind + 'static) {
        let name = kind.name();
        if self
            .kinds
            .insert(name, Box::new(kind))
            .is_some()
        {
            debug!("Element kind '{}' registered again, replacing", name);
        }
    }

    pub fn with(mut self, kind: impl ElementKind + 'static) -> Registry {
        self.register(kind);
        self
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.kinds
            .contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&dyn ElementKind> {
        self.kinds
            .get(name)
            .map(|kind| kind.as_ref())
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.kinds
            .keys()
            .copied()
    }

    /// Make a fresh element of the named kind, declared at `line`.
    pub fn create(&self, name: &str, line: usize) -> Result<Element<'_>, SwalpaError> {
        let kind = self
            .get(name)
            .ok_or_else(|| SwalpaError::UnknownElement(line, name.to_string()))?;

        let mut element = Element::new(kind, line);
        if let Some(property) = kind.default_property() {
            element.set_default_property(property);
        }
        kind.construct(&mut element);

        let referenced = element
            .desired_ancestor_chains()
            .iter()
            .flatten()
            .map(String::as_str)
            .chain(element.hooked_parents());

        for parent in referenced {
            if !self.is_registered(parent) {
                return Err(SwalpaError::InvalidParentElement(
                    line,
                    name.to_string(),
                    parent.to_string(),
                ));
            }
        }

        Ok(element)
    }
}
