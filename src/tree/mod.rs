//! The element tree: assembly, traversal, and ancestry validation

mod ancestry;
mod builder;
mod visitor;

pub use ancestry::VerifyAncestry;
pub use builder::build_nodes;
pub use visitor::{walk, walk_mut, Visitor, VisitorMut};

use crate::language::{Node, Registry, SwalpaError, TokenizationWarning};
use crate::model::Item;

/// The top level nodes of a document, each owning its subtree, along with
/// any lines that were skipped while reading it.
#[derive(Debug)]
pub struct Tree<'r> {
    nodes: Vec<Node<'r>>,
    warnings: Vec<TokenizationWarning>,
}

impl<'r> Tree<'r> {
    pub fn build(registry: &'r Registry, items: &[Item]) -> Result<Tree<'r>, SwalpaError> {
        let nodes = build_nodes(registry, items)?;
        Ok(Tree {
            nodes,
            warnings: Vec::new(),
        })
    }

    pub fn with_warnings(mut self, warnings: Vec<TokenizationWarning>) -> Tree<'r> {
        self.warnings = warnings;
        self
    }

    pub fn warnings(&self) -> &[TokenizationWarning] {
        &self.warnings
    }

    pub fn nodes(&self) -> &[Node<'r>] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<Node<'r>> {
        self.nodes
    }

    pub fn accept(&self, visitor: &mut impl Visitor) -> Result<(), SwalpaError> {
        walk(&self.nodes, visitor)
    }

    pub fn accept_mut(&mut self, visitor: &mut impl VisitorMut) -> Result<(), SwalpaError> {
        walk_mut(&mut self.nodes, visitor)
    }

    /// Verify the ancestry of every element and apply parent specific
    /// configuration.
    pub fn validate(&mut self) -> Result<(), SwalpaError> {
        self.accept_mut(&mut VerifyAncestry::new())
    }
}
