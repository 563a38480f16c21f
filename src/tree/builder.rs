//! Turn object model items into a tree of elements

use crate::language::{Node, Registry, StringElement, Structure, SwalpaError};
use crate::lexing::Token;
use crate::model::{Container, ContainerKind, Contents, Item};

/// Builds one level of the tree. Each element stays pending until a `;`, a
/// content block, or the start of the next element finishes it.
struct TreeBuilder<'r> {
    registry: &'r Registry,
    nodes: Vec<Node<'r>>,
    current: Option<Node<'r>>,
}

/// Build the nodes for a sequence of items, recursing into content blocks.
pub fn build_nodes<'r>(registry: &'r Registry, items: &[Item]) -> Result<Vec<Node<'r>>, SwalpaError> {
    let mut builder = TreeBuilder {
        registry,
        nodes: Vec::new(),
        current: None,
    };

    for item in items {
        builder.parse(item)?;
    }

    Ok(builder.finish())
}

impl<'r> TreeBuilder<'r> {
    fn parse(&mut self, item: &Item) -> Result<(), SwalpaError> {
        match item {
            Item::Token(token) if token.is_text() => {
                let element = self
                    .registry
                    .create(&token.lexeme, token.line)?;
                self.start(Node::Element(element), token.line)
            }
            Item::Token(token) => self.parse_delimiter(token),
            Item::Container(container) if container.kind == ContainerKind::String => {
                let text = StringElement {
                    content: container.quoted(),
                    line: container.line,
                };
                self.start(Node::Text(text), container.line)
            }
            Item::Container(container) => self.parse_container(container),
        }
    }

    fn start(&mut self, node: Node<'r>, line: usize) -> Result<(), SwalpaError> {
        if let Some(pending) = &self.current {
            return Err(SwalpaError::InvalidStructure(
                line,
                Structure::Unfinished {
                    pending: pending
                        .name()
                        .to_string(),
                    started: node
                        .name()
                        .to_string(),
                },
            ));
        }
        self.current = Some(node);
        Ok(())
    }

    fn parse_delimiter(&mut self, delimiter: &Token) -> Result<(), SwalpaError> {
        let pending = match &self.current {
            Some(pending) => pending,
            None => return Ok(()),
        };

        pending.parse_delimiter(delimiter)?;
        self.seal();
        Ok(())
    }

    fn parse_container(&mut self, container: &Container) -> Result<(), SwalpaError> {
        let pending = self
            .current
            .as_mut()
            .ok_or(SwalpaError::InvalidStructure(
                container.line,
                Structure::WithoutElement(container.kind),
            ))?;

        match container.contents()? {
            Contents::Classes(classes) => pending.parse_classes(classes),
            Contents::Properties(properties) => pending.parse_properties(properties),
            Contents::Block(items) => {
                if !items.is_empty() {
                    let children = build_nodes(self.registry, items)?;
                    pending.set_children(children)?;
                }
                self.seal();
                Ok(())
            }
            Contents::String(_) => Err(SwalpaError::InvalidStructure(
                container.line,
                Structure::WithoutElement(container.kind),
            )),
        }
    }

    fn seal(&mut self) {
        if let Some(node) = self
            .current
            .take()
        {
            self.nodes
                .push(node);
        }
    }

    fn finish(mut self) -> Vec<Node<'r>> {
        self.seal();
        self.nodes
    }
}
