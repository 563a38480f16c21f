//! Depth-first traversal of an element tree

use crate::language::{Node, SwalpaError};

/// Visit each node in pre-order. Around the children of a node that has
/// them, `entering_subtree()` and `leaving_subtree()` are signalled.
pub trait Visitor {
    fn visit(&mut self, node: &Node<'_>) -> Result<(), SwalpaError>;

    fn entering_subtree(&mut self) {}

    fn leaving_subtree(&mut self) {}
}

/// As [`Visitor`], for passes that need to change the nodes they visit.
pub trait VisitorMut {
    fn visit(&mut self, node: &mut Node<'_>) -> Result<(), SwalpaError>;

    fn entering_subtree(&mut self) {}

    fn leaving_subtree(&mut self) {}
}

pub fn walk<V>(nodes: &[Node<'_>], visitor: &mut V) -> Result<(), SwalpaError>
where
    V: Visitor + ?Sized,
{
    for node in nodes {
        visitor.visit(node)?;

        if node.has_children() {
            visitor.entering_subtree();
            walk(node.children(), visitor)?;
            visitor.leaving_subtree();
        }
    }
    Ok(())
}

pub fn walk_mut<V>(nodes: &mut [Node<'_>], visitor: &mut V) -> Result<(), SwalpaError>
where
    V: VisitorMut + ?Sized,
{
    for node in nodes {
        visitor.visit(node)?;

        if node.has_children() {
            visitor.entering_subtree();
            walk_mut(node.children_mut(), visitor)?;
            visitor.leaving_subtree();
        }
    }
    Ok(())
}

#[cfg(test)]
mod check {
    use super::*;
    use crate::language::{ElementKind, Registry};
    use crate::lexing::tokenize_str;
    use crate::model::{build, ContainerFactory};
    use crate::tree::build_nodes;

    struct Simple(&'static str);

    impl ElementKind for Simple {
        fn name(&self) -> &'static str {
            self.0
        }
    }

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl Visitor for Recorder {
        fn visit(&mut self, node: &Node<'_>) -> Result<(), SwalpaError> {
            self.events
                .push(
                    node.name()
                        .to_string(),
                );
            Ok(())
        }

        fn entering_subtree(&mut self) {
            self.events
                .push("+".to_string());
        }

        fn leaving_subtree(&mut self) {
            self.events
                .push("-".to_string());
        }
    }

    #[test]
    fn pre_order_with_signals() {
        let registry = Registry::new()
            .with(Simple("a"))
            .with(Simple("b"))
            .with(Simple("c"));
        let items = build(
            &ContainerFactory::default(),
            tokenize_str("a { b { c; } c; } b { }"),
        )
        .unwrap();
        let nodes = build_nodes(&registry, &items).unwrap();

        let mut recorder = Recorder::default();
        walk(&nodes, &mut recorder).unwrap();

        assert_eq!(
            recorder.events,
            vec!["a", "+", "b", "+", "c", "-", "c", "-", "b"]
        );
    }
}
