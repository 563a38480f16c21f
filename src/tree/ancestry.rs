//! Check every element sits under ancestors it accepts, then apply any
//! configuration specific to its parent.

use tracing::debug;

use super::visitor::VisitorMut;
use crate::language::{Node, SwalpaError};

/// Every kind named here came from a Registry, which has already refused
/// elements whose chains or hooks mention kinds it does not know.
#[derive(Default)]
pub struct VerifyAncestry {
    ancestors: Vec<&'static str>,
    last: Option<&'static str>,
}

impl VerifyAncestry {
    pub fn new() -> VerifyAncestry {
        VerifyAncestry::default()
    }
}

impl VisitorMut for VerifyAncestry {
    fn visit(&mut self, node: &mut Node<'_>) -> Result<(), SwalpaError> {
        let element = match node {
            Node::Element(element) => element,
            Node::Text(_) => {
                self.last = None;
                return Ok(());
            }
        };

        self.last = Some(element.name());
        element.validate_ancestry(&self.ancestors)?;

        // only the nearest ancestor gets a say in configuration
        if let Some(parent) = self
            .ancestors
            .last()
        {
            debug!("Configuring '{}' for parent '{}'", element.name(), parent);
            element.configure_for_parent(parent);
        }
        Ok(())
    }

    fn entering_subtree(&mut self) {
        if let Some(kind) = self.last {
            self.ancestors
                .push(kind);
        }
    }

    fn leaving_subtree(&mut self) {
        self.ancestors
            .pop();
    }
}

#[cfg(test)]
mod check {
    use super::*;
    use crate::language::{Element, ElementKind, Registry, Structure};
    use crate::lexing::tokenize_str;
    use crate::model::{build, ContainerFactory};
    use crate::tree::{build_nodes, walk_mut};

    struct Simple(&'static str);

    impl ElementKind for Simple {
        fn name(&self) -> &'static str {
            self.0
        }
    }

    struct Leaf;

    impl ElementKind for Leaf {
        fn name(&self) -> &'static str {
            "leaf"
        }

        fn construct(&self, element: &mut Element<'_>) {
            element.add_desired_ancestor_chain(["outer", "inner"]);
            element.set_parent_specific_hook("inner", |e| e.add_class("in-inner"));
            element.set_parent_specific_hook("outer", |e| e.add_class("in-outer"));
        }
    }

    struct Stray;

    impl ElementKind for Stray {
        fn name(&self) -> &'static str {
            "stray"
        }

        fn construct(&self, element: &mut Element<'_>) {
            element.set_parent_specific_hook("missing", |e| e.add_class("lost"));
        }
    }

    fn registry() -> Registry {
        Registry::new()
            .with(Simple("outer"))
            .with(Simple("inner"))
            .with(Simple("other"))
            .with(Leaf)
            .with(Stray)
    }

    fn verify<'r>(registry: &'r Registry, input: &str) -> Result<Vec<Node<'r>>, SwalpaError> {
        let items = build(&ContainerFactory::default(), tokenize_str(input))?;
        let mut nodes = build_nodes(registry, &items)?;
        walk_mut(&mut nodes, &mut VerifyAncestry::new())?;
        Ok(nodes)
    }

    #[test]
    fn valid_and_configured() {
        let registry = registry();
        let nodes = verify(&registry, "outer { other { inner { leaf; \"text\" } } }").unwrap();

        let leaf = nodes[0].children()[0].children()[0].children()[0]
            .as_element()
            .unwrap();
        assert_eq!(leaf.name(), "leaf");
        assert!(leaf.has_class("in-inner"));
        assert!(!leaf.has_class("in-outer"));
    }

    #[test]
    fn wrong_hierarchy() {
        let registry = registry();
        let result = verify(&registry, "inner {\n outer {\n  leaf;\n }\n}");
        assert_eq!(
            result.unwrap_err(),
            SwalpaError::InvalidParentage(
                3,
                "leaf".to_string(),
                vec!["inner".to_string(), "outer".to_string()]
            )
        );
    }

    #[test]
    fn top_level_leaf_fails() {
        let registry = registry();
        let result = verify(&registry, "leaf;");
        assert!(matches!(result, Err(SwalpaError::InvalidParentage(1, _, ref chain)) if chain.is_empty()));
    }

    #[test]
    fn siblings_restore_stack() {
        let registry = registry();
        // the second leaf is only under outer once inner has been left
        let result = verify(&registry, "outer { inner { leaf; } leaf; }");
        assert_eq!(
            result.unwrap_err(),
            SwalpaError::InvalidParentage(1, "leaf".to_string(), vec!["outer".to_string()])
        );

        assert!(verify(&registry, "outer { inner { leaf; } inner { leaf; } }").is_ok());
    }

    #[test]
    fn unknown_parents_refused_before_validation() {
        let registry = registry();
        let result = verify(&registry, "outer {\n    stray;\n}");
        assert_eq!(
            result.unwrap_err(),
            SwalpaError::InvalidParentElement(2, "stray".to_string(), "missing".to_string())
        );
    }

    #[test]
    fn structural_errors_pass_through() {
        let registry = registry();
        let result = verify(&registry, "outer { inner {");
        assert!(matches!(
            result,
            Err(SwalpaError::InvalidStructure(_, Structure::Unterminated(_)))
        ));
    }
}
