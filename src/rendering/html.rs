//! Generate HTML from a validated element tree

use tracing::debug;

use crate::language::{Node, SwalpaError};
use crate::tree::{Tree, Visitor};

/// Render the tree by wrapping the output of each element's children in
/// the begin and end fragments of its kind.
pub fn render_html(tree: &Tree<'_>) -> Result<String, SwalpaError> {
    let mut html = Html::new();
    tree.accept(&mut html)?;
    Ok(html.output)
}

struct Html {
    output: String,
    // end fragments of the elements whose children are being rendered
    pending: Vec<String>,
    // end fragment of the most recently visited element
    last: Option<String>,
}

impl Html {
    fn new() -> Html {
        Html {
            output: String::new(),
            pending: Vec::new(),
            last: None,
        }
    }

    fn line(&mut self, fragment: &str) {
        if fragment.is_empty() {
            return;
        }
        for _ in 0..self
            .pending
            .len()
        {
            self.output
                .push_str("  ");
        }
        self.output
            .push_str(fragment);
        self.output
            .push('\n');
    }
}

impl Visitor for Html {
    fn visit(&mut self, node: &Node<'_>) -> Result<(), SwalpaError> {
        match node {
            Node::Element(element) => {
                debug!("Rendering '{}' from line {}", element.name(), element.line());
                let begin = element.begin_fragment()?;
                let end = element.end_fragment()?;
                self.line(&begin);

                if element.has_children() {
                    self.last = Some(end);
                } else {
                    self.line(&end);
                    self.last = None;
                }
            }
            Node::Text(text) => {
                self.line(text.literal());
                self.last = None;
            }
        }
        Ok(())
    }

    fn entering_subtree(&mut self) {
        let end = self
            .last
            .take()
            .unwrap_or_default();
        self.pending
            .push(end);
    }

    fn leaving_subtree(&mut self) {
        if let Some(end) = self
            .pending
            .pop()
        {
            self.line(&end);
        }
    }
}
