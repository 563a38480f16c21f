//! Print an element tree back out as Swalpa source

use crate::formatting::*;
use crate::language::{Element, Node, SwalpaError};
use crate::lexing::is_escaped;
use crate::tree::{Tree, Visitor};

/// We print in two passes. First the tree is walked, producing a Vec of
/// "fragments" (Syntax tag, String pairs). Then the specified renderer is
/// applied to each pair to give an embellished or plain String.
pub fn render(renderer: &impl Render, tree: &Tree<'_>) -> Result<String, SwalpaError> {
    // Pass 1: walk the tree into tagged fragments
    let mut printer = Printer::new();
    tree.accept(&mut printer)?;

    // Pass 2: apply markup and combine
    let mut output = String::new();
    for (syntax, content) in printer.fragments {
        output.push_str(&renderer.style(syntax, &content));
    }
    Ok(output)
}

/// Emits each element on its own line, indented by its depth. Elements with
/// children open a block that is closed on leaving the subtree.
struct Printer {
    fragments: Vec<(Syntax, String)>,
    nesting: usize,
}

impl Printer {
    fn new() -> Printer {
        Printer {
            fragments: Vec::new(),
            nesting: 0,
        }
    }

    fn append(&mut self, syntax: Syntax, content: &str) {
        self.fragments
            .push((syntax, content.to_string()));
    }

    fn indent(&mut self) {
        if self.nesting > 0 {
            let spaces = " ".repeat(self.nesting * 4);
            self.append(Syntax::Indent, &spaces);
        }
    }

    fn format_element(&mut self, element: &Element<'_>) {
        self.append(Syntax::Element, element.name());

        if element
            .id()
            .is_some()
            || !element
                .classes()
                .is_empty()
        {
            self.append(Syntax::Neutral, " ");
            self.append(Syntax::Structure, "(");

            let mut first = true;
            if let Some(id) = element.id() {
                self.append(Syntax::Identifier, &format!("#{}", id));
                first = false;
            }
            for class in element.classes() {
                if !first {
                    self.append(Syntax::Neutral, " ");
                }
                if is_plain(class) {
                    self.append(Syntax::Class, class);
                } else {
                    self.append(Syntax::String, &quote(class));
                }
                first = false;
            }

            self.append(Syntax::Structure, ")");
        }

        let properties = element.properties();
        let default = element.default_value();
        if !properties.is_empty() || default.is_some() {
            self.append(Syntax::Neutral, " ");
            self.append(Syntax::Structure, "[");

            let mut first = true;
            for (key, value) in properties {
                if !first {
                    self.append(Syntax::Punctuation, ",");
                    self.append(Syntax::Neutral, " ");
                }
                let written = element.written_key(key);
                if is_plain(written) {
                    self.append(Syntax::Property, written);
                } else {
                    self.append(Syntax::String, &quote(written));
                }
                self.append(Syntax::Punctuation, ":");
                self.append(Syntax::Neutral, " ");
                self.format_value(value);
                first = false;
            }

            // the default value is written bare, as in the source
            if let Some(value) = default {
                if !first {
                    self.append(Syntax::Punctuation, ",");
                    self.append(Syntax::Neutral, " ");
                }
                self.format_value(value);
            }

            self.append(Syntax::Structure, "]");
        }
    }

    fn format_value(&mut self, value: &str) {
        match value
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
        {
            Some(literal) => self.append(Syntax::String, &quote(literal)),
            None => self.append(Syntax::Value, value),
        }
    }
}

// Anything else would be split, or read as an id, when parsed again.
fn is_plain(word: &str) -> bool {
    let re = regex!(r"^[\w-]+$");
    re.is_match(word)
}

/// Strings are written with double quotes unless the text holds a live
/// double quote and no live single quote.
fn quote(literal: &str) -> String {
    if has_live(literal, '"') && !has_live(literal, '\'') {
        format!("'{}'", literal)
    } else {
        format!("\"{}\"", literal)
    }
}

fn has_live(literal: &str, quote: char) -> bool {
    literal
        .char_indices()
        .any(|(position, c)| c == quote && !is_escaped(literal, position))
}

impl Visitor for Printer {
    fn visit(&mut self, node: &Node<'_>) -> Result<(), SwalpaError> {
        self.indent();

        match node {
            Node::Element(element) => {
                self.format_element(element);
                if element.has_children() {
                    self.append(Syntax::Neutral, " ");
                    self.append(Syntax::Structure, "{");
                } else {
                    self.append(Syntax::Punctuation, ";");
                }
            }
            Node::Text(text) => {
                self.append(Syntax::String, &quote(text.literal()));
                self.append(Syntax::Punctuation, ";");
            }
        }

        self.append(Syntax::Newline, "\n");
        Ok(())
    }

    fn entering_subtree(&mut self) {
        self.nesting += 1;
    }

    fn leaving_subtree(&mut self) {
        self.nesting = self
            .nesting
            .saturating_sub(1);
        self.indent();
        self.append(Syntax::Structure, "}");
        self.append(Syntax::Newline, "\n");
    }
}
