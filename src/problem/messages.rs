use swalpa::formatting::{Render, Syntax};
use swalpa::language::{Structure, SwalpaError};
use swalpa::model::ContainerKind;

/// Generate problem and detail messages for errors, with example code styled
/// by the given renderer.
pub fn generate_error_message(error: &SwalpaError, renderer: &dyn Render) -> (String, String) {
    match error {
        SwalpaError::UnknownElement(_, name) => (
            format!("Unknown element '{}'", name),
            format!(
                r#"
Every element in a document must be one of the kinds known to the compiler.
Check the spelling of {}, or use a string such as {} if literal
text was intended.
                "#,
                renderer.style(Syntax::Element, name),
                renderer.style(Syntax::String, "\"Hello\"")
            )
            .trim_ascii()
            .to_string(),
        ),
        SwalpaError::InvalidStructure(_, structure) => structure_message(error, structure, renderer),
        SwalpaError::Delimiter(_, _, delimiter) => (
            format!("Unexpected delimiter '{}'", delimiter.trim()),
            format!(
                r#"
An element is finished either by a content block or by a semicolon, as in
{}. Other delimiters are only meaningful inside property lists.
                "#,
                example(renderer, "div", Some("main"), None)
            )
            .trim_ascii()
            .to_string(),
        ),
        SwalpaError::InvalidContainerHierarchy(_, outer, _) => (
            error.message(),
            format!(
                "{} can't be placed here. Only a {} can contain further structure.",
                describe(*outer),
                describe(ContainerKind::ContentBlock)
            ),
        ),
        SwalpaError::InvalidTokenInContainer(_, kind, _) => (
            error.message(),
            format!(
                "This token is not allowed inside a {}. Properties are written {}.",
                describe(*kind),
                property_example(renderer)
            ),
        ),
        SwalpaError::PropertyParsing(_, _, _) => (
            "Malformed property".to_string(),
            format!(
                r#"
Properties are separated by commas, and each is either a bare default value
or a key and value separated by a colon and a space, as in
{}.
                "#,
                property_example(renderer)
            )
            .trim_ascii()
            .to_string(),
        ),
        SwalpaError::InvalidClass(_) => (
            "Invalid class declaration".to_string(),
            format!(
                "A class list holds only names and strings, as in {}.",
                example(renderer, "div", Some("#main wide"), None)
            ),
        ),
        SwalpaError::MissingDefaultProperty(_, element) => (
            format!("No default property for '{}'", element),
            format!(
                "Kind {} does not accept a bare value. Give the property a name, as in {}.",
                renderer.style(Syntax::Element, element),
                property_example(renderer)
            ),
        ),
        SwalpaError::InvalidParentage(_, element, ancestors) => {
            let chain = if ancestors.is_empty() {
                "the top level of the document".to_string()
            } else {
                ancestors
                    .iter()
                    .map(|kind| renderer.style(Syntax::Element, kind))
                    .collect::<Vec<_>>()
                    .join(" → ")
            };
            (
                format!("Element '{}' not allowed here", element),
                format!(
                    "Kind {} only makes sense inside particular elements, but was placed under {}.",
                    renderer.style(Syntax::Element, element),
                    chain
                ),
            )
        }
        SwalpaError::InvalidParentElement(_, _, parent) => (
            format!("Invalid parent element '{}'", parent),
            "An element kind refers to a parent that isn't registered. This is a problem with the element library rather than the document.".to_string(),
        ),
        SwalpaError::Template(kind, _) => (
            format!("Template for '{}' failed", kind),
            error.message(),
        ),
    }
}

fn structure_message(error: &SwalpaError, structure: &Structure, renderer: &dyn Render) -> (String, String) {
    match structure {
        Structure::Unfinished { pending, .. } => (
            "Element not finished".to_string(),
            format!(
                "The previous element {} must be ended with a semicolon or a content block before another begins.",
                renderer.style(Syntax::Element, pending)
            ),
        ),
        Structure::Unterminated(kind) => (
            format!("Unterminated {}", describe(*kind)),
            format!(
                "The {} opened here was still open when the input ended.",
                describe(*kind)
            ),
        ),
        Structure::WithoutElement(kind) => (
            format!("Stray {}", describe(*kind)),
            format!(
                "A {} must follow the name of the element it belongs to, as in {}.",
                describe(*kind),
                example(renderer, "div", Some("main"), Some("\"Hello\""))
            ),
        ),
        _ => (
            error.message(),
            "Strings are leaves. They have no classes, properties, or children, and an element's children are given only once.".to_string(),
        ),
    }
}

fn describe(kind: ContainerKind) -> &'static str {
    match kind {
        ContainerKind::String => "string",
        ContainerKind::ClassList => "class list",
        ContainerKind::PropertyList => "property list",
        ContainerKind::ContentBlock => "content block",
    }
}

fn property_example(renderer: &dyn Render) -> String {
    let mut result = String::new();
    result.push_str(&renderer.style(Syntax::Structure, "["));
    result.push_str(&renderer.style(Syntax::Property, "type"));
    result.push_str(&renderer.style(Syntax::Punctuation, ": "));
    result.push_str(&renderer.style(Syntax::String, "\"submit\""));
    result.push_str(&renderer.style(Syntax::Punctuation, ", "));
    result.push_str(&renderer.style(Syntax::String, "\"Go\""));
    result.push_str(&renderer.style(Syntax::Structure, "]"));
    result
}

fn example(renderer: &dyn Render, name: &str, classes: Option<&str>, child: Option<&str>) -> String {
    let mut result = renderer.style(Syntax::Element, name);
    if let Some(classes) = classes {
        result.push(' ');
        result.push_str(&renderer.style(Syntax::Structure, "("));
        result.push_str(&renderer.style(Syntax::Class, classes));
        result.push_str(&renderer.style(Syntax::Structure, ")"));
    }
    match child {
        Some(child) => {
            result.push(' ');
            result.push_str(&renderer.style(Syntax::Structure, "{"));
            result.push(' ');
            result.push_str(&renderer.style(Syntax::String, child));
            result.push_str(&renderer.style(Syntax::Punctuation, ";"));
            result.push(' ');
            result.push_str(&renderer.style(Syntax::Structure, "}"));
        }
        None => result.push_str(&renderer.style(Syntax::Punctuation, ";")),
    }
    result
}
