//! Fill the begin and end templates an element kind supplies

use serde::Serialize;
use tinytemplate::{format_unescaped, TinyTemplate};

use crate::language::{Element, SwalpaError};

/// What a template can refer to. The `id`, `classes`, and `properties`
/// fields are ready to drop into a tag; `attributes` is all three together,
/// with a leading space if there are any. `value` is the bare default value.
#[derive(Serialize)]
struct Context<'a> {
    name: &'a str,
    value: &'a str,
    id: String,
    classes: String,
    properties: String,
    attributes: String,
}

impl<'a> Context<'a> {
    fn new(element: &'a Element<'_>) -> Context<'a> {
        let id = match element.id() {
            Some(id) => format!("id=\"{}\"", id),
            None => String::new(),
        };

        let classes = if element
            .classes()
            .is_empty()
        {
            String::new()
        } else {
            let joined: Vec<&str> = element
                .classes()
                .iter()
                .map(String::as_str)
                .collect();
            format!("class=\"{}\"", joined.join(" "))
        };

        let properties: Vec<String> = element
            .attributes()
            .into_iter()
            .map(|(key, value)| format!("{}=\"{}\"", key, unquote(value)))
            .collect();
        let properties = properties.join(" ");

        let mut attributes = String::new();
        for part in [&id, &classes, &properties] {
            if !part.is_empty() {
                attributes.push(' ');
                attributes.push_str(part);
            }
        }

        Context {
            name: element.name(),
            value: element
                .default_value()
                .map(unquote)
                .unwrap_or_default(),
            id,
            classes,
            properties,
            attributes,
        }
    }
}

pub fn begin(element: &Element<'_>) -> Result<String, SwalpaError> {
    let templates = element
        .kind()
        .templates();
    fill(element, templates.begin)
}

pub fn end(element: &Element<'_>) -> Result<String, SwalpaError> {
    let templates = element
        .kind()
        .templates();
    fill(element, templates.end)
}

fn fill(element: &Element<'_>, template: &'static str) -> Result<String, SwalpaError> {
    if template.is_empty() {
        return Ok(String::new());
    }

    let problem = |error: tinytemplate::error::Error| {
        SwalpaError::Template(
            element
                .name()
                .to_string(),
            error.to_string(),
        )
    };

    let mut tt = TinyTemplate::new();
    tt.set_default_formatter(&format_unescaped);
    tt.add_template("fragment", template)
        .map_err(problem)?;

    let context = Context::new(element);
    tt.render("fragment", &context)
        .map_err(problem)
}

/// Property values taken from string literals keep their quotes.
pub(crate) fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(value)
}

#[cfg(test)]
mod check {
    use super::*;
    use crate::language::{ElementKind, Registry, Templates};
    use crate::model::{Classes, Properties};

    struct Anchor;

    impl ElementKind for Anchor {
        fn name(&self) -> &'static str {
            "anchor"
        }

        fn default_property(&self) -> Option<&'static str> {
            Some("href")
        }

        fn templates(&self) -> Templates {
            Templates {
                begin: "<a{attributes}>",
                end: "</a>",
            }
        }
    }

    struct Broken;

    impl ElementKind for Broken {
        fn name(&self) -> &'static str {
            "broken"
        }

        fn templates(&self) -> Templates {
            Templates {
                begin: "<b {nonexistent}>",
                end: "",
            }
        }
    }

    #[test]
    fn attributes_in_begin_fragment() {
        let registry = Registry::new().with(Anchor);
        let mut element = registry
            .create("anchor", 1)
            .unwrap();

        assert_eq!(element.begin_fragment(), Ok("<a>".to_string()));

        element.apply_classes(Classes {
            id: Some("home".to_string()),
            classes: vec!["nav".to_string()],
        });
        element
            .apply_properties(Properties {
                default: Some("\"/index.html\"".to_string()),
                named: vec![("target".to_string(), "_blank".to_string())],
            })
            .unwrap();

        assert_eq!(
            element.begin_fragment(),
            Ok(r#"<a id="home" class="nav" target="_blank" href="/index.html">"#.to_string())
        );
        assert_eq!(element.end_fragment(), Ok("</a>".to_string()));
    }

    #[test]
    fn template_failures() {
        let registry = Registry::new().with(Broken);
        let element = registry
            .create("broken", 1)
            .unwrap();

        assert!(matches!(
            element.begin_fragment(),
            Err(SwalpaError::Template(ref kind, _)) if kind == "broken"
        ));
        assert_eq!(element.end_fragment(), Ok(String::new()));
    }

    #[test]
    fn removing_quotes() {
        assert_eq!(unquote("\"x\""), "x");
        assert_eq!(unquote("x"), "x");
        assert_eq!(unquote("\""), "\"");
    }
}
