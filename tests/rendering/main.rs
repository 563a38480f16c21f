use swalpa::language::SwalpaError;
use swalpa::library;
use swalpa::parsing;
use swalpa::rendering::render_html;

fn html(content: &str) -> Result<String, SwalpaError> {
    let registry = library::standard();
    let tree = parsing::compile(&registry, content)?;
    render_html(&tree)
}

#[test]
fn navbar_with_form() {
    let result = html(
        r#"
navbar (#top) {
    form [action: "/search"] {
        button [type: "submit", "Search"];
    }
}
        "#,
    )
    .unwrap();

    assert_eq!(
        result,
        r#"<nav id="top" class="navbar navbar-default">
  <form class="navbar-form" action="/search">
    <button class="btn btn-default" type="submit" value="Search">
    </button>
  </form>
</nav>
"#
    );
}

#[test]
fn text_without_quotes() {
    let result = html(r#"paragraph { "Hello, world"; 'again'; }"#).unwrap();
    assert_eq!(result, "<p>\n  Hello, world\n  again\n</p>\n");
}

#[test]
fn validation_happens_first() {
    let result = html(r#"div { branding; }"#);
    assert!(matches!(result, Err(SwalpaError::InvalidParentage(1, _, _))));
}

#[test]
fn quoted_property_keys() {
    let result = html(r#"link ["data": x, "/"];"#).unwrap();
    assert_eq!(result, "<a data=\"x\" href=\"/\">\n</a>\n");
}
