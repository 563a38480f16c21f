use swalpa::language::{Structure, SwalpaError};
use swalpa::library;
use swalpa::model::ContainerKind;
use swalpa::parsing;

/// Helper function to check that compiling produces the expected error type
/// on the expected line
fn expect_error(content: &str, expected: SwalpaError) {
    let registry = library::standard();
    let result = parsing::compile(&registry, content);
    match result {
        Ok(_) => panic!(
            "Expected compiling to fail, but it succeeded for input: {}",
            content
        ),
        Err(error) => {
            if std::mem::discriminant(&error) != std::mem::discriminant(&expected) {
                panic!(
                    "Expected error type like {:?} but got: {:?} for input '{}'",
                    expected, error, content
                );
            }
            assert_eq!(error.line(), expected.line(), "for input '{}'", content);
        }
    }
}

#[test]
fn unknown_element() {
    expect_error(
        r#"
div {
    table;
}
        "#
        .trim_ascii(),
        SwalpaError::UnknownElement(2, "table".to_string()),
    );
}

#[test]
fn unfinished_element() {
    expect_error(
        r#"
div (a)
paragraph;
        "#
        .trim_ascii(),
        SwalpaError::InvalidStructure(
            2,
            Structure::Unfinished {
                pending: "div".to_string(),
                started: "paragraph".to_string(),
            },
        ),
    );
}

#[test]
fn unterminated_block() {
    expect_error(
        r#"
navbar {
    header {
        branding ["/"];
    }
        "#
        .trim_ascii(),
        SwalpaError::InvalidStructure(1, Structure::Unterminated(ContainerKind::ContentBlock)),
    );
}

#[test]
fn unterminated_string() {
    expect_error(
        r#"
div;
paragraph { "never
closed; }
        "#
        .trim_ascii(),
        SwalpaError::InvalidStructure(2, Structure::Unterminated(ContainerKind::String)),
    );
}

#[test]
fn malformed_property() {
    expect_error(
        r#"link [href "/"];"#,
        SwalpaError::PropertyParsing(1, String::new(), vec![]),
    );
}

#[test]
fn invalid_token_in_properties() {
    expect_error(
        r#"link ["/"; target: _blank];"#,
        SwalpaError::InvalidTokenInContainer(1, ContainerKind::PropertyList, ";".to_string()),
    );
}

#[test]
fn invalid_container_hierarchy() {
    expect_error(
        r#"div (one { two });"#,
        SwalpaError::InvalidContainerHierarchy(1, ContainerKind::ClassList, "{".to_string()),
    );
}

#[test]
fn missing_default_property() {
    expect_error(
        r#"
div {
    paragraph ["text"];
}
        "#
        .trim_ascii(),
        SwalpaError::MissingDefaultProperty(2, "paragraph".to_string()),
    );
}

#[test]
fn unknown_delimiter() {
    expect_error(
        r#"div, paragraph;"#,
        SwalpaError::Delimiter(1, "div".to_string(), ",".to_string()),
    );
}

#[test]
fn invalid_parentage() {
    expect_error(
        r#"
header {
    navbar {
        branding ["/"];
    }
}
        "#
        .trim_ascii(),
        SwalpaError::InvalidParentage(
            3,
            "branding".to_string(),
            vec!["header".to_string(), "navbar".to_string()],
        ),
    );
}

#[test]
fn trailing_input() {
    expect_error(
        r#"
div;
}
paragraph;
        "#
        .trim_ascii(),
        SwalpaError::InvalidStructure(3, Structure::TrailingInput("paragraph".to_string())),
    );
}

#[test]
fn strings_are_leaves() {
    expect_error(
        r#"div { "text" [title: x]; }"#,
        SwalpaError::InvalidStructure(1, Structure::StringWithProperties(String::new())),
    );
}

#[test]
fn second_block_has_no_element() {
    // a block ends its element, so another block stands alone
    let registry = library::standard();
    let result = parsing::compile(&registry, "div { paragraph; } { paragraph; }");
    assert_eq!(
        result.unwrap_err(),
        SwalpaError::InvalidStructure(1, Structure::WithoutElement(ContainerKind::ContentBlock))
    );
}
