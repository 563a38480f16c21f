//! Assemble the object model from a stream of tokens

use tracing::debug;

use super::container::{Container, ContainerFactory, ContainerKind, Digest, Item};
use crate::language::{Structure, SwalpaError};
use crate::lexing::Token;

/// Owns the root content block of a document and feeds it tokens one at a
/// time.
#[derive(Debug)]
pub struct ObjectModelBuilder<'f> {
    factory: &'f ContainerFactory,
    root: Container,
    complete: bool,
}

impl<'f> ObjectModelBuilder<'f> {
    pub fn new(factory: &'f ContainerFactory) -> ObjectModelBuilder<'f> {
        ObjectModelBuilder {
            factory,
            root: Container::open(ContainerKind::ContentBlock, "{", 0),
            complete: false,
        }
    }

    pub fn process(&mut self, mut token: Token) -> Result<(), SwalpaError> {
        if self.complete {
            if token
                .lexeme
                .trim()
                .is_empty()
            {
                return Ok(());
            }
            return Err(SwalpaError::InvalidStructure(
                token.line,
                Structure::TrailingInput(token.lexeme),
            ));
        }

        token.attach(
            self.factory
                .resolve(&token),
        );

        if self
            .root
            .digest(token)?
            == Digest::Terminated
        {
            debug!("Document closed explicitly");
            self.complete = true;
        }
        Ok(())
    }

    /// The top level items of the document. Fails if some container was
    /// opened but never closed.
    pub fn root_contents(self) -> Result<Vec<Item>, SwalpaError> {
        if let Some(open) = self
            .root
            .innermost_open()
        {
            return Err(SwalpaError::InvalidStructure(
                open.line,
                Structure::Unterminated(open.kind),
            ));
        }

        let items = self
            .root
            .into_children();
        debug!("Object model has {} top level items", items.len());
        Ok(items)
    }
}

/// Run every token through a fresh builder.
pub fn build<I>(factory: &ContainerFactory, tokens: I) -> Result<Vec<Item>, SwalpaError>
where
    I: IntoIterator<Item = Token>,
{
    let mut builder = ObjectModelBuilder::new(factory);
    for token in tokens {
        builder.process(token)?;
    }
    builder.root_contents()
}

#[cfg(test)]
mod check {
    use super::*;
    use crate::lexing::tokenize_str;

    fn parse(input: &str) -> Result<Vec<Item>, SwalpaError> {
        build(&ContainerFactory::default(), tokenize_str(input))
    }

    fn punctuation(text: &str) -> String {
        text.chars()
            .filter(|c| "()[]{};,:\"".contains(*c))
            .collect()
    }

    #[test]
    fn top_level_items() {
        let items = parse("a (x) [y] { b; }\nc;").unwrap();
        assert_eq!(items.len(), 6);
        assert_eq!(items[5].to_string(), ";");
        assert_eq!(items[4].line(), 2);
    }

    #[test]
    fn structure_round_trips() {
        let input = r#"
navbar (#top dark) [role: "main navigation", wide] {
    branding [href: "/"] { "Home" }
    form { button (primary) [type: "submit", "Go"] { } }
    link;
}
        "#;
        let items = parse(input).unwrap();
        let flattened: Vec<String> = items
            .iter()
            .map(|item| item.to_string())
            .collect();

        assert_eq!(punctuation(&flattened.join(" ")), punctuation(input));
    }

    #[test]
    fn unterminated_content() {
        let result = parse("a { b; } c { d {");
        assert_eq!(
            result,
            Err(SwalpaError::InvalidStructure(
                1,
                Structure::Unterminated(ContainerKind::ContentBlock)
            ))
        );
    }

    #[test]
    fn unterminated_string() {
        let result = parse("a { \"never\nclosed }\n");
        assert_eq!(
            result,
            Err(SwalpaError::InvalidStructure(
                1,
                Structure::Unterminated(ContainerKind::String)
            ))
        );
    }

    #[test]
    fn input_after_closing() {
        let result = parse("a; }\n\nb;");
        assert_eq!(
            result,
            Err(SwalpaError::InvalidStructure(
                3,
                Structure::TrailingInput("b".to_string())
            ))
        );
    }
}
