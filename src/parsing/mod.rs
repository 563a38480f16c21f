//! parser for the Swalpa language

use std::path::Path;
use tracing::debug;

use crate::language::{LoadingError, Registry, SwalpaError};
use crate::lexing::tokenize;
use crate::model::{build, ContainerFactory};
use crate::tree::Tree;

/// Read a file and return its bytes. A line that is not valid UTF-8 is
/// skipped by the tokenizer rather than failing the whole load, so no
/// decoding happens here. We pass ownership back to the main function,
/// which keeps it for quoting source lines in error messages.
pub fn load(filename: &Path) -> Result<Vec<u8>, LoadingError<'_>> {
    match std::fs::read(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Parse text into a Tree of elements. The structure of the document is
/// checked, but not yet whether each element is allowed where it was placed.
/// Lines that could not be read are skipped and returned with the Tree.
pub fn parse<'r, C>(registry: &'r Registry, content: &C) -> Result<Tree<'r>, SwalpaError>
where
    C: AsRef<[u8]> + ?Sized,
{
    let mut tokens = tokenize(content.as_ref());
    let items = build(&ContainerFactory::default(), &mut tokens)?;

    let warnings = tokens
        .warnings()
        .to_vec();
    if !warnings.is_empty() {
        debug!("Skipped {} unreadable lines", warnings.len());
    }

    let tree = Tree::build(registry, &items)?.with_warnings(warnings);

    let count = tree
        .nodes()
        .len();
    debug!(
        "Found {} top level element{}",
        count,
        if count == 1 { "" } else { "s" }
    );
    Ok(tree)
}

/// Parse text and then validate the ancestry of every element in it, giving
/// a tree ready to be rendered.
pub fn compile<'r, C>(registry: &'r Registry, content: &C) -> Result<Tree<'r>, SwalpaError>
where
    C: AsRef<[u8]> + ?Sized,
{
    let mut tree = parse(registry, content)?;
    tree.validate()?;
    debug!("Validation complete");
    Ok(tree)
}
