use clap::{Arg, ArgAction, Command};
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::path::Path;
use tracing::{debug, info, Level};

use swalpa::formatting::{self, Identity, Render};
use swalpa::library;
use swalpa::parsing;
use swalpa::rendering::{self, Terminal};

mod problem;

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("swalpa")
        .version(VERSION)
        .propagate_version(true)
        .author("Shreyas Kulkarni")
        .about("A compiler for the Swalpa element markup language.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("debug")
                .long("debug")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Show diagnostic output from each stage of the compiler."),
        )
        .subcommand(
            Command::new("check")
                .about("Parse the given document and validate where each element is placed")
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the Swalpa document you want to check."),
                ),
        )
        .subcommand(
            Command::new("tree")
                .about("Print the element tree of the given document")
                .arg(
                    Arg::new("raw-control-chars")
                        .short('R')
                        .long("raw-control-chars")
                        .action(ArgAction::SetTrue)
                        .help("Emit ANSI escape codes for syntax highlighting even if output is redirected to a pipe or file."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the Swalpa document you want to print."),
                ),
        )
        .subcommand(
            Command::new("render")
                .about("Render the given document to HTML")
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("Write the HTML to this file rather than to standard output."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the Swalpa document you want to render."),
                ),
        )
        .get_matches();

    let level = if matches.get_flag("debug") {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match matches.subcommand() {
        Some(("check", submatches)) => {
            let filename = filename(submatches);
            let content = load(filename);

            let registry = library::standard();
            match parsing::compile(&registry, &content) {
                Ok(tree) => {
                    info!("Checked {} top level elements", tree.nodes().len());
                    // each skipped line was already logged as it was read
                    match tree
                        .warnings()
                        .len()
                    {
                        0 => eprintln!("{}: {}", "ok".bright_green(), filename.display()),
                        1 => eprintln!(
                            "{}: {} (1 line skipped)",
                            "ok".bright_green(),
                            filename.display()
                        ),
                        count => eprintln!(
                            "{}: {} ({} lines skipped)",
                            "ok".bright_green(),
                            filename.display(),
                            count
                        ),
                    }
                }
                Err(error) => fail(&error, filename, &content, &Terminal),
            }
        }
        Some(("tree", submatches)) => {
            let filename = filename(submatches);
            let content = load(filename);

            let raw_output = submatches.get_flag("raw-control-chars");
            let registry = library::standard();

            let tree = match parsing::compile(&registry, &content) {
                Ok(tree) => tree,
                Err(error) => fail(&error, filename, &content, &Terminal),
            };

            let result = if raw_output || std::io::stdout().is_terminal() {
                formatting::render(&Terminal, &tree)
            } else {
                formatting::render(&Identity, &tree)
            };

            match result {
                Ok(result) => print!("{}", result),
                Err(error) => fail(&error, filename, &content, &Terminal),
            }
        }
        Some(("render", submatches)) => {
            let filename = filename(submatches);
            let content = load(filename);

            let registry = library::standard();
            let html = match parsing::compile(&registry, &content)
                .and_then(|tree| rendering::render_html(&tree))
            {
                Ok(html) => html,
                Err(error) => fail(&error, filename, &content, &Terminal),
            };

            match submatches.get_one::<String>("output") {
                Some(output) => {
                    debug!("Writing HTML to {}", output);
                    if let Err(error) = std::fs::write(output, html) {
                        eprintln!("{}: {}: {}", "error".bright_red(), output, error);
                        std::process::exit(1);
                    }
                }
                None => print!("{}", html),
            }
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: swalpa [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

fn filename(submatches: &clap::ArgMatches) -> &Path {
    // clap has already enforced that filename is present
    let filename = submatches
        .get_one::<String>("filename")
        .map(String::as_str)
        .unwrap_or_default();
    Path::new(filename)
}

fn load(filename: &Path) -> Vec<u8> {
    match parsing::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", problem::concise_loading_error(&error));
            std::process::exit(1);
        }
    }
}

fn fail(error: &swalpa::language::SwalpaError, filename: &Path, content: &[u8], renderer: &impl Render) -> ! {
    debug!("{}", problem::concise_swalpa_error(error, filename, renderer));
    // unreadable lines still count, so line numbers stay aligned
    let source = String::from_utf8_lossy(content);
    eprintln!(
        "{}",
        problem::full_swalpa_error(error, filename, &source, renderer)
    );
    std::process::exit(1);
}
