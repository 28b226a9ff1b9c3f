use clap::{Arg, ArgAction, ArgMatches, Command};
use std::io::IsTerminal;
use std::path::Path;
use tracing::{debug, Level};

use lanes::formatting::{self, Identity, Render};
use lanes::language::{total_distance, Set};
use lanes::parsing;
use lanes::rendering::Terminal;

mod output;
mod problem;

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("lanes")
        .version(VERSION)
        .propagate_version(true)
        .about("Check, format, and summarize swim practices.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log what the parser is doing to standard error."),
        )
        .subcommand(
            Command::new("check")
                .about("Validate the given practice")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print the parsed sets as JSON if the practice is valid."),
                )
                .arg(
                    Arg::new("concise")
                        .long("concise")
                        .action(ArgAction::SetTrue)
                        .help("Report each problem on a single line."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the practice you want to check."),
                ),
        )
        .subcommand(
            Command::new("format")
                .about("Rewrite the given practice in canonical form")
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
                        .help("The file containing the practice you want to format."),
                ),
        )
        .subcommand(
            Command::new("summary")
                .about("Show the distance covered by each set of the given practice")
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the practice you want to summarize."),
                ),
        )
        .get_matches();

    let level = if matches.get_flag("verbose") {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match matches.subcommand() {
        Some(("check", submatches)) => {
            let filename = filename(submatches);
            let content = load(filename);
            let concise = submatches.get_flag("concise");
            let sets = parse(filename, &content, concise);

            if submatches.get_flag("json") {
                match serde_json::to_string_pretty(&sets) {
                    Ok(json) => println!("{}", json),
                    Err(error) => {
                        eprintln!("Unable to serialize practice: {}", error);
                        std::process::exit(1);
                    }
                }
            } else {
                let items: usize = sets
                    .iter()
                    .map(|set| {
                        set.items
                            .len()
                    })
                    .sum();
                println!(
                    "{}: {} sets, {} items, {} total",
                    filename.display(),
                    sets.len(),
                    items,
                    total_distance(&sets)
                );
            }
        }
        Some(("format", submatches)) => {
            let filename = filename(submatches);
            let content = load(filename);
            let sets = parse(filename, &content, false);

            let raw = submatches.get_flag("raw-control-chars");
            let renderer: &dyn Render = if raw
                || std::io::stdout().is_terminal()
            {
                &Terminal
            } else {
                &Identity
            };

            print!("{}", formatting::render(renderer, &sets));
        }
        Some(("summary", submatches)) => {
            let filename = filename(submatches);
            let content = load(filename);
            let sets = parse(filename, &content, false);

            match output::summary(&sets) {
                Ok(result) => print!("{}", result),
                Err(error) => {
                    eprintln!("Unable to render summary: {}", error);
                    std::process::exit(1);
                }
            }
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: lanes [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

fn filename(submatches: &ArgMatches) -> &Path {
    let filename = submatches
        .get_one::<String>("filename")
        .expect("filename is a required argument");
    debug!("Reading {}", filename);
    Path::new(filename)
}

fn load(filename: &Path) -> String {
    match parsing::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", problem::concise_loading_error(&error));
            std::process::exit(1);
        }
    }
}

/// Parse the practice, or report every problem found and exit.
fn parse(filename: &Path, content: &str, concise: bool) -> Vec<Set> {
    match parsing::parse(content) {
        Ok(sets) => sets,
        Err(errors) => {
            let renderer: &dyn Render = if std::io::stderr().is_terminal() {
                &Terminal
            } else {
                &Identity
            };

            for (i, error) in errors
                .iter()
                .enumerate()
            {
                if concise {
                    eprintln!(
                        "{}",
                        problem::concise_parsing_error(error, filename, content)
                    );
                } else {
                    if i > 0 {
                        eprintln!();
                    }
                    eprintln!(
                        "{}",
                        problem::full_parsing_error(error, filename, content, renderer)
                    );
                }
            }

            std::process::exit(1);
        }
    }
}
