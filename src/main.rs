use clap::value_parser;
use clap::{Arg, ArgAction, ArgMatches, Command};
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::path::Path;
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;

use esquery::formatting::{Identity, Style};
use esquery::highlighting::Grammar;
use esquery::parsing;
use esquery::rendering::{Html, Terminal};

mod output;
mod problem;

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("esquery")
        .version(VERSION)
        .propagate_version(true)
        .about("Format and highlight Elasticsearch query strings.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("debug")
                .long("debug")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Enable debug logging to standard error."),
        )
        .subcommand(
            Command::new("check")
                .about("Check that the given query parses")
                .arg(filename_arg()),
        )
        .subcommand(
            Command::new("parse")
                .about("Print the syntax tree of the given query")
                .arg(filename_arg()),
        )
        .subcommand(
            Command::new("format")
                .about("Lay out the given query canonically, with highlighting")
                .arg(
                    Arg::new("width")
                        .short('w')
                        .long("width")
                        .value_parser(value_parser!(usize))
                        .default_value("100")
                        .help("Maximum line width before groups are broken over lines."),
                )
                .arg(
                    Arg::new("style")
                        .short('s')
                        .long("style")
                        .value_parser(|name: &str| name.parse::<Style>())
                        .default_value("lisp")
                        .help("Indentation of broken groups: 'lisp' aligns under the opening delimiter, 'simple' indents by two columns."),
                )
                .arg(raw_control_chars_arg())
                .arg(html_arg())
                .arg(
                    Arg::new("standalone")
                        .long("standalone")
                        .requires("html")
                        .action(ArgAction::SetTrue)
                        .help("Emit a complete HTML page rather than just the highlighted markup."),
                )
                .arg(
                    Arg::new("error-class")
                        .long("error-class")
                        .requires("html")
                        .help("CSS class for marking a query that fails to parse. Without it the failure is styled inline in red."),
                )
                .arg(keyword_arg())
                .arg(filename_arg()),
        )
        .subcommand(
            Command::new("highlight")
                .about("Highlight the given query without reformatting it")
                .arg(raw_control_chars_arg())
                .arg(html_arg())
                .arg(keyword_arg())
                .arg(filename_arg()),
        )
        .get_matches();

    let level = if matches.get_flag("debug") {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match matches.subcommand() {
        Some(("check", submatches)) => {
            let filename = filename_from(submatches);
            let content = load(filename);

            match esquery::parse(&content) {
                Ok(_) => debug!("Query is well formed"),
                Err(error) => {
                    eprintln!("{}", problem::full_parsing_error(&error, filename, &content));
                    std::process::exit(1);
                }
            }
        }
        Some(("parse", submatches)) => {
            let filename = filename_from(submatches);
            let content = load(filename);

            match esquery::parse(&content) {
                Ok(query) => println!("{:#?}", query),
                Err(error) => {
                    eprintln!("{}", problem::full_parsing_error(&error, filename, &content));
                    std::process::exit(1);
                }
            }
        }
        Some(("format", submatches)) => {
            let filename = filename_from(submatches);
            let content = load(filename);

            let width = submatches
                .get_one::<usize>("width")
                .copied()
                .unwrap_or(esquery::DEFAULT_WIDTH);
            let style = submatches
                .get_one::<Style>("style")
                .copied()
                .unwrap_or_default();
            let grammar = grammar_from(submatches);
            let html = submatches.get_flag("html");

            debug!(width, %style, "Formatting");

            let formatted = match esquery::format(&content, width, style) {
                Ok(formatted) => formatted,
                Err(error) => {
                    if html {
                        let class = submatches
                            .get_one::<String>("error-class")
                            .map(String::as_str);
                        println!("{}", output::error_markup(&content, &error, class));
                        eprintln!("{}", problem::concise_parsing_error(&error, filename, &content));
                    } else {
                        eprintln!("{}", problem::full_parsing_error(&error, filename, &content));
                    }
                    std::process::exit(1);
                }
            };

            if html {
                let markup = esquery::highlight(&formatted, &grammar, &Html);
                if submatches.get_flag("standalone") {
                    let title = filename.to_string_lossy();
                    match output::html_page(&title, &markup) {
                        Ok(page) => print!("{}", page),
                        Err(error) => {
                            eprintln!("{}: {}", "error".bright_red(), error);
                            std::process::exit(1);
                        }
                    }
                } else {
                    println!("{}", markup);
                }
            } else {
                println!("{}", highlight_for_terminal(submatches, &formatted, &grammar));
            }
        }
        Some(("highlight", submatches)) => {
            let filename = filename_from(submatches);
            let content = load(filename);
            let grammar = grammar_from(submatches);

            if submatches.get_flag("html") {
                print!("{}", esquery::highlight(&content, &grammar, &Html));
            } else {
                print!("{}", highlight_for_terminal(submatches, &content, &grammar));
            }
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: esquery [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

fn filename_arg() -> Arg {
    Arg::new("filename")
        .required(true)
        .help("The file containing the query, or '-' to read standard input.")
}

fn raw_control_chars_arg() -> Arg {
    Arg::new("raw-control-chars")
        .short('R')
        .long("raw-control-chars")
        .action(ArgAction::SetTrue)
        .help("Emit ANSI escape codes for syntax highlighting even if output is redirected to a pipe or file.")
}

fn html_arg() -> Arg {
    Arg::new("html")
        .long("html")
        .action(ArgAction::SetTrue)
        .conflicts_with("raw-control-chars")
        .help("Emit HTML with Prism-compatible token classes instead of ANSI escapes.")
}

fn keyword_arg() -> Arg {
    Arg::new("keyword")
        .short('k')
        .long("keyword")
        .action(ArgAction::Append)
        .help("Highlight this word as a keyword. May be given more than once.")
}

fn filename_from(submatches: &ArgMatches) -> &Path {
    match submatches.get_one::<String>("filename") {
        Some(filename) => Path::new(filename),
        None => {
            eprintln!("usage: esquery [COMMAND] FILE");
            std::process::exit(1);
        }
    }
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

fn grammar_from(submatches: &ArgMatches) -> Grammar {
    let keywords: Vec<&String> = submatches
        .get_many::<String>("keyword")
        .map(|values| values.collect())
        .unwrap_or_default();

    match Grammar::default().with_keywords(&keywords) {
        Ok(grammar) => grammar,
        Err(error) => {
            eprintln!("{}: Invalid keywords: {}", "error".bright_red(), error);
            std::process::exit(1);
        }
    }
}

fn highlight_for_terminal(submatches: &ArgMatches, text: &str, grammar: &Grammar) -> String {
    if submatches.get_flag("raw-control-chars") || std::io::stdout().is_terminal() {
        esquery::highlight(text, grammar, &Terminal)
    } else {
        esquery::highlight(text, grammar, &Identity)
    }
}
