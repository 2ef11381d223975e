//! Command-line interface for modchain
//! This binary flattens a nested widget expression into a modifier chain.
//!
//! Usage:
//!   modchain [`<path>`] [--format `<format>`]   - Convert a file (or stdin when omitted or `-`)
//!   modchain --list-formats                  - List all available output formats
//!
//! Settings come from the built-in defaults, then `./.modchain.toml` if present, then
//! `--config <file>`, then individual flags.

mod error;
mod formats;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use error::CliError;
use modchain_config::{Loader, ModchainConfig};
use modchain_parser::snippet::escape_placeholders;
use std::io::Read;
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = Command::new("modchain")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Flatten nested widget calls into a modifier chain")
        .arg(
            Arg::new("path")
                .help("Path to the source file ('-' or omitted reads stdin)")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (snippet, chain-json, chain-tree)")
                .default_value(formats::DEFAULT_FORMAT),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("layout")
                .long("layout")
                .help("Snippet layout")
                .value_parser(["compact", "pretty"]),
        )
        .arg(
            Arg::new("max-depth")
                .long("max-depth")
                .help("Maximum number of nested calls to unwrap")
                .value_parser(value_parser!(u32)),
        )
        .arg(
            Arg::new("escape-placeholders")
                .long("escape-placeholders")
                .help("Escape the snippet placeholder character in the input")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log pipeline steps to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    init_tracing(matches.get_flag("verbose"));

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    if let Err(e) = handle_convert_command(&matches) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr; `RUST_LOG` wins over `--verbose`
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

/// Handle the default convert command
fn handle_convert_command(matches: &ArgMatches) -> Result<(), CliError> {
    let config = load_config(matches)?;
    let path = matches.get_one::<String>("path").map(String::as_str);
    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or(formats::DEFAULT_FORMAT);

    let mut source = read_source(path)?;
    if config.snippet.escape_placeholders {
        source = escape_placeholders(&source, config.snippet.placeholder);
    }

    let output = formats::execute_format(&source, format, &config.convert_options())?;
    if output.ends_with('\n') {
        print!("{}", output);
    } else {
        println!("{}", output);
    }
    Ok(())
}

fn load_config(matches: &ArgMatches) -> Result<ModchainConfig, CliError> {
    let mut loader = Loader::new().with_local_file(".");
    if let Some(path) = matches.get_one::<String>("config") {
        tracing::debug!(path = %path, "layering config file");
        loader = loader.with_file(path);
    }
    if let Some(layout) = matches.get_one::<String>("layout") {
        loader = loader.set_override("render.layout", layout.as_str())?;
    }
    if let Some(depth) = matches.get_one::<u32>("max-depth") {
        loader = loader.set_override("chain.max_depth", i64::from(*depth))?;
    }
    if matches.get_flag("escape-placeholders") {
        loader = loader.set_override("snippet.escape_placeholders", true)?;
    }
    Ok(loader.build()?)
}

fn read_source(path: Option<&str>) -> Result<String, CliError> {
    match path {
        None | Some("-") => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .map_err(|err| CliError::ReadInput {
                    path: "<stdin>".to_string(),
                    source: err,
                })?;
            Ok(source)
        }
        Some(path) => std::fs::read_to_string(path).map_err(|err| CliError::ReadInput {
            path: path.to_string(),
            source: err,
        }),
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available output formats:\n");
    for (name, description) in formats::AVAILABLE_FORMATS {
        println!("  {}", name);
        println!("    {}", description);
        println!();
    }
}
