//! Command-line interface for describe
//!
//! Usage:
//!   describe transform `<path>` [--format json|treeviz] [--config `<file>`]
//!            [--marker `<name>`] [--wrapper `<name>`] [--import-source `<spec>`]
//!                                       - Rewrite a Babel JSON tree
//!   describe serialize `<nodes.json>` [--format text|state] [--config `<file>`]
//!                                       - Register a node snapshot and print the description
//!   describe --list-formats             - List the output formats of every command

mod commands;

use clap::{Arg, ArgAction, ArgMatches, Command};
use commands::{SERIALIZE_FORMATS, TRANSFORM_FORMATS};
use std::fs;
use std::process;

fn main() {
    let matches = Command::new("describe")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Rewrite llm marker attributes and inspect describe trees")
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List the output formats of every command")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .help("Log debug events to stderr")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("transform")
                .about("Rewrite marked elements in a Babel JSON tree")
                .arg(
                    Arg::new("path")
                        .help("Path to the Babel JSON file")
                        .required(true)
                        .index(1),
                )
                .arg(format_arg(TRANSFORM_FORMATS))
                .arg(config_arg())
                .arg(
                    Arg::new("marker")
                        .long("marker")
                        .help("Marker attribute name (overrides transform.marker)"),
                )
                .arg(
                    Arg::new("wrapper")
                        .long("wrapper")
                        .help("Wrapper symbol (overrides transform.wrapper)"),
                )
                .arg(
                    Arg::new("import-source")
                        .long("import-source")
                        .help("Wrapper module specifier (overrides transform.import_source)"),
                ),
        )
        .subcommand(
            Command::new("serialize")
                .about("Register a JSON array of nodes in order and print the result")
                .arg(
                    Arg::new("path")
                        .help("Path to the node snapshot")
                        .required(true)
                        .index(1),
                )
                .arg(format_arg(SERIALIZE_FORMATS))
                .arg(config_arg()),
        )
        .get_matches();

    init_tracing(matches.get_flag("verbose"));

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let result = match matches.subcommand() {
        Some(("transform", sub)) => handle_transform_command(sub),
        Some(("serialize", sub)) => handle_serialize_command(sub),
        _ => Err("No command given. Run with --help for usage.".to_string()),
    };

    match result {
        Ok(output) => println!("{}", output),
        Err(message) => {
            eprintln!("{}", message);
            process::exit(1);
        }
    }
}

fn format_arg(formats: &'static [&'static str]) -> Arg {
    Arg::new("format")
        .long("format")
        .short('f')
        .help(format!("Output format ({})", formats.join(", ")))
        .default_value(formats[0])
}

fn config_arg() -> Arg {
    Arg::new("config")
        .long("config")
        .short('c')
        .help("TOML file layered over the built-in defaults")
}

fn init_tracing(verbose: bool) {
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .finish();
    // Only fails if a subscriber is already installed.
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn read_input(path: &str) -> Result<String, String> {
    fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path, e))
}

fn string_arg<'a>(matches: &'a ArgMatches, name: &str) -> Option<&'a str> {
    matches.get_one::<String>(name).map(String::as_str)
}

/// Handle the transform command
fn handle_transform_command(matches: &ArgMatches) -> Result<String, String> {
    let path = string_arg(matches, "path").ok_or("Missing input path")?;
    let format = string_arg(matches, "format").unwrap_or(TRANSFORM_FORMATS[0]);

    let mut overrides = Vec::new();
    for (flag, key) in [
        ("marker", "transform.marker"),
        ("wrapper", "transform.wrapper"),
        ("import-source", "transform.import_source"),
    ] {
        if let Some(value) = string_arg(matches, flag) {
            overrides.push((key, value));
        }
    }
    let config = commands::load_config(string_arg(matches, "config"), &overrides)?;

    let source = read_input(path)?;
    commands::execute_transform(&source, &config.describe_options(), format)
}

/// Handle the serialize command
fn handle_serialize_command(matches: &ArgMatches) -> Result<String, String> {
    let path = string_arg(matches, "path").ok_or("Missing input path")?;
    let format = string_arg(matches, "format").unwrap_or(SERIALIZE_FORMATS[0]);
    let config = commands::load_config(string_arg(matches, "config"), &[])?;

    let source = read_input(path)?;
    commands::execute_serialize(&source, &config.registry_options(), format)
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available output formats:\n");
    println!("  transform: {}", TRANSFORM_FORMATS.join(", "));
    println!("  serialize: {}", SERIALIZE_FORMATS.join(", "));
}
