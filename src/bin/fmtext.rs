//! Command-line interface for fmtext
//! Formats a markup string (from a file or stdin) and prints the resulting fragments.
//!
//! Usage:
//!   fmtext `<path>` [--format `<format>`] [--theme `<file>`] [--normalize]
//!   fmtext `<path>` --tree                 - Print the parse tree instead
//!   echo '<b>x</b>' | fmtext               - Read markup from stdin
//!   fmtext --list-formats                  - List all available output formats

use clap::{Arg, ArgAction, Command};
use std::io::Read;
use tracing_subscriber::EnvFilter;

use fmtext::formats::{to_treeviz_str, FormatRegistry};
use fmtext::theme::ThemeLoader;
use fmtext::{FormatOptions, Formatter, Theme};

fn main() {
    let matches = Command::new("fmtext")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Turn inline formatted-text markup into styled fragments")
        .arg(
            Arg::new("path")
                .help("Path to a file holding the markup (reads stdin when omitted)")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (e.g., 'json', 'yaml', 'fragments')")
                .default_value("json"),
        )
        .arg(
            Arg::new("theme")
                .long("theme")
                .short('t')
                .help("TOML theme file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("normalize")
                .long("normalize")
                .short('n')
                .help("Collapse whitespace runs and newlines before parsing")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("tree")
                .long("tree")
                .help("Print the parse tree instead of fragments")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug output to stderr")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    init_logging(matches.get_flag("verbose"));

    let registry = FormatRegistry::with_defaults();

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&registry);
        return;
    }

    let source = read_source(matches.get_one::<String>("path")).unwrap_or_else(|e| {
        eprintln!("Error reading input: {}", e);
        std::process::exit(1);
    });

    let theme = matches.get_one::<String>("theme").map(|path| load_theme(path));
    let formatter = Formatter::new(theme);
    let options = FormatOptions {
        normalize: matches.get_flag("normalize"),
    };

    if matches.get_flag("tree") {
        handle_tree_command(&formatter, &source, &options);
    } else {
        let format = matches
            .get_one::<String>("format")
            .map(String::as_str)
            .unwrap_or("json");
        handle_format_command(&formatter, &registry, &source, &options, format);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Read the markup, dropping the single trailing newline editors add.
fn read_source(path: Option<&String>) -> std::io::Result<String> {
    let mut source = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    if source.ends_with('\n') {
        source.pop();
        if source.ends_with('\r') {
            source.pop();
        }
    }
    Ok(source)
}

fn load_theme(path: &str) -> Theme {
    ThemeLoader::new().with_file(path).build().unwrap_or_else(|e| {
        eprintln!("Error loading theme '{}': {}", path, e);
        std::process::exit(1);
    })
}

/// Handle the default command: format and print fragments
fn handle_format_command(
    formatter: &Formatter,
    registry: &FormatRegistry,
    source: &str,
    options: &FormatOptions,
    format: &str,
) {
    let fragments = formatter.format(source, options);
    match registry.serialize(&fragments, format) {
        Ok(output) => {
            print!("{}", output);
            if !output.ends_with('\n') {
                println!();
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("\nAvailable formats:");
            for name in registry.list_formats() {
                eprintln!("  {}", name);
            }
            std::process::exit(1);
        }
    }
}

/// Handle --tree: print the parse tree, failing loudly on invalid markup
fn handle_tree_command(formatter: &Formatter, source: &str, options: &FormatOptions) {
    match formatter.parse(source, options) {
        Ok(nodes) => print!("{}", to_treeviz_str(&nodes)),
        Err(e) => {
            eprintln!("Parse error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle --list-formats
fn handle_list_formats_command(registry: &FormatRegistry) {
    println!("Available output formats:\n");
    for name in registry.list_formats() {
        let description = registry.get(&name).map(|f| f.description()).unwrap_or("");
        println!("  {}", name);
        println!("    {}", description);
    }
}
