use anyhow::{Context, Result, bail};
use clap::Parser;
use jira2md_config::{Config, OutputFormat};
use jira2md_engine::{parse_document, render};
use std::{
    io::{Read, Write},
    path::{Path, PathBuf},
};

/// Convert Jira wiki markup to Markdown
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file; reads stdin when omitted or `-`
    input: Option<PathBuf>,

    /// Output file; writes stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the parsed document tree as JSON instead of Markdown
    #[arg(long, action = clap::ArgAction::SetTrue)]
    ast: bool,

    /// Print JSON on a single line (with --ast)
    #[arg(long, action = clap::ArgAction::SetTrue)]
    compact: bool,

    /// Config file to use instead of ~/.config/jira2md/config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Settings after merging command-line flags over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Settings {
    output: OutputFormat,
    pretty_ast: bool,
    trailing_newline: bool,
}

impl Settings {
    fn resolve(args: &Args, config: &Config) -> Self {
        Self {
            output: if args.ast {
                OutputFormat::Ast
            } else {
                config.output
            },
            pretty_ast: config.pretty_ast && !args.compact,
            trailing_newline: config.trailing_newline,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;
    init_logging(&config.log_filter, args.verbose);

    let settings = Settings::resolve(&args, &config);
    log::debug!("settings: {settings:?}");

    let input = read_input(args.input.as_deref())?;
    let output = convert_input(&input, &settings)?;
    write_output(args.output.as_deref(), &output)
}

/// An explicit config path must exist; the default one is optional.
fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => {
            let path = Config::expand_path(path);
            match Config::load_from_path(&path)? {
                Some(config) => Ok(config),
                None => bail!("Config file not found: {}", path.display()),
            }
        }
        None => Ok(Config::load()?.unwrap_or_default()),
    }
}

fn init_logging(config_filter: &str, verbose: u8) {
    let mut builder = env_logger::Builder::new();
    builder.parse_filters(config_filter);
    if let Ok(filters) = std::env::var(env_logger::DEFAULT_FILTER_ENV) {
        builder.parse_filters(&filters);
    }
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(log::LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(log::LevelFilter::Trace);
        }
    }
    builder.init();
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display())),
        _ => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            Ok(input)
        }
    }
}

fn convert_input(input: &str, settings: &Settings) -> Result<String> {
    let doc = parse_document(input);
    let mut output = match settings.output {
        OutputFormat::Markdown => render(&doc),
        OutputFormat::Ast if settings.pretty_ast => {
            serde_json::to_string_pretty(&doc).context("Failed to serialize document")?
        }
        OutputFormat::Ast => serde_json::to_string(&doc).context("Failed to serialize document")?,
    };
    if settings.trailing_newline {
        output.push('\n');
    }
    Ok(output)
}

fn write_output(path: Option<&Path>, output: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, output)
            .with_context(|| format!("Failed to write output file {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(output.as_bytes())
                .and_then(|()| stdout.flush())
                .context("Failed to write stdout")
        }
    }
}
