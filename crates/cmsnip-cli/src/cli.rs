//! Command line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use cmsnip::cmsnip_template::SubstitutionMode;

#[derive(Parser, Debug)]
#[command(name = "cmsnip", version)]
#[command(about = "Extract, fill in, preview and search cmSnip templates and snippets", long_about = None)]
pub struct Cli {
    /// YAML configuration file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, short, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// The `env_logger` filter matching the `-v` count.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human readable text
    Text,
    /// Pretty-printed JSON
    Json,
    /// YAML
    Yaml,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the placeholders in a template file
    Fields(FieldsArgs),
    /// Fill in a template and print the result
    Render(RenderArgs),
    /// Print the sandboxed preview document for a template
    Preview(PreviewArgs),
    /// Search an exported list of snippets, templates or users
    Search(SearchArgs),
}

#[derive(Parser, Debug)]
pub struct FieldsArgs {
    /// Template file
    pub file: PathBuf,

    /// Decode HTML entities before extracting
    #[arg(long)]
    pub decode: bool,
}

/// Field values shared by `render` and `preview`.
#[derive(Parser, Debug, Default)]
pub struct BindArgs {
    /// Set every occurrence of a label
    #[arg(long = "set", value_name = "LABEL=VALUE", value_parser = parse_assignment)]
    pub set: Vec<(String, String)>,

    /// Set a single occurrence by index
    #[arg(long = "at", value_name = "INDEX=VALUE", value_parser = parse_indexed)]
    pub at: Vec<(usize, String)>,

    /// Saved field values as a JSON object, applied before --set and --at
    #[arg(long, value_name = "JSON")]
    pub saved: Option<String>,

    /// Substitution mode (defaults to the configured one)
    #[arg(long, value_parser = parse_mode)]
    pub mode: Option<SubstitutionMode>,

    /// Decode HTML entities before extracting
    #[arg(long)]
    pub decode: bool,
}

#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Template file
    pub file: PathBuf,

    #[command(flatten)]
    pub bind: BindArgs,
}

#[derive(Parser, Debug)]
pub struct PreviewArgs {
    /// Template file
    pub file: PathBuf,

    #[command(flatten)]
    pub bind: BindArgs,

    /// Print an `<iframe>` element instead of the bare srcdoc
    #[arg(long)]
    pub iframe: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RecordKind {
    Snippets,
    Templates,
    Users,
}

#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// JSON file holding an array of records
    pub file: PathBuf,

    /// Kind of records in the file
    #[arg(long, value_enum)]
    pub kind: RecordKind,

    /// Free-text search term
    #[arg(long, short, default_value = "")]
    pub query: String,

    /// Page number, starting at 1
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Records per page (defaults to the configured page limit)
    #[arg(long)]
    pub limit: Option<usize>,
}

fn parse_assignment(s: &str) -> Result<(String, String), String> {
    let (label, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected LABEL=VALUE, got '{}'", s))?;
    let label = label.trim();
    if label.is_empty() {
        return Err(format!("missing label in '{}'", s));
    }
    Ok((label.to_string(), value.to_string()))
}

fn parse_indexed(s: &str) -> Result<(usize, String), String> {
    let (index, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected INDEX=VALUE, got '{}'", s))?;
    let index = index
        .trim()
        .parse()
        .map_err(|_| format!("invalid index in '{}'", s))?;
    Ok((index, value.to_string()))
}

fn parse_mode(s: &str) -> Result<SubstitutionMode, String> {
    s.parse().map_err(|err: cmsnip::cmsnip_template::ParseModeError| err.to_string())
}
