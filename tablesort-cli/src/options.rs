use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use tablesort_lib::ColumnType;

/// Sort a delimited table by clicking its column headers.
///
/// Each `--sort` is one click on that column's header: the first click on a
/// column sorts ascending, a repeated click flips to descending. Columns are
/// named by header text or 1-based index.
#[derive(Debug, Clone, Parser)]
#[command(name = "tablesort", version)]
pub struct Options {
    /// Input file, or `-` for stdin.
    #[arg(default_value = "-")]
    pub input: PathBuf,

    /// Field delimiter (default `,`, or the settings file's).
    #[arg(short, long)]
    pub delimiter: Option<char>,

    /// Click this column's header; repeat to click again.
    #[arg(short, long = "sort", value_name = "COLUMN")]
    pub sort: Vec<String>,

    /// Force a column's type instead of detecting it.
    #[arg(short = 't', long = "type", value_name = "COLUMN=TYPE", value_parser = parse_type_override)]
    pub types: Vec<(String, ColumnType)>,

    /// Make a column unsortable.
    #[arg(long = "no-sort", value_name = "COLUMN")]
    pub no_sort: Vec<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// TOML settings file.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of stderr.
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns with sort indicators.
    Text,
    /// Table markup with classes and data attributes.
    Html,
}

impl Options {
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

fn parse_type_override(s: &str) -> Result<(String, ColumnType), String> {
    let (column, kind) = s
        .rsplit_once('=')
        .ok_or_else(|| format!("expected COLUMN=TYPE, got {s:?}"))?;
    let kind = kind.parse::<ColumnType>().map_err(|e| e.to_string())?;
    Ok((column.to_string(), kind))
}
