use crate::utils::parse_delimiter;
use clap::Parser;
use std::path::PathBuf;

/// Command-line interface definition for ics2csv
/// Converts the events of an .ics file into delimited text rows
#[derive(Parser, Debug)]
#[command(
    name = "ics2csv",
    version = env!("CARGO_PKG_VERSION"),
    about = "Converts an ics file to a csv file",
    long_about = None
)]
pub struct Cli {
    /// Path to the ics file
    #[arg(short = 'i', long = "ics", value_name = "FILE", help = "Path to the ics file")]
    pub ics: PathBuf,

    /// Output file (ignored with --stdout). Default: out.csv
    #[arg(
        short = 'c',
        long = "csv",
        value_name = "FILE",
        help = "Path to the output csv file [default: out.csv]"
    )]
    pub csv: Option<PathBuf>,

    /// Keep only events whose SUMMARY is exactly this text.
    /// Empty means every event.
    #[arg(
        short = 'f',
        long = "filter",
        default_value = "",
        hide_default_value = true,
        help = "Filter events by summary"
    )]
    pub filter: String,

    #[arg(
        short = 'n',
        long = "name",
        help = "Your name, written in every row [default: yourName]"
    )]
    pub name: Option<String>,

    /// Single ASCII character; `\t` is accepted for tab. Default: tab
    #[arg(
        short = 'd',
        long = "delimiter",
        value_parser = parse_delimiter,
        help = "Delimiter for csv [default: tab]"
    )]
    pub delimiter: Option<u8>,

    #[arg(short = 's', long = "stdout", help = "Write to stdout instead of a file")]
    pub stdout: bool,

    #[arg(long = "header", help = "Write a header line before the rows")]
    pub header: bool,

    #[arg(short = 'q', long = "quiet", help = "Do not print status messages")]
    pub quiet: bool,

    /// Read defaults from this YAML file instead of ~/.ics2csv/ics2csv.conf
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,
}
