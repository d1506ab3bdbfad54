use super::Config;
use crate::cli::parser::Cli;
use crate::errors::{AppError, AppResult};
use crate::export::Sink;
use crate::utils::parse_delimiter;
use std::path::PathBuf;

/// Everything one conversion needs, resolved once and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub ics_path: PathBuf,
    pub sink: Sink,
    pub filter: String,
    pub name: String,
    pub delimiter: u8,
    pub header: bool,
    pub quiet: bool,
}

impl Settings {
    /// Merge command-line flags over the config file values.
    pub fn resolve(cli: &Cli, cfg: &Config) -> AppResult<Self> {
        let sink = if cli.stdout {
            Sink::Stdout
        } else {
            Sink::File(
                cli.csv
                    .clone()
                    .unwrap_or_else(|| PathBuf::from(&cfg.csv)),
            )
        };

        let delimiter = match cli.delimiter {
            Some(d) => d,
            None => parse_delimiter(&cfg.delimiter).map_err(AppError::InvalidDelimiter)?,
        };

        Ok(Self {
            ics_path: cli.ics.clone(),
            sink,
            filter: cli.filter.clone(),
            name: cli.name.clone().unwrap_or_else(|| cfg.name.clone()),
            delimiter,
            header: cli.header || cfg.header,
            quiet: cli.quiet,
        })
    }
}
