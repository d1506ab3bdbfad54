use crate::core::row::{Row, get_headers};
use crate::errors::{AppError, AppResult};
use csv::{QuoteStyle, WriterBuilder};
use std::fmt;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

/// Where the rows go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    Stdout,
    File(PathBuf),
}

impl fmt::Display for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sink::Stdout => f.write_str("<stdout>"),
            Sink::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Scrive le righe nel sink indicato, creando (o sovrascrivendo) il file.
pub fn export_rows(sink: &Sink, rows: &[Row], delimiter: u8, header: bool) -> AppResult<()> {
    match sink {
        Sink::Stdout => {
            let stdout = io::stdout();
            write_rows(stdout.lock(), rows, delimiter, header)
        }
        Sink::File(path) => {
            let file = File::create(path).map_err(|source| AppError::CreateOutput {
                path: path.clone(),
                source,
            })?;
            write_rows(file, rows, delimiter, header)
        }
    }
}

/// Serialize rows as delimited text, one record per line, no header unless
/// asked. Fields are quoted only when they contain the delimiter, a quote or
/// a line break.
pub fn write_rows<W: Write>(out: W, rows: &[Row], delimiter: u8, header: bool) -> AppResult<()> {
    let mut wtr = WriterBuilder::new()
        .delimiter(delimiter)
        .quote_style(QuoteStyle::Necessary)
        .has_headers(false)
        .from_writer(out);

    if header {
        wtr.write_record(get_headers())?;
    }

    for row in rows {
        wtr.write_record(row.fields())?;
    }

    wtr.flush()?;
    Ok(())
}
