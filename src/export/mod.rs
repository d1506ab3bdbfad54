// src/export/mod.rs

pub mod csv;

pub use self::csv::{Sink, export_rows, write_rows};
