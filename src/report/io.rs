use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::core::{ConfigError, ReportError};
use crate::report::TickerReport;

/// The extension the report file was given. Both receive the same JSON document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Txt,
}

/// A validated output file path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPath {
    path: PathBuf,
    format: OutputFormat,
}

impl ReportPath {
    /// Accepts paths ending in `.json` or `.txt` (any case).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::OutputExtension`] for any other extension, or none.
    pub fn parse(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        let format = match ext.as_deref() {
            Some("json") => OutputFormat::Json,
            Some("txt") => OutputFormat::Txt,
            _ => return Err(ConfigError::OutputExtension(path.display().to_string())),
        };
        Ok(Self { path, format })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

impl TickerReport {
    /// Writes the report as JSON indented by four spaces, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] if the file cannot be created or written.
    pub fn write_json(&self, target: &ReportPath) -> Result<(), ReportError> {
        let mut writer = BufWriter::new(File::create(target.path())?);
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut writer, formatter);
        self.serialize(&mut ser)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }

    /// Reads a report previously written by [`TickerReport::write_json`].
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] if the file cannot be read or is not a report.
    pub fn read_json(path: impl AsRef<Path>) -> Result<Self, ReportError> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }
}
