//! Two-column text tables
//!
//! The on-disk form of a PDF: a `# Value,\tProbability` header, then one
//! whitespace-delimited `value probability` row per sample with six
//! decimal places. Reading skips blank lines and `#` comments.

use crate::{Error, Result, SampledPdf};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Header line written above the samples
pub const HEADER: &str = "# Value,\tProbability";

/// Parse a PDF from a two-column table
pub fn read_table<R: BufRead>(reader: R) -> Result<SampledPdf> {
    let mut x = Vec::new();
    let mut p = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let line_no = idx + 1;
        let columns: Vec<&str> = trimmed.split_whitespace().collect();
        if columns.len() != 2 {
            return Err(Error::Parse {
                line: line_no,
                message: format!("expected 2 columns, found {}", columns.len()),
            });
        }
        x.push(parse_value(columns[0], line_no)?);
        p.push(parse_value(columns[1], line_no)?);
    }

    SampledPdf::new(x, p)
}

/// Write a PDF as a two-column table
pub fn write_table<W: Write>(pdf: &SampledPdf, mut writer: W) -> Result<()> {
    writeln!(writer, "{HEADER}")?;
    for (value, probability) in pdf.iter() {
        writeln!(writer, "{value:.6}\t{probability:.6}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Load a PDF from a file
pub fn load_table<P: AsRef<Path>>(path: P) -> Result<SampledPdf> {
    let path = path.as_ref();
    let pdf = read_table(BufReader::new(File::open(path)?))?;
    debug!(path = %path.display(), samples = pdf.len(), "loaded PDF table");
    Ok(pdf)
}

/// Save a PDF to a file, replacing any existing content
pub fn save_table<P: AsRef<Path>>(pdf: &SampledPdf, path: P) -> Result<()> {
    let path = path.as_ref();
    write_table(pdf, BufWriter::new(File::create(path)?))?;
    debug!(path = %path.display(), samples = pdf.len(), "saved PDF table");
    Ok(())
}

fn parse_value(token: &str, line: usize) -> Result<f64> {
    token.trim_end_matches(',').parse::<f64>().map_err(|e| Error::Parse {
        line,
        message: format!("invalid number {token:?}: {e}"),
    })
}
