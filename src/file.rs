// src/file.rs

use std::{
    fs::{self, File, OpenOptions},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::options::{ExportOptions, WriteMode};
use crate::csv::{first_row, write_table};
use crate::error::{Error, Result};
use crate::movie::MovieRecord;

/// Write `records` as one delimited table according to `export`.
/// Returns the final path written to.
pub fn write_export(export: &ExportOptions, records: &[MovieRecord]) -> Result<PathBuf> {
    let path = export.out_path();
    let sep = export.delim();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let headers = MovieRecord::headers();
    let rows: Vec<Vec<String>> = records.iter().map(|r| r.to_row(export.list_style)).collect();

    let appending = export.write_mode == WriteMode::Append && has_content(&path);
    let file = if appending {
        if export.include_headers {
            check_header(&path, &headers, sep)?;
        }
        OpenOptions::new().append(true).open(&path)?
    } else {
        File::create(&path)? // truncate/overwrite
    };

    // Header only for a fresh file
    let header_row = (export.include_headers && !appending).then_some(headers.as_slice());

    let mut out = BufWriter::new(file);
    write_table(&mut out, header_row, &rows, sep)?;
    out.flush()?;

    logf!(
        "{} {} rows to {}",
        if appending { "Appended" } else { "Wrote" },
        rows.len(),
        path.display()
    );
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::Io(std::io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        ))));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/* ---------------- helpers ---------------- */

fn has_content(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_file() && m.len() > 0).unwrap_or(false)
}

/// The first row of an existing file must be our header before we append under it.
fn check_header(path: &Path, headers: &[String], sep: char) -> Result<()> {
    let text = fs::read_to_string(path)?;
    match first_row(&text, sep) {
        Some(existing) if existing == headers => Ok(()),
        _ => Err(Error::HeaderMismatch { path: path.to_path_buf() }),
    }
}
