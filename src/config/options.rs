// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

/* ---------------- Scrape ---------------- */

/// Where the listing markup comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Url(String),
    /// A page saved to disk earlier (offline parse).
    File(PathBuf),
}

impl Default for Source {
    fn default() -> Self {
        Source::Url(s!(DEFAULT_URL))
    }
}

/// What to do with an entry block that lacks a title or description.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EntryPolicy {
    /// Fail the whole run on the first malformed entry.
    #[default]
    Abort,
    /// Drop the entry, log it, keep going.
    Skip,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub source: Source,
    pub on_entry_error: EntryPolicy,
}

/* ---------------- Export ---------------- */

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Create or truncate.
    #[default]
    Overwrite,
    /// Add rows to an existing file; header only if the file is new or empty.
    Append,
}

/// How list-valued cells (genres, stars) are written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListStyle {
    /// `Action, Adventure`
    #[default]
    Joined,
    /// `['Action', 'Adventure']`
    Bracketed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub write_mode: WriteMode,
    pub include_headers: bool,
    pub list_style: ListStyle,
    out_path: PathBuf, // as given; resolved by out_path()
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            write_mode: WriteMode::Overwrite,
            include_headers: true,
            list_style: ListStyle::Joined,
            out_path: PathBuf::new(),
        }
    }
}

impl ExportOptions {
    /// Final destination for this export.
    /// - empty → `imdb_data.<ext>` in the working directory
    /// - existing dir, or text ending in a separator → `<dir>/imdb_data.<ext>`
    /// - anything else → used as given (extension untouched)
    pub fn out_path(&self) -> PathBuf {
        let default_name = join!(DEFAULT_FILE, ".", self.format.ext());

        if self.out_path.as_os_str().is_empty() {
            return PathBuf::from(default_name);
        }
        if self.out_path.is_dir() || looks_like_dir_hint(&self.out_path) {
            return self.out_path.join(default_name);
        }
        self.out_path.clone()
    }

    pub fn set_path(&mut self, text: &str) {
        self.out_path = PathBuf::from(normalize_separators(text.trim()));
    }

    pub fn delim(&self) -> char {
        self.format.delim()
    }
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}

/// Make `/` and `\` both mean the platform separator.
pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}
