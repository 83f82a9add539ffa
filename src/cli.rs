// src/cli.rs
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::options::{
    AppOptions, EntryPolicy, ExportFormat, ListStyle, Source, WriteMode,
};
use crate::progress::Progress;
use crate::runner::{self, RunSummary};

#[derive(Parser, Debug)]
#[command(name = "imdb_scrape", version)]
#[command(about = "Scrape an IMDb advanced-search listing page into CSV/TSV")]
pub struct Args {
    /// Listing page URL (defaults to the top 100 features and TV series)
    #[arg(conflicts_with = "input")]
    pub url: Option<String>,

    /// Parse a saved HTML page instead of fetching
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file, or a directory ending in '/'
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<String>,

    #[arg(long, value_enum, default_value_t = FormatArg::Csv)]
    pub format: FormatArg,

    /// Leave out the header row
    #[arg(long)]
    pub no_headers: bool,

    /// Add rows to an existing file instead of replacing it
    #[arg(long)]
    pub append: bool,

    /// How genres and stars are written into one cell
    #[arg(long, value_enum, default_value_t = ListsArg::Joined)]
    pub lists: ListsArg,

    /// Drop entries without a title or description instead of failing
    #[arg(long)]
    pub skip_malformed: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Debug-level logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Csv,
    Tsv,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ListsArg {
    /// Action, Adventure
    Joined,
    /// ['Action', 'Adventure']
    Bracketed,
}

impl Args {
    pub fn to_options(&self) -> AppOptions {
        let mut opts = AppOptions::default();

        opts.scrape.source = match (&self.input, &self.url) {
            (Some(path), _) => Source::File(path.clone()),
            (None, Some(url)) => Source::Url(url.clone()),
            (None, None) => Source::default(),
        };
        if self.skip_malformed {
            opts.scrape.on_entry_error = EntryPolicy::Skip;
        }

        opts.export.format = match self.format {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Tsv => ExportFormat::Tsv,
        };
        opts.export.list_style = match self.lists {
            ListsArg::Joined => ListStyle::Joined,
            ListsArg::Bracketed => ListStyle::Bracketed,
        };
        opts.export.include_headers = !self.no_headers;
        if self.append {
            opts.export.write_mode = WriteMode::Append;
        }
        if let Some(out) = &self.out {
            opts.export.set_path(out);
        }
        opts
    }
}

/// Progress lines on stderr.
pub struct CliProgress {
    verbose: bool,
}

impl Progress for CliProgress {
    fn begin(&mut self, entries: usize) {
        eprintln!("Found {entries} entries");
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, index: usize, title: &str) {
        if self.verbose {
            eprintln!("  {:>3}. {title}", index + 1);
        }
    }
    fn item_failed(&mut self, index: usize, reason: &str) {
        eprintln!("  {:>3}. skipped: {reason}", index + 1);
    }
}

/// Parse `std::env::args`, set up logging, run once.
pub fn run() -> crate::error::Result<RunSummary> {
    let args = Args::parse();
    crate::log::init(args.log_file.as_deref(), args.verbose)?;

    let opts = args.to_options();
    logd!("Options: {opts:?}");

    let mut progress = CliProgress { verbose: args.verbose };
    let summary = runner::run(&opts, Some(&mut progress))?;

    if !summary.skipped.is_empty() {
        let idx: Vec<String> = summary.skipped.iter().map(|e| (e.index() + 1).to_string()).collect();
        eprintln!("Skipped {} malformed entries: {}", summary.skipped.len(), idx.join(", "));
    }
    println!("Data saved to {}", summary.path.display());
    Ok(summary)
}
