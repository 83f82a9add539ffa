// src/runner.rs
use std::path::PathBuf;

use crate::{
    config::options::AppOptions,
    error::{EntryError, Result},
    file,
    progress::{self, Progress},
    scrape,
};

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub path: PathBuf,
    pub records: usize,
    pub skipped: Vec<EntryError>,
}

/// Top-level runner: load the page, parse it, write the table.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
/// Nothing is written when loading or parsing fails.
pub fn run(
    opts: &AppOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    if let Some(p) = progress.as_deref_mut() {
        p.log("Loading listing page…");
    }
    let markup = scrape::load_markup(&opts.scrape.source)?;

    let collected = scrape::collect_movies(&markup, &opts.scrape, progress::reborrow(&mut progress))?;

    if let Some(p) = progress.as_deref_mut() {
        p.log("Writing table…");
    }
    let path = file::write_export(&opts.export, &collected.records)?;

    Ok(RunSummary {
        path,
        records: collected.records.len(),
        skipped: collected.skipped,
    })
}
