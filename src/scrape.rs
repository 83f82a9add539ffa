// src/scrape.rs
use std::fs;

use crate::{
    config::options::{EntryPolicy, ScrapeOptions, Source},
    core::net,
    error::{EntryError, Result},
    movie::MovieRecord,
    progress::Progress,
    specs::ListingParser,
};

/// Records that made it, plus the entries dropped under `EntryPolicy::Skip`.
#[derive(Debug, Default)]
pub struct Collected {
    pub records: Vec<MovieRecord>,
    pub skipped: Vec<EntryError>,
}

/// Get the page markup: one GET, or a saved copy from disk.
pub fn load_markup(source: &Source) -> Result<String> {
    match source {
        Source::Url(url) => {
            logf!("Fetching {url}");
            net::http_get(url)
        }
        Source::File(path) => {
            logf!("Reading {}", path.display());
            Ok(fs::read_to_string(path)?)
        }
    }
}

/// Parse a listing page into records, applying the entry-error policy.
/// Record order is page order in both policies.
pub fn collect_movies(
    markup: &str,
    scrape: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Collected> {
    let parser = ListingParser::imdb()?;

    let t = std::time::Instant::now();
    let outcomes = parser.parse_entries(markup);
    logd!("Parsed {} entries in {:?}", outcomes.len(), t.elapsed());

    if outcomes.is_empty() {
        logw!("No listing entries found; page layout may have changed");
    }
    if let Some(p) = progress.as_deref_mut() {
        p.begin(outcomes.len());
    }

    let mut out = Collected::default();
    for (index, outcome) in outcomes.into_iter().enumerate() {
        match outcome {
            Ok(rec) => {
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(index, &rec.title);
                }
                out.records.push(rec);
            }
            Err(e) => match scrape.on_entry_error {
                EntryPolicy::Abort => {
                    loge!("{e}");
                    if let Some(p) = progress.as_deref_mut() {
                        p.finish();
                    }
                    return Err(e.into());
                }
                EntryPolicy::Skip => {
                    loge!("Skipping {e}");
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_failed(index, &e.to_string());
                    }
                    out.skipped.push(e);
                }
            },
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    logf!("Collected {} records ({} skipped)", out.records.len(), out.skipped.len());
    Ok(out)
}
