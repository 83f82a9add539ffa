// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! Page-specific scraping specifications. A spec knows *where the data lives in
//! the HTML* and *how to cut it out*; nothing else.
//!
//! ## What lives here
//! - **Pure HTML parsing** of one page kind into typed records.
//! - **Selector choice**, kept as named constants on a layout struct so a site
//!   redesign is a one-place fix.
//! - **Tolerant extraction**: optional fields fall back to `None`; only the fields
//!   a page cannot do without raise an `EntryError`.
//!
//! ## What does **not** live here
//! - **Fetching** (`core::net`) and **writing** (`file`, `csv`).
//! - **Error policy** (abort vs skip) and progress reporting: see `scrape`.
//!
//! ## Typical call chain
//! ```text
//! cli → runner::run → core::net::http_get (or a saved file)
//!                   → scrape::collect_movies → specs::listing::ListingParser
//!                   → file::write_export
//! ```
//!
//! ## Testing notes
//! - Specs are tested **offline** against inline HTML fixtures.
//! - Keep selectors resilient to whitespace, attribute order and extra classes.
pub mod listing;

pub use listing::{ListingLayout, ListingParser, parse_listing};
