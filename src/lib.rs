// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod log;
pub mod specs;

pub mod csv;
pub mod file;
pub mod movie;
pub mod progress;
pub mod runner;
pub mod scrape;

pub use error::{EntryError, Error, Result};
pub use movie::MovieRecord;
pub use specs::{ListingLayout, ListingParser, parse_listing};
