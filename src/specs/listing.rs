// src/specs/listing.rs
//! Parser for the IMDb advanced-search listing page.
//!
//! Purpose:
//! - Find every `div.lister-item.mode-advanced` entry block and turn it into a `MovieRecord`.
//! - Keep every selector, label and delimiter the page depends on in one `ListingLayout`,
//!   so markup drift is a one-place fix.
//!
//! Shape of one entry (trimmed):
//! ```text
//! <div class="lister-item mode-advanced">
//!   <h3 class="lister-item-header"><a>Inception</a> <span class="lister-item-year">(2010)</span></h3>
//!   <p class="text-muted"><span class="runtime">148 min</span> <span class="genre">Action, …</span></p>
//!   <div class="ratings-bar"><strong>8.8</strong> <span class="metascore">74</span></div>
//!   <p class="text-muted">Synopsis…</p>
//!   <p class="">Director: <a>…</a> | Stars: <a>…</a>, <a>…</a></p>
//!   <p class="sort-num_votes-visible"><span name="nv">2,300,000</span> | <span name="nv">$292.58M</span></p>
//! </div>
//! ```
//!
//! Only title and description are required; every other field falls back to `None`
//! (or an empty list for genres).

use scraper::{ElementRef, Html, Selector};

use crate::core::html::{all, first, is_unclassed, last, text};
use crate::core::sanitize::{drop_last_chars, normalize_ws, split_trimmed, strip_label, strip_parens};
use crate::error::{EntryError, Error, Result};
use crate::movie::MovieRecord;

/// Where each field lives in the markup, and how its text is cut up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListingLayout {
    /* -- locators (CSS) -- */
    pub entry: &'static str,
    pub header: &'static str,
    /// Searched inside `header`.
    pub title_link: &'static str,
    pub year: &'static str,
    pub runtime: &'static str,
    pub genre: &'static str,
    /// First match wins.
    pub rating: &'static str,
    pub metascore: &'static str,
    /// Last match is the synopsis.
    pub muted_text: &'static str,
    /// First match without a class is the credits line.
    pub paragraph: &'static str,
    pub numeric_value: &'static str,

    /* -- text rules -- */
    /// Characters cut from the end of the runtime text (" min").
    pub runtime_suffix_len: usize,
    pub genre_delim: &'static str,
    pub credits_delim: &'static str,
    pub director_label: &'static str,
    pub stars_label: &'static str,
    pub stars_delim: &'static str,
}

impl ListingLayout {
    pub const IMDB_ADVANCED: ListingLayout = ListingLayout {
        entry: "div.lister-item.mode-advanced",
        header: "h3.lister-item-header",
        title_link: "a",
        year: "span.lister-item-year",
        runtime: "span.runtime",
        genre: "span.genre",
        rating: "strong",
        metascore: "span.metascore",
        muted_text: "p.text-muted",
        paragraph: "p",
        numeric_value: r#"span[name="nv"]"#,

        runtime_suffix_len: 4,
        genre_delim: ",",
        credits_delim: "|",
        director_label: "Director:",
        stars_label: "Stars:",
        stars_delim: ", ",
    };
}

impl Default for ListingLayout {
    fn default() -> Self {
        Self::IMDB_ADVANCED
    }
}

struct Selectors {
    entry: Selector,
    header: Selector,
    title_link: Selector,
    year: Selector,
    runtime: Selector,
    genre: Selector,
    rating: Selector,
    metascore: Selector,
    muted_text: Selector,
    paragraph: Selector,
    numeric_value: Selector,
}

fn compile(selector: &'static str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| Error::Selector { selector, reason: e.to_string() })
}

/// Compiled `ListingLayout`. Build once, parse any number of pages.
pub struct ListingParser {
    layout: ListingLayout,
    sel: Selectors,
}

impl ListingParser {
    pub fn new(layout: &ListingLayout) -> Result<Self> {
        let sel = Selectors {
            entry: compile(layout.entry)?,
            header: compile(layout.header)?,
            title_link: compile(layout.title_link)?,
            year: compile(layout.year)?,
            runtime: compile(layout.runtime)?,
            genre: compile(layout.genre)?,
            rating: compile(layout.rating)?,
            metascore: compile(layout.metascore)?,
            muted_text: compile(layout.muted_text)?,
            paragraph: compile(layout.paragraph)?,
            numeric_value: compile(layout.numeric_value)?,
        };
        Ok(Self { layout: *layout, sel })
    }

    pub fn imdb() -> Result<Self> {
        Self::new(&ListingLayout::IMDB_ADVANCED)
    }

    pub fn layout(&self) -> &ListingLayout {
        &self.layout
    }

    /// All entries, or the first malformed one.
    pub fn parse(&self, markup: &str) -> std::result::Result<Vec<MovieRecord>, EntryError> {
        self.parse_entries(markup).into_iter().collect()
    }

    /// One outcome per entry block, in document order.
    pub fn parse_entries(&self, markup: &str) -> Vec<std::result::Result<MovieRecord, EntryError>> {
        let doc = Html::parse_document(markup);
        doc.select(&self.sel.entry)
            .enumerate()
            .map(|(index, entry)| self.parse_entry(index, entry))
            .collect()
    }

    fn parse_entry(&self, index: usize, entry: ElementRef<'_>) -> std::result::Result<MovieRecord, EntryError> {
        let title = first(entry, &self.sel.header)
            .and_then(|h| first(h, &self.sel.title_link))
            .map(text)
            .ok_or(EntryError::MissingTitle { index })?;

        let description = match last(entry, &self.sel.muted_text) {
            Some(p) => s!(text(p).trim()),
            None => return Err(EntryError::MissingDescription { index, title }),
        };

        let (director, stars) = self.credits(entry);
        let (votes, gross) = self.numeric_values(index, entry);

        Ok(MovieRecord {
            release_info: first(entry, &self.sel.year).map(|y| strip_parens(&text(y))),
            runtime_minutes: self.runtime(index, entry),
            genres: first(entry, &self.sel.genre)
                .map(|g| split_trimmed(text(g).trim(), self.layout.genre_delim))
                .unwrap_or_default(),
            rating: first(entry, &self.sel.rating).map(text),
            metascore: first(entry, &self.sel.metascore).map(|m| s!(text(m).trim())),
            title,
            description,
            director,
            stars,
            votes,
            gross,
        })
    }

    /* ---------------- helpers ---------------- */

    fn runtime(&self, index: usize, entry: ElementRef<'_>) -> Option<u32> {
        let raw = text(first(entry, &self.sel.runtime)?);
        let digits = drop_last_chars(&raw, self.layout.runtime_suffix_len)?.trim();
        match digits.parse::<u32>() {
            Ok(m) => Some(m),
            Err(_) => {
                logd!("entry {index}: runtime {raw:?} is not a minute count");
                None
            }
        }
    }

    /// `Director: X | Stars: A, B` → (Some("X"), Some(["A", "B"])).
    /// Positional: segment 1 is the director, segment 2 the stars, the rest is ignored.
    fn credits(&self, entry: ElementRef<'_>) -> (Option<String>, Option<Vec<String>>) {
        let Some(p) = entry.select(&self.sel.paragraph).find(|p| is_unclassed(*p)) else {
            return (None, None);
        };
        // Names are split across lines in the markup ("A,\n B")
        let segments = split_trimmed(&normalize_ws(&text(p)), self.layout.credits_delim);

        let director = segments
            .first()
            .map(|seg| strip_label(seg, self.layout.director_label));
        let stars = segments.get(1).map(|seg| {
            split_trimmed(&strip_label(seg, self.layout.stars_label), self.layout.stars_delim)
        });
        (director, stars)
    }

    /// One value → votes; two → votes, gross. Any other count is not interpreted.
    fn numeric_values(&self, index: usize, entry: ElementRef<'_>) -> (Option<String>, Option<String>) {
        let mut values = all(entry, &self.sel.numeric_value).into_iter().map(text);
        match (values.next(), values.next(), values.next()) {
            (None, _, _) => (None, None),
            (Some(votes), None, _) => (Some(votes), None),
            (Some(votes), Some(gross), None) => (Some(votes), Some(gross)),
            (Some(_), Some(_), Some(_)) => {
                logd!("entry {index}: more than two numeric values, votes/gross left empty");
                (None, None)
            }
        }
    }
}

/// Parse a listing page with the stock IMDb layout.
pub fn parse_listing(markup: &str) -> Result<Vec<MovieRecord>> {
    Ok(ListingParser::imdb()?.parse(markup)?)
}
