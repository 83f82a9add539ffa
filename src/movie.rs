// src/movie.rs
//! One listing entry, and how it becomes a table row.

use crate::config::options::ListStyle;

/// Movie/show metadata from a single entry block.
///
/// `None` means the page had no element for the field; it is never
/// represented by an empty string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MovieRecord {
    pub title: String,
    /// Year or date range with the parentheses removed, e.g. `2010` or `2011–2019`.
    pub release_info: Option<String>,
    pub runtime_minutes: Option<u32>,
    pub genres: Vec<String>,
    /// Numeric text as shown, e.g. `7.4`.
    pub rating: Option<String>,
    pub metascore: Option<String>,
    pub description: String,
    pub director: Option<String>,
    pub stars: Option<Vec<String>>,
    /// Raw text, thousands separators included.
    pub votes: Option<String>,
    /// Raw text, currency sign and suffix included.
    pub gross: Option<String>,
}

impl MovieRecord {
    pub const HEADERS: [&'static str; 11] = [
        "Title", "Release Date", "Runtime", "Genre", "Rating", "Score",
        "Description", "Director", "Stars", "Votes", "Gross",
    ];

    pub fn headers() -> Vec<String> {
        Self::HEADERS.iter().map(|h| s!(*h)).collect()
    }

    /// Cells in `HEADERS` order. Absent values become empty cells.
    pub fn to_row(&self, style: ListStyle) -> Vec<String> {
        vec![
            self.title.clone(),
            self.release_info.clone().unwrap_or_default(),
            self.runtime_minutes.map(|m| m.to_string()).unwrap_or_default(),
            render_list(&self.genres, style),
            self.rating.clone().unwrap_or_default(),
            self.metascore.clone().unwrap_or_default(),
            self.description.clone(),
            self.director.clone().unwrap_or_default(),
            self.stars.as_deref().map(|v| render_list(v, style)).unwrap_or_default(),
            self.votes.clone().unwrap_or_default(),
            self.gross.clone().unwrap_or_default(),
        ]
    }
}

/// `'x'`, or `"x"` when the item itself holds a single quote.
fn quote_item(item: &str) -> String {
    if item.contains('\'') && !item.contains('"') {
        join!("\"", item, "\"")
    } else {
        join!("'", &item.replace('\'', "\\'"), "'")
    }
}

fn render_list(items: &[String], style: ListStyle) -> String {
    match style {
        ListStyle::Joined => items.join(", "),
        ListStyle::Bracketed => {
            let quoted: Vec<String> = items
                .iter()
                .map(|it| quote_item(it))
                .collect();
            join!("[", &quoted.join(", "), "]")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MovieRecord {
        MovieRecord {
            title: s!("Arrival"),
            release_info: Some(s!("2016")),
            runtime_minutes: Some(116),
            genres: vec![s!("Drama"), s!("Sci-Fi")],
            rating: Some(s!("7.9")),
            metascore: None,
            description: s!("A linguist works with the military."),
            director: Some(s!("Denis Villeneuve")),
            stars: None,
            votes: Some(s!("780,000")),
            gross: None,
        }
    }

    #[test]
    fn row_matches_header_width() {
        assert_eq!(sample().to_row(ListStyle::Joined).len(), MovieRecord::HEADERS.len());
    }

    #[test]
    fn absent_fields_render_as_empty_cells() {
        let row = sample().to_row(ListStyle::Joined);
        assert_eq!(row[5], ""); // Score
        assert_eq!(row[8], ""); // Stars
        assert_eq!(row[10], ""); // Gross
        assert_eq!(row[2], "116");
    }

    #[test]
    fn list_styles() {
        let rec = sample();
        assert_eq!(rec.to_row(ListStyle::Joined)[3], "Drama, Sci-Fi");
        assert_eq!(rec.to_row(ListStyle::Bracketed)[3], "['Drama', 'Sci-Fi']");

        let mut empty = rec.clone();
        empty.genres.clear();
        assert_eq!(empty.to_row(ListStyle::Joined)[3], "");
        assert_eq!(empty.to_row(ListStyle::Bracketed)[3], "[]");
    }

    #[test]
    fn bracketed_switches_quotes_for_apostrophes() {
        let mut rec = sample();
        rec.stars = Some(vec![s!("Dan O'Herlihy"), s!("Amy Adams")]);
        assert_eq!(rec.to_row(ListStyle::Bracketed)[8], r#"["Dan O'Herlihy", 'Amy Adams']"#);
    }
}
