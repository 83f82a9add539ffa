// benches/listing.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use imdb_scrape::{ListingParser, MovieRecord};
use imdb_scrape::config::options::ListStyle;

const PAGE: &str = include_str!("../tests/fixtures/listing.html");

/// The fixture repeated until it is about the size of a live 100-entry page.
fn big_page() -> String {
    let start = PAGE.find("<div class=\"lister-list\">").unwrap_or(0);
    let (head, body) = PAGE.split_at(start);
    let mut page = head.to_string();
    for _ in 0..34 {
        page.push_str(body);
    }
    page
}

fn bench_listing(c: &mut Criterion) {
    let parser = ListingParser::imdb().expect("built-in selectors compile");
    let page = big_page();

    c.bench_function("listing_fixture", |b| {
        b.iter(|| {
            let recs = parser.parse(black_box(PAGE)).unwrap();
            black_box(recs.len())
        })
    });

    c.bench_function("listing_100ish", |b| {
        b.iter(|| {
            let outcomes = parser.parse_entries(black_box(&page));
            black_box(outcomes.len())
        })
    });

    let recs: Vec<MovieRecord> = parser.parse(PAGE).unwrap();
    c.bench_function("rows_bracketed", |b| {
        b.iter(|| {
            let n: usize = recs.iter().map(|r| r.to_row(ListStyle::Bracketed).len()).sum();
            black_box(n)
        })
    });
}

criterion_group!(benches, bench_listing);
criterion_main!(benches);
