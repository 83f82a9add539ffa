// tests/export_e2e.rs
//
// Runner end to end: saved page in, delimited file out.
//
use std::fs;
use std::path::{Path, PathBuf};

use imdb_scrape::config::options::{
    AppOptions, EntryPolicy, ExportFormat, ListStyle, Source, WriteMode,
};
use imdb_scrape::csv::parse_rows;
use imdb_scrape::progress::NullProgress;
use imdb_scrape::{EntryError, Error, MovieRecord, runner};

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/listing.html")
}

fn opts_into(dir: &Path, file: &str) -> AppOptions {
    let mut opts = AppOptions::default();
    opts.scrape.source = Source::File(fixture());
    opts.export.set_path(dir.join(file).to_str().unwrap());
    opts
}

#[test]
fn writes_header_and_one_row_per_entry() {
    let dir = tempfile::tempdir().unwrap();
    let opts = opts_into(dir.path(), "movies.csv");

    let summary = runner::run(&opts, Some(&mut NullProgress)).unwrap();
    assert_eq!(summary.records, 3);
    assert!(summary.skipped.is_empty());
    assert_eq!(summary.path, dir.path().join("movies.csv"));

    let text = fs::read_to_string(&summary.path).unwrap();
    assert!(text.starts_with(
        "Title,Release Date,Runtime,Genre,Rating,Score,Description,Director,Stars,Votes,Gross\n"
    ));

    let rows = parse_rows(&text, ',');
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[1][0], "Inception");
    assert_eq!(rows[1][2], "148");
    assert_eq!(rows[1][3], "Action, Adventure, Sci-Fi");
    assert_eq!(rows[1][9], "2,300,000");
    assert_eq!(rows[3][4], ""); // no rating
}

#[test]
fn directory_target_gets_default_name() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = opts_into(dir.path(), "");
    opts.export.set_path(&format!("{}/nested/", dir.path().display()));
    opts.export.format = ExportFormat::Tsv;

    let summary = runner::run(&opts, None).unwrap();
    assert_eq!(summary.path, dir.path().join("nested").join("imdb_data.tsv"));

    let text = fs::read_to_string(&summary.path).unwrap();
    assert!(text.lines().next().unwrap().starts_with("Title\tRelease Date\t"));
}

#[test]
fn append_keeps_single_header() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = opts_into(dir.path(), "log.csv");
    opts.export.write_mode = WriteMode::Append;

    runner::run(&opts, None).unwrap();
    runner::run(&opts, None).unwrap();

    let text = fs::read_to_string(dir.path().join("log.csv")).unwrap();
    let rows = parse_rows(&text, ',');
    assert_eq!(rows.len(), 1 + 3 + 3);
    assert_eq!(rows.iter().filter(|r| r[0] == "Title").count(), 1);
}

#[test]
fn append_refuses_foreign_header() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("other.csv");
    fs::write(&target, "Name,Team\nA,B\n").unwrap();

    let mut opts = opts_into(dir.path(), "other.csv");
    opts.export.write_mode = WriteMode::Append;

    match runner::run(&opts, None) {
        Err(Error::HeaderMismatch { path }) => assert_eq!(path, target),
        other => panic!("expected header mismatch, got {other:?}"),
    }
    assert_eq!(fs::read_to_string(&target).unwrap(), "Name,Team\nA,B\n");
}

#[test]
fn overwrite_replaces_previous_contents() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("movies.csv");
    fs::write(&target, "stale\n").unwrap();

    let mut opts = opts_into(dir.path(), "movies.csv");
    opts.export.include_headers = false;
    runner::run(&opts, None).unwrap();

    let text = fs::read_to_string(&target).unwrap();
    assert!(!text.contains("stale"));
    assert!(text.starts_with("Inception,2010,148,"));
}

#[test]
fn bracketed_lists() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = opts_into(dir.path(), "movies.csv");
    opts.export.list_style = ListStyle::Bracketed;

    let summary = runner::run(&opts, None).unwrap();
    let rows = parse_rows(&fs::read_to_string(summary.path).unwrap(), ',');
    assert_eq!(rows[1][3], "['Action', 'Adventure', 'Sci-Fi']");
    assert_eq!(rows[2][8], ""); // stars absent on the series entry
}

#[test]
fn malformed_entry_aborts_or_skips() {
    let dir = tempfile::tempdir().unwrap();
    let page = fs::read_to_string(fixture())
        .unwrap()
        .replace(r#"<a href="/title/tt0903747/?ref_=adv_li_tt">Breaking Bad</a>"#, "Breaking Bad");
    let broken = dir.path().join("broken.html");
    fs::write(&broken, page).unwrap();

    let mut opts = opts_into(dir.path(), "out.csv");
    opts.scrape.source = Source::File(broken);

    match runner::run(&opts, None) {
        Err(Error::Entry(EntryError::MissingTitle { index: 1 })) => {}
        other => panic!("expected entry error, got {other:?}"),
    }
    assert!(!dir.path().join("out.csv").exists());

    opts.scrape.on_entry_error = EntryPolicy::Skip;
    let summary = runner::run(&opts, None).unwrap();
    assert_eq!(summary.records, 2);
    assert_eq!(summary.skipped, vec![EntryError::MissingTitle { index: 1 }]);
}

#[test]
fn missing_source_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = opts_into(dir.path(), "out.csv");
    opts.scrape.source = Source::File(dir.path().join("nope.html"));

    assert!(matches!(runner::run(&opts, None), Err(Error::Io(_))));
    assert!(!dir.path().join("out.csv").exists());
}

#[test]
fn header_constant_matches_written_header() {
    let dir = tempfile::tempdir().unwrap();
    let summary = runner::run(&opts_into(dir.path(), "h.csv"), None).unwrap();
    let rows = parse_rows(&fs::read_to_string(summary.path).unwrap(), ',');
    assert_eq!(rows[0], MovieRecord::headers());
}
