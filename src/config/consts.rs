// src/config/consts.rs

// Net config
pub const DEFAULT_URL: &str =
    "https://www.imdb.com/search/title?count=100&title_type=feature,tv_series&ref_=nv_wl_img_2";
pub const USER_AGENT: &str = concat!("imdb_scrape/", env!("CARGO_PKG_VERSION"));
pub const HTTP_TIMEOUT_SECS: u64 = 30;

// Export
pub const DEFAULT_FILE: &str = "imdb_data";

// Logging
pub const LOG_FILTER_DEFAULT: &str = "imdb_scrape=info";
pub const LOG_FILTER_VERBOSE: &str = "imdb_scrape=debug";
