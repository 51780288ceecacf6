pub mod recommend;
pub mod score;

use env_logger::Builder;
use log::LevelFilter;

#[macro_use]
extern crate log;

pub use recommend::catalog::{Product, CATALOG};
pub use recommend::{generate_recommendations, render_table, Recommendation, Recommender};
pub use score::{calculate_wally_score, ProductData, UserData};

/// Configure `env_logger` from `RUST_LOG`.
///
/// `debug` and `info` only open the crate's own targets, anything else is
/// handed to `env_logger` as a filter string.
pub fn init_logger() {
    let log_level = std::env::var("RUST_LOG").unwrap_or_default();

    if log_level == "debug" {
        Builder::new()
            .filter(None, LevelFilter::Off)
            .filter(Some("wally::recommend"), LevelFilter::Debug)
            .filter(Some("wally"), LevelFilter::Debug)
            .init();
    } else if log_level == "info" {
        Builder::new()
            .filter(None, LevelFilter::Off)
            .filter(Some("wally::recommend"), LevelFilter::Info)
            .filter(Some("wally"), LevelFilter::Info)
            .init();
    } else {
        env_logger::init();
    }
}
