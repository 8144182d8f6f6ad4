//! A scraper for historical football match results and statistics published
//! as per-season CSV files on
//! [football-data.co.uk](https://www.football-data.co.uk).
//!
//! The crate locates a season's download link on the country's listing page,
//! fetches the CSV, repairs legacy encodings and malformed rows, normalizes
//! every season to one fixed column schema, and concatenates season ranges,
//! optionally filtered by club.
//!
//! ```no_run
//! # async fn example() -> football_data_scraper::Result<()> {
//! use football_data_scraper::FootballDataClient;
//!
//! let client = FootballDataClient::connect("england", "Premier League").await?;
//! let arsenal = client.get_club_matches("Arsenal", 2019, Some(2021)).await?;
//! for row in arsenal.rows() {
//!     println!("{}", row.join(","));
//! }
//! # Ok(())
//! # }
//! ```

pub use client::FootballDataClient;
pub use error::{FootballDataError, Result};
pub use model::{Country, FeatureNote, League, SeasonTable, FEATURE_COLUMNS};

mod client;
pub mod error;
pub mod model;
pub(crate) mod scraper;
