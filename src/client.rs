use std::time::Duration;

use tracing::instrument;

use crate::error::{FootballDataError, Result};
use crate::model::{Country, FeatureNote, League, SeasonTable};
use crate::scraper::index::IndexPage;
use crate::scraper::{self, season};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// The main entry point for fetching season data from football-data.co.uk.
///
/// `FootballDataClient` wraps a [`reqwest::Client`] together with a validated
/// country/league selection and the country's season index page, fetched once
/// at construction and reused for every lookup.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> football_data_scraper::Result<()> {
/// use football_data_scraper::FootballDataClient;
///
/// let client = FootballDataClient::connect("england", "Premier League").await?;
/// let season = client.get_season(2021).await?;
/// println!("{} matches", season.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct FootballDataClient {
    http: reqwest::Client,
    country: Country,
    league: League,
    index: IndexPage,
}

impl FootballDataClient {
    /// Validate the country/league selection against the supported lists and
    /// fetch the country's index page.
    ///
    /// The built-in HTTP client uses a 30 second request timeout; use
    /// [`connect_with_client`](Self::connect_with_client) to configure your
    /// own.
    pub async fn connect(country: &str, league: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| FootballDataError::Http {
                url: scraper::BASE_URL.to_owned(),
                source: e,
            })?;
        Self::connect_with_client(http, country, league).await
    }

    /// Like [`connect`](Self::connect), but with a caller-configured
    /// [`reqwest::Client`] (timeouts, proxies, headers).
    pub async fn connect_with_client(
        http: reqwest::Client,
        country: &str,
        league: &str,
    ) -> Result<Self> {
        let country = Country::parse(country)?;
        let league = League::parse(league)?;
        let index = IndexPage::fetch(&http, country).await?;
        Ok(Self {
            http,
            country,
            league,
            index,
        })
    }

    /// The validated country selection.
    pub fn country(&self) -> Country {
        self.country
    }

    /// The validated league selection.
    pub fn league(&self) -> League {
        self.league
    }

    /// Fetch the season starting in `year`, normalized to the fixed schema
    /// plus a constant `League` column.
    #[instrument(skip(self))]
    pub async fn get_season(&self, year: i32) -> Result<SeasonTable> {
        season::get_season(&self.http, &self.index, self.league, year).await
    }

    /// Fetch the inclusive season range in ascending year order and
    /// concatenate into one table, each row labeled with a constant `Season`
    /// column.
    #[instrument(skip(self))]
    pub async fn get_seasons(&self, start_year: i32, end_year: i32) -> Result<SeasonTable> {
        season::get_seasons(&self.http, &self.index, self.league, start_year, end_year).await
    }

    /// Fetch a single season (`end_year: None`) or an aggregated range,
    /// keeping only the matches `club` played home or away.
    #[instrument(skip(self))]
    pub async fn get_club_matches(
        &self,
        club: &str,
        start_year: i32,
        end_year: Option<i32>,
    ) -> Result<SeasonTable> {
        season::get_club_matches(&self.http, &self.index, self.league, club, start_year, end_year)
            .await
    }

    /// Explanations for the schema's feature codes from the bundled
    /// football-data.co.uk notes, split into `(match results, match
    /// statistics)`. No network access.
    pub fn get_notes() -> (Vec<FeatureNote>, Vec<FeatureNote>) {
        crate::model::get_notes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FEATURE_COLUMNS;

    #[tokio::test]
    async fn unsupported_selection_fails_before_any_fetch() {
        let err = FootballDataClient::connect("spain", "Premier League")
            .await
            .unwrap_err();
        assert!(matches!(err, FootballDataError::InvalidSelection { .. }));

        let err = FootballDataClient::connect("england", "La Liga")
            .await
            .unwrap_err();
        assert!(matches!(err, FootballDataError::InvalidSelection { .. }));
    }

    // The tests below hit football-data.co.uk.

    #[tokio::test]
    #[ignore]
    async fn live_season_has_fixed_schema_plus_league() {
        let client = FootballDataClient::connect("england", "Premier League")
            .await
            .unwrap();
        let season = client.get_season(2021).await.unwrap();

        let mut expected = vec!["League".to_string()];
        expected.extend(FEATURE_COLUMNS.map(String::from));
        assert_eq!(season.columns(), expected.as_slice());
        assert_eq!(season.len(), 380);
        assert!(season
            .column("League")
            .unwrap()
            .all(|cell| cell == "Premier League"));
    }

    #[tokio::test]
    #[ignore]
    async fn live_range_concatenates_in_season_order() {
        let client = FootballDataClient::connect("england", "Premier League")
            .await
            .unwrap();
        let first = client.get_season(2020).await.unwrap();
        let second = client.get_season(2021).await.unwrap();
        let merged = client.get_seasons(2020, 2021).await.unwrap();

        assert_eq!(merged.len(), first.len() + second.len());
        assert_eq!(merged.columns().len(), FEATURE_COLUMNS.len() + 2);
        let seasons: Vec<&str> = merged.column("Season").unwrap().collect();
        assert_eq!(seasons[0], "2020-2021");
        assert_eq!(seasons[seasons.len() - 1], "2021-2022");
    }

    #[tokio::test]
    #[ignore]
    async fn live_club_filter_is_a_strict_subset() {
        let client = FootballDataClient::connect("england", "Premier League")
            .await
            .unwrap();
        let season = client.get_season(2021).await.unwrap();
        let arsenal = client.get_club_matches("Arsenal", 2021, None).await.unwrap();

        assert!(!arsenal.is_empty());
        assert!(arsenal.len() < season.len());
        let home = arsenal.column_index("HomeTeam").unwrap();
        let away = arsenal.column_index("AwayTeam").unwrap();
        for row in arsenal.rows() {
            assert!(row[home] == "Arsenal" || row[away] == "Arsenal");
        }
    }

    #[tokio::test]
    #[ignore]
    async fn live_unpublished_year_is_invalid_selection() {
        let client = FootballDataClient::connect("england", "Premier League")
            .await
            .unwrap();
        let err = client.get_season(1891).await.unwrap_err();
        assert!(matches!(err, FootballDataError::InvalidSelection { .. }));
    }
}
