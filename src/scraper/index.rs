use ::scraper::{Html, Selector};
use tracing::{debug, instrument};

use crate::error::{FootballDataError, Result};
use crate::model::{Country, League};
use crate::scraper;

/// A country's season listing page, fetched once and reused for every season
/// lookup on the same client.
///
/// The raw body is stored instead of the parsed document so the owning client
/// stays `Send + Sync`; each lookup re-parses, which is cheap next to the
/// network round-trip for the season file itself.
#[derive(Debug, Clone)]
pub(crate) struct IndexPage {
    body: String,
}

impl IndexPage {
    #[instrument(skip(client))]
    pub(crate) async fn fetch(client: &reqwest::Client, country: Country) -> Result<Self> {
        let url = format!("{}/{country}m.php", scraper::BASE_URL);
        let body = scraper::get_text(client, &url).await?;
        debug!(%country, bytes = body.len(), "fetched index page");
        Ok(Self { body })
    }

    #[cfg(test)]
    pub(crate) fn from_body(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    /// Resolve the download link for the season starting in `year`.
    ///
    /// The anchor must carry the two-digit season token in its target and show
    /// the league name as its exact text. One failed lookup covers every
    /// bad-input case at once: a year the site has not published, a league not
    /// listed for that season, or a country page carrying no such file. When
    /// several anchors qualify, the first in document order wins.
    pub(crate) fn resolve(&self, year: i32, league: League) -> Result<String> {
        let token = season_token(year);
        let label = league.to_string();
        let document = Html::parse_document(&self.body);
        let anchors = Selector::parse("a[href]")?;
        document
            .select(&anchors)
            .find_map(|anchor| {
                let href = anchor.value().attr("href")?;
                if !href.contains(&token) {
                    return None;
                }
                let text: String = anchor.text().collect();
                (text.trim() == label).then(|| href.to_string())
            })
            .ok_or_else(|| FootballDataError::InvalidSelection {
                context: format!(
                    "no {label} download link for season {}",
                    season_label(year)
                ),
            })
    }
}

/// Two-digit year-pair token used in download paths, e.g. 2021 -> "2122".
pub(crate) fn season_token(year: i32) -> String {
    format!("{:02}{:02}", year.rem_euclid(100), (year + 1).rem_euclid(100))
}

/// Season label broadcast to rows of multi-season tables, e.g. 2021 -> "2021-2022".
pub(crate) fn season_label(year: i32) -> String {
    format!("{year}-{}", year + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const INDEX_FIXTURE: &str = r#"
        <html><body>
        <i>Season 2022/2023</i>
        <a href="mmz4281/2223/E0.csv">Premier League</a>
        <a href="mmz4281/2223/E1.csv">Championship</a>
        <i>Season 2021/2022</i>
        <a href="mmz4281/2122/E0.csv">Premier League</a>
        <a href="mmz4281/2122/E1.csv">Championship</a>
        <a href="mmz4281/2122/EPL_mirror.csv">Premier League</a>
        </body></html>
    "#;

    #[test]
    fn token_covers_century_boundaries() {
        assert_eq!(season_token(2021), "2122");
        assert_eq!(season_token(1999), "9900");
        assert_eq!(season_token(2009), "0910");
    }

    #[test]
    fn label_is_year_pair() {
        assert_eq!(season_label(2021), "2021-2022");
    }

    #[test]
    fn resolves_link_by_token_and_league_text() {
        let index = IndexPage::from_body(INDEX_FIXTURE);
        let link = index.resolve(2022, League::PremierLeague).unwrap();
        assert_eq!(link, "mmz4281/2223/E0.csv");
    }

    #[test]
    fn first_match_wins_when_several_anchors_qualify() {
        let index = IndexPage::from_body(INDEX_FIXTURE);
        let link = index.resolve(2021, League::PremierLeague).unwrap();
        assert_eq!(link, "mmz4281/2122/E0.csv");
    }

    #[test]
    fn unpublished_season_is_invalid_selection() {
        let index = IndexPage::from_body(INDEX_FIXTURE);
        let err = index.resolve(1980, League::PremierLeague).unwrap_err();
        assert!(matches!(err, FootballDataError::InvalidSelection { .. }));
        assert!(err.to_string().contains("1980-1981"));
    }

    #[test]
    fn anchor_text_split_across_nodes_still_matches() {
        let index = IndexPage::from_body(
            r#"<a href="mmz4281/2122/E0.csv">Premier <b>League</b></a>"#,
        );
        let link = index.resolve(2021, League::PremierLeague).unwrap();
        assert_eq!(link, "mmz4281/2122/E0.csv");
    }

    #[test]
    fn token_match_alone_is_not_enough() {
        // Right token, but no anchor whose text is the league name.
        let index = IndexPage::from_body(r#"<a href="mmz4281/2122/E1.csv">Championship</a>"#);
        let err = index.resolve(2021, League::PremierLeague).unwrap_err();
        assert!(matches!(err, FootballDataError::InvalidSelection { .. }));
    }
}
