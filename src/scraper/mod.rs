pub(crate) mod index;
pub(crate) mod season;

use tracing::debug;

use crate::error::{FootballDataError, Result};

pub(crate) const BASE_URL: &str = "https://www.football-data.co.uk";

/// Turn an index-page link target into an absolute URL. Link targets on the
/// site are relative paths like `mmz4281/2122/E0.csv`.
pub(crate) fn resource_url(link: &str) -> String {
    if link.starts_with("http://") || link.starts_with("https://") {
        link.to_string()
    } else {
        format!("{BASE_URL}/{}", link.trim_start_matches('/'))
    }
}

/// Fetch a URL and return the response body as text.
pub(crate) async fn get_text(client: &reqwest::Client, url: &str) -> Result<String> {
    let response = get_checked(client, url).await?;
    response
        .text()
        .await
        .map_err(|e| FootballDataError::ResponseBody {
            url: url.to_owned(),
            source: e,
        })
}

/// Fetch a URL and return the raw response bytes. Season CSVs are fetched as
/// bytes because legacy files are not valid UTF-8.
pub(crate) async fn get_bytes(client: &reqwest::Client, url: &str) -> Result<Vec<u8>> {
    let response = get_checked(client, url).await?;
    response
        .bytes()
        .await
        .map(|b| b.to_vec())
        .map_err(|e| FootballDataError::ResponseBody {
            url: url.to_owned(),
            source: e,
        })
}

async fn get_checked(client: &reqwest::Client, url: &str) -> Result<reqwest::Response> {
    debug!(url, "fetching");

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| FootballDataError::Http {
            url: url.to_owned(),
            source: e,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FootballDataError::UnexpectedStatus {
            url: url.to_owned(),
            status,
        });
    }

    Ok(response)
}
