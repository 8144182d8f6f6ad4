use ::scraper::error::SelectorErrorKind;

/// All errors that can occur while fetching or normalizing season data.
#[derive(thiserror::Error, Debug)]
pub enum FootballDataError {
    /// Country, league, or season is not covered by the site's listings.
    #[error("unsupported selection: {context}")]
    InvalidSelection { context: String },

    /// Season range where the start year lies beyond the end year.
    #[error("invalid season range: start year {start_year} is after end year {end_year}")]
    InvalidRange { start_year: i32, end_year: i32 },

    /// A caller-supplied argument has an unusable shape.
    #[error("invalid argument: {context}")]
    InvalidArgument { context: &'static str },

    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read the response body.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// The season's CSV could not be parsed even after the decoding fallbacks.
    #[error("failed to parse csv for season starting {year}: {source}")]
    Csv { year: i32, source: csv::Error },

    /// The fetched table lacks a column required by the fixed schema.
    #[error("season starting {year} is missing required column {column:?}")]
    MissingColumn { column: &'static str, year: i32 },

    /// A CSS selector string could not be parsed.
    #[error("invalid CSS selector: {0}")]
    Selector(String),
}

impl<'a> From<SelectorErrorKind<'a>> for FootballDataError {
    fn from(err: SelectorErrorKind<'a>) -> Self {
        FootballDataError::Selector(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FootballDataError>;
