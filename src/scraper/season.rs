use std::collections::HashMap;

use itertools::Itertools;
use tracing::{debug, instrument, warn};

use crate::error::{FootballDataError, Result};
use crate::model::{
    League, SeasonTable, FEATURE_COLUMNS, LEAGUE_COLUMN, SEASON_COLUMN,
};
use crate::scraper;
use crate::scraper::index::{season_label, IndexPage};

/// Fetch one season's CSV, normalize it to the fixed schema, and prepend the
/// constant `League` label column.
#[instrument(skip(client, index))]
pub(crate) async fn get_season(
    client: &reqwest::Client,
    index: &IndexPage,
    league: League,
    year: i32,
) -> Result<SeasonTable> {
    let link = index.resolve(year, league)?;
    let url = scraper::resource_url(&link);
    let bytes = scraper::get_bytes(client, &url).await?;
    let mut table = normalize_season(&bytes, year)?;
    table.prepend_constant(LEAGUE_COLUMN, &league.to_string());
    debug!(year, rows = table.len(), "normalized season table");
    Ok(table)
}

/// Fetch the inclusive `start_year..=end_year` range in ascending order and
/// concatenate, labeling each season's rows with a constant `Season` column.
/// The merged schema is the first season's.
pub(crate) async fn get_seasons(
    client: &reqwest::Client,
    index: &IndexPage,
    league: League,
    start_year: i32,
    end_year: i32,
) -> Result<SeasonTable> {
    if start_year > end_year {
        return Err(FootballDataError::InvalidRange {
            start_year,
            end_year,
        });
    }

    let mut seasons = Vec::with_capacity((end_year - start_year + 1) as usize);
    for year in start_year..=end_year {
        seasons.push((year, get_season(client, index, league, year).await?));
    }
    Ok(concat_seasons(seasons))
}

/// Label each season's rows with a constant `Season` column and concatenate
/// in the given order. The merged schema is the first table's.
fn concat_seasons(seasons: Vec<(i32, SeasonTable)>) -> SeasonTable {
    let mut merged: Option<SeasonTable> = None;
    for (year, mut table) in seasons {
        table.prepend_constant(SEASON_COLUMN, &season_label(year));
        match merged.as_mut() {
            Some(merged) => merged.append(table),
            None => merged = Some(table),
        }
    }
    merged.unwrap_or_else(|| SeasonTable::new(Vec::new(), Vec::new(), 0))
}

/// Fetch a single season (`end_year: None`) or an aggregated range, then keep
/// only the matches `club` played home or away.
pub(crate) async fn get_club_matches(
    client: &reqwest::Client,
    index: &IndexPage,
    league: League,
    club: &str,
    start_year: i32,
    end_year: Option<i32>,
) -> Result<SeasonTable> {
    if club.trim().is_empty() {
        return Err(FootballDataError::InvalidArgument {
            context: "club name must be a non-empty string",
        });
    }

    let table = match end_year {
        Some(end_year) => get_seasons(client, index, league, start_year, end_year).await?,
        None => get_season(client, index, league, start_year).await?,
    };
    Ok(table.filter_club(club))
}

/// Parse raw CSV bytes and project them onto the fixed schema.
///
/// Parsing policy, in order: a straight UTF-8 pass skipping rows that carry
/// more fields than the header; on a decoding fault, one retry with the whole
/// body re-decoded as Latin-1 (the site's legacy files carry single-byte
/// text). Short rows are kept and padded with `""` during projection. Skipped
/// rows are reported as a data-loss notice naming the year, never as an
/// error.
pub(crate) fn normalize_season(bytes: &[u8], year: i32) -> Result<SeasonTable> {
    let raw = match parse_csv(bytes) {
        Ok(raw) => raw,
        Err(CsvFailure::Decode(_)) => {
            let decoded = decode_latin1(bytes);
            match parse_csv(decoded.as_bytes()) {
                Ok(raw) => raw,
                Err(CsvFailure::Decode(source)) | Err(CsvFailure::Fatal(source)) => {
                    return Err(FootballDataError::Csv { year, source })
                }
            }
        }
        Err(CsvFailure::Fatal(source)) => return Err(FootballDataError::Csv { year, source }),
    };

    if raw.dropped > 0 {
        warn!(year, dropped = raw.dropped, "data loss: skipped malformed csv rows");
    }

    project(raw, year)
}

struct RawCsv {
    headers: csv::StringRecord,
    rows: Vec<csv::StringRecord>,
    dropped: usize,
}

enum CsvFailure {
    /// Invalid UTF-8; retry with the legacy decoding.
    Decode(csv::Error),
    Fatal(csv::Error),
}

fn classify(error: csv::Error) -> CsvFailure {
    match error.kind() {
        csv::ErrorKind::Utf8 { .. } => CsvFailure::Decode(error),
        _ => CsvFailure::Fatal(error),
    }
}

fn parse_csv(bytes: &[u8]) -> std::result::Result<RawCsv, CsvFailure> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(bytes);
    let headers = match reader.headers() {
        Ok(headers) => headers.clone(),
        Err(error) => return Err(classify(error)),
    };
    let width = headers.len();

    let mut rows = Vec::new();
    let mut dropped = 0;
    for record in reader.records() {
        match record {
            // Over-long rows are malformed; short rows are padded later.
            Ok(record) if record.len() > width => dropped += 1,
            Ok(record) => rows.push(record),
            Err(error) => return Err(classify(error)),
        }
    }

    Ok(RawCsv {
        headers,
        rows,
        dropped,
    })
}

/// Select exactly the fixed schema by column name, in schema order. Extra
/// source columns are discarded; duplicate header names resolve to the first
/// occurrence.
fn project(raw: RawCsv, year: i32) -> Result<SeasonTable> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    for (position, name) in raw.headers.iter().enumerate() {
        positions
            .entry(name.trim_start_matches('\u{feff}').trim())
            .or_insert(position);
    }

    let indices: Vec<usize> = FEATURE_COLUMNS
        .iter()
        .map(|&column| {
            positions
                .get(column)
                .copied()
                .ok_or(FootballDataError::MissingColumn { column, year })
        })
        .collect::<Result<_>>()?;

    let rows = raw
        .rows
        .iter()
        .map(|record| {
            indices
                .iter()
                .map(|&i| record.get(i).unwrap_or_default().to_string())
                .collect_vec()
        })
        .collect_vec();

    Ok(SeasonTable::new(
        FEATURE_COLUMNS.iter().map(|c| c.to_string()).collect(),
        rows,
        raw.dropped,
    ))
}

/// Permissive single-byte fallback for legacy files: every byte maps to the
/// Unicode scalar of the same value.
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
