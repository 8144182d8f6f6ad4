use itertools::Itertools;
use serde::Serialize;

/// The fixed result/statistics schema every normalized season table carries,
/// in output order.
pub const FEATURE_COLUMNS: [&str; 23] = [
    "Div", "Date", "HomeTeam", "AwayTeam", "FTHG", "FTAG", "FTR", "HTHG", "HTAG", "HTR",
    "Referee", "HS", "AS", "HST", "AST", "HF", "AF", "HC", "AC", "HY", "AY", "HR", "AR",
];

pub(crate) const LEAGUE_COLUMN: &str = "League";
pub(crate) const SEASON_COLUMN: &str = "Season";
pub(crate) const HOME_TEAM_COLUMN: &str = "HomeTeam";
pub(crate) const AWAY_TEAM_COLUMN: &str = "AwayTeam";

/// A normalized table of matches for one season, or several seasons
/// concatenated in year order.
///
/// Columns are the fixed schema of [`FEATURE_COLUMNS`], optionally preceded
/// by constant `League` and `Season` label columns. Cells are carried as the
/// raw text of the source CSV.
#[derive(Debug, Clone, Serialize)]
pub struct SeasonTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
    rows_dropped: usize,
}

impl SeasonTable {
    pub(crate) fn new(columns: Vec<String>, rows: Vec<Vec<String>>, rows_dropped: usize) -> Self {
        Self {
            columns,
            rows,
            rows_dropped,
        }
    }

    /// Column names, in order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows in source order, each cell aligned with [`columns`](Self::columns).
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of matches in the table.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// How many malformed source rows were skipped during lenient parsing.
    pub fn rows_dropped(&self) -> usize {
        self.rows_dropped
    }

    /// Position of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Iterate one column's cells by name.
    pub fn column(&self, name: &str) -> Option<impl Iterator<Item = &str>> {
        let index = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| row[index].as_str()))
    }

    /// Insert a label column at the front, broadcasting `value` to every row.
    pub(crate) fn prepend_constant(&mut self, name: &str, value: &str) {
        self.columns.insert(0, name.to_string());
        for row in &mut self.rows {
            row.insert(0, value.to_string());
        }
    }

    /// Append another table's rows; the schema stays this table's.
    pub(crate) fn append(&mut self, other: SeasonTable) {
        self.rows.extend(other.rows);
        self.rows_dropped += other.rows_dropped;
    }

    /// The subset of rows where `club` appears as the home or the away team.
    /// Matching is exact.
    pub fn filter_club(&self, club: &str) -> SeasonTable {
        let home = self.column_index(HOME_TEAM_COLUMN);
        let away = self.column_index(AWAY_TEAM_COLUMN);
        let plays = |row: &[String], index: Option<usize>| {
            index.is_some_and(|i| row.get(i).is_some_and(|cell| cell == club))
        };
        let rows = self
            .rows
            .iter()
            .filter(|row| plays(row, home) || plays(row, away))
            .cloned()
            .collect_vec();
        SeasonTable::new(self.columns.clone(), rows, self.rows_dropped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SeasonTable {
        SeasonTable::new(
            vec!["HomeTeam".into(), "AwayTeam".into(), "FTR".into()],
            vec![
                vec!["Arsenal".into(), "Chelsea".into(), "H".into()],
                vec!["Everton".into(), "Arsenal".into(), "D".into()],
                vec!["Everton".into(), "Chelsea".into(), "A".into()],
            ],
            0,
        )
    }

    #[test]
    fn prepend_constant_broadcasts_to_every_row() {
        let mut table = sample();
        table.prepend_constant("League", "Premier League");
        assert_eq!(table.columns()[0], "League");
        assert!(table
            .column("League")
            .unwrap()
            .all(|cell| cell == "Premier League"));
        assert_eq!(table.rows()[0][1], "Arsenal");
    }

    #[test]
    fn append_keeps_schema_and_sums_dropped() {
        let mut first = sample();
        let mut second = sample();
        first.rows_dropped = 1;
        second.rows_dropped = 2;
        first.append(second);
        assert_eq!(first.len(), 6);
        assert_eq!(first.rows_dropped(), 3);
        assert_eq!(first.columns().len(), 3);
    }

    #[test]
    fn filter_club_matches_home_or_away_only() {
        let filtered = sample().filter_club("Arsenal");
        assert_eq!(filtered.len(), 2);
        for row in filtered.rows() {
            assert!(row[0] == "Arsenal" || row[1] == "Arsenal");
        }
    }

    #[test]
    fn filter_club_is_exact_match() {
        let filtered = sample().filter_club("Arse");
        assert!(filtered.is_empty());
    }

    #[test]
    fn column_lookup_by_name() {
        let table = sample();
        assert_eq!(table.column_index("FTR"), Some(2));
        assert_eq!(table.column_index("Season"), None);
        let results: Vec<&str> = table.column("FTR").unwrap().collect();
        assert_eq!(results, ["H", "D", "A"]);
    }
}
