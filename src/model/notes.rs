use serde::Serialize;

const RESULTS_NOTES: &str = include_str!("../../notes/resultsdata_notes.txt");
const STATISTICS_NOTES: &str = include_str!("../../notes/matchstatistics_notes.txt");

/// One feature-code explanation from the bundled football-data.co.uk notes.
#[derive(Debug, Clone, Serialize)]
pub struct FeatureNote {
    pub name: String,
    pub explanation: String,
}

/// Explanations for the schema's feature codes, split into
/// `(match results, match statistics)`.
pub(crate) fn get_notes() -> (Vec<FeatureNote>, Vec<FeatureNote>) {
    (parse_notes(RESULTS_NOTES), parse_notes(STATISTICS_NOTES))
}

/// Each line reads `CODE = explanation`; lines without the separator are
/// skipped.
fn parse_notes(raw: &str) -> Vec<FeatureNote> {
    raw.lines()
        .filter_map(|line| line.split_once(" = "))
        .map(|(name, explanation)| FeatureNote {
            name: name.trim().to_string(),
            explanation: explanation.trim().to_string(),
        })
        .collect()
}
