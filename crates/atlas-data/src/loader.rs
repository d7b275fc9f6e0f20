// File: crates/atlas-data/src/loader.rs
// Summary: CSV loader; builds immutable records plus a report of defaulted cells.

use std::io::Read;
use std::path::Path;

use crate::error::DataError;
use crate::record::{Dataset, Record};
use crate::schema::{spec, Field, HeaderMap};

/// One cell the loader could not parse; `row` is the 1-based data row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DefaultedCell {
    pub row: usize,
    pub column: &'static str,
}

/// What the loader had to invent: absent optional columns, cells that were
/// missing or unparseable (and so became NaN/None/0), and rows it skipped
/// for lacking a country name.
#[derive(Clone, Debug, Default)]
pub struct LoadReport {
    pub missing_columns: Vec<&'static str>,
    pub defaulted_cells: Vec<DefaultedCell>,
    pub skipped_rows: usize,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.missing_columns.is_empty() && self.defaulted_cells.is_empty() && self.skipped_rows == 0
    }

    /// One-line operator summary, printed by the demo after loading.
    pub fn summary(&self) -> String {
        if self.is_clean() {
            return "all columns present, all cells parsed".to_string();
        }
        format!(
            "{} absent column(s), {} defaulted cell(s), {} skipped row(s)",
            self.missing_columns.len(),
            self.defaulted_cells.len(),
            self.skipped_rows
        )
    }
}

/// Load a dataset from a CSV file on disk.
pub fn load_path(path: impl AsRef<Path>) -> Result<(Dataset, LoadReport), DataError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(DataError::FileNotFound(path.display().to_string()));
    }
    let rdr = csv::ReaderBuilder::new().has_headers(true).from_path(path)?;
    load_from(rdr)
}

/// Load a dataset from any reader (tests feed in-memory CSV text).
pub fn load_reader<R: Read>(reader: R) -> Result<(Dataset, LoadReport), DataError> {
    let rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
    load_from(rdr)
}

fn load_from<R: Read>(mut rdr: csv::Reader<R>) -> Result<(Dataset, LoadReport), DataError> {
    let map = HeaderMap::resolve(rdr.headers()?)?;

    let mut report = LoadReport {
        missing_columns: map.absent_columns(),
        ..LoadReport::default()
    };
    let mut records = Vec::new();

    for rec in rdr.records() {
        let rec = rec?;
        let row = records.len() + report.skipped_rows + 1;

        let country = cell(&rec, &map, Field::Country).unwrap_or_default();
        if country.is_empty() {
            report.skipped_rows += 1;
            continue;
        }
        let region = cell(&rec, &map, Field::Region).unwrap_or_default();

        // The score column is required; a bad cell still becomes NaN so the
        // gap stays visible downstream, but it is reported here.
        let ladder_score =
            numeric(&rec, &map, Field::LadderScore, row, &mut report).unwrap_or(f64::NAN);
        let upper_whisker = whisker(&rec, &map, Field::UpperWhisker, row, &mut report);
        let lower_whisker = whisker(&rec, &map, Field::LowerWhisker, row, &mut report);

        records.push(Record {
            country,
            region,
            ladder_score,
            upper_whisker,
            lower_whisker,
            log_gdp_per_capita: numeric(&rec, &map, Field::LogGdpPerCapita, row, &mut report),
            social_support: numeric(&rec, &map, Field::SocialSupport, row, &mut report),
            healthy_life_expectancy: numeric(
                &rec,
                &map,
                Field::HealthyLifeExpectancy,
                row,
                &mut report,
            ),
            freedom: numeric(&rec, &map, Field::Freedom, row, &mut report),
            generosity: numeric(&rec, &map, Field::Generosity, row, &mut report),
            corruption: numeric(&rec, &map, Field::Corruption, row, &mut report),
            dystopia_residual: numeric(&rec, &map, Field::DystopiaResidual, row, &mut report),
        });
    }

    if records.is_empty() {
        return Err(DataError::Empty);
    }
    Ok((Dataset::new(records), report))
}

fn cell(rec: &csv::StringRecord, map: &HeaderMap, field: Field) -> Option<String> {
    map.get(field)
        .and_then(|i| rec.get(i))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Parse one numeric cell. A present-but-bad cell is reported per row; a
/// column absent from the header was already reported once, wholesale.
fn numeric(
    rec: &csv::StringRecord,
    map: &HeaderMap,
    field: Field,
    row: usize,
    report: &mut LoadReport,
) -> Option<f64> {
    let idx = map.get(field)?;
    let raw = rec.get(idx).map(str::trim).unwrap_or("");
    match raw.parse::<f64>() {
        Ok(v) => Some(v),
        Err(_) => {
            report.defaulted_cells.push(DefaultedCell {
                row,
                column: spec(field).canonical,
            });
            None
        }
    }
}

/// Whisker bounds default to 0 rather than NaN when absent.
fn whisker(
    rec: &csv::StringRecord,
    map: &HeaderMap,
    field: Field,
    row: usize,
    report: &mut LoadReport,
) -> f64 {
    numeric(rec, map, field, row, report).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Indicator;

    const FIXTURE: &str = "\
Country name,Regional indicator,Ladder score,upperwhisker,lowerwhisker,Log GDP per capita,Social support,Healthy life expectancy,Freedom to make life choices,Generosity,Perceptions of corruption,Dystopia + residual
Finland,Western Europe,7.74,7.81,7.67,10.8,0.97,71.5,0.96,-0.02,0.18,2.27
Denmark,Western Europe,7.58,7.67,7.50,10.9,0.95,71.2,0.95,0.13,0.20,2.10
Iceland,Western Europe,7.52,7.62,7.42,10.9,0.98,72.0,0.95,0.21,0.67,2.00
Colombia,Latin America and Caribbean,5.69,5.80,5.57,,0.85,67.0,0.82,-0.10,0.84,1.90
Lesotho,Sub-Saharan Africa,3.19,3.34,3.04,7.6,0.67,51.5,0.71,-0.07,0.74,0.75
";

    #[test]
    fn loads_fixture_and_reports_missing_gdp() {
        let (ds, report) = load_reader(FIXTURE.as_bytes()).unwrap();
        assert_eq!(ds.len(), 5);

        let colombia = ds.find_country("Colombia").unwrap();
        assert!(colombia.log_gdp_per_capita.is_none());
        assert!(colombia.indicator(Indicator::LogGdpPerCapita).is_nan());

        assert_eq!(report.defaulted_cells.len(), 1);
        assert_eq!(
            report.defaulted_cells[0],
            DefaultedCell { row: 4, column: "Log GDP per capita" }
        );
        assert!(report.missing_columns.is_empty());
    }

    #[test]
    fn whiskers_default_to_zero_when_column_absent() {
        let csv = "\
Country name,Regional indicator,Ladder score
Finland,Western Europe,7.74
";
        let (ds, report) = load_reader(csv.as_bytes()).unwrap();
        assert_eq!(ds.records[0].upper_whisker, 0.0);
        assert_eq!(ds.records[0].lower_whisker, 0.0);
        assert!(report.missing_columns.contains(&"upperwhisker"));
        assert!(report.missing_columns.contains(&"lowerwhisker"));
        // Absent columns are reported once, not per cell.
        assert!(report.defaulted_cells.is_empty());
    }

    #[test]
    fn missing_score_column_fails_loudly() {
        let csv = "\
Country name,Regional indicator
Finland,Western Europe
";
        let err = load_reader(csv.as_bytes()).err().expect("should fail");
        assert!(matches!(err, DataError::ColumnMissing("Ladder score")));
    }

    #[test]
    fn blank_country_rows_are_skipped_and_counted() {
        let csv = "\
Country name,Regional indicator,Ladder score
Finland,Western Europe,7.74
,Western Europe,7.00
";
        let (ds, report) = load_reader(csv.as_bytes()).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(report.skipped_rows, 1);
    }

    #[test]
    fn unparseable_score_becomes_nan_but_is_reported() {
        let csv = "\
Country name,Regional indicator,Ladder score
Finland,Western Europe,n/a
Denmark,Western Europe,7.58
";
        let (ds, report) = load_reader(csv.as_bytes()).unwrap();
        assert!(ds.records[0].ladder_score.is_nan());
        assert_eq!(ds.records[1].ladder_score, 7.58);
        assert_eq!(report.defaulted_cells[0].column, "Ladder score");
    }

    #[test]
    fn empty_input_is_an_error() {
        let csv = "Country name,Regional indicator,Ladder score\n";
        assert!(matches!(load_reader(csv.as_bytes()), Err(DataError::Empty)));
    }
}
