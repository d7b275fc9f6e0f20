// File: crates/atlas-data/src/record.rs
// Summary: Immutable country records, the indicator enum, and dataset views.

/// The six numeric well-being indicators carried by every record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Indicator {
    LogGdpPerCapita,
    SocialSupport,
    HealthyLifeExpectancy,
    Freedom,
    Generosity,
    Corruption,
}

impl Indicator {
    pub const ALL: [Indicator; 6] = [
        Indicator::LogGdpPerCapita,
        Indicator::SocialSupport,
        Indicator::HealthyLifeExpectancy,
        Indicator::Freedom,
        Indicator::Generosity,
        Indicator::Corruption,
    ];

    /// Full column label, used on heatmap axes.
    pub fn label(self) -> &'static str {
        match self {
            Indicator::LogGdpPerCapita => "Log GDP per capita",
            Indicator::SocialSupport => "Social support",
            Indicator::HealthyLifeExpectancy => "Healthy life expectancy",
            Indicator::Freedom => "Freedom to make life choices",
            Indicator::Generosity => "Generosity",
            Indicator::Corruption => "Perceptions of corruption",
        }
    }

    /// Compact label for tight layouts (radar spokes, pie slices).
    pub fn short_label(self) -> &'static str {
        match self {
            Indicator::LogGdpPerCapita => "GDP",
            Indicator::SocialSupport => "Social support",
            Indicator::HealthyLifeExpectancy => "Health",
            Indicator::Freedom => "Freedom",
            Indicator::Generosity => "Generosity",
            Indicator::Corruption => "Corruption",
        }
    }
}

/// One country-year observation. Numeric indicator fields are `None` when
/// the source cell was missing or unparseable; whisker bounds default to 0.
#[derive(Clone, Debug)]
pub struct Record {
    pub country: String,
    pub region: String,
    pub ladder_score: f64,
    pub upper_whisker: f64,
    pub lower_whisker: f64,
    pub log_gdp_per_capita: Option<f64>,
    pub social_support: Option<f64>,
    pub healthy_life_expectancy: Option<f64>,
    pub freedom: Option<f64>,
    pub generosity: Option<f64>,
    pub corruption: Option<f64>,
    pub dystopia_residual: Option<f64>,
}

impl Record {
    /// Indicator value with missing cells surfaced as NaN, so absence stays
    /// visible to downstream encodings instead of masquerading as data.
    pub fn indicator(&self, ind: Indicator) -> f64 {
        let v = match ind {
            Indicator::LogGdpPerCapita => self.log_gdp_per_capita,
            Indicator::SocialSupport => self.social_support,
            Indicator::HealthyLifeExpectancy => self.healthy_life_expectancy,
            Indicator::Freedom => self.freedom,
            Indicator::Generosity => self.generosity,
            Indicator::Corruption => self.corruption,
        };
        v.unwrap_or(f64::NAN)
    }
}

/// Fixed-order, read-only record sequence loaded once per run.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Top `n` records by ladder score, descending. Records without a finite
    /// score are excluded; equal scores keep their input order (stable sort).
    pub fn top_by_score(&self, n: usize) -> Vec<&Record> {
        let mut ranked: Vec<&Record> = self
            .records
            .iter()
            .filter(|r| r.ladder_score.is_finite())
            .collect();
        ranked.sort_by(|a, b| {
            b.ladder_score
                .partial_cmp(&a.ladder_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked.truncate(n);
        ranked
    }

    /// Group records by region in first-seen order.
    pub fn group_by_region(&self) -> Vec<(String, Vec<&Record>)> {
        let mut groups: Vec<(String, Vec<&Record>)> = Vec::new();
        for r in &self.records {
            match groups.iter_mut().find(|(name, _)| *name == r.region) {
                Some((_, members)) => members.push(r),
                None => groups.push((r.region.clone(), vec![r])),
            }
        }
        groups
    }

    /// Case-insensitive exact match on the country name.
    pub fn find_country(&self, name: &str) -> Option<&Record> {
        self.records
            .iter()
            .find(|r| r.country.eq_ignore_ascii_case(name))
    }

    /// All values of one indicator in record order (NaN where missing).
    pub fn indicator_values(&self, ind: Indicator) -> Vec<f64> {
        self.records.iter().map(|r| r.indicator(ind)).collect()
    }

    pub fn ladder_scores(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.ladder_score).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(country: &str, region: &str, score: f64) -> Record {
        Record {
            country: country.to_string(),
            region: region.to_string(),
            ladder_score: score,
            upper_whisker: 0.0,
            lower_whisker: 0.0,
            log_gdp_per_capita: None,
            social_support: None,
            healthy_life_expectancy: None,
            freedom: None,
            generosity: None,
            corruption: None,
            dystopia_residual: None,
        }
    }

    #[test]
    fn top_by_score_is_stable_on_ties() {
        let ds = Dataset::new(vec![
            rec("A", "r1", 5.0),
            rec("B", "r1", 7.0),
            rec("C", "r2", 5.0),
            rec("D", "r2", f64::NAN),
        ]);
        let top = ds.top_by_score(3);
        let names: Vec<&str> = top.iter().map(|r| r.country.as_str()).collect();
        // Tie between A and C resolves to input order; NaN score drops out.
        assert_eq!(names, vec!["B", "A", "C"]);

        let again: Vec<&str> = ds.top_by_score(3).iter().map(|r| r.country.as_str()).collect();
        assert_eq!(names, again);
    }

    #[test]
    fn group_by_region_keeps_first_seen_order() {
        let ds = Dataset::new(vec![
            rec("A", "South", 1.0),
            rec("B", "North", 2.0),
            rec("C", "South", 3.0),
        ]);
        let groups = ds.group_by_region();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "South");
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0, "North");
    }

    #[test]
    fn find_country_ignores_case() {
        let ds = Dataset::new(vec![rec("Colombia", "LatAm", 6.0)]);
        assert!(ds.find_country("colombia").is_some());
        assert!(ds.find_country("COLOMBIA").is_some());
        assert!(ds.find_country("Colombi").is_none());
    }

    #[test]
    fn missing_indicator_reads_as_nan() {
        let r = rec("A", "r", 5.0);
        assert!(r.indicator(Indicator::Generosity).is_nan());
    }
}
