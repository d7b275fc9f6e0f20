// File: crates/atlas-data/src/schema.rs
// Summary: Declarative header-normalization table resolved once at load time.

use crate::error::DataError;

/// Logical dataset columns, independent of how the CSV spells them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Country,
    Region,
    LadderScore,
    UpperWhisker,
    LowerWhisker,
    LogGdpPerCapita,
    SocialSupport,
    HealthyLifeExpectancy,
    Freedom,
    Generosity,
    Corruption,
    DystopiaResidual,
}

pub const FIELD_COUNT: usize = 12;

impl Field {
    pub const ALL: [Field; FIELD_COUNT] = [
        Field::Country,
        Field::Region,
        Field::LadderScore,
        Field::UpperWhisker,
        Field::LowerWhisker,
        Field::LogGdpPerCapita,
        Field::SocialSupport,
        Field::HealthyLifeExpectancy,
        Field::Freedom,
        Field::Generosity,
        Field::Corruption,
        Field::DystopiaResidual,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// One column description: canonical name, accepted header spellings, and
/// whether the loader refuses to proceed without it.
pub struct ColumnSpec {
    pub field: Field,
    pub canonical: &'static str,
    pub synonyms: &'static [&'static str],
    pub required: bool,
}

/// The whole header contract in one place. Synonyms are compared
/// case-insensitively after trimming, which also absorbs capitalization
/// variants like `upperWhisker` and `Regional Indicator`.
pub const COLUMNS: [ColumnSpec; FIELD_COUNT] = [
    ColumnSpec {
        field: Field::Country,
        canonical: "Country name",
        synonyms: &["country name", "country"],
        required: true,
    },
    ColumnSpec {
        field: Field::Region,
        canonical: "Regional indicator",
        synonyms: &["regional indicator", "regional", "region"],
        required: true,
    },
    ColumnSpec {
        field: Field::LadderScore,
        canonical: "Ladder score",
        synonyms: &["ladder score", "life ladder"],
        required: true,
    },
    ColumnSpec {
        field: Field::UpperWhisker,
        canonical: "upperwhisker",
        synonyms: &["upperwhisker", "upper whisker"],
        required: false,
    },
    ColumnSpec {
        field: Field::LowerWhisker,
        canonical: "lowerwhisker",
        synonyms: &["lowerwhisker", "lower whisker"],
        required: false,
    },
    ColumnSpec {
        field: Field::LogGdpPerCapita,
        canonical: "Log GDP per capita",
        // "Log GD per capita" is a known misspelling in published exports.
        synonyms: &["log gdp per capita", "log gd per capita"],
        required: false,
    },
    ColumnSpec {
        field: Field::SocialSupport,
        canonical: "Social support",
        synonyms: &["social support"],
        required: false,
    },
    ColumnSpec {
        field: Field::HealthyLifeExpectancy,
        canonical: "Healthy life expectancy",
        synonyms: &["healthy life expectancy"],
        required: false,
    },
    ColumnSpec {
        field: Field::Freedom,
        canonical: "Freedom to make life choices",
        synonyms: &["freedom to make life choices", "freedom"],
        required: false,
    },
    ColumnSpec {
        field: Field::Generosity,
        canonical: "Generosity",
        synonyms: &["generosity"],
        required: false,
    },
    ColumnSpec {
        field: Field::Corruption,
        canonical: "Perceptions of corruption",
        synonyms: &["perceptions of corruption", "corruption"],
        required: false,
    },
    ColumnSpec {
        field: Field::DystopiaResidual,
        canonical: "Dystopia + residual",
        synonyms: &["dystopia + residual", "dystopia and residual", "dystopia residual"],
        required: false,
    },
];

pub fn spec(field: Field) -> &'static ColumnSpec {
    &COLUMNS[field.index()]
}

/// Header positions resolved against one CSV header row.
pub struct HeaderMap {
    indices: [Option<usize>; FIELD_COUNT],
}

impl HeaderMap {
    /// Resolve the declarative table against `headers`. Every required
    /// column must match one synonym or resolution fails with the column's
    /// canonical name.
    pub fn resolve(headers: &csv::StringRecord) -> Result<Self, DataError> {
        let normalized: Vec<String> = headers
            .iter()
            .map(|h| h.trim().to_ascii_lowercase())
            .collect();

        let mut indices = [None; FIELD_COUNT];
        for col in &COLUMNS {
            indices[col.field.index()] = col
                .synonyms
                .iter()
                .find_map(|syn| normalized.iter().position(|h| h == syn));
            if col.required && indices[col.field.index()].is_none() {
                return Err(DataError::ColumnMissing(col.canonical));
            }
        }
        Ok(Self { indices })
    }

    pub fn get(&self, field: Field) -> Option<usize> {
        self.indices[field.index()]
    }

    /// Optional columns the header did not carry at all.
    pub fn absent_columns(&self) -> Vec<&'static str> {
        COLUMNS
            .iter()
            .filter(|c| self.indices[c.field.index()].is_none())
            .map(|c| c.canonical)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(cols: &[&str]) -> csv::StringRecord {
        csv::StringRecord::from(cols.to_vec())
    }

    #[test]
    fn resolves_canonical_header() {
        let h = header(&[
            "Country name",
            "Regional indicator",
            "Ladder score",
            "upperwhisker",
            "lowerwhisker",
            "Log GDP per capita",
        ]);
        let map = HeaderMap::resolve(&h).unwrap();
        assert_eq!(map.get(Field::Country), Some(0));
        assert_eq!(map.get(Field::LogGdpPerCapita), Some(5));
        assert_eq!(map.get(Field::Generosity), None);
    }

    #[test]
    fn resolves_synonyms_and_capitalization() {
        let h = header(&[
            "Country name",
            "Regional Indicator",
            "Ladder score",
            "upperWhisker",
            "Log GD per capita",
        ]);
        let map = HeaderMap::resolve(&h).unwrap();
        assert_eq!(map.get(Field::Region), Some(1));
        assert_eq!(map.get(Field::UpperWhisker), Some(3));
        assert_eq!(map.get(Field::LogGdpPerCapita), Some(4));
    }

    #[test]
    fn missing_required_column_is_named() {
        let h = header(&["Country name", "Regional indicator"]);
        let err = HeaderMap::resolve(&h).err().expect("resolution should fail");
        match err {
            DataError::ColumnMissing(name) => assert_eq!(name, "Ladder score"),
            other => panic!("expected ColumnMissing, got {other}"),
        }
    }

    #[test]
    fn absent_optional_columns_are_listed() {
        let h = header(&["Country name", "Regional indicator", "Ladder score"]);
        let map = HeaderMap::resolve(&h).unwrap();
        let absent = map.absent_columns();
        assert!(absent.contains(&"Log GDP per capita"));
        assert!(absent.contains(&"upperwhisker"));
        assert!(!absent.contains(&"Ladder score"));
    }
}
