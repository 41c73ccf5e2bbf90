//! Solution stage - type-coercion and missing-value illustration.
//!
//! The panel shows a fixed survey extract whose columns mix integers,
//! numeric strings, and missing values, then the result of coercing both
//! columns to numbers and dropping incomplete rows.

use serde::Serialize;

/// A loosely-typed survey cell before cleaning.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Int(i64),
    Text(String),
    Missing,
}

impl CellValue {
    fn text(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }

    /// Numeric coercion: integers pass through, strings parse or become
    /// missing, missing stays missing.
    fn to_numeric(&self) -> Option<f64> {
        match self {
            CellValue::Int(value) => Some(*value as f64),
            CellValue::Text(value) => value.trim().parse().ok(),
            CellValue::Missing => None,
        }
    }
}

/// One row of the raw extract.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawRecord {
    pub age: CellValue,
    pub purchases: CellValue,
}

/// One row that survived cleaning.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleanRecord {
    pub age: f64,
    pub purchases: f64,
}

/// The rendered cleaning panel: the extract before and after.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataCleaningOutput {
    pub raw: Vec<RawRecord>,
    pub cleaned: Vec<CleanRecord>,
}

/// The fixed illustrative extract.
fn sample_records() -> Vec<RawRecord> {
    vec![
        RawRecord {
            age: CellValue::Int(25),
            purchases: CellValue::text("1"),
        },
        RawRecord {
            age: CellValue::text("30"),
            purchases: CellValue::text("2"),
        },
        RawRecord {
            age: CellValue::Missing,
            purchases: CellValue::text("3"),
        },
        RawRecord {
            age: CellValue::Int(22),
            purchases: CellValue::Missing,
        },
        RawRecord {
            age: CellValue::text("不明"),
            purchases: CellValue::text("5"),
        },
    ]
}

/// Coerces both columns to numbers and drops rows with any missing value.
pub fn render_data_cleaning() -> DataCleaningOutput {
    let raw = sample_records();
    let cleaned = raw
        .iter()
        .filter_map(|record| {
            let age = record.age.to_numeric()?;
            let purchases = record.purchases.to_numeric()?;
            Some(CleanRecord { age, purchases })
        })
        .collect();
    DataCleaningOutput { raw, cleaned }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_has_five_raw_rows() {
        assert_eq!(render_data_cleaning().raw.len(), 5);
    }

    #[test]
    fn only_fully_numeric_rows_survive() {
        let output = render_data_cleaning();
        assert_eq!(
            output.cleaned,
            vec![
                CleanRecord {
                    age: 25.0,
                    purchases: 1.0
                },
                CleanRecord {
                    age: 30.0,
                    purchases: 2.0
                },
            ]
        );
    }

    #[test]
    fn unparsable_text_coerces_to_missing() {
        assert_eq!(CellValue::text("不明").to_numeric(), None);
        assert_eq!(CellValue::text("30").to_numeric(), Some(30.0));
        assert_eq!(CellValue::Missing.to_numeric(), None);
    }

    #[test]
    fn rendering_is_deterministic() {
        assert_eq!(render_data_cleaning(), render_data_cleaning());
    }
}
