use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::ops::Range;
use std::path::Path;

/// One dataset row, keyed by column name. Serializes as a plain JSON object,
/// which is the shape a multirow RFC table parameter expects.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    pub data: HashMap<String, serde_json::Value>,
}

/// Coarse category of a dataset column. The RFC side only distinguishes
/// character fields from packed decimals, so two kinds are enough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Text,
    Numeric,
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKind::Text => write!(f, "text"),
            ColumnKind::Numeric => write!(f, "numeric"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
}

/// A tabular dataset with ordered, kind-tagged columns.
#[derive(Debug, Clone)]
pub struct Dataset {
    columns: Vec<Column>,
    rows: Vec<Record>,
}

impl Dataset {
    pub fn new(columns: Vec<Column>, rows: Vec<Record>) -> Self {
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(file)
    }

    /// Reads a headered CSV and infers each column's kind: a column whose
    /// every non-empty cell parses as a number is `Numeric`, anything else
    /// (including a column with no values at all) is `Text`.
    pub fn from_csv_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let headers: Vec<String> = csv_reader.headers()?.iter().map(str::to_string).collect();

        let mut raw_rows = Vec::new();
        for record in csv_reader.records() {
            raw_rows.push(record?);
        }

        let mut numeric = vec![true; headers.len()];
        let mut has_value = vec![false; headers.len()];
        for row in &raw_rows {
            for (index, cell) in row.iter().enumerate().take(headers.len()) {
                let trimmed = cell.trim();
                if trimmed.is_empty() {
                    continue;
                }
                has_value[index] = true;
                if trimmed.parse::<f64>().is_err() {
                    numeric[index] = false;
                }
            }
        }

        let columns: Vec<Column> = headers
            .iter()
            .enumerate()
            .map(|(index, name)| Column {
                name: name.clone(),
                kind: if has_value[index] && numeric[index] {
                    ColumnKind::Numeric
                } else {
                    ColumnKind::Text
                },
            })
            .collect();

        let rows = raw_rows
            .iter()
            .map(|row| {
                let mut data = HashMap::new();
                for (column, cell) in columns.iter().zip(row.iter()) {
                    data.insert(column.name.clone(), parse_cell(cell, column.kind));
                }
                Record { data }
            })
            .collect();

        Ok(Self { columns, rows })
    }
}

fn parse_cell(raw: &str, kind: ColumnKind) -> serde_json::Value {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return serde_json::Value::Null;
    }
    match kind {
        ColumnKind::Numeric => {
            if let Ok(integer) = trimmed.parse::<i64>() {
                serde_json::Value::Number(integer.into())
            } else if let Some(number) = trimmed
                .parse::<f64>()
                .ok()
                .and_then(serde_json::Number::from_f64)
            {
                serde_json::Value::Number(number)
            } else {
                serde_json::Value::String(trimmed.to_string())
            }
        }
        ColumnKind::Text => serde_json::Value::String(raw.to_string()),
    }
}

/// An RFC parameter type as reported by the remote system. Only the two
/// types that constrain the dataset are distinguished; everything else is
/// carried through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RfcFieldType {
    Char,
    Bcd,
    Other(String),
}

impl RfcFieldType {
    pub fn type_name(&self) -> &str {
        match self {
            RfcFieldType::Char => "RFCTYPE_CHAR",
            RfcFieldType::Bcd => "RFCTYPE_BCD",
            RfcFieldType::Other(name) => name,
        }
    }

    /// The column kind this field type demands, if any. Types other than
    /// CHAR and BCD impose no constraint.
    pub fn required_kind(&self) -> Option<ColumnKind> {
        match self {
            RfcFieldType::Char => Some(ColumnKind::Text),
            RfcFieldType::Bcd => Some(ColumnKind::Numeric),
            RfcFieldType::Other(_) => None,
        }
    }
}

impl From<String> for RfcFieldType {
    fn from(name: String) -> Self {
        match name.as_str() {
            "RFCTYPE_CHAR" => RfcFieldType::Char,
            "RFCTYPE_BCD" => RfcFieldType::Bcd,
            _ => RfcFieldType::Other(name),
        }
    }
}

impl From<RfcFieldType> for String {
    fn from(field_type: RfcFieldType) -> Self {
        field_type.type_name().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RfcParameter {
    pub name: String,
    pub field_type: RfcFieldType,
}

/// The input schema of a remote function: its name and ordered parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionDescription {
    pub function: String,
    pub parameters: Vec<RfcParameter>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum BatchOutcome {
    Sent { result: serde_json::Value },
    Failed { error: String },
}

/// Outcome of one RFC call, recorded against the half-open row range it
/// carried.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResult {
    pub first_row: usize,
    pub end_row: usize,
    #[serde(flatten)]
    pub outcome: BatchOutcome,
}

impl BatchResult {
    pub fn rows(&self) -> Range<usize> {
        self.first_row..self.end_row
    }

    pub fn is_sent(&self) -> bool {
        matches!(self.outcome, BatchOutcome::Sent { .. })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestReport {
    pub function: String,
    pub table: String,
    pub total_rows: usize,
    pub batch_size: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub batches: Vec<BatchResult>,
}

impl IngestReport {
    pub fn sent_batches(&self) -> usize {
        self.batches.iter().filter(|b| b.is_sent()).count()
    }

    pub fn failed_batches(&self) -> usize {
        self.batches.len() - self.sent_batches()
    }
}
