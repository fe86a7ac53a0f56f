//! CSV serialization of tabular views
//!
//! Escaping is deliberately minimal and matches the exports users already
//! have on disk: double quotes are doubled, and only cells containing a
//! comma are wrapped in quotes. A cell with quotes but no comma is written
//! unwrapped (`he said ""hi""`). Newlines are not escaped.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::error::PaintshopResult;

/// Notice shown when an export is requested for an empty table
pub const NOTHING_TO_EXPORT: &str = "Não há dados para exportar.";

/// A scalar cell of a flat record
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Number(f64),
    #[default]
    Absent,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            CellValue::Integer(n) => write!(f, "{}", n),
            CellValue::Number(n) => f.write_str(&format_number(*n)),
            CellValue::Absent => Ok(()),
        }
    }
}

/// Shortest decimal form; exponent form below 1e-6 and from 1e21 up
fn format_number(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }
    if n.is_infinite() {
        let text = if n > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }
    let magnitude = n.abs();
    if n.is_nan() || (1e-6..1e21).contains(&magnitude) {
        return n.to_string();
    }
    let exp = format!("{:e}", n);
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
        _ => exp,
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Integer(value)
    }
}

impl From<usize> for CellValue {
    fn from(value: usize) -> Self {
        CellValue::Integer(value as i64)
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        CellValue::Integer(i64::from(value))
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(CellValue::Absent)
    }
}

impl From<&Value> for CellValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => CellValue::Absent,
            Value::String(s) => CellValue::Text(s.clone()),
            Value::Number(n) => match n.as_i64() {
                Some(i) => CellValue::Integer(i),
                None => n.as_f64().map(CellValue::Number).unwrap_or_default(),
            },
            Value::Bool(b) => CellValue::Text(b.to_string()),
            other => CellValue::Text(other.to_string()),
        }
    }
}

/// A flat record: field name to scalar value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: HashMap<String, CellValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field setter
    pub fn with(mut self, key: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<CellValue>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Missing keys read as absent
    pub fn get(&self, key: &str) -> &CellValue {
        static ABSENT: CellValue = CellValue::Absent;
        self.fields.get(key).unwrap_or(&ABSENT)
    }

    /// Top-level fields of a JSON object; anything else yields an empty record
    pub fn from_json(value: &Value) -> Self {
        let fields = match value {
            Value::Object(map) => map
                .iter()
                .map(|(k, v)| (k.clone(), CellValue::from(v)))
                .collect(),
            _ => HashMap::new(),
        };
        Self { fields }
    }

    /// Flatten any serializable row through its JSON representation
    pub fn from_serialize<T: Serialize>(row: &T) -> PaintshopResult<Self> {
        Ok(Self::from_json(&serde_json::to_value(row)?))
    }
}

/// Ordered column selection: field key to display label
///
/// The order columns are added is the column order of the export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMapping {
    columns: Vec<(String, String)>,
}

impl HeaderMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn column(mut self, key: impl Into<String>, label: impl Into<String>) -> Self {
        self.columns.push((key.into(), label.into()));
        self
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(k, _)| k.as_str())
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(_, l)| l.as_str())
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl<K, L> FromIterator<(K, L)> for HeaderMapping
where
    K: Into<String>,
    L: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, L)>>(iter: I) -> Self {
        Self {
            columns: iter
                .into_iter()
                .map(|(k, l)| (k.into(), l.into()))
                .collect(),
        }
    }
}

/// A finished export: CSV text plus the file name it is delivered under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvArtifact {
    pub filename: String,
    pub text: String,
}

/// Escape one cell
pub fn escape_cell(value: &str) -> String {
    let escaped = value.replace('"', "\"\"");
    if escaped.contains(',') {
        format!("\"{}\"", escaped)
    } else {
        escaped
    }
}

/// Serialize `records` under `headers`
///
/// Returns `None` when there is nothing to export. Every line, the header
/// included, ends with `\n`.
pub fn to_csv(records: &[Record], headers: &HeaderMapping) -> Option<String> {
    if records.is_empty() {
        return None;
    }

    let mut out = headers.labels().collect::<Vec<_>>().join(",");
    out.push('\n');

    for record in records {
        let row: Vec<String> = headers
            .keys()
            .map(|key| escape_cell(&record.get(key).to_string()))
            .collect();
        out.push_str(&row.join(","));
        out.push('\n');
    }

    Some(out)
}

/// Serialize and name the export; `None` when there is nothing to export
pub fn build_artifact(
    records: &[Record],
    headers: &HeaderMapping,
    filename: &str,
) -> Option<CsvArtifact> {
    to_csv(records, headers).map(|text| CsvArtifact {
        filename: filename.to_string(),
        text,
    })
}
