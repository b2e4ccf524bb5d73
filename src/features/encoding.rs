//! One-hot encoding and schema alignment
//!
//! A record becomes an unordered column→value row first: numeric fields
//! under their own names, each categorical field as a single indicator
//! column named `<Field>_<value>`. Reindexing against the trained schema
//! then produces the ordered vector, filling zero for anything the row
//! does not mention. Absence in the row is what makes the zero-fill work,
//! so indicators for non-selected values are never inserted.

use crate::features::ColumnSchema;
use crate::CarRecord;

/// Column name for a categorical field taking a given value
pub fn indicator_column(field: &str, value: &str) -> String {
    format!("{}_{}", field, value)
}

/// Unordered column→value mapping for a single record
#[derive(Debug, Clone, Default)]
pub struct FeatureRow {
    columns: Vec<(String, f64)>,
}

impl FeatureRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the row for one car: numeric passthrough plus one indicator
    /// per categorical field
    pub fn from_record(record: &CarRecord) -> Self {
        let mut row = FeatureRow::new();
        for (name, value) in record.numeric_columns() {
            row.push(name, value);
        }
        for (field, value) in record.categorical_values() {
            row.push(indicator_column(field, value), 1.0);
        }
        row
    }

    pub fn push(&mut self, name: impl Into<String>, value: f64) {
        self.columns.push((name.into(), value));
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, f64)> {
        self.columns.iter().map(|(n, v)| (n.as_str(), *v))
    }

    /// Align onto the trained column order, zero-filling columns the row
    /// does not carry
    pub fn reindex(&self, schema: &ColumnSchema) -> Vec<f64> {
        schema
            .names()
            .iter()
            .map(|name| self.get(name).unwrap_or(0.0))
            .collect()
    }

    /// Columns of this row the schema has no slot for.
    ///
    /// A non-empty result means some field degrades to an all-zero group
    /// (a value the model never saw at training time); callers decide
    /// whether to warn.
    pub fn uncovered_by(&self, schema: &ColumnSchema) -> Vec<String> {
        self.columns
            .iter()
            .filter(|(name, _)| !schema.contains(name))
            .map(|(name, _)| name.clone())
            .collect()
    }
}

/// Encode one record against the trained schema.
///
/// Pure and deterministic: the result has exactly `schema.len()` entries
/// in schema order.
pub fn encode(record: &CarRecord, schema: &ColumnSchema) -> Vec<f64> {
    FeatureRow::from_record(record).reindex(schema)
}
