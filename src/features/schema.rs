//! Trained column schema
//!
//! The ordered column list persisted at training time. It is the contract
//! between the encoder and the model: every feature vector must follow
//! exactly this order and length.

use std::fs::File;
use std::io::BufReader;

use log::info;

use crate::{CarError, Result};

/// Ordered sequence of trained column names, read-only after load
#[derive(Debug, Clone)]
pub struct ColumnSchema {
    names: Vec<String>,
}

impl ColumnSchema {
    /// Build a schema from an ordered column list.
    ///
    /// Rejects empty lists and duplicate names, since either would make
    /// reindexing ambiguous.
    pub fn new(names: Vec<String>) -> Result<Self> {
        if names.is_empty() {
            return Err(CarError::InvalidSchema("column list is empty".to_string()));
        }
        for (i, name) in names.iter().enumerate() {
            if names[..i].contains(name) {
                return Err(CarError::InvalidSchema(format!(
                    "duplicate column name: {}",
                    name
                )));
            }
        }
        Ok(ColumnSchema { names })
    }

    /// Load the schema artifact (a JSON array of column names)
    pub fn load(path: &str) -> Result<Self> {
        let file = File::open(path).map_err(|e| CarError::ArtifactLoad {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        let names: Vec<String> =
            serde_json::from_reader(BufReader::new(file)).map_err(|e| CarError::ArtifactLoad {
                path: path.to_string(),
                message: e.to_string(),
            })?;
        let schema = Self::new(names)?;
        info!("Loaded schema with {} columns from {}", schema.len(), path);
        Ok(schema)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Position of a column in the trained order, if present
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema_of(names: &[&str]) -> ColumnSchema {
        ColumnSchema::new(names.iter().map(|s| s.to_string()).collect()).unwrap()
    }

    #[test]
    fn test_position_follows_input_order() {
        let schema = schema_of(&["Year", "Engine_Size", "Make_Toyota"]);
        assert_eq!(schema.len(), 3);
        assert_eq!(schema.position("Year"), Some(0));
        assert_eq!(schema.position("Make_Toyota"), Some(2));
        assert_eq!(schema.position("Make_Kia"), None);
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(
            ColumnSchema::new(vec![]),
            Err(CarError::InvalidSchema(_))
        ));
    }

    #[test]
    fn test_rejects_duplicates() {
        let names = vec!["Year".to_string(), "Year".to_string()];
        assert!(matches!(
            ColumnSchema::new(names),
            Err(CarError::InvalidSchema(_))
        ));
    }
}
