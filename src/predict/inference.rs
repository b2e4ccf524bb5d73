//! Model inference for price estimates

use log::warn;

use crate::features::{ColumnSchema, FeatureRow};
use crate::model::Forest;
use crate::predict::ImportanceTable;
use crate::{CarError, CarRecord, Config, Result};

/// Result of one prediction request
#[derive(Debug, Clone)]
pub struct PricePrediction {
    /// Estimated price in the configured currency
    pub price: f64,
    /// Indicator columns the record produced that the schema has no slot
    /// for; their field groups were zero-filled
    pub uncovered: Vec<String>,
}

/// Predictor for price estimates
///
/// Owns the loaded model and schema; both are read-only after
/// construction and the feature widths are verified to agree.
pub struct Predictor {
    forest: Forest,
    schema: ColumnSchema,
}

impl Predictor {
    /// Pair a model with its schema, verifying the widths agree
    pub fn new(forest: Forest, schema: ColumnSchema) -> Result<Self> {
        if forest.n_features() != schema.len() {
            return Err(CarError::SchemaMismatch {
                model_width: forest.n_features(),
                schema_width: schema.len(),
            });
        }
        Ok(Predictor { forest, schema })
    }

    /// Load both artifacts from the configured paths
    pub fn load(config: &Config) -> Result<Self> {
        let forest = Forest::load(&config.artifacts.model_path)?;
        let schema = ColumnSchema::load(&config.artifacts.columns_path)?;
        Self::new(forest, schema)
    }

    /// Estimate the price of one car
    pub fn predict(&self, record: &CarRecord) -> PricePrediction {
        let row = FeatureRow::from_record(record);
        let uncovered = row.uncovered_by(&self.schema);
        if !uncovered.is_empty() {
            warn!(
                "Schema has no column for {}; the affected groups encode as all zeros",
                uncovered.join(", ")
            );
        }
        let features = row.reindex(&self.schema);
        let price = self.forest.predict(&features);
        PricePrediction { price, uncovered }
    }

    /// Global feature-importance ranking, zipped to schema column names
    pub fn importances(&self) -> ImportanceTable {
        ImportanceTable::from_scores(self.schema.names(), self.forest.feature_importances())
    }

    pub fn schema(&self) -> &ColumnSchema {
        &self.schema
    }

    pub fn forest(&self) -> &Forest {
        &self.forest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Color, Make};
    use crate::model::forest::{TreeNodes, LEAF_CHILD, LEAF_FEATURE};
    use crate::{GearType, OptionsPackage};

    fn schema_of(names: &[&str]) -> ColumnSchema {
        ColumnSchema::new(names.iter().map(|s| s.to_string()).collect()).unwrap()
    }

    /// Splits on Year (feature 0) at 2010: older cars 20k, newer 60k
    fn year_stump_forest(n_features: usize) -> Forest {
        let tree = TreeNodes {
            feature: vec![0, LEAF_FEATURE, LEAF_FEATURE],
            threshold: vec![2010.0, 0.0, 0.0],
            left: vec![1, LEAF_CHILD, LEAF_CHILD],
            right: vec![2, LEAF_CHILD, LEAF_CHILD],
            value: vec![0.0, 20_000.0, 60_000.0],
        };
        let mut importances = vec![0.0; n_features];
        importances[0] = 1.0;
        Forest::new(n_features, vec![tree], importances).unwrap()
    }

    fn test_schema() -> ColumnSchema {
        schema_of(&[
            "Year",
            "Engine_Size",
            "Mileage",
            "Make_Toyota",
            "Color_White",
            "Options_Full",
            "Gear_Type_Automatic",
        ])
    }

    fn toyota(year: u16) -> CarRecord {
        CarRecord {
            make: Make::Toyota,
            year,
            color: Color::White,
            options: OptionsPackage::Full,
            gear_type: GearType::Automatic,
            engine_size: 2.5,
            mileage: 80_000,
        }
    }

    #[test]
    fn test_predict_follows_year_split() {
        let predictor = Predictor::new(year_stump_forest(7), test_schema()).unwrap();
        assert_eq!(predictor.predict(&toyota(2005)).price, 20_000.0);
        assert_eq!(predictor.predict(&toyota(2020)).price, 60_000.0);
    }

    #[test]
    fn test_predict_reports_full_coverage() {
        let predictor = Predictor::new(year_stump_forest(7), test_schema()).unwrap();
        assert!(predictor.predict(&toyota(2020)).uncovered.is_empty());
    }

    #[test]
    fn test_predict_reports_uncovered_columns() {
        let predictor = Predictor::new(year_stump_forest(7), test_schema()).unwrap();
        let record = CarRecord {
            make: Make::Ferrari,
            gear_type: GearType::Manual,
            ..toyota(2020)
        };
        let prediction = predictor.predict(&record);
        assert_eq!(
            prediction.uncovered,
            vec!["Gear_Type_Manual".to_string(), "Make_Ferrari".to_string()]
        );
        // Still predicts from whatever the schema does cover.
        assert_eq!(prediction.price, 60_000.0);
    }

    #[test]
    fn test_width_mismatch_is_rejected() {
        let result = Predictor::new(year_stump_forest(7), schema_of(&["Year", "Mileage"]));
        assert!(matches!(
            result,
            Err(CarError::SchemaMismatch {
                model_width: 7,
                schema_width: 2,
            })
        ));
    }

    #[test]
    fn test_importances_align_with_schema() {
        let predictor = Predictor::new(year_stump_forest(7), test_schema()).unwrap();
        let table = predictor.importances();
        assert_eq!(table.len(), 7);
        let top = table.top(1);
        assert_eq!(top[0].column, "Year");
        assert_eq!(top[0].score, 1.0);
    }
}
