//! Random-forest regressor loaded from a serialized artifact
//!
//! The artifact stores each tree as flat node arrays (children, split
//! feature, threshold, leaf value) plus the importances computed at
//! training time. Structural validation happens once at load; after that
//! prediction is a plain threshold descent per tree.

use std::fs::File;
use std::io::BufReader;

use log::info;
use serde::{Deserialize, Serialize};

use crate::{CarError, Result};

/// Sentinel in `feature` marking a leaf node
pub const LEAF_FEATURE: i32 = -2;
/// Sentinel in `left`/`right` marking a missing child
pub const LEAF_CHILD: i32 = -1;

/// One decision tree as parallel node arrays
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeNodes {
    /// Split feature index per node, `LEAF_FEATURE` for leaves
    pub feature: Vec<i32>,
    /// Split threshold per node, unused at leaves
    pub threshold: Vec<f64>,
    /// Left child index per node (taken when x <= threshold)
    pub left: Vec<i32>,
    /// Right child index per node
    pub right: Vec<i32>,
    /// Regression value per node, read at the reached leaf
    pub value: Vec<f64>,
}

impl TreeNodes {
    pub fn len(&self) -> usize {
        self.feature.len()
    }

    pub fn is_empty(&self) -> bool {
        self.feature.is_empty()
    }

    /// Walk the tree for one feature vector and return the leaf value.
    ///
    /// Assumes the tree passed [`TreeNodes::check`]: children always point
    /// forward, so the walk terminates.
    fn decide(&self, features: &[f64]) -> f64 {
        let mut node = 0usize;
        while self.feature[node] >= 0 {
            let f = self.feature[node] as usize;
            node = if features[f] <= self.threshold[node] {
                self.left[node] as usize
            } else {
                self.right[node] as usize
            };
        }
        self.value[node]
    }

    /// Structural checks for one tree
    fn check(&self, n_features: usize) -> std::result::Result<(), String> {
        let n = self.len();
        if n == 0 {
            return Err("tree has no nodes".to_string());
        }
        if self.threshold.len() != n
            || self.left.len() != n
            || self.right.len() != n
            || self.value.len() != n
        {
            return Err(format!(
                "node arrays disagree on length: feature={}, threshold={}, left={}, right={}, value={}",
                n,
                self.threshold.len(),
                self.left.len(),
                self.right.len(),
                self.value.len()
            ));
        }
        for i in 0..n {
            let f = self.feature[i];
            if f >= 0 {
                if f as usize >= n_features {
                    return Err(format!(
                        "node {} splits on feature {} but the model has {} features",
                        i, f, n_features
                    ));
                }
                // Children must point forward so traversal terminates.
                for child in [self.left[i], self.right[i]] {
                    if child <= i as i32 || child as usize >= n {
                        return Err(format!("node {} has out-of-order child {}", i, child));
                    }
                }
            } else if f == LEAF_FEATURE {
                if self.left[i] != LEAF_CHILD || self.right[i] != LEAF_CHILD {
                    return Err(format!("leaf node {} has children", i));
                }
            } else {
                return Err(format!("node {} has invalid feature index {}", i, f));
            }
        }
        Ok(())
    }
}

/// Random-forest regression model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Forest {
    n_features: usize,
    trees: Vec<TreeNodes>,
    feature_importances: Vec<f64>,
}

impl Forest {
    pub fn new(
        n_features: usize,
        trees: Vec<TreeNodes>,
        feature_importances: Vec<f64>,
    ) -> Result<Self> {
        let forest = Forest {
            n_features,
            trees,
            feature_importances,
        };
        forest.validate()?;
        Ok(forest)
    }

    /// Load and validate the model artifact (JSON)
    pub fn load(path: &str) -> Result<Self> {
        let file = File::open(path).map_err(|e| CarError::ArtifactLoad {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        let forest: Forest =
            serde_json::from_reader(BufReader::new(file)).map_err(|e| CarError::ArtifactLoad {
                path: path.to_string(),
                message: e.to_string(),
            })?;
        forest.validate()?;
        info!(
            "Loaded forest with {} trees over {} features from {}",
            forest.n_trees(),
            forest.n_features(),
            path
        );
        Ok(forest)
    }

    /// Structural validation, run once after deserialization
    pub fn validate(&self) -> Result<()> {
        if self.trees.is_empty() {
            return Err(CarError::InvalidModel("forest has no trees".to_string()));
        }
        if self.n_features == 0 {
            return Err(CarError::InvalidModel(
                "model declares zero features".to_string(),
            ));
        }
        for (i, tree) in self.trees.iter().enumerate() {
            tree.check(self.n_features)
                .map_err(|msg| CarError::InvalidModel(format!("tree {}: {}", i, msg)))?;
        }
        if self.feature_importances.len() != self.n_features {
            return Err(CarError::InvalidModel(format!(
                "{} importances for {} features",
                self.feature_importances.len(),
                self.n_features
            )));
        }
        if let Some(bad) = self
            .feature_importances
            .iter()
            .find(|s| !s.is_finite() || **s < 0.0)
        {
            return Err(CarError::InvalidModel(format!(
                "importance score {} is negative or not finite",
                bad
            )));
        }
        Ok(())
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }

    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }

    /// Predict a price for one encoded feature vector.
    ///
    /// `features` must have exactly `n_features` entries; the predictor
    /// guarantees this by construction.
    pub fn predict(&self, features: &[f64]) -> f64 {
        debug_assert_eq!(features.len(), self.n_features);
        let sum: f64 = self.trees.iter().map(|t| t.decide(features)).sum();
        sum / self.trees.len() as f64
    }

    /// Global importance scores, one per feature in schema order
    pub fn feature_importances(&self) -> &[f64] {
        &self.feature_importances
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Single split on feature 0 at `threshold`: low_value left, high_value right
    fn stump(threshold: f64, low_value: f64, high_value: f64) -> TreeNodes {
        TreeNodes {
            feature: vec![0, LEAF_FEATURE, LEAF_FEATURE],
            threshold: vec![threshold, 0.0, 0.0],
            left: vec![1, LEAF_CHILD, LEAF_CHILD],
            right: vec![2, LEAF_CHILD, LEAF_CHILD],
            value: vec![0.0, low_value, high_value],
        }
    }

    fn leaf(value: f64) -> TreeNodes {
        TreeNodes {
            feature: vec![LEAF_FEATURE],
            threshold: vec![0.0],
            left: vec![LEAF_CHILD],
            right: vec![LEAF_CHILD],
            value: vec![value],
        }
    }

    #[test]
    fn test_stump_descent() {
        let forest = Forest::new(2, vec![stump(2010.0, 20_000.0, 60_000.0)], vec![1.0, 0.0])
            .unwrap();
        assert_eq!(forest.predict(&[2005.0, 0.0]), 20_000.0);
        assert_eq!(forest.predict(&[2020.0, 0.0]), 60_000.0);
        // Ties go left
        assert_eq!(forest.predict(&[2010.0, 0.0]), 20_000.0);
    }

    #[test]
    fn test_prediction_averages_trees() {
        let forest = Forest::new(1, vec![leaf(10_000.0), leaf(30_000.0)], vec![1.0]).unwrap();
        assert_eq!(forest.predict(&[0.0]), 20_000.0);
    }

    #[test]
    fn test_two_level_tree() {
        // feature 0 <= 5 -> feature 1 <= 1 ? 100 : 200, else 300
        let tree = TreeNodes {
            feature: vec![0, 1, LEAF_FEATURE, LEAF_FEATURE, LEAF_FEATURE],
            threshold: vec![5.0, 1.0, 0.0, 0.0, 0.0],
            left: vec![1, 2, LEAF_CHILD, LEAF_CHILD, LEAF_CHILD],
            right: vec![4, 3, LEAF_CHILD, LEAF_CHILD, LEAF_CHILD],
            value: vec![0.0, 0.0, 100.0, 200.0, 300.0],
        };
        let forest = Forest::new(2, vec![tree], vec![0.5, 0.5]).unwrap();
        assert_eq!(forest.predict(&[3.0, 0.5]), 100.0);
        assert_eq!(forest.predict(&[3.0, 2.0]), 200.0);
        assert_eq!(forest.predict(&[7.0, 0.0]), 300.0);
    }

    #[test]
    fn test_rejects_empty_forest() {
        assert!(matches!(
            Forest::new(1, vec![], vec![1.0]),
            Err(CarError::InvalidModel(_))
        ));
    }

    #[test]
    fn test_rejects_backward_child() {
        // Right child points at the root, which would loop forever.
        let tree = TreeNodes {
            feature: vec![0, LEAF_FEATURE, LEAF_FEATURE],
            threshold: vec![1.0, 0.0, 0.0],
            left: vec![1, LEAF_CHILD, LEAF_CHILD],
            right: vec![0, LEAF_CHILD, LEAF_CHILD],
            value: vec![0.0, 1.0, 2.0],
        };
        assert!(Forest::new(1, vec![tree], vec![1.0]).is_err());
    }

    #[test]
    fn test_rejects_feature_out_of_width() {
        let mut tree = stump(1.0, 0.0, 1.0);
        tree.feature[0] = 5;
        assert!(Forest::new(2, vec![tree], vec![1.0, 0.0]).is_err());
    }

    #[test]
    fn test_rejects_importances_length_mismatch() {
        assert!(matches!(
            Forest::new(2, vec![stump(1.0, 0.0, 1.0)], vec![1.0]),
            Err(CarError::InvalidModel(_))
        ));
    }

    #[test]
    fn test_rejects_negative_importance() {
        assert!(Forest::new(2, vec![stump(1.0, 0.0, 1.0)], vec![1.5, -0.5]).is_err());
    }

    #[test]
    fn test_rejects_ragged_arrays() {
        let mut tree = stump(1.0, 0.0, 1.0);
        tree.value.pop();
        assert!(Forest::new(1, vec![tree], vec![1.0]).is_err());
    }
}
