//! Feature-importance ranking
//!
//! The model reports one non-negative score per schema column; display
//! only ever needs the top of the ranking.

/// One (column, score) pair from the model
#[derive(Debug, Clone, PartialEq)]
pub struct ImportanceEntry {
    pub column: String,
    pub score: f64,
}

/// Importance scores zipped to schema column names, in schema order
#[derive(Debug, Clone)]
pub struct ImportanceTable {
    entries: Vec<ImportanceEntry>,
}

impl ImportanceTable {
    /// Zip scores to column names. Callers guarantee equal lengths; the
    /// predictor verifies this once at construction.
    pub fn from_scores(names: &[String], scores: &[f64]) -> Self {
        let entries = names
            .iter()
            .zip(scores)
            .map(|(column, score)| ImportanceEntry {
                column: column.clone(),
                score: *score,
            })
            .collect();
        ImportanceTable { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ImportanceEntry] {
        &self.entries
    }

    /// The `k` highest-scoring entries, descending by score.
    ///
    /// The sort is stable, so equal scores keep their schema order.
    pub fn top(&self, k: usize) -> Vec<ImportanceEntry> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        sorted.truncate(k);
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(pairs: &[(&str, f64)]) -> ImportanceTable {
        let names: Vec<String> = pairs.iter().map(|(n, _)| n.to_string()).collect();
        let scores: Vec<f64> = pairs.iter().map(|(_, s)| *s).collect();
        ImportanceTable::from_scores(&names, &scores)
    }

    #[test]
    fn test_top_selects_highest_descending() {
        let t = table(&[
            ("Year", 0.40),
            ("Engine_Size", 0.05),
            ("Mileage", 0.30),
            ("Make_Toyota", 0.15),
            ("Color_White", 0.10),
        ]);
        let top = t.top(3);
        let columns: Vec<&str> = top.iter().map(|e| e.column.as_str()).collect();
        assert_eq!(columns, vec!["Year", "Mileage", "Make_Toyota"]);
    }

    #[test]
    fn test_top_ten_of_fifteen() {
        let pairs: Vec<(String, f64)> = (0..15)
            .map(|i| (format!("col_{}", i), (15 - i) as f64 / 100.0))
            .collect();
        let names: Vec<String> = pairs.iter().map(|(n, _)| n.clone()).collect();
        let scores: Vec<f64> = pairs.iter().map(|(_, s)| *s).collect();
        let t = ImportanceTable::from_scores(&names, &scores);

        let top = t.top(10);
        assert_eq!(top.len(), 10);
        for window in top.windows(2) {
            assert!(window[0].score >= window[1].score);
        }
        // The five lowest-scoring columns are exactly the ones dropped.
        assert!(top.iter().all(|e| e.score > 0.05));
    }

    #[test]
    fn test_ties_keep_schema_order() {
        let t = table(&[("a", 0.2), ("b", 0.5), ("c", 0.2), ("d", 0.5)]);
        let top = t.top(4);
        let columns: Vec<&str> = top.iter().map(|e| e.column.as_str()).collect();
        assert_eq!(columns, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_top_with_k_beyond_len() {
        let t = table(&[("a", 0.1)]);
        assert_eq!(t.top(10).len(), 1);
    }
}
