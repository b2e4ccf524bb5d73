//! Feature encoding
//!
//! Converts one car record into the fixed-width numeric vector the
//! trained model expects.

pub mod encoding;
pub mod schema;

pub use encoding::{encode, indicator_column, FeatureRow};
pub use schema::ColumnSchema;
