//! Price prediction
//!
//! Ties the encoder, schema and model together and formats the results
//! for display.

pub mod display;
pub mod importance;
pub mod inference;

pub use importance::{ImportanceEntry, ImportanceTable};
pub use inference::{PricePrediction, Predictor};
