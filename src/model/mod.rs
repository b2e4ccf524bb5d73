//! Trained model artifact
//!
//! The regressor is treated as a black box: loaded once at startup,
//! validated, then only asked for predictions and importances.

pub mod forest;

pub use forest::Forest;
