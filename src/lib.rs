//! Used car price estimation
//!
//! Encodes a car's attributes into the feature vector a pre-trained
//! random-forest regressor expects and turns the model's output into a
//! price estimate with a feature-importance breakdown.

pub mod catalog;
pub mod features;
pub mod model;
pub mod predict;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{Color, Make};

/// Model year bounds accepted by the input controls
pub const YEAR_MIN: u16 = 1990;
pub const YEAR_MAX: u16 = 2025;

/// Engine displacement bounds in liters
pub const ENGINE_SIZE_MIN: f64 = 0.5;
pub const ENGINE_SIZE_MAX: f64 = 8.0;

/// Mileage bound in kilometers
pub const MILEAGE_MAX: u32 = 500_000;

/// Options package fitted to the car
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionsPackage {
    Standard,
    SemiFull,
    Full,
}

impl OptionsPackage {
    pub const ALL: [OptionsPackage; 3] = [
        OptionsPackage::Standard,
        OptionsPackage::SemiFull,
        OptionsPackage::Full,
    ];

    /// The label used in listings and in trained column names
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionsPackage::Standard => "Standard",
            OptionsPackage::SemiFull => "Semi Full",
            OptionsPackage::Full => "Full",
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .find(|o| o.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| CarError::UnknownOptions(s.to_string()))
    }
}

impl fmt::Display for OptionsPackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Transmission type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GearType {
    Automatic,
    Manual,
}

impl GearType {
    pub const ALL: [GearType; 2] = [GearType::Automatic, GearType::Manual];

    pub fn as_str(&self) -> &'static str {
        match self {
            GearType::Automatic => "Automatic",
            GearType::Manual => "Manual",
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| CarError::UnknownGearType(s.to_string()))
    }
}

impl fmt::Display for GearType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One car as described by the user, immutable for the duration of a
/// prediction request
#[derive(Debug, Clone, PartialEq)]
pub struct CarRecord {
    pub make: Make,
    pub year: u16,
    pub color: Color,
    pub options: OptionsPackage,
    pub gear_type: GearType,
    pub engine_size: f64,
    pub mileage: u32,
}

impl Default for CarRecord {
    fn default() -> Self {
        CarRecord {
            make: Make::Hyundai,
            year: 2018,
            color: Color::AnotherColor,
            options: OptionsPackage::Standard,
            gear_type: GearType::Automatic,
            engine_size: 2.0,
            mileage: 120_000,
        }
    }
}

impl CarRecord {
    /// Check the numeric fields against the control bounds.
    ///
    /// Categorical fields cannot be out of domain once parsed, so only
    /// year, engine size and mileage need a guard here.
    pub fn validate(&self) -> Result<()> {
        if self.year < YEAR_MIN || self.year > YEAR_MAX {
            return Err(CarError::OutOfRange {
                field: "Year",
                value: self.year as f64,
                min: YEAR_MIN as f64,
                max: YEAR_MAX as f64,
            });
        }
        if !(ENGINE_SIZE_MIN..=ENGINE_SIZE_MAX).contains(&self.engine_size) {
            return Err(CarError::OutOfRange {
                field: "Engine size",
                value: self.engine_size,
                min: ENGINE_SIZE_MIN,
                max: ENGINE_SIZE_MAX,
            });
        }
        if self.mileage > MILEAGE_MAX {
            return Err(CarError::OutOfRange {
                field: "Mileage",
                value: self.mileage as f64,
                min: 0.0,
                max: MILEAGE_MAX as f64,
            });
        }
        Ok(())
    }

    /// Numeric fields under their trained column names, passed through
    /// to the model unchanged (the forest was trained on raw values)
    pub fn numeric_columns(&self) -> [(&'static str, f64); 3] {
        [
            ("Year", self.year as f64),
            ("Engine_Size", self.engine_size),
            ("Mileage", self.mileage as f64),
        ]
    }

    /// Categorical fields as (field name, value label) pairs, in the
    /// order the training pipeline dummied them
    pub fn categorical_values(&self) -> [(&'static str, &'static str); 4] {
        [
            ("Color", self.color.as_str()),
            ("Options", self.options.as_str()),
            ("Gear_Type", self.gear_type.as_str()),
            ("Make", self.make.as_str()),
        ]
    }
}

/// Application-wide errors
#[derive(Debug, Error)]
pub enum CarError {
    #[error("Unknown make: {0}. Run `sayara catalog makes` for the supported list")]
    UnknownMake(String),

    #[error("Unknown color: {0}. Run `sayara catalog colors` for the supported list")]
    UnknownColor(String),

    #[error("Unknown options package: {0}. Use Standard, Semi Full or Full")]
    UnknownOptions(String),

    #[error("Unknown gear type: {0}. Use Automatic or Manual")]
    UnknownGearType(String),

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Failed to load artifact {path}: {message}")]
    ArtifactLoad { path: String, message: String },

    #[error("Invalid model artifact: {0}")]
    InvalidModel(String),

    #[error("Invalid schema artifact: {0}")]
    InvalidSchema(String),

    #[error("Model expects {model_width} features but schema has {schema_width} columns")]
    SchemaMismatch {
        model_width: usize,
        schema_width: usize,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CarError>;

/// Application configuration loaded from config.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub artifacts: ArtifactsConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactsConfig {
    pub model_path: String,
    pub columns_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub currency: String,
    pub top_features: usize,
    pub chart_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            artifacts: ArtifactsConfig {
                model_path: "model/forest.json".to_string(),
                columns_path: "model/columns.json".to_string(),
            },
            display: DisplayConfig {
                currency: "SAR".to_string(),
                top_features: 10,
                chart_width: 40,
            },
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CarError::Config(format!("Failed to read config file {}: {}", path, e)))?;
        toml::from_str(&content)
            .map_err(|e| CarError::Config(format!("Failed to parse config: {}", e)))
    }

    pub fn save(&self, path: &str) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CarError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
