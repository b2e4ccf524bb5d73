//! Supported makes and colors
//!
//! The enumerations mirror the listing domains the model was trained on.
//! Labels must match the trained column names exactly, so `as_str` is the
//! single source of truth for spelling (including `INFINITI` and `Škoda`).

use std::fmt;

use crate::{CarError, Result};

/// Manufacturer of the car
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Make {
    Hyundai,
    Dodge,
    Toyota,
    Jeep,
    Kia,
    Chevrolet,
    Volkswagen,
    Ford,
    Nissan,
    Gmc,
    Mercury,
    Other,
    Mercedes,
    Skoda,
    Honda,
    Suzuki,
    Infiniti,
    Bmw,
    Renault,
    Chery,
    Peugeot,
    Mazda,
    Geely,
    Mitsubishi,
    Lexus,
    Chrysler,
    Lincoln,
    Mg,
    Cadillac,
    Porsche,
    Daihatsu,
    Subaru,
    Audi,
    Fiat,
    Faw,
    LandRover,
    Hummer,
    Classic,
    Changan,
    Lifan,
    Isuzu,
    Byd,
    VictoryAuto,
    Zhengzhou,
    Jaguar,
    Foton,
    Genesis,
    Mini,
    Gac,
    Haval,
    Iveco,
    GreatWall,
    Bentley,
    Maserati,
    AstonMartin,
    Ferrari,
    RollsRoyce,
}

impl Make {
    pub const ALL: [Make; 57] = [
        Make::Hyundai,
        Make::Dodge,
        Make::Toyota,
        Make::Jeep,
        Make::Kia,
        Make::Chevrolet,
        Make::Volkswagen,
        Make::Ford,
        Make::Nissan,
        Make::Gmc,
        Make::Mercury,
        Make::Other,
        Make::Mercedes,
        Make::Skoda,
        Make::Honda,
        Make::Suzuki,
        Make::Infiniti,
        Make::Bmw,
        Make::Renault,
        Make::Chery,
        Make::Peugeot,
        Make::Mazda,
        Make::Geely,
        Make::Mitsubishi,
        Make::Lexus,
        Make::Chrysler,
        Make::Lincoln,
        Make::Mg,
        Make::Cadillac,
        Make::Porsche,
        Make::Daihatsu,
        Make::Subaru,
        Make::Audi,
        Make::Fiat,
        Make::Faw,
        Make::LandRover,
        Make::Hummer,
        Make::Classic,
        Make::Changan,
        Make::Lifan,
        Make::Isuzu,
        Make::Byd,
        Make::VictoryAuto,
        Make::Zhengzhou,
        Make::Jaguar,
        Make::Foton,
        Make::Genesis,
        Make::Mini,
        Make::Gac,
        Make::Haval,
        Make::Iveco,
        Make::GreatWall,
        Make::Bentley,
        Make::Maserati,
        Make::AstonMartin,
        Make::Ferrari,
        Make::RollsRoyce,
    ];

    /// The label used in listings and in trained column names
    pub fn as_str(&self) -> &'static str {
        match self {
            Make::Hyundai => "Hyundai",
            Make::Dodge => "Dodge",
            Make::Toyota => "Toyota",
            Make::Jeep => "Jeep",
            Make::Kia => "Kia",
            Make::Chevrolet => "Chevrolet",
            Make::Volkswagen => "Volkswagen",
            Make::Ford => "Ford",
            Make::Nissan => "Nissan",
            Make::Gmc => "GMC",
            Make::Mercury => "Mercury",
            Make::Other => "Other",
            Make::Mercedes => "Mercedes",
            Make::Skoda => "Škoda",
            Make::Honda => "Honda",
            Make::Suzuki => "Suzuki",
            Make::Infiniti => "INFINITI",
            Make::Bmw => "BMW",
            Make::Renault => "Renault",
            Make::Chery => "Chery",
            Make::Peugeot => "Peugeot",
            Make::Mazda => "Mazda",
            Make::Geely => "Geely",
            Make::Mitsubishi => "Mitsubishi",
            Make::Lexus => "Lexus",
            Make::Chrysler => "Chrysler",
            Make::Lincoln => "Lincoln",
            Make::Mg => "MG",
            Make::Cadillac => "Cadillac",
            Make::Porsche => "Porsche",
            Make::Daihatsu => "Daihatsu",
            Make::Subaru => "Subaru",
            Make::Audi => "Audi",
            Make::Fiat => "Fiat",
            Make::Faw => "FAW",
            Make::LandRover => "Land Rover",
            Make::Hummer => "Hummer",
            Make::Classic => "Classic",
            Make::Changan => "Changan",
            Make::Lifan => "Lifan",
            Make::Isuzu => "Isuzu",
            Make::Byd => "BYD",
            Make::VictoryAuto => "Victory Auto",
            Make::Zhengzhou => "Zhengzhou",
            Make::Jaguar => "Jaguar",
            Make::Foton => "Foton",
            Make::Genesis => "Genesis",
            Make::Mini => "MINI",
            Make::Gac => "GAC",
            Make::Haval => "HAVAL",
            Make::Iveco => "Iveco",
            Make::GreatWall => "Great Wall",
            Make::Bentley => "Bentley",
            Make::Maserati => "Maserati",
            Make::AstonMartin => "Aston Martin",
            Make::Ferrari => "Ferrari",
            Make::RollsRoyce => "Rolls-Royce",
        }
    }

    /// Case-insensitive lookup by label
    pub fn parse(s: &str) -> Result<Self> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .find(|m| m.as_str().to_lowercase() == needle)
            .copied()
            .ok_or_else(|| CarError::UnknownMake(s.to_string()))
    }
}

impl fmt::Display for Make {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Exterior color of the car
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    AnotherColor,
    Grey,
    Silver,
    White,
    Navy,
    Black,
    Brown,
    Orange,
    Blue,
    Oily,
    Green,
    Yellow,
    Red,
    Bronze,
    Golden,
}

impl Color {
    pub const ALL: [Color; 15] = [
        Color::AnotherColor,
        Color::Grey,
        Color::Silver,
        Color::White,
        Color::Navy,
        Color::Black,
        Color::Brown,
        Color::Orange,
        Color::Blue,
        Color::Oily,
        Color::Green,
        Color::Yellow,
        Color::Red,
        Color::Bronze,
        Color::Golden,
    ];

    /// The label used in listings and in trained column names
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::AnotherColor => "Another Color",
            Color::Grey => "Grey",
            Color::Silver => "Silver",
            Color::White => "White",
            Color::Navy => "Navy",
            Color::Black => "Black",
            Color::Brown => "Brown",
            Color::Orange => "Orange",
            Color::Blue => "Blue",
            Color::Oily => "Oily",
            Color::Green => "Green",
            Color::Yellow => "Yellow",
            Color::Red => "Red",
            Color::Bronze => "Bronze",
            Color::Golden => "Golden",
        }
    }

    /// Case-insensitive lookup by label
    pub fn parse(s: &str) -> Result<Self> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .find(|c| c.as_str().to_lowercase() == needle)
            .copied()
            .ok_or_else(|| CarError::UnknownColor(s.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
