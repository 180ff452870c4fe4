//! Occupation registry
//!
//! A fixed table of occupations, each carrying one of four rating
//! categories. Every rating maps to exactly one pricing factor; because
//! the rating is a closed enum, that mapping is checked by the compiler.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse occupational risk category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OccupationRating {
    Professional,
    #[serde(rename = "White Collar")]
    WhiteCollar,
    #[serde(rename = "Light Manual")]
    LightManual,
    #[serde(rename = "Heavy Manual")]
    HeavyManual,
}

impl OccupationRating {
    /// All ratings, lowest risk first
    pub const ALL: [OccupationRating; 4] = [
        OccupationRating::Professional,
        OccupationRating::WhiteCollar,
        OccupationRating::LightManual,
        OccupationRating::HeavyManual,
    ];

    /// Returns the pricing factor for this rating
    pub fn factor(&self) -> Decimal {
        match self {
            OccupationRating::Professional => dec!(1.5),
            OccupationRating::WhiteCollar => dec!(2.25),
            OccupationRating::LightManual => dec!(11.50),
            OccupationRating::HeavyManual => dec!(31.75),
        }
    }

    /// Human-readable label, e.g. `"White Collar"`
    pub fn label(&self) -> &'static str {
        match self {
            OccupationRating::Professional => "Professional",
            OccupationRating::WhiteCollar => "White Collar",
            OccupationRating::LightManual => "Light Manual",
            OccupationRating::HeavyManual => "Heavy Manual",
        }
    }
}

impl fmt::Display for OccupationRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An occupation a quote can be requested for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Occupation {
    /// Display name
    pub name: &'static str,
    /// Stable identifier submitted by forms
    pub code: &'static str,
    /// Rating category
    pub rating: OccupationRating,
}

impl Occupation {
    /// Pricing factor of this occupation's rating
    pub fn factor(&self) -> Decimal {
        self.rating.factor()
    }
}

/// A rating together with its pricing factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RatingFactor {
    pub rating: OccupationRating,
    pub factor: Decimal,
}

/// The registry, in display order
pub static OCCUPATIONS: [Occupation; 7] = [
    Occupation { name: "Cleaner", code: "cleaner", rating: OccupationRating::LightManual },
    Occupation { name: "Doctor", code: "doctor", rating: OccupationRating::Professional },
    Occupation { name: "Author", code: "author", rating: OccupationRating::WhiteCollar },
    Occupation { name: "Farmer", code: "farmer", rating: OccupationRating::HeavyManual },
    Occupation { name: "Mechanic", code: "mechanic", rating: OccupationRating::HeavyManual },
    Occupation { name: "Florist", code: "florist", rating: OccupationRating::LightManual },
    Occupation { name: "Other", code: "other", rating: OccupationRating::HeavyManual },
];

/// Returns every occupation in display order
pub fn occupations() -> &'static [Occupation] {
    &OCCUPATIONS
}

/// Finds an occupation by exact, case-sensitive code
///
/// `None` means the code is unknown; callers report that as a normal
/// validation outcome rather than a fault.
pub fn lookup_by_code(code: &str) -> Option<&'static Occupation> {
    OCCUPATIONS.iter().find(|occupation| occupation.code == code)
}

/// Returns the pricing factor for a rating
pub fn factor_for(rating: OccupationRating) -> Decimal {
    rating.factor()
}

/// Returns the factor table, one entry per rating
pub fn rating_factors() -> [RatingFactor; 4] {
    OccupationRating::ALL.map(|rating| RatingFactor {
        rating,
        factor: rating.factor(),
    })
}
