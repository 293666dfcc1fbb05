//! Carbon label grading for product packaging

use serde::{Deserialize, Serialize};
use std::fmt;

use super::aggregator::{FootprintResult, FootprintStatus};

/// Letter grade printed on the carbon label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CarbonGrade {
    /// Total ≤ 3.40
    #[serde(rename = "A")]
    A,
    /// Total ≤ 3.60
    #[serde(rename = "B+")]
    BPlus,
    /// Total ≤ 3.75
    #[serde(rename = "B")]
    B,
    /// Total ≤ 4.00
    #[serde(rename = "C+")]
    CPlus,
    /// Anything above
    #[serde(rename = "C")]
    C,
}

impl CarbonGrade {
    /// Upper bounds (inclusive) in kg CO₂e/kg, best grade first
    const BANDS: [(f64, CarbonGrade); 4] = [
        (3.40, CarbonGrade::A),
        (3.60, CarbonGrade::BPlus),
        (3.75, CarbonGrade::B),
        (4.00, CarbonGrade::CPlus),
    ];

    /// Grade for a total footprint
    ///
    /// # Examples
    ///
    /// ```
    /// use broiler_lca::lca::CarbonGrade;
    ///
    /// assert_eq!(CarbonGrade::from_total(3.34), CarbonGrade::A);
    /// assert_eq!(CarbonGrade::from_total(3.52), CarbonGrade::BPlus);
    /// assert_eq!(CarbonGrade::from_total(3.89), CarbonGrade::CPlus);
    /// ```
    pub fn from_total(total: f64) -> Self {
        Self::BANDS
            .iter()
            .find(|(bound, _)| total <= *bound)
            .map_or(CarbonGrade::C, |(_, grade)| *grade)
    }

    /// Grade as printed
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::CPlus => "C+",
            Self::C => "C",
        }
    }
}

impl fmt::Display for CarbonGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Functional unit all label figures refer to
pub const FUNCTIONAL_UNIT: &str = "1 kg frozen broiler carcass";
/// LCA system boundary
pub const SYSTEM_BOUNDARY: &str = "Cradle-to-Gate";
/// GHG protocol scopes covered
pub const SCOPES: &str = "1, 2, 3";
/// Carbon footprint standard the method follows
pub const STANDARD: &str = "ISO 14067:2018";

/// Content of a product carbon label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarbonLabel {
    /// Batch the label is issued for
    pub batch_id: String,
    /// Total footprint in kg CO₂e/kg
    pub total: f64,
    /// Letter grade
    pub grade: CarbonGrade,
    /// Threshold classification
    pub status: FootprintStatus,
    /// Functional unit
    pub functional_unit: String,
    /// System boundary
    pub system_boundary: String,
    /// Scopes covered
    pub scopes: String,
    /// Standard followed
    pub standard: String,
}

impl CarbonLabel {
    /// Build the label for a calculated batch
    pub fn new(batch_id: impl Into<String>, result: &FootprintResult) -> Self {
        Self {
            batch_id: batch_id.into(),
            total: result.total(),
            grade: CarbonGrade::from_total(result.total()),
            status: result.status(),
            functional_unit: FUNCTIONAL_UNIT.to_string(),
            system_boundary: SYSTEM_BOUNDARY.to_string(),
            scopes: SCOPES.to_string(),
            standard: STANDARD.to_string(),
        }
    }
}
