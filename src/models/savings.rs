use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Input to the monthly savings calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavingsRequest {
    pub goal_amount: f64,
    pub current_savings: f64,
    /// May be fractional, e.g. 1.5 for eighteen months.
    pub years_to_save: f64,
}

/// Result of the monthly savings calculation. Amounts are rounded to cents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavingsResponse {
    pub amount_needed: f64,
    pub monthly_saving: f64,
    pub months_remaining: u64,
}

/// Tie-breaking rule used when rounding amounts to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundingMode {
    /// Ties go to the even cent, applied to the exact binary value.
    #[default]
    HalfEven,
    /// Ties go away from zero.
    HalfUp,
}

impl RoundingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundingMode::HalfEven => "half_even",
            RoundingMode::HalfUp => "half_up",
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoundingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "half_even" | "half-even" | "bankers" => Ok(RoundingMode::HalfEven),
            "half_up" | "half-up" => Ok(RoundingMode::HalfUp),
            other => Err(format!(
                "Invalid rounding mode: {}. Must be 'half_even' or 'half_up'",
                other
            )),
        }
    }
}
