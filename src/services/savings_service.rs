use tracing::warn;

use crate::errors::AppError;
use crate::models::{RoundingMode, SavingsRequest, SavingsResponse};

pub const MONTHS_PER_YEAR: f64 = 12.0;

pub const NON_NEGATIVE_MESSAGE: &str =
    "All values (goal_amount, current_savings, years_to_save) must be non-negative";

pub const NON_FINITE_MESSAGE: &str =
    "All values (goal_amount, current_savings, years_to_save) must be finite numbers";

pub const OUT_OF_RANGE_MESSAGE: &str =
    "The resulting savings amounts are too large to represent";

/// Stateless monthly savings calculator.
///
/// The only knob is the rounding rule applied to the two monetary outputs;
/// everything else is plain arithmetic on the request.
#[derive(Debug, Clone, Copy, Default)]
pub struct SavingsCalculator {
    rounding: RoundingMode,
}

impl SavingsCalculator {
    pub fn new(rounding: RoundingMode) -> Self {
        Self { rounding }
    }

    /// Compute the shortfall, the monthly contribution that closes it and the
    /// number of whole months in the horizon.
    ///
    /// A zero-length horizon with money still owed asks for the whole
    /// shortfall at once instead of dividing by zero.
    pub fn calculate(&self, request: &SavingsRequest) -> Result<SavingsResponse, AppError> {
        validate(request)?;

        let amount_needed = shortfall(request.goal_amount, request.current_savings);
        let total_months = request.years_to_save * MONTHS_PER_YEAR;

        let monthly_saving = if total_months > 0.0 {
            amount_needed / total_months
        } else if amount_needed > 0.0 {
            amount_needed
        } else {
            0.0
        };

        let amount_needed = round_to_cents(amount_needed, self.rounding);
        let monthly_saving = round_to_cents(monthly_saving, self.rounding);

        // Finite inputs can still overflow, e.g. a subnormal horizon
        if !amount_needed.is_finite() || !monthly_saving.is_finite() {
            warn!("Savings calculation overflowed for request: {:?}", request);
            return Err(AppError::OutOfRange(OUT_OF_RANGE_MESSAGE.to_string()));
        }

        Ok(SavingsResponse {
            amount_needed,
            monthly_saving,
            // `as` truncates toward zero and saturates on overflow
            months_remaining: total_months as u64,
        })
    }
}

fn validate(request: &SavingsRequest) -> Result<(), AppError> {
    let values = [
        request.goal_amount,
        request.current_savings,
        request.years_to_save,
    ];

    if values.iter().any(|v| !v.is_finite()) {
        warn!("Rejected savings request with non-finite input: {:?}", request);
        return Err(AppError::Validation(NON_FINITE_MESSAGE.to_string()));
    }

    if values.iter().any(|v| *v < 0.0) {
        warn!("Rejected savings request with negative input: {:?}", request);
        return Err(AppError::Validation(NON_NEGATIVE_MESSAGE.to_string()));
    }

    Ok(())
}

/// Goal minus current savings, floored at zero.
fn shortfall(goal_amount: f64, current_savings: f64) -> f64 {
    let diff = goal_amount - current_savings;
    // Also folds -0.0 into 0.0
    if diff > 0.0 {
        diff
    } else {
        0.0
    }
}

/// Round to two decimal places.
pub fn round_to_cents(value: f64, mode: RoundingMode) -> f64 {
    match mode {
        // Float formatting is exact and breaks ties to even, so going through
        // the decimal string rounds the true binary value.
        RoundingMode::HalfEven => format!("{:.2}", value).parse().unwrap_or(value),
        RoundingMode::HalfUp => {
            let scaled = value * 100.0;
            if scaled.is_finite() {
                scaled.round() / 100.0
            } else {
                // Already far beyond cent precision
                value
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(goal_amount: f64, current_savings: f64, years_to_save: f64) -> SavingsRequest {
        SavingsRequest {
            goal_amount,
            current_savings,
            years_to_save,
        }
    }

    fn calculate(goal: f64, current: f64, years: f64) -> Result<SavingsResponse, AppError> {
        SavingsCalculator::default().calculate(&request(goal, current, years))
    }

    #[test]
    fn test_two_year_goal_with_partial_savings() {
        let result = calculate(10000.0, 2000.0, 2.0).unwrap();
        assert_eq!(result.amount_needed, 8000.0);
        assert_eq!(result.monthly_saving, 333.33);
        assert_eq!(result.months_remaining, 24);
    }

    #[test]
    fn test_savings_exceed_goal() {
        let result = calculate(5000.0, 6000.0, 1.0).unwrap();
        assert_eq!(result.amount_needed, 0.0);
        assert_eq!(result.monthly_saving, 0.0);
        assert_eq!(result.months_remaining, 12);
    }

    #[test]
    fn test_zero_horizon_requires_full_amount_now() {
        let result = calculate(1000.0, 0.0, 0.0).unwrap();
        assert_eq!(result.amount_needed, 1000.0);
        assert_eq!(result.monthly_saving, 1000.0);
        assert_eq!(result.months_remaining, 0);
    }

    #[test]
    fn test_zero_horizon_and_nothing_owed() {
        let result = calculate(1000.0, 1000.0, 0.0).unwrap();
        assert_eq!(result.amount_needed, 0.0);
        assert_eq!(result.monthly_saving, 0.0);
        assert_eq!(result.months_remaining, 0);
    }

    #[test]
    fn test_fractional_years_truncate_months() {
        // 1.55 years = 18.6 months
        let result = calculate(1860.0, 0.0, 1.55).unwrap();
        assert_eq!(result.months_remaining, 18);
        // Division uses the fractional month count
        assert_eq!(result.monthly_saving, 100.0);

        // Less than a month still divides but reports zero whole months
        let result = calculate(100.0, 0.0, 0.05).unwrap();
        assert_eq!(result.months_remaining, 0);
        assert_eq!(result.monthly_saving, 166.67);
    }

    #[test]
    fn test_negative_inputs_rejected_with_fixed_message() {
        for (goal, current, years) in [(-1.0, 0.0, 1.0), (100.0, -0.01, 1.0), (100.0, 0.0, -2.0)] {
            match calculate(goal, current, years) {
                Err(AppError::Validation(msg)) => assert_eq!(msg, NON_NEGATIVE_MESSAGE),
                other => panic!("expected validation error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_non_finite_inputs_rejected() {
        for (goal, current, years) in [
            (f64::NAN, 0.0, 1.0),
            (100.0, f64::INFINITY, 1.0),
            (100.0, 0.0, f64::NEG_INFINITY),
        ] {
            match calculate(goal, current, years) {
                Err(AppError::Validation(msg)) => assert_eq!(msg, NON_FINITE_MESSAGE),
                other => panic!("expected validation error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_negative_zero_is_accepted_and_normalized() {
        let result = calculate(-0.0, 0.0, -0.0).unwrap();
        assert!(result.amount_needed.is_sign_positive());
        assert!(result.monthly_saving.is_sign_positive());
        assert_eq!(result.months_remaining, 0);
    }

    #[test]
    fn test_outputs_never_negative() {
        let cases = [
            (0.0, 0.0, 0.0),
            (0.0, 500.0, 3.0),
            (250.0, 249.99, 0.25),
            (1_000_000.0, 1.0, 40.0),
            (1.0, 0.0, 100.0),
        ];
        for (goal, current, years) in cases {
            let result = calculate(goal, current, years).unwrap();
            assert!(result.amount_needed >= 0.0, "amount_needed for {:?}", (goal, current, years));
            assert!(result.monthly_saving >= 0.0, "monthly_saving for {:?}", (goal, current, years));
        }
    }

    #[test]
    fn test_huge_horizon_saturates_months() {
        let result = calculate(100.0, 0.0, 1e300).unwrap();
        assert_eq!(result.months_remaining, u64::MAX);
        assert_eq!(result.monthly_saving, 0.0);
    }

    #[test]
    fn test_overflowing_division_rejected() {
        // 1e10 / 1.2e-309 overflows to infinity
        match calculate(1e10, 0.0, 1e-310) {
            Err(AppError::OutOfRange(msg)) => assert_eq!(msg, OUT_OF_RANGE_MESSAGE),
            other => panic!("expected out-of-range error, got {:?}", other),
        }
    }

    #[test]
    fn test_half_up_near_max_keeps_value() {
        assert_eq!(round_to_cents(1.7e308, RoundingMode::HalfUp), 1.7e308);

        let result = SavingsCalculator::new(RoundingMode::HalfUp)
            .calculate(&request(1.7e308, 0.0, 1.0))
            .unwrap();
        assert_eq!(result.amount_needed, 1.7e308);
        assert!(result.monthly_saving.is_finite());
        assert_eq!(result.months_remaining, 12);
    }

    #[test]
    fn test_round_half_even_uses_binary_value() {
        // 2.675 is stored as 2.67499999...
        assert_eq!(round_to_cents(2.675, RoundingMode::HalfEven), 2.67);
        // 0.125 is exact, tie goes to the even cent
        assert_eq!(round_to_cents(0.125, RoundingMode::HalfEven), 0.12);
        assert_eq!(round_to_cents(0.375, RoundingMode::HalfEven), 0.38);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_to_cents(0.125, RoundingMode::HalfUp), 0.13);
        assert_eq!(round_to_cents(0.375, RoundingMode::HalfUp), 0.38);
        assert_eq!(round_to_cents(333.3333, RoundingMode::HalfUp), 333.33);
    }

    #[test]
    fn test_rounding_mode_applies_to_calculation() {
        // 1.5 / 12 = 0.125 exactly
        let req = request(1.5, 0.0, 1.0);

        let even = SavingsCalculator::new(RoundingMode::HalfEven).calculate(&req).unwrap();
        assert_eq!(even.monthly_saving, 0.12);

        let up = SavingsCalculator::new(RoundingMode::HalfUp).calculate(&req).unwrap();
        assert_eq!(up.monthly_saving, 0.13);
    }
}
