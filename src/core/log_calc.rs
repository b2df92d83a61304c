use crate::domain::model::{LogOutcome, RejectReason};
use crate::utils::error::{LessonError, Result};
use crate::utils::validation::validate_positive;

/// Natural logarithm of a typed number.
///
/// Surrounding whitespace is ignored. Text that is not a number, or that
/// parses to `NaN` or `+inf`, is an invalid format. `-inf` is non-positive.
pub fn compute(input: &str) -> LogOutcome {
    let number = match parse_number(input) {
        Ok(number) => number,
        Err(e) => {
            tracing::debug!("Rejected log input: {}", e);
            return LogOutcome::Rejected {
                reason: RejectReason::InvalidFormat,
            };
        }
    };

    match ln_of_positive(number) {
        Ok(value) => {
            tracing::debug!("ln({}) = {}", number, value);
            LogOutcome::Value {
                input: number,
                value,
            }
        }
        Err(_) => LogOutcome::Rejected {
            reason: RejectReason::NonPositive,
        },
    }
}

pub fn compute_checked(input: &str) -> Result<f64> {
    ln_of_positive(parse_number(input)?)
}

fn ln_of_positive(number: f64) -> Result<f64> {
    validate_positive("number", number, RejectReason::NonPositive.message())?;
    Ok(number.ln())
}

fn parse_number(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    let number: f64 = trimmed.parse().map_err(|_| {
        LessonError::invalid_format("number", input, RejectReason::InvalidFormat.message())
    })?;

    // -inf falls through to the positivity check
    if number.is_nan() || number == f64::INFINITY {
        return Err(LessonError::invalid_format(
            "number",
            input,
            RejectReason::InvalidFormat.message(),
        ));
    }

    Ok(number)
}
