use super::error::{CalculatorError, Result};
use super::expression::Expression;

/// Values strictly above this are dropped from the total without error.
pub const UPPER_BOUND: i64 = 1000;

/// Sum the integers in a delimited expression.
///
/// * `""` → `0`
/// * `"1,2\n3"` → `6` (newlines separate like the delimiter)
/// * `"//;\n1;2"` → `3`, `"//[***]\n1***2***3"` → `6`
/// * `"2,1001"` → `2` (values above [`UPPER_BOUND`] are ignored)
/// * `"1,-2,-3"` → [`CalculatorError::NegativeNumbers`] listing `-2,-3`
///
/// Negatives are checked before the upper-bound filter, so `"-1,2000"` reports `-1`.
pub fn add(input: &str) -> Result<i64> {
    if input.is_empty() {
        return Ok(0);
    }

    let expr = Expression::parse(input)?;
    log::trace!("delimiter '{}'", expr.delimiter);

    // A header followed by nothing carries no numbers. Any other body, even
    // whitespace alone, is tokenised and must parse.
    if expr.body.is_empty() {
        return Ok(0);
    }

    let normalized = expr.normalized_body();
    let numbers = expr
        .tokens(&normalized)
        .map(parse_number)
        .collect::<Result<Vec<i64>>>()?;

    let negatives: Vec<i64> = numbers.iter().copied().filter(|n| *n < 0).collect();
    if !negatives.is_empty() {
        log::debug!("rejecting {} negative value(s)", negatives.len());
        return Err(CalculatorError::NegativeNumbers(negatives));
    }

    let total: i64 = numbers.iter().filter(|n| **n <= UPPER_BOUND).sum();
    log::debug!("{} value(s) summed to {total}", numbers.len());
    Ok(total)
}

fn parse_number(token: &str) -> Result<i64> {
    let trimmed = token.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| CalculatorError::InvalidNumber {
            token: trimmed.to_string(),
        })
}
