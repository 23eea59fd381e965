use thiserror::Error;

pub type Result<T> = std::result::Result<T, CalculatorError>;

/// Everything that can go wrong while evaluating an expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculatorError {
    /// One or more negative values were found. Holds all of them, in input order.
    #[error("negative numbers not allowed: {}", join_values(.0))]
    NegativeNumbers(Vec<i64>),

    /// A token that is empty or not an integer after trimming.
    #[error("invalid number: '{token}'")]
    InvalidNumber { token: String },

    #[error("delimiter header is missing its terminating newline")]
    UnterminatedHeader,

    #[error("delimiter header declares an empty delimiter")]
    EmptyDelimiter,
}

fn join_values(values: &[i64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_numbers_message_is_comma_joined() {
        let err = CalculatorError::NegativeNumbers(vec![-2, -3]);
        assert_eq!(err.to_string(), "negative numbers not allowed: -2,-3");
    }

    #[test]
    fn test_single_negative_has_no_trailing_separator() {
        let err = CalculatorError::NegativeNumbers(vec![-7]);
        assert_eq!(err.to_string(), "negative numbers not allowed: -7");
    }

    #[test]
    fn test_invalid_number_quotes_token() {
        let err = CalculatorError::InvalidNumber {
            token: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "invalid number: 'abc'");
    }
}
