use std::borrow::Cow;
use std::fmt;

use super::error::{CalculatorError, Result};

/// Marker that opens a delimiter header: `//<spec>\n`.
const HEADER_PREFIX: &str = "//";

// ---------------------------------------------------------------------------
// Delimiter – literal separator between numbers
// ---------------------------------------------------------------------------

/// The literal substring separating numbers in the body.
///
/// Always matched literally; `*`, `|`, `.` and friends carry no pattern meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimiter(String);

impl Delimiter {
    pub const DEFAULT: &'static str = ",";

    /// Resolve the delimiter declared by a header's specification.
    ///
    /// `[...]` wraps an arbitrary-length delimiter; anything else is taken verbatim.
    pub fn from_spec(spec: &str) -> Result<Self> {
        let literal = match spec
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
        {
            Some(inner) => inner,
            None => spec,
        };
        if literal.is_empty() {
            return Err(CalculatorError::EmptyDelimiter);
        }
        Ok(Delimiter(literal.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Delimiter(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Expression – a raw input split into delimiter and body
// ---------------------------------------------------------------------------

/// A raw input with its delimiter header resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression<'a> {
    pub delimiter: Delimiter,
    /// Everything after the header (or the whole input when there is none).
    pub body: &'a str,
}

impl<'a> Expression<'a> {
    /// Split `input` into its delimiter and body.
    ///
    /// The header ends at the first `\n`; a `//` prefix without one is rejected.
    pub fn parse(input: &'a str) -> Result<Self> {
        let Some(rest) = input.strip_prefix(HEADER_PREFIX) else {
            return Ok(Expression {
                delimiter: Delimiter::default(),
                body: input,
            });
        };

        let (spec, body) = rest
            .split_once('\n')
            .ok_or(CalculatorError::UnterminatedHeader)?;

        Ok(Expression {
            delimiter: Delimiter::from_spec(spec)?,
            body,
        })
    }

    /// Body with every newline replaced by the delimiter, leaving it as the only separator.
    ///
    /// Borrows the body untouched when it has no newline.
    pub fn normalized_body(&self) -> Cow<'a, str> {
        if self.body.contains('\n') {
            Cow::Owned(self.body.replace('\n', self.delimiter.as_str()))
        } else {
            Cow::Borrowed(self.body)
        }
    }

    /// Split a normalised body into untrimmed tokens, in input order.
    pub fn tokens<'b>(&'b self, normalized: &'b str) -> std::str::Split<'b, &'b str> {
        normalized.split(self.delimiter.as_str())
    }
}
