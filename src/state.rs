use std::fmt;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::calculator;

// ---------------------------------------------------------------------------
// Outcome – what the last Calculate click produced
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Sum(i64),
    /// Error message, shown verbatim.
    Error(String),
}

impl Outcome {
    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Error(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Sum(n) => write!(f, "Result: {n}"),
            Outcome::Error(msg) => write!(f, "Error: {msg}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full form state, independent of rendering.
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct AppState {
    /// Raw expression typed by the user (persisted across restarts).
    pub input: String,

    /// Result or error of the last calculation.
    #[serde(skip)]
    pub outcome: Option<Outcome>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            input: String::new(),
            outcome: None,
        }
    }
}

impl AppState {
    /// Evaluate the current input and replace the previous outcome.
    pub fn calculate(&mut self) {
        self.outcome = None;
        let outcome = match calculator::add(&self.input) {
            Ok(sum) => {
                log::info!("Calculated {sum}");
                Outcome::Sum(sum)
            }
            Err(e) => {
                log::warn!("Calculation rejected: {e}");
                Outcome::Error(e.to_string())
            }
        };
        self.outcome = Some(outcome);
    }

    /// Empty both the input field and the outcome.
    pub fn clear(&mut self) {
        self.input.clear();
        self.outcome = None;
    }
}

/// Evaluate several expressions in order, stopping at the first failure.
pub fn calculate_all(expressions: &[&str]) -> Result<Vec<i64>> {
    expressions
        .iter()
        .enumerate()
        .map(|(i, expr)| {
            calculator::add(expr).with_context(|| format!("expression {i} ({expr:?})"))
        })
        .collect()
}
