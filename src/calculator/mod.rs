/// Calculator core: header parsing, tokenising, validation and summation.
///
/// Architecture:
/// ```text
///   "//[***]\n1***2***3"
///        │
///        ▼
///   ┌────────────┐
///   │ expression │  header → Delimiter, remainder → body
///   └────────────┘
///        │
///        ▼
///   ┌────────────┐
///   │    sum     │  normalise newlines → split → parse → reject negatives
///   └────────────┘  → drop values > 1000 → total
///        │
///        ▼
///       6
/// ```

pub mod error;
pub mod expression;
pub mod sum;

pub use error::{CalculatorError, Result};
pub use expression::{Delimiter, Expression};
pub use sum::{add, UPPER_BOUND};
