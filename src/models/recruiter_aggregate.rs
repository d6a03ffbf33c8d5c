//! Recruiter aggregate model.
//!
//! A [`RecruiterAggregate`] is the per-recruiter summary the ranking is built
//! from: how many requisitions the recruiter closed and how long, on average,
//! closing took.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Closed-requisition totals for a single recruiter.
///
/// Values of this type are expected to be valid: `average_days_to_close`,
/// when present, is non-negative. Use [`RecruiterAggregate::new`] or
/// [`RecruiterAggregate::from_raw`] to construct one from untrusted data.
///
/// # Example
///
/// ```
/// use ranking_engine::models::RecruiterAggregate;
/// use rust_decimal::Decimal;
///
/// let aggregate = RecruiterAggregate::new("rec_001", "Ana López", 10, Some(Decimal::from(5)))
///     .unwrap();
/// assert_eq!(aggregate.closed_count, 10);
/// ```
///
/// Deserialized values go through [`RecruiterAggregate::new`], so a negative
/// average fails to deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AggregateFields")]
pub struct RecruiterAggregate {
    /// Opaque identifier, unique per recruiter.
    pub identifier: String,
    /// Name shown in the ranking table.
    pub display_name: String,
    /// Number of requisitions this recruiter closed.
    pub closed_count: u32,
    /// Mean days between request and close date, if defined.
    #[serde(default)]
    pub average_days_to_close: Option<Decimal>,
}

#[derive(Deserialize)]
struct AggregateFields {
    identifier: String,
    display_name: String,
    closed_count: u32,
    #[serde(default)]
    average_days_to_close: Option<Decimal>,
}

impl TryFrom<AggregateFields> for RecruiterAggregate {
    type Error = EngineError;

    fn try_from(fields: AggregateFields) -> EngineResult<Self> {
        Self::new(
            fields.identifier,
            fields.display_name,
            fields.closed_count,
            fields.average_days_to_close,
        )
    }
}

impl RecruiterAggregate {
    /// Creates an aggregate from typed values, rejecting a negative average.
    pub fn new(
        identifier: impl Into<String>,
        display_name: impl Into<String>,
        closed_count: u32,
        average_days_to_close: Option<Decimal>,
    ) -> EngineResult<Self> {
        let identifier = identifier.into();

        if let Some(days) = average_days_to_close {
            if days < Decimal::ZERO {
                return Err(EngineError::InvalidAggregate {
                    identifier,
                    field: "average_days_to_close".to_string(),
                    message: format!("must not be negative, got {}", days),
                });
            }
        }

        Ok(Self {
            identifier,
            display_name: display_name.into(),
            closed_count,
            average_days_to_close,
        })
    }

    /// Creates an aggregate from loosely typed values such as a query row.
    ///
    /// Rejects negative or out-of-range counts and negative, NaN or infinite
    /// averages.
    ///
    /// # Example
    ///
    /// ```
    /// use ranking_engine::models::RecruiterAggregate;
    ///
    /// assert!(RecruiterAggregate::from_raw("rec_001", "Ana", 3, Some(2.5)).is_ok());
    /// assert!(RecruiterAggregate::from_raw("rec_002", "Luis", -1, None).is_err());
    /// assert!(RecruiterAggregate::from_raw("rec_003", "Eva", 2, Some(f64::NAN)).is_err());
    /// ```
    pub fn from_raw(
        identifier: impl Into<String>,
        display_name: impl Into<String>,
        closed_count: i64,
        average_days_to_close: Option<f64>,
    ) -> EngineResult<Self> {
        let identifier = identifier.into();

        let closed_count = u32::try_from(closed_count).map_err(|_| EngineError::InvalidAggregate {
            identifier: identifier.clone(),
            field: "closed_count".to_string(),
            message: if closed_count < 0 {
                format!("must not be negative, got {}", closed_count)
            } else {
                format!("exceeds the supported maximum, got {}", closed_count)
            },
        })?;

        let average_days_to_close = match average_days_to_close {
            None => None,
            Some(days) if !days.is_finite() => {
                return Err(EngineError::InvalidAggregate {
                    identifier,
                    field: "average_days_to_close".to_string(),
                    message: format!("must be a finite number, got {}", days),
                });
            }
            Some(days) => {
                let decimal = Decimal::from_f64(days).ok_or_else(|| {
                    EngineError::InvalidAggregate {
                        identifier: identifier.clone(),
                        field: "average_days_to_close".to_string(),
                        message: format!("cannot be represented as a decimal, got {}", days),
                    }
                })?;

                // Underflow would turn a positive average into zero days.
                if days > 0.0 && decimal.is_zero() {
                    return Err(EngineError::InvalidAggregate {
                        identifier,
                        field: "average_days_to_close".to_string(),
                        message: format!("too small to represent as a decimal, got {}", days),
                    });
                }

                Some(decimal)
            }
        };

        Self::new(identifier, display_name, closed_count, average_days_to_close)
    }

    /// Returns the average used for ordering, with a missing average read as zero.
    pub fn effective_days(&self) -> Decimal {
        self.average_days_to_close.unwrap_or(Decimal::ZERO)
    }
}
