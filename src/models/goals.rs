//! Financial goals: the monthly budget and the savings target

use serde::{Deserialize, Serialize};

use super::money::Money;
use crate::error::{TrackerError, TrackerResult};

/// Default monthly budget in whole units
pub const DEFAULT_MONTHLY_BUDGET: i64 = 10_000;

/// Default savings target in whole units
pub const DEFAULT_SAVINGS_TARGET: i64 = 5_000;

/// The user's budget goals, always replaced as a whole
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goals {
    pub monthly_budget: Money,
    pub savings_target: Money,
}

impl Goals {
    /// Create goals, rejecting non-positive values
    pub fn new(monthly_budget: Money, savings_target: Money) -> TrackerResult<Self> {
        if !monthly_budget.is_positive() {
            return Err(TrackerError::Validation(format!(
                "Monthly budget must be positive, got {}",
                monthly_budget
            )));
        }
        if !savings_target.is_positive() {
            return Err(TrackerError::Validation(format!(
                "Savings target must be positive, got {}",
                savings_target
            )));
        }
        Ok(Self {
            monthly_budget,
            savings_target,
        })
    }
}

impl Default for Goals {
    fn default() -> Self {
        Self {
            monthly_budget: Money::from_whole(DEFAULT_MONTHLY_BUDGET),
            savings_target: Money::from_whole(DEFAULT_SAVINGS_TARGET),
        }
    }
}
