//! Expense categories
//!
//! Expenses are filed under one of a fixed set of categories. The declaration
//! order of the variants is the iteration order used everywhere categories are
//! listed, including tie-breaks between equal category totals.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The category an expense is filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Food,
    Rent,
    Travel,
    Shopping,
    Bills,
    Entertainment,
    Healthcare,
    Other,
}

impl ExpenseCategory {
    /// Every category, in declaration order
    pub const ALL: [ExpenseCategory; 8] = [
        Self::Food,
        Self::Rent,
        Self::Travel,
        Self::Shopping,
        Self::Bills,
        Self::Entertainment,
        Self::Healthcare,
        Self::Other,
    ];

    /// Display name of the category
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Rent => "Rent",
            Self::Travel => "Travel",
            Self::Shopping => "Shopping",
            Self::Bills => "Bills",
            Self::Entertainment => "Entertainment",
            Self::Healthcare => "Healthcare",
            Self::Other => "Other",
        }
    }

    /// Icon shown next to the category in menus and charts
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Food => "🍕",
            Self::Rent => "🏠",
            Self::Travel => "✈️",
            Self::Shopping => "🛍",
            Self::Bills => "💳",
            Self::Entertainment => "🎬",
            Self::Healthcare => "🏥",
            Self::Other => "💡",
        }
    }

    /// Description used when an expense is recorded without one
    pub fn default_description(&self) -> String {
        format!("{} expense", self.name())
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExpenseCategory {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if wanted.eq_ignore_ascii_case("others") {
            return Ok(Self::Other);
        }
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CategoryParseError(wanted.to_string()))
    }
}

/// Error returned when a category name is not recognized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryParseError(pub String);

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = ExpenseCategory::ALL.iter().map(|c| c.name()).collect();
        write!(
            f,
            "Unknown category '{}' (expected one of: {})",
            self.0,
            names.join(", ")
        )
    }
}

impl std::error::Error for CategoryParseError {}
