//! Filter criteria for the event browser.
//!
//! Each dimension has a sentinel meaning "no filtering". Labels are the
//! ones shown on the explore page and parse back into criteria.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::record::Mode;
use crate::error::BrainyError;

pub const ALL_CATEGORIES: &str = "All";
pub const ALL_MODES: &str = "All Modes";
pub const ALL_PRICES: &str = "All Prices";

/// Category chips, sentinel first.
pub const CATEGORIES: [&str; 8] = [
    ALL_CATEGORIES,
    "Technology",
    "Business",
    "Design",
    "Cultural",
    "Sports",
    "Career",
    "Health",
];

/// Mode choices, sentinel first.
pub const MODES: [&str; 4] = [ALL_MODES, "Online", "Offline", "Hybrid"];

/// Price choices, sentinel first.
pub const PRICES: [&str; 3] = [ALL_PRICES, "Free", "Paid"];

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    /// Exact, case-sensitive category name.
    Only(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ModeFilter {
    #[default]
    All,
    Only(Mode),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PriceFilter {
    #[default]
    All,
    Free,
    Paid,
}

impl FromStr for CategoryFilter {
    type Err = BrainyError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        if label == ALL_CATEGORIES {
            Ok(Self::All)
        } else {
            Ok(Self::Only(label.to_string()))
        }
    }
}

impl FromStr for ModeFilter {
    type Err = BrainyError;

    /// One of [`MODES`], matched exactly. Row modes compare by raw token.
    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label {
            ALL_MODES => Ok(Self::All),
            "Online" => Ok(Self::Only(Mode::Online)),
            "Offline" => Ok(Self::Only(Mode::Offline)),
            "Hybrid" => Ok(Self::Only(Mode::Hybrid)),
            other => Err(BrainyError::invalid_criterion("mode", other)),
        }
    }
}

impl FromStr for PriceFilter {
    type Err = BrainyError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label {
            ALL_PRICES => Ok(Self::All),
            "Free" => Ok(Self::Free),
            "Paid" => Ok(Self::Paid),
            other => Err(BrainyError::invalid_criterion("price", other)),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_CATEGORIES),
            Self::Only(name) => f.write_str(name),
        }
    }
}

impl fmt::Display for ModeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_MODES),
            Self::Only(Mode::Online) => f.write_str("Online"),
            Self::Only(Mode::Offline) => f.write_str("Offline"),
            Self::Only(Mode::Hybrid) => f.write_str("Hybrid"),
            Self::Only(Mode::Other(raw)) => f.write_str(raw),
        }
    }
}

impl fmt::Display for PriceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::All => ALL_PRICES,
            Self::Free => "Free",
            Self::Paid => "Paid",
        })
    }
}

/// The four independent filter dimensions of the event browser.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Free-text search over title, college and location.
    pub query: String,
    pub category: CategoryFilter,
    pub mode: ModeFilter,
    pub price: PriceFilter,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build criteria from display labels, as selected in the UI.
    pub fn from_labels(
        query: &str,
        category: &str,
        mode: &str,
        price: &str,
    ) -> Result<Self, BrainyError> {
        Ok(Self {
            query: query.to_string(),
            category: category.parse()?,
            mode: mode.parse()?,
            price: price.parse()?,
        })
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = CategoryFilter::Only(category.into());
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = ModeFilter::Only(mode);
        self
    }

    pub fn with_price(mut self, price: PriceFilter) -> Self {
        self.price = price;
        self
    }

    /// Reset every dimension to its sentinel.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether no dimension filters anything.
    pub fn is_unfiltered(&self) -> bool {
        self.query.is_empty()
            && self.category == CategoryFilter::All
            && self.mode == ModeFilter::All
            && self.price == PriceFilter::All
    }
}
