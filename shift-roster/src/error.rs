//! Error taxonomy for roster lookups and shift swaps

use std::fmt;

use chrono::NaiveDate;
use thiserror::Error;

use crate::sheets::{AddressError, StoreError};

/// Which half of a swap request an error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapSide {
    First,
    Second,
}

impl fmt::Display for SwapSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwapSide::First => write!(f, "first"),
            SwapSide::Second => write!(f, "second"),
        }
    }
}

#[derive(Debug, Error)]
pub enum RosterError {
    /// The weekday coordinate table could not be built
    #[error("invalid day coordinate table: {reason}")]
    Configuration {
        reason: String,
        #[source]
        source: Option<StoreError>,
    },

    /// A swap request is missing fields; raised before any I/O
    #[error("incomplete swap request, missing: {}", .missing.join(", "))]
    IncompleteRequest { missing: Vec<&'static str> },

    #[error("cannot read {side} operator's roster day {date}")]
    GridFetch {
        side: SwapSide,
        date: NaiveDate,
        #[source]
        source: StoreError,
    },

    /// A lookup was asked for a blank operator name
    #[error("operator name is empty")]
    EmptyName,

    #[error("'{name}' not found in roster grid")]
    NotFound { name: String },

    #[error("{side} operator '{name}' not found in roster for {date}")]
    OperatorNotFound {
        side: SwapSide,
        name: String,
        date: NaiveDate,
    },

    #[error("invalid coordinate '{input}'")]
    InvalidCoordinate {
        input: String,
        #[source]
        source: AddressError,
    },

    #[error("failed to write swapped shifts ({ranges})")]
    Write {
        ranges: String,
        #[source]
        source: StoreError,
    },

    #[error("malformed roles cell '{value}': expected location|shift|vehicle|role")]
    MalformedRoles { value: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl RosterError {
    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::Configuration {
            reason: reason.into(),
            source: None,
        }
    }

    pub fn invalid_coordinate(input: impl Into<String>, source: AddressError) -> Self {
        Self::InvalidCoordinate {
            input: input.into(),
            source,
        }
    }

    /// The swap side this error is attributed to, if any
    pub fn side(&self) -> Option<SwapSide> {
        match self {
            Self::GridFetch { side, .. } | Self::OperatorNotFound { side, .. } => Some(*side),
            _ => None,
        }
    }
}
