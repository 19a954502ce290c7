//! Swap request and the writes it resolves to

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{RosterError, SwapSide};
use crate::roster::AbsoluteCoordinate;
use crate::sheets::CellUpdate;

/// Exchange `first_name`'s shift on `first_date` with `second_name`'s shift on
/// `second_date`. A missing date is the "zero" date and fails validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftSwapRequest {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub first_date: Option<NaiveDate>,
    #[serde(default)]
    pub second_name: String,
    #[serde(default)]
    pub second_date: Option<NaiveDate>,
}

/// One operator/date pair of a validated request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapParty<'a> {
    pub side: SwapSide,
    pub name: &'a str,
    pub date: NaiveDate,
}

impl ShiftSwapRequest {
    pub fn new(
        first_name: impl Into<String>,
        first_date: NaiveDate,
        second_name: impl Into<String>,
        second_date: NaiveDate,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            first_date: Some(first_date),
            second_name: second_name.into(),
            second_date: Some(second_date),
        }
    }

    /// Check that all four fields are present, reporting every missing one
    pub fn validate(&self) -> Result<(SwapParty<'_>, SwapParty<'_>), RosterError> {
        let mut missing = Vec::new();
        if self.first_name.trim().is_empty() {
            missing.push("first_name");
        }
        if self.first_date.is_none() {
            missing.push("first_date");
        }
        if self.second_name.trim().is_empty() {
            missing.push("second_name");
        }
        if self.second_date.is_none() {
            missing.push("second_date");
        }

        match (self.first_date, self.second_date) {
            (Some(first_date), Some(second_date)) if missing.is_empty() => Ok((
                SwapParty {
                    side: SwapSide::First,
                    name: &self.first_name,
                    date: first_date,
                },
                SwapParty {
                    side: SwapSide::Second,
                    name: &self.second_name,
                    date: second_date,
                },
            )),
            _ => Err(RosterError::IncompleteRequest { missing }),
        }
    }
}

/// A single cell write of a swap
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwapWrite {
    pub coordinate: AbsoluteCoordinate,
    /// Name written into the cell
    pub value: String,
    /// Text of the matched cell when the swap was planned, in the sheet's casing
    pub replaces: String,
}

/// The two writes of a swap, always submitted together.
///
/// Submitting them in one batch does not make them atomic: the backing store
/// may apply one and not the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwapInstruction {
    pub first: SwapWrite,
    pub second: SwapWrite,
}

impl SwapInstruction {
    pub fn updates(&self) -> Vec<CellUpdate> {
        [&self.first, &self.second]
            .into_iter()
            .map(|w| CellUpdate::new(w.coordinate.to_string(), w.value.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_reports_all_missing_fields() {
        let request = ShiftSwapRequest {
            first_name: "  ".to_string(),
            first_date: None,
            second_name: "Bianchi".to_string(),
            second_date: NaiveDate::from_ymd_opt(2024, 3, 13),
        };
        match request.validate() {
            Err(RosterError::IncompleteRequest { missing }) => {
                assert_eq!(missing, vec!["first_name", "first_date"]);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_deserialize_from_json_body() {
        let request: ShiftSwapRequest = serde_json::from_str(
            r#"{"first_name":"Rossi","first_date":"2024-03-11","second_name":"Bianchi"}"#,
        )
        .unwrap();
        assert_eq!(request.first_date, NaiveDate::from_ymd_opt(2024, 3, 11));
        assert_eq!(request.second_date, None);
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_validate_returns_both_parties() {
        let d1 = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2024, 3, 13).unwrap();
        let request = ShiftSwapRequest::new("Rossi", d1, "Bianchi", d2);
        let (first, second) = request.validate().unwrap();
        assert_eq!(first.side, SwapSide::First);
        assert_eq!(first.name, "Rossi");
        assert_eq!(second.date, d2);
    }
}
