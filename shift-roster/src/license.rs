//! Leave requests
//!
//! Holiday licenses, illness reports and hourly permissions are each appended as
//! one row to their own table, stamped with the day they were posted.

use chrono::{NaiveDate, NaiveTime};
use log::info;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::RosterError;
use crate::sheets::SheetStore;
use crate::timecard::{DATE_FORMAT, TIME_FORMAT};

/// A request that is stored as a single row of a leave table
pub trait LeaveRow {
    /// Human readable kind, used in logs
    const KIND: &'static str;

    fn name(&self) -> &str;

    /// Row layout, first column is the posting date
    fn to_row(&self, posted_on: NaiveDate) -> Vec<Value>;
}

fn date_cell(date: NaiveDate) -> Value {
    Value::from(date.format(DATE_FORMAT).to_string())
}

fn time_cell(time: NaiveTime) -> Value {
    Value::from(time.format(TIME_FORMAT).to_string())
}

/// Holiday request covering `from..=to`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseRequest {
    pub name: String,
    pub from: NaiveDate,
    pub to: NaiveDate,
    #[serde(default)]
    pub motivation: String,
    /// Filed by a coordinator on the operator's behalf
    #[serde(default)]
    pub from_coordinator: bool,
}

impl LeaveRow for LicenseRequest {
    const KIND: &'static str = "license";

    fn name(&self) -> &str {
        &self.name
    }

    fn to_row(&self, posted_on: NaiveDate) -> Vec<Value> {
        vec![
            date_cell(posted_on),
            Value::from(self.name.clone()),
            date_cell(self.from),
            date_cell(self.to),
            Value::from(self.motivation.clone()),
            Value::from(self.from_coordinator),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IllnessReport {
    pub name: String,
    pub from: NaiveDate,
    pub to: NaiveDate,
    /// Medical certificate protocol number
    #[serde(default)]
    pub protocol_number: String,
}

impl LeaveRow for IllnessReport {
    const KIND: &'static str = "illness";

    fn name(&self) -> &str {
        &self.name
    }

    fn to_row(&self, posted_on: NaiveDate) -> Vec<Value> {
        vec![
            date_cell(posted_on),
            Value::from(self.name.clone()),
            date_cell(self.from),
            date_cell(self.to),
            Value::from(self.protocol_number.clone()),
        ]
    }
}

/// Leave for part of a shift, `from`..`to` on `date`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionRequest {
    pub name: String,
    pub date: NaiveDate,
    pub from: NaiveTime,
    pub to: NaiveTime,
    #[serde(default)]
    pub motivation: String,
}

impl LeaveRow for PermissionRequest {
    const KIND: &'static str = "permission";

    fn name(&self) -> &str {
        &self.name
    }

    fn to_row(&self, posted_on: NaiveDate) -> Vec<Value> {
        vec![
            date_cell(posted_on),
            Value::from(self.name.clone()),
            date_cell(self.date),
            time_cell(self.from),
            time_cell(self.to),
            Value::from(self.motivation.clone()),
        ]
    }
}

/// Appends leave rows after a table anchor such as `Ferie!A4`
pub struct LeavePoster<'a> {
    pub store: &'a dyn SheetStore,
    pub anchor: &'a str,
}

impl LeavePoster<'_> {
    /// Build the row for `request` without writing it
    pub fn prepare<R: LeaveRow>(
        &self,
        request: &R,
        posted_on: NaiveDate,
    ) -> Result<Vec<Value>, RosterError> {
        if request.name().trim().is_empty() {
            return Err(RosterError::EmptyName);
        }
        Ok(request.to_row(posted_on))
    }

    /// Append `request` and return the row that was written
    pub async fn post<R: LeaveRow>(
        &self,
        request: &R,
        posted_on: NaiveDate,
    ) -> Result<Vec<Value>, RosterError> {
        let row = self.prepare(request, posted_on)?;
        self.store.append_rows(self.anchor, vec![row.clone()]).await?;
        info!(
            "Posted {} request of '{}' at {}",
            R::KIND,
            request.name(),
            self.anchor
        );
        Ok(row)
    }
}
