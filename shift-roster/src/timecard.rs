//! Timecard rows
//!
//! Operators report the shift they actually worked; the report is appended as
//! one row to the timecard table. Unless the operator filled the report in by
//! hand, location, shift, vehicle and role are taken from the roster.

use chrono::{NaiveDate, NaiveTime};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::RosterError;
use crate::roster::{self, DayCoordinateTable, OperatorRoles};
use crate::sheets::SheetStore;

pub(crate) const DATE_FORMAT: &str = "%d-%m-%Y";
pub(crate) const TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftReport {
    /// Operator full name, surname first
    pub name: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub manual_compilation: bool,
    #[serde(default)]
    pub motivation: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub shift: String,
    #[serde(default)]
    pub vehicle: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub did_overwork: bool,
    #[serde(default)]
    pub overwork_end: Option<NaiveTime>,
    #[serde(default)]
    pub mission: String,
    #[serde(default)]
    pub stamp_forgot: bool,
    #[serde(default)]
    pub shift_start: Option<NaiveTime>,
    #[serde(default)]
    pub shift_end: Option<NaiveTime>,
}

fn format_time(time: Option<NaiveTime>) -> String {
    time.map(|t| t.format(TIME_FORMAT).to_string())
        .unwrap_or_default()
}

impl ShiftReport {
    /// Name as written in the roster grid (the surname)
    pub fn roster_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("")
    }

    pub fn apply_roles(&mut self, roles: OperatorRoles) {
        self.location = roles.location;
        self.shift = roles.shift;
        self.vehicle = roles.vehicle;
        self.role = roles.role;
    }

    /// Row layout of the timecard table. Overwork and stamp columns stay blank
    /// unless their flag is set.
    pub fn to_row(&self, posted_on: NaiveDate) -> Vec<Value> {
        let mut row = vec![
            Value::from(posted_on.format(DATE_FORMAT).to_string()),
            Value::from(self.name.clone()),
            Value::from(self.date.format(DATE_FORMAT).to_string()),
            Value::from(self.manual_compilation),
            Value::from(self.motivation.clone()),
            Value::from(self.location.clone()),
            Value::from(self.shift.clone()),
            Value::from(self.vehicle.clone()),
            Value::from(self.role.clone()),
            Value::from(self.note.clone()),
        ];

        row.push(Value::from(self.did_overwork));
        if self.did_overwork {
            row.push(Value::from(format_time(self.overwork_end)));
            row.push(Value::from(self.mission.clone()));
        } else {
            row.extend([Value::from(""), Value::from("")]);
        }

        row.push(Value::from(self.stamp_forgot));
        if self.stamp_forgot {
            row.push(Value::from(format_time(self.shift_start)));
            row.push(Value::from(format_time(self.shift_end)));
        } else {
            row.extend([Value::from(""), Value::from("")]);
        }

        row
    }
}

/// Posts timecard rows, filling defaults from the roster
pub struct TimecardPoster<'a> {
    pub roster: &'a dyn SheetStore,
    pub table: &'a DayCoordinateTable,
    pub roles_range: Option<&'a str>,
    pub timecards: &'a dyn SheetStore,
    pub anchor: &'a str,
}

impl TimecardPoster<'_> {
    async fn assigned_roles(&self, report: &ShiftReport) -> Result<OperatorRoles, RosterError> {
        let roles_range = self
            .roles_range
            .ok_or_else(|| RosterError::configuration("no roles range configured"))?;
        let day = roster::read_day(self.roster, self.table, report.date).await?;
        roster::operator_roles(self.roster, &day, report.roster_name(), roles_range).await
    }

    /// Append `report` and return the row that was written
    pub async fn post(
        &self,
        mut report: ShiftReport,
        posted_on: NaiveDate,
    ) -> Result<Vec<Value>, RosterError> {
        let row = self.prepare(&mut report, posted_on).await?;
        self.timecards
            .append_rows(self.anchor, vec![row.clone()])
            .await?;
        info!("Posted timecard of '{}' for {}", report.name, report.date);
        Ok(row)
    }

    /// Fill roster defaults into `report` and build its row without writing
    pub async fn prepare(
        &self,
        report: &mut ShiftReport,
        posted_on: NaiveDate,
    ) -> Result<Vec<Value>, RosterError> {
        if report.name.trim().is_empty() {
            return Err(RosterError::EmptyName);
        }
        if !report.manual_compilation {
            match self.assigned_roles(report).await {
                Ok(roles) => report.apply_roles(roles),
                Err(e) => warn!(
                    "Cannot retrieve assigned roles of '{}', keeping declared values: {}",
                    report.name, e
                ),
            }
        }
        Ok(report.to_row(posted_on))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::coordinates::tests::layout_table;
    use crate::sheets::memory::MemoryStore;

    fn report(manual: bool) -> ShiftReport {
        serde_json::from_value(serde_json::json!({
            "name": "Rossi Mario",
            "date": "2024-03-11",
            "manual_compilation": manual,
            "location": "declared",
            "did_overwork": true,
            "overwork_end": "21:30:00",
            "mission": "M-42",
            "shift_start": "07:00:00"
        }))
        .unwrap()
    }

    fn posted_on() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 12).unwrap()
    }

    #[test]
    fn test_row_layout_blanks_unflagged_columns() {
        let row = report(true).to_row(posted_on());
        assert_eq!(row.len(), 16);
        assert_eq!(row[0], "12-03-2024");
        assert_eq!(row[1], "Rossi Mario");
        assert_eq!(row[2], "11-03-2024");
        assert_eq!(row[3], true);
        assert_eq!(row[5], "declared");
        assert_eq!(row[10], true);
        assert_eq!(row[11], "21:30");
        assert_eq!(row[12], "M-42");
        assert_eq!(row[13], false);
        assert_eq!(row[14], "");
        assert_eq!(row[15], "");
    }

    #[tokio::test]
    async fn test_post_fills_roles_from_roster() {
        let roster = MemoryStore::new()
            .with_range("11!A9:F12", &[&["Morning", "Rossi"]])
            .with_range("Roles!B1", &[&["Base Nord|Morning|AMB-3|Driver"]]);
        let timecards = MemoryStore::new();
        let table = layout_table();
        let poster = TimecardPoster {
            roster: &roster,
            table: &table,
            roles_range: Some("Roles!A1"),
            timecards: &timecards,
            anchor: "Timecards!A4",
        };

        let row = poster.post(report(false), posted_on()).await.unwrap();

        assert_eq!(row[5], "Base Nord");
        assert_eq!(row[8], "Driver");
        let appended = timecards.appended();
        assert_eq!(appended.len(), 1);
        assert_eq!(appended[0].0, "Timecards!A4");
        assert_eq!(appended[0].1, vec![row]);
    }

    #[tokio::test]
    async fn test_post_keeps_declared_values_when_lookup_fails() {
        let roster = MemoryStore::new();
        let timecards = MemoryStore::new();
        let table = layout_table();
        let poster = TimecardPoster {
            roster: &roster,
            table: &table,
            roles_range: Some("Roles!A1"),
            timecards: &timecards,
            anchor: "Timecards!A4",
        };

        let row = poster.post(report(false), posted_on()).await.unwrap();
        assert_eq!(row[5], "declared");
    }

    #[tokio::test]
    async fn test_unnamed_report_is_rejected_before_lookup() {
        let roster = MemoryStore::new()
            .with_range("11!A9:F12", &[&["Morning", "Rossi", ""]])
            .with_range("Roles!C1", &[&["Base Sud|Night|AMB-7|Medic"]]);
        let timecards = MemoryStore::new();
        let table = layout_table();
        let poster = TimecardPoster {
            roster: &roster,
            table: &table,
            roles_range: Some("Roles!A1"),
            timecards: &timecards,
            anchor: "Timecards!A4",
        };
        let mut unnamed = report(false);
        unnamed.name = String::new();

        let err = poster.post(unnamed, posted_on()).await.unwrap_err();

        assert!(matches!(err, RosterError::EmptyName));
        assert_eq!(roster.read_calls(), 0);
        assert!(timecards.appended().is_empty());
    }

    #[tokio::test]
    async fn test_manual_report_skips_roster() {
        let roster = MemoryStore::new();
        let timecards = MemoryStore::new();
        let table = layout_table();
        let poster = TimecardPoster {
            roster: &roster,
            table: &table,
            roles_range: Some("Roles!A1"),
            timecards: &timecards,
            anchor: "Timecards!A4",
        };

        poster.post(report(true), posted_on()).await.unwrap();
        assert_eq!(roster.read_calls(), 0);
    }
}
