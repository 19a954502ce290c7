//! Layered configuration: TOML file, then environment variables

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use log::debug;
use serde::Deserialize;

use crate::sheets::client::DEFAULT_API_URL;
use crate::sheets::SheetsClientConfig;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub roster: RosterConfig,
    pub timecard: TimecardConfig,
    pub license: LicenseConfig,
    pub sheets: SheetsConfig,
}

/// Where the weekly roster lives
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    pub spreadsheet_id: String,
    /// Range holding the 7x2 weekday table, e.g. `Config!A1:B7`
    pub weekday_range: String,
    /// Roles tab reference, e.g. `Roles!A1`
    pub roles_range: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TimecardConfig {
    /// Defaults to the roster spreadsheet
    pub spreadsheet_id: Option<String>,
    /// Anchor rows are appended after
    pub range: String,
}

impl Default for TimecardConfig {
    fn default() -> Self {
        Self {
            spreadsheet_id: None,
            range: "Timecards!A4".to_string(),
        }
    }
}

/// Anchors of the leave tables, in the timecard spreadsheet
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LicenseConfig {
    pub license_range: String,
    pub illness_range: String,
    pub permission_range: String,
}

impl Default for LicenseConfig {
    fn default() -> Self {
        Self {
            license_range: "Ferie!A4".to_string(),
            illness_range: "Malattie!A4".to_string(),
            permission_range: "PermessiOrari!A4".to_string(),
        }
    }
}

/// Sheets API connection settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SheetsConfig {
    pub api_url: String,
    pub access_token: Option<String>,
    pub timeout_secs: u64,
    pub max_concurrent_requests: usize,
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            access_token: None,
            timeout_secs: 30,
            max_concurrent_requests: 4,
        }
    }
}

impl Config {
    /// Default config file location (`<config dir>/shift-roster/config.toml`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("shift-roster").join("config.toml"))
    }

    /// Load the config file (if any) and apply environment overrides.
    ///
    /// An explicitly given path must exist; the default path is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(default) if default.exists() => Self::from_file(&default)?,
                _ => Self::default(),
            },
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Override fields from environment-style lookups
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("ROSTER_SPREADSHEET_ID") {
            self.roster.spreadsheet_id = v;
        }
        if let Some(v) = lookup("ROSTER_WEEKDAY_RANGE") {
            self.roster.weekday_range = v;
        }
        if let Some(v) = lookup("ROSTER_ROLES_RANGE") {
            self.roster.roles_range = Some(v);
        }
        if let Some(v) = lookup("ROSTER_TIMECARD_SPREADSHEET_ID") {
            self.timecard.spreadsheet_id = Some(v);
        }
        if let Some(v) = lookup("ROSTER_TIMECARD_RANGE") {
            self.timecard.range = v;
        }
        if let Some(v) = lookup("ROSTER_LICENSE_RANGE") {
            self.license.license_range = v;
        }
        if let Some(v) = lookup("ROSTER_ILLNESS_RANGE") {
            self.license.illness_range = v;
        }
        if let Some(v) = lookup("ROSTER_PERMISSION_RANGE") {
            self.license.permission_range = v;
        }
        if let Some(v) = lookup("SHEETS_ACCESS_TOKEN") {
            self.sheets.access_token = Some(v);
        }
        if let Some(v) = lookup("SHEETS_API_URL") {
            self.sheets.api_url = v;
        }
        if let Some(v) = lookup("SHEETS_MAX_CONCURRENT_REQUESTS") {
            self.sheets.max_concurrent_requests = v
                .parse()
                .with_context(|| format!("SHEETS_MAX_CONCURRENT_REQUESTS is not a number: {}", v))?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.roster.spreadsheet_id.trim().is_empty() {
            bail!("Missing roster spreadsheet id (set ROSTER_SPREADSHEET_ID or roster.spreadsheet_id)");
        }
        if self.roster.weekday_range.trim().is_empty() {
            bail!("Missing weekday range (set ROSTER_WEEKDAY_RANGE or roster.weekday_range)");
        }
        if self.sheets.max_concurrent_requests == 0 {
            bail!("sheets.max_concurrent_requests must be at least 1");
        }
        Ok(())
    }

    fn client_config(&self, spreadsheet_id: &str) -> SheetsClientConfig {
        SheetsClientConfig {
            spreadsheet_id: spreadsheet_id.to_string(),
            api_url: self.sheets.api_url.clone(),
            access_token: self.sheets.access_token.clone(),
            timeout: Duration::from_secs(self.sheets.timeout_secs),
            max_concurrent_requests: self.sheets.max_concurrent_requests,
        }
    }

    pub fn roster_client_config(&self) -> SheetsClientConfig {
        self.client_config(&self.roster.spreadsheet_id)
    }

    pub fn timecard_client_config(&self) -> SheetsClientConfig {
        let id = self
            .timecard
            .spreadsheet_id
            .as_deref()
            .unwrap_or(&self.roster.spreadsheet_id);
        self.client_config(id)
    }
}
