//! Time granularities and date parts accepted by time dimension macros.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Time bucketing unit attached to a time dimension reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeGranularity {
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

impl TimeGranularity {
    /// All granularities, finest first.
    pub const ALL: [TimeGranularity; 5] = [
        TimeGranularity::Day,
        TimeGranularity::Week,
        TimeGranularity::Month,
        TimeGranularity::Quarter,
        TimeGranularity::Year,
    ];

    /// Parse a granularity literal (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "day" => Some(TimeGranularity::Day),
            "week" => Some(TimeGranularity::Week),
            "month" => Some(TimeGranularity::Month),
            "quarter" => Some(TimeGranularity::Quarter),
            "year" => Some(TimeGranularity::Year),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeGranularity::Day => "day",
            TimeGranularity::Week => "week",
            TimeGranularity::Month => "month",
            TimeGranularity::Quarter => "quarter",
            TimeGranularity::Year => "year",
        }
    }

    /// Comma-separated list of accepted literals, for error messages.
    pub fn vocabulary() -> String {
        Self::ALL.map(|g| g.as_str()).join(", ")
    }
}

impl fmt::Display for TimeGranularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A calendar component extracted from a time dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatePart {
    Year,
    Quarter,
    Month,
    Day,
    /// Day of week.
    Dow,
    /// Day of year.
    Doy,
}

impl DatePart {
    pub const ALL: [DatePart; 6] = [
        DatePart::Year,
        DatePart::Quarter,
        DatePart::Month,
        DatePart::Day,
        DatePart::Dow,
        DatePart::Doy,
    ];

    /// Parse a date part literal (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "year" => Some(DatePart::Year),
            "quarter" => Some(DatePart::Quarter),
            "month" => Some(DatePart::Month),
            "day" => Some(DatePart::Day),
            "dow" => Some(DatePart::Dow),
            "doy" => Some(DatePart::Doy),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DatePart::Year => "year",
            DatePart::Quarter => "quarter",
            DatePart::Month => "month",
            DatePart::Day => "day",
            DatePart::Dow => "dow",
            DatePart::Doy => "doy",
        }
    }

    pub fn vocabulary() -> String {
        Self::ALL.map(|p| p.as_str()).join(", ")
    }
}

impl fmt::Display for DatePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
