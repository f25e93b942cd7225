//! Relative time ranges offered by the viewer and the date windows they
//! resolve to.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};

/// One of the fixed relative ranges a user can pick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RangeSelection {
    #[default]
    OneMonth,
    ThreeMonths,
    SixMonths,
    YearToDate,
    OneYear,
}

impl RangeSelection {
    /// All selections in display order.
    pub const ALL: [RangeSelection; 5] = [
        Self::OneMonth,
        Self::ThreeMonths,
        Self::SixMonths,
        Self::YearToDate,
        Self::OneYear,
    ];

    /// Returns the display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::OneMonth => "1M",
            Self::ThreeMonths => "3M",
            Self::SixMonths => "6M",
            Self::YearToDate => "YTD",
            Self::OneYear => "1Y",
        }
    }

    /// Position of this selection in [`RangeSelection::ALL`].
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|r| *r == self).unwrap_or(0)
    }

    /// The next selection, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The previous selection, wrapping around.
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Fixed look-back for the rolling ranges; `None` for year-to-date.
    pub fn lookback(self) -> Option<Duration> {
        match self {
            Self::OneMonth => Some(Duration::days(30)),
            Self::ThreeMonths => Some(Duration::days(90)),
            Self::SixMonths => Some(Duration::days(180)),
            Self::OneYear => Some(Duration::days(365)),
            Self::YearToDate => None,
        }
    }

    /// Resolves this selection against `now`.
    ///
    /// Year-to-date starts at midnight on January 1 in `now`'s time zone.
    pub fn window<Tz: TimeZone>(self, now: DateTime<Tz>) -> DateWindow {
        let start = match self.lookback() {
            Some(lookback) => now.clone() - lookback,
            None => start_of_year(&now),
        };
        DateWindow {
            start: start.with_timezone(&Utc),
            end: now.with_timezone(&Utc),
        }
    }
}

/// Midnight on January 1 of `now`'s year, in `now`'s time zone.
fn start_of_year<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Tz> {
    let midnight = NaiveDate::from_ymd_opt(now.year(), 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default();
    now.timezone()
        .from_local_datetime(&midnight)
        .earliest()
        // A zone that skips midnight on Jan 1 falls back to UTC midnight.
        .unwrap_or_else(|| now.timezone().from_utc_datetime(&midnight))
}

impl fmt::Display for RangeSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RangeSelection {
    type Err = crate::TrendviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| crate::TrendviewError::Config(format!("unknown range {s:?}")))
    }
}

/// The `[start, end)` pair a range resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}
