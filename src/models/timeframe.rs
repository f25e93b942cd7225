//! Bar aggregation periods.

use std::fmt;

/// Unit of a [`TimeFrame`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFrameUnit {
    Minute,
    Hour,
    Day,
    Week,
    Month,
}

/// Aggregation period of a bar, e.g. one day or fifteen minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeFrame {
    pub amount: u32,
    pub unit: TimeFrameUnit,
}

impl TimeFrame {
    pub fn new(amount: u32, unit: TimeFrameUnit) -> Self {
        Self { amount, unit }
    }

    /// The daily granularity used by the viewer.
    pub fn day() -> Self {
        Self::new(1, TimeFrameUnit::Day)
    }
}

impl fmt::Display for TimeFrame {
    /// Formats as `{amount}{unit}`, e.g. `1Day` or `15Min`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = match self.unit {
            TimeFrameUnit::Minute => "Min",
            TimeFrameUnit::Hour => "Hour",
            TimeFrameUnit::Day => "Day",
            TimeFrameUnit::Week => "Week",
            TimeFrameUnit::Month => "Month",
        };
        write!(f, "{}{}", self.amount, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_amount_and_unit() {
        assert_eq!(TimeFrame::day().to_string(), "1Day");
        assert_eq!(TimeFrame::new(15, TimeFrameUnit::Minute).to_string(), "15Min");
        assert_eq!(TimeFrame::new(3, TimeFrameUnit::Month).to_string(), "3Month");
    }
}
