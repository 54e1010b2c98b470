use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Time window a dashboard view is restricted to.
///
/// The trend series and the income breakdown read `Monthly`/`Yearly`
/// differently: the series looks back to the start of the previous month or
/// year, the breakdown keeps only the current calendar month or year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum TimeWindow {
    Monthly,
    Yearly,
    AllTime,
    Custom { start: NaiveDate, end: NaiveDate },
}

impl TimeWindow {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::AllTime => "all-time",
            Self::Custom { .. } => "custom",
        }
    }

    /// Build a window from its mode name. `custom` needs both bounds.
    pub fn parse(mode: &str, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Option<Self> {
        match mode.trim().to_lowercase().as_str() {
            "monthly" | "month" => Some(Self::Monthly),
            "yearly" | "year" => Some(Self::Yearly),
            "all-time" | "all" | "alltime" => Some(Self::AllTime),
            "custom" => match (start, end) {
                (Some(start), Some(end)) => Some(Self::Custom { start, end }),
                _ => None,
            },
            _ => None,
        }
    }
}

impl std::fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Custom { start, end } => write!(f, "custom ({start} to {end})"),
            other => write!(f, "{}", other.as_str()),
        }
    }
}

/// 00:00:00.000 of `day`.
pub fn start_of_day(day: NaiveDate) -> NaiveDateTime {
    day.and_time(NaiveTime::MIN)
}

/// 23:59:59.999 of `day`.
pub fn end_of_day(day: NaiveDate) -> NaiveDateTime {
    start_of_day(day) + Duration::days(1) - Duration::milliseconds(1)
}

/// First day of the calendar month before the one containing `today`.
pub(crate) fn first_of_previous_month(today: NaiveDate) -> NaiveDate {
    let (year, month) = if today.month() == 1 {
        (today.year() - 1, 12)
    } else {
        (today.year(), today.month() - 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(today)
}

/// January 1 of the year before the one containing `today`.
pub(crate) fn first_of_previous_year(today: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(today.year() - 1, 1, 1).unwrap_or(today)
}

#[cfg(test)]
#[path = "window_tests.rs"]
mod tests;
