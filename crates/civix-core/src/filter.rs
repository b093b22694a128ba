//! Pure filtering and aggregation over issue store snapshots
//!
//! Everything here is side-effect free; callers pass the current date in
//! so the window predicates stay deterministic under test.

use chrono::{Datelike, NaiveDate};

use crate::issue::{Issue, Status};

/// Date window for records and feedback filtering
///
/// Windows are evaluated against the caller-supplied "today".
/// `ThisWeek` uses ISO weeks, i.e. weeks starting on Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateWindow {
    #[default]
    AllTime,
    Today,
    ThisWeek,
    ThisMonth,
    ThisYear,
}

impl DateWindow {
    /// All windows in cycling order for UI selectors
    pub const ALL: [DateWindow; 5] = [
        DateWindow::AllTime,
        DateWindow::Today,
        DateWindow::ThisWeek,
        DateWindow::ThisMonth,
        DateWindow::ThisYear,
    ];

    /// Whether `date` falls inside this window relative to `today`
    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            DateWindow::AllTime => true,
            DateWindow::Today => date == today,
            DateWindow::ThisWeek => date.iso_week() == today.iso_week(),
            DateWindow::ThisMonth => {
                date.year() == today.year() && date.month() == today.month()
            }
            DateWindow::ThisYear => date.year() == today.year(),
        }
    }
}

impl std::str::FromStr for DateWindow {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" | "all-time" => Ok(DateWindow::AllTime),
            "today" => Ok(DateWindow::Today),
            "week" | "this-week" => Ok(DateWindow::ThisWeek),
            "month" | "this-month" => Ok(DateWindow::ThisMonth),
            "year" | "this-year" => Ok(DateWindow::ThisYear),
            _ => Err(crate::Error::InvalidDateWindow(s.to_string())),
        }
    }
}

impl std::fmt::Display for DateWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateWindow::AllTime => write!(f, "all"),
            DateWindow::Today => write!(f, "today"),
            DateWindow::ThisWeek => write!(f, "week"),
            DateWindow::ThisMonth => write!(f, "month"),
            DateWindow::ThisYear => write!(f, "year"),
        }
    }
}

/// Distinct categories present, in first-seen order
///
/// UI layers prepend their own "All" wildcard entry.
pub fn categories(issues: &[Issue]) -> Vec<&str> {
    let mut seen = Vec::new();
    for issue in issues {
        if !seen.contains(&issue.category.as_str()) {
            seen.push(issue.category.as_str());
        }
    }
    seen
}

/// Filter issues by status and category
///
/// `None` on either axis is the wildcard; both predicates are ANDed.
/// Matching issues keep their original relative order.
pub fn filter_issues<'a>(
    issues: &'a [Issue],
    status: Option<Status>,
    category: Option<&str>,
) -> Vec<&'a Issue> {
    issues
        .iter()
        .filter(|issue| status.is_none_or(|s| issue.status == s))
        .filter(|issue| category.is_none_or(|c| issue.category == c))
        .collect()
}

/// Per-status issue counts for the dashboard stat cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub new: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub rejected: usize,
    pub total: usize,
}

impl StatusCounts {
    /// Count issues per status in a single pass
    pub fn tally(issues: &[Issue]) -> Self {
        let mut counts = StatusCounts::default();
        for issue in issues {
            match issue.status {
                Status::New => counts.new += 1,
                Status::InProgress => counts.in_progress += 1,
                Status::Completed => counts.completed += 1,
                Status::Rejected => counts.rejected += 1,
            }
            counts.total += 1;
        }
        counts
    }

    pub fn get(&self, status: Status) -> usize {
        match status {
            Status::New => self.new,
            Status::InProgress => self.in_progress,
            Status::Completed => self.completed,
            Status::Rejected => self.rejected,
        }
    }
}

/// Completed issues inside `window`, most recent first
///
/// Only `Completed` issues are considered. The sort is stable, so issues
/// completed on the same date keep their original relative order.
pub fn completed_records<'a>(
    issues: &'a [Issue],
    window: DateWindow,
    today: NaiveDate,
) -> Vec<&'a Issue> {
    let mut records: Vec<&Issue> = issues
        .iter()
        .filter(|issue| issue.status == Status::Completed)
        .filter(|issue| window.contains(issue.date, today))
        .collect();
    records.sort_by(|a, b| b.date.cmp(&a.date));
    records
}
