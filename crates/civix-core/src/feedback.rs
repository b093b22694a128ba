//! Citizen feedback model and filtering
//!
//! Feedback entries are independent of issues and immutable after
//! submission; the dashboard only filters and ranks them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::filter::DateWindow;

/// A citizen satisfaction rating with optional comment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    /// Unique identifier
    pub id: String,

    /// Name of the citizen
    pub name: String,

    /// Submission date
    pub date: NaiveDate,

    /// City area the feedback refers to
    pub area: String,

    /// Star rating, 1-5 inclusive
    pub rating: u8,

    /// Free-text comment
    pub comment: String,
}

/// Distinct areas present, in first-seen order
pub fn areas(feedback: &[Feedback]) -> Vec<&str> {
    let mut seen = Vec::new();
    for entry in feedback {
        if !seen.contains(&entry.area.as_str()) {
            seen.push(entry.area.as_str());
        }
    }
    seen
}

/// Filter feedback by date window and area, ranked by rating
///
/// Both predicates are ANDed; `None` area matches everything. The result
/// is sorted highest rating first; entries with equal ratings keep their
/// original relative order. There is no secondary sort on date.
pub fn filter_feedback<'a>(
    feedback: &'a [Feedback],
    window: DateWindow,
    area: Option<&str>,
    today: NaiveDate,
) -> Vec<&'a Feedback> {
    let mut matched: Vec<&Feedback> = feedback
        .iter()
        .filter(|entry| window.contains(entry.date, today))
        .filter(|entry| area.is_none_or(|a| entry.area == a))
        .collect();
    matched.sort_by(|a, b| b.rating.cmp(&a.rating));
    matched
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, date: &str, area: &str, rating: u8) -> Feedback {
        Feedback {
            id: id.to_string(),
            name: format!("Citizen {id}"),
            date: date.parse().unwrap(),
            area: area.to_string(),
            rating,
            comment: String::new(),
        }
    }

    fn today() -> NaiveDate {
        "2024-07-22".parse().unwrap()
    }

    #[test]
    fn test_sorted_by_rating_descending_stable() {
        // Ratings [5, 4, 2, 5, 3] must come out as [5, 5, 4, 3, 2] with
        // the first 5 still ahead of the second.
        let feedback = vec![
            entry("f1", "2024-07-01", "Downtown", 5),
            entry("f2", "2024-07-02", "Downtown", 4),
            entry("f3", "2024-07-03", "Downtown", 2),
            entry("f4", "2024-07-04", "Downtown", 5),
            entry("f5", "2024-07-05", "Downtown", 3),
        ];
        let result = filter_feedback(&feedback, DateWindow::AllTime, None, today());
        let ids: Vec<&str> = result.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["f1", "f4", "f2", "f5", "f3"]);
    }

    #[test]
    fn test_area_filter_exact_match() {
        let feedback = vec![
            entry("f1", "2024-07-01", "Downtown", 3),
            entry("f2", "2024-07-02", "West End", 5),
            entry("f3", "2024-07-03", "Downtown", 4),
        ];
        let result = filter_feedback(&feedback, DateWindow::AllTime, Some("Downtown"), today());
        let ids: Vec<&str> = result.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["f3", "f1"]);
    }

    #[test]
    fn test_window_and_area_are_anded() {
        let feedback = vec![
            entry("f1", "2024-07-22", "Downtown", 5),
            entry("f2", "2024-07-22", "West End", 5),
            entry("f3", "2023-01-01", "Downtown", 5),
        ];
        let result = filter_feedback(&feedback, DateWindow::Today, Some("Downtown"), today());
        let ids: Vec<&str> = result.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["f1"]);
    }

    #[test]
    fn test_areas_first_seen_order() {
        let feedback = vec![
            entry("f1", "2024-07-01", "Downtown", 5),
            entry("f2", "2024-07-02", "North Suburbs", 4),
            entry("f3", "2024-07-03", "Downtown", 2),
            entry("f4", "2024-07-04", "West End", 5),
        ];
        assert_eq!(areas(&feedback), vec!["Downtown", "North Suburbs", "West End"]);
    }
}
