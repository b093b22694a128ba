//! Issue data model for civix
//!
//! A citizen-submitted civic complaint, tracked through a four-value
//! status lifecycle by municipal staff.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sentinel assignee for issues not yet routed to a department
pub const UNASSIGNED: &str = "Unassigned";

/// Issue status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    New,
    InProgress,
    Completed,
    Rejected,
}

impl Status {
    /// All statuses in canonical order
    pub const ALL: [Status; 4] = [
        Status::New,
        Status::InProgress,
        Status::Completed,
        Status::Rejected,
    ];

    pub fn is_open(&self) -> bool {
        matches!(self, Status::New | Status::InProgress)
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, Status::Completed | Status::Rejected)
    }
}

impl std::str::FromStr for Status {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "new" => Ok(Status::New),
            "in_progress" | "in-progress" | "inprogress" => Ok(Status::InProgress),
            "completed" => Ok(Status::Completed),
            "rejected" => Ok(Status::Rejected),
            _ => Err(crate::Error::InvalidStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::New => write!(f, "new"),
            Status::InProgress => write!(f, "in_progress"),
            Status::Completed => write!(f, "completed"),
            Status::Rejected => write!(f, "rejected"),
        }
    }
}

/// Core issue structure
///
/// Every field except `status`, `assigned_to` and `notes` is fixed at
/// submission time; staff edits go through the lifecycle controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Unique identifier, immutable after creation
    pub id: String,

    /// Short summary as submitted by the citizen
    pub title: String,

    /// Complaint category (e.g. "Roads", "Sanitation")
    pub category: String,

    /// Name of the submitting citizen
    pub submitted_by: String,

    /// Submission date
    pub date: NaiveDate,

    /// Detailed description
    pub description: String,

    /// Human-readable location
    pub location: String,

    /// Photo attached to the submission
    pub image_url: String,

    /// Current status
    pub status: Status,

    /// Department handling the issue, or [`UNASSIGNED`]
    pub assigned_to: String,

    /// Official notes; rejection reasons are appended, never overwrite
    pub notes: String,
}

impl Issue {
    pub fn is_assigned(&self) -> bool {
        self.assigned_to != UNASSIGNED
    }

    /// Append a rejection reason to the official notes
    ///
    /// Prior notes are preserved; the reason lands in its own block and
    /// the whole field is trimmed of surrounding whitespace.
    pub fn append_rejection_reason(&mut self, reason: &str) {
        self.notes = format!("{}\n\nRejection Reason: {}", self.notes, reason)
            .trim()
            .to_string();
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] [{}] {} - {}",
            self.id, self.category, self.status, self.date, self.title
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue_with_notes(notes: &str) -> Issue {
        Issue {
            id: "1".to_string(),
            title: "Broken streetlight".to_string(),
            category: "Streetlight".to_string(),
            submitted_by: "John Doe".to_string(),
            date: NaiveDate::from_ymd_opt(2023, 10, 26).unwrap(),
            description: String::new(),
            location: String::new(),
            image_url: String::new(),
            status: Status::New,
            assigned_to: UNASSIGNED.to_string(),
            notes: notes.to_string(),
        }
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("new".parse::<Status>().unwrap(), Status::New);
        assert_eq!("in-progress".parse::<Status>().unwrap(), Status::InProgress);
        assert_eq!("InProgress".parse::<Status>().unwrap(), Status::InProgress);
        assert_eq!("completed".parse::<Status>().unwrap(), Status::Completed);
        assert!("open".parse::<Status>().is_err());
    }

    #[test]
    fn test_append_reason_to_empty_notes() {
        let mut issue = issue_with_notes("");
        issue.append_rejection_reason("Duplicate report");
        assert_eq!(issue.notes, "Rejection Reason: Duplicate report");
    }

    #[test]
    fn test_append_reason_preserves_prior_notes() {
        let mut issue = issue_with_notes("Inspected on site.");
        issue.append_rejection_reason("Outside city limits");
        assert_eq!(
            issue.notes,
            "Inspected on site.\n\nRejection Reason: Outside city limits"
        );
    }
}
