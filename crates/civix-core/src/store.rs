//! In-memory stores for issues and feedback
//!
//! No database, no files - session-lifetime collections seeded at startup.
//! Insertion order is preserved and meaningful: filters over snapshots are
//! stable with respect to it.

use crate::feedback::Feedback;
use crate::issue::Issue;

/// Ordered in-memory issue collection
///
/// Issues are created once from seed data and mutated in place by id;
/// there is no delete path.
#[derive(Debug, Default)]
pub struct IssueStore {
    issues: Vec<Issue>,
}

impl IssueStore {
    pub fn from_issues(issues: Vec<Issue>) -> Self {
        Self { issues }
    }

    /// Get an issue by ID
    pub fn get(&self, id: &str) -> Option<&Issue> {
        self.issues.iter().find(|i| i.id == id)
    }

    /// Full-collection read in insertion order
    pub fn all(&self) -> &[Issue] {
        &self.issues
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Replace the stored issue with the same id, verbatim
    ///
    /// Returns `false` when no issue matches; the store is left unchanged.
    /// The record keeps its position in the collection.
    pub fn replace(&mut self, issue: Issue) -> bool {
        match self.issues.iter_mut().find(|i| i.id == issue.id) {
            Some(slot) => {
                *slot = issue;
                true
            }
            None => false,
        }
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut Issue> {
        self.issues.iter_mut().find(|i| i.id == id)
    }
}

/// Static ordered feedback collection, read-only after seeding
#[derive(Debug, Default)]
pub struct FeedbackStore {
    entries: Vec<Feedback>,
}

impl FeedbackStore {
    pub fn from_entries(entries: Vec<Feedback>) -> Self {
        Self { entries }
    }

    pub fn all(&self) -> &[Feedback] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue::{Status, UNASSIGNED};

    fn issue(id: &str, status: Status) -> Issue {
        Issue {
            id: id.to_string(),
            title: format!("Issue {id}"),
            category: "Roads".to_string(),
            submitted_by: "Citizen".to_string(),
            date: "2023-10-26".parse().unwrap(),
            description: String::new(),
            location: String::new(),
            image_url: String::new(),
            status,
            assigned_to: UNASSIGNED.to_string(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_replace_overwrites_only_matching_issue() {
        let mut store =
            IssueStore::from_issues(vec![issue("1", Status::New), issue("2", Status::New)]);

        let mut updated = issue("1", Status::Completed);
        updated.notes = "Fixed.".to_string();
        assert!(store.replace(updated.clone()));

        assert_eq!(store.get("1"), Some(&updated));
        assert_eq!(store.get("2"), Some(&issue("2", Status::New)));
    }

    #[test]
    fn test_replace_unknown_id_is_noop() {
        let mut store = IssueStore::from_issues(vec![issue("1", Status::New)]);
        assert!(!store.replace(issue("99", Status::Completed)));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("1"), Some(&issue("1", Status::New)));
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut store =
            IssueStore::from_issues(vec![issue("1", Status::New), issue("2", Status::New)]);
        store.replace(issue("1", Status::Rejected));
        let ids: Vec<&str> = store.all().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }
}
