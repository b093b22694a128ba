//! Issue lifecycle controller
//!
//! Owns the issue store and is its only mutator. Besides the store it
//! tracks the two pieces of triage state the dashboard needs: which issue
//! the details view is showing, and which issue is staged for rejection
//! while the reason prompt is open.

use crate::issue::{Issue, Status, UNASSIGNED};
use crate::store::IssueStore;
use crate::{Error, Result};

/// Result of [`Lifecycle::update_issue`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The issue was written to the store (or silently ignored for an
    /// unknown id)
    Saved,
    /// The issue was staged; the caller must collect a rejection reason
    /// and call [`Lifecycle::submit_rejection`]
    RejectionPending,
}

/// Orchestrates status transitions over the issue store
#[derive(Debug)]
pub struct Lifecycle {
    store: IssueStore,
    selected: Option<String>,
    pending_rejection: Option<Issue>,
    default_department: String,
}

impl Lifecycle {
    pub fn new(store: IssueStore, default_department: impl Into<String>) -> Self {
        Self {
            store,
            selected: None,
            pending_rejection: None,
            default_department: default_department.into(),
        }
    }

    /// Read access to the store; all mutation goes through the controller
    pub fn store(&self) -> &IssueStore {
        &self.store
    }

    /// Mark an issue as the subject of the details view
    ///
    /// No side effect on data; selecting an unknown id clears the
    /// selection.
    pub fn select(&mut self, id: &str) {
        self.selected = self.store.get(id).map(|i| i.id.clone());
    }

    pub fn selected(&self) -> Option<&Issue> {
        self.selected.as_deref().and_then(|id| self.store.get(id))
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Issue staged for rejection, if the reason prompt is open
    pub fn pending_rejection(&self) -> Option<&Issue> {
        self.pending_rejection.as_ref()
    }

    /// Save staff edits to an issue
    ///
    /// With `is_rejecting` false the stored issue matching `updated.id` is
    /// overwritten verbatim; an unknown id is a silent no-op. With
    /// `is_rejecting` true nothing is written yet: the issue is staged and
    /// the caller is told to collect a rejection reason.
    pub fn update_issue(&mut self, updated: Issue, is_rejecting: bool) -> UpdateOutcome {
        if is_rejecting {
            self.pending_rejection = Some(updated);
            UpdateOutcome::RejectionPending
        } else {
            self.store.replace(updated);
            UpdateOutcome::Saved
        }
    }

    /// Finalize a staged rejection
    ///
    /// The reason must be non-empty after trimming. On success the staged
    /// issue is written with status forced to Rejected and the reason
    /// appended to its notes, and both the pending state and the details
    /// selection are cleared. The final issue is returned so callers can
    /// notify.
    pub fn submit_rejection(&mut self, reason: &str) -> Result<Issue> {
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(Error::EmptyRejectionReason);
        }
        let mut issue = self
            .pending_rejection
            .take()
            .ok_or(Error::NoPendingRejection)?;

        issue.status = Status::Rejected;
        issue.append_rejection_reason(reason);
        self.store.replace(issue.clone());
        self.selected = None;
        Ok(issue)
    }

    /// Abandon a staged rejection without writing anything
    pub fn cancel_rejection(&mut self) {
        self.pending_rejection = None;
    }

    /// Move an issue to in-progress, regardless of its current status
    pub fn acknowledge(&mut self, id: &str) -> Result<Issue> {
        let issue = self
            .store
            .get_mut(id)
            .ok_or_else(|| Error::IssueNotFound(id.to_string()))?;
        issue.status = Status::InProgress;
        Ok(issue.clone())
    }

    /// Move an issue to in-progress and route it to a department
    ///
    /// An unassigned issue goes to the configured default department;
    /// an existing assignment is kept.
    pub fn implement(&mut self, id: &str) -> Result<Issue> {
        let default_department = self.default_department.clone();
        let issue = self
            .store
            .get_mut(id)
            .ok_or_else(|| Error::IssueNotFound(id.to_string()))?;
        issue.status = Status::InProgress;
        if issue.assigned_to == UNASSIGNED {
            issue.assigned_to = default_department;
        }
        Ok(issue.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(id: &str, status: Status, assigned_to: &str, notes: &str) -> Issue {
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
            assigned_to: assigned_to.to_string(),
            notes: notes.to_string(),
        }
    }

    fn controller() -> Lifecycle {
        let store = IssueStore::from_issues(vec![
            issue("1", Status::New, UNASSIGNED, ""),
            issue("2", Status::InProgress, "Roads", "Crew dispatched."),
        ]);
        Lifecycle::new(store, "Public Works")
    }

    #[test]
    fn test_update_overwrites_matching_issue_verbatim() {
        let mut lc = controller();
        let mut updated = issue("1", Status::Completed, "Roads", "Done.");
        updated.title = "Issue 1".to_string();

        assert_eq!(lc.update_issue(updated.clone(), false), UpdateOutcome::Saved);
        assert_eq!(lc.store().get("1"), Some(&updated));
        // other issues untouched
        assert_eq!(
            lc.store().get("2"),
            Some(&issue("2", Status::InProgress, "Roads", "Crew dispatched."))
        );
    }

    #[test]
    fn test_update_unknown_id_is_silent_noop() {
        let mut lc = controller();
        let outcome = lc.update_issue(issue("99", Status::Completed, "Roads", ""), false);
        assert_eq!(outcome, UpdateOutcome::Saved);
        assert_eq!(lc.store().len(), 2);
        assert!(lc.store().get("99").is_none());
    }

    #[test]
    fn test_rejecting_update_stages_without_writing() {
        let mut lc = controller();
        let staged = issue("1", Status::Rejected, UNASSIGNED, "");
        let outcome = lc.update_issue(staged, true);
        assert_eq!(outcome, UpdateOutcome::RejectionPending);
        // store still holds the original
        assert_eq!(lc.store().get("1").unwrap().status, Status::New);
        assert!(lc.pending_rejection().is_some());
    }

    #[test]
    fn test_submit_rejection_forces_status_and_appends_reason() {
        let mut lc = controller();
        lc.select("1");
        lc.update_issue(issue("1", Status::New, UNASSIGNED, "Checked twice."), true);

        let rejected = lc.submit_rejection("Outside city limits").unwrap();
        assert_eq!(rejected.status, Status::Rejected);
        assert_eq!(
            rejected.notes,
            "Checked twice.\n\nRejection Reason: Outside city limits"
        );
        assert_eq!(lc.store().get("1"), Some(&rejected));
        // pending and selection cleared
        assert!(lc.pending_rejection().is_none());
        assert!(lc.selected().is_none());
    }

    #[test]
    fn test_empty_reason_is_validation_error_with_no_state_change() {
        let mut lc = controller();
        lc.update_issue(issue("1", Status::Rejected, UNASSIGNED, ""), true);

        for reason in ["", "   ", "\n\t "] {
            let err = lc.submit_rejection(reason).unwrap_err();
            assert!(matches!(err, Error::EmptyRejectionReason));
        }
        // still staged, store untouched
        assert!(lc.pending_rejection().is_some());
        assert_eq!(lc.store().get("1").unwrap().status, Status::New);
    }

    #[test]
    fn test_submit_without_pending_rejection() {
        let mut lc = controller();
        let err = lc.submit_rejection("reason").unwrap_err();
        assert!(matches!(err, Error::NoPendingRejection));
    }

    #[test]
    fn test_cancel_rejection_drops_staged_issue() {
        let mut lc = controller();
        lc.update_issue(issue("1", Status::Rejected, UNASSIGNED, ""), true);
        lc.cancel_rejection();
        assert!(lc.pending_rejection().is_none());
        assert_eq!(lc.store().get("1").unwrap().status, Status::New);
    }

    #[test]
    fn test_acknowledge_sets_in_progress() {
        let mut lc = controller();
        let updated = lc.acknowledge("1").unwrap();
        assert_eq!(updated.status, Status::InProgress);
        assert_eq!(lc.store().get("1").unwrap().status, Status::InProgress);
        assert!(matches!(
            lc.acknowledge("99").unwrap_err(),
            Error::IssueNotFound(_)
        ));
    }

    #[test]
    fn test_implement_assigns_default_department_when_unassigned() {
        let mut lc = controller();
        let updated = lc.implement("1").unwrap();
        assert_eq!(updated.status, Status::InProgress);
        assert_eq!(updated.assigned_to, "Public Works");
    }

    #[test]
    fn test_implement_keeps_existing_assignment() {
        let mut lc = controller();
        let updated = lc.implement("2").unwrap();
        assert_eq!(updated.status, Status::InProgress);
        assert_eq!(updated.assigned_to, "Roads");
    }

    #[test]
    fn test_select_tracks_details_subject() {
        let mut lc = controller();
        lc.select("2");
        assert_eq!(lc.selected().unwrap().id, "2");
        lc.select("99");
        assert!(lc.selected().is_none());
        lc.select("1");
        lc.clear_selection();
        assert!(lc.selected().is_none());
    }
}
