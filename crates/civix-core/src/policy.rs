//! Status transition policy
//!
//! The original dashboard encoded these rules only in which buttons were
//! shown; here they are standalone functions the front ends consult.
//! Deliberately permissive: any status may be written over any other
//! (a rejected issue can be re-opened), but a transition into Rejected
//! must first collect a reason.

use crate::issue::Status;

/// Quick actions offered for an issue in a given status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    /// Move a new issue to in-progress without assignment changes
    Acknowledge,
    /// Move to in-progress and assign the default department if unassigned
    Implement,
    /// Start the two-step rejection flow
    Reject,
}

/// Whether saving `next` over `current` must detour through the
/// reject-reason prompt
pub fn is_rejecting_transition(current: Status, next: Status) -> bool {
    next == Status::Rejected && current != Status::Rejected
}

/// Quick actions shown for an issue; only new issues get shortcuts
pub fn quick_actions(status: Status) -> &'static [QuickAction] {
    match status {
        Status::New => &[
            QuickAction::Acknowledge,
            QuickAction::Implement,
            QuickAction::Reject,
        ],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejecting_transition_requires_reason() {
        assert!(is_rejecting_transition(Status::New, Status::Rejected));
        assert!(is_rejecting_transition(Status::InProgress, Status::Rejected));
        assert!(is_rejecting_transition(Status::Completed, Status::Rejected));
    }

    #[test]
    fn test_already_rejected_is_not_a_rejecting_transition() {
        assert!(!is_rejecting_transition(Status::Rejected, Status::Rejected));
    }

    #[test]
    fn test_non_reject_targets_never_prompt() {
        assert!(!is_rejecting_transition(Status::New, Status::InProgress));
        assert!(!is_rejecting_transition(Status::Rejected, Status::New));
    }

    #[test]
    fn test_quick_actions_only_for_new() {
        assert_eq!(quick_actions(Status::New).len(), 3);
        assert!(quick_actions(Status::InProgress).is_empty());
        assert!(quick_actions(Status::Completed).is_empty());
        assert!(quick_actions(Status::Rejected).is_empty());
    }
}
