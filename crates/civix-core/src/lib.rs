//! civix-core: Core library for the civix civic-issue triage dashboard
//!
//! Provides the data model, in-memory stores, lifecycle controller and
//! filtering/aggregation logic behind the CLI and TUI front ends. Only
//! the staff profile is persisted; issues and feedback are seeded fresh
//! each session.

pub mod config;
pub mod error;
pub mod feedback;
pub mod filter;
pub mod issue;
pub mod lifecycle;
pub mod policy;
pub mod profile;
pub mod seed;
pub mod session;
pub mod storage;
pub mod store;

pub use config::Config;
pub use error::Error;
pub use feedback::Feedback;
pub use filter::{DateWindow, StatusCounts};
pub use issue::{Issue, Status, UNASSIGNED};
pub use lifecycle::{Lifecycle, UpdateOutcome};
pub use profile::{ProfileStore, UserProfile};
pub use session::Session;
pub use storage::Storage;
pub use store::{FeedbackStore, IssueStore};

/// Result type for civix operations
pub type Result<T> = std::result::Result<T, Error>;
