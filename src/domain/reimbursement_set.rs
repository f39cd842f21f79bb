//! Reimbursement set domain types.
//!
//! A reimbursement set groups expense invoices that are submitted together.
//! Its status tracks where the set is in the reimbursement workflow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ReimbursementSetId;

/// Workflow stage of a reimbursement set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReimbursementSetStatus {
    /// Still being assembled, not yet handed in.
    Unsubmitted,
    /// Handed in and awaiting payment.
    Submitted,
    /// Paid out.
    Reimbursed,
}

impl ReimbursementSetStatus {
    /// All statuses in workflow order.
    pub const ALL: [ReimbursementSetStatus; 3] = [
        ReimbursementSetStatus::Unsubmitted,
        ReimbursementSetStatus::Submitted,
        ReimbursementSetStatus::Reimbursed,
    ];

    /// The status offered when the user taps a status button.
    ///
    /// A reimbursed set offers a withdrawal back to submitted, so there is
    /// no terminal status.
    pub fn next_status(self) -> ReimbursementSetStatus {
        match self {
            ReimbursementSetStatus::Unsubmitted => ReimbursementSetStatus::Submitted,
            ReimbursementSetStatus::Submitted => ReimbursementSetStatus::Reimbursed,
            ReimbursementSetStatus::Reimbursed => ReimbursementSetStatus::Submitted,
        }
    }

    /// Stable machine name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            ReimbursementSetStatus::Unsubmitted => "unsubmitted",
            ReimbursementSetStatus::Submitted => "submitted",
            ReimbursementSetStatus::Reimbursed => "reimbursed",
        }
    }
}

/// The read-only view of a reimbursement set that status widgets consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReimbursementSetSummary {
    /// Identifier of the set.
    pub id: ReimbursementSetId,
    /// Display name.
    pub name: String,
    /// Current workflow status.
    pub status: ReimbursementSetStatus,
    /// Authoritative number of invoices held by the set.
    pub invoice_count: u32,
}

/// A reimbursement set as held by the state layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReimbursementSet {
    /// Unique identifier for this set.
    pub id: ReimbursementSetId,
    /// Display name chosen by the user.
    pub name: String,
    /// Current workflow status.
    pub status: ReimbursementSetStatus,
    /// Number of invoices in the set.
    pub invoice_count: u32,
    /// When the set was last modified.
    pub updated_at: DateTime<Utc>,
}

impl ReimbursementSet {
    /// Create a new unsubmitted set.
    pub fn new(name: impl Into<String>, invoice_count: u32) -> Self {
        Self {
            id: ReimbursementSetId::new(),
            name: name.into(),
            status: ReimbursementSetStatus::Unsubmitted,
            invoice_count,
            updated_at: Utc::now(),
        }
    }

    /// Set the initial status.
    pub fn with_status(mut self, status: ReimbursementSetStatus) -> Self {
        self.status = status;
        self
    }

    /// Snapshot of the fields a status widget reads.
    pub fn summary(&self) -> ReimbursementSetSummary {
        ReimbursementSetSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            status: self.status,
            invoice_count: self.invoice_count,
        }
    }
}
