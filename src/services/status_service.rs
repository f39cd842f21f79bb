//! Status change requests and the in-process status service.
//!
//! Status widgets never write a status themselves. A tap produces either a
//! [`StatusChangeRequest`] (one proposed target) or a [`StatusPickRequest`]
//! (no target) that is handed to a [`StatusRequests`] implementation. The
//! implementation owns confirmation UI and the actual write; the widget does
//! not observe the outcome.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::Utc;
use thiserror::Error;

use crate::domain::{
    ReimbursementSet, ReimbursementSetId, ReimbursementSetStatus, ReimbursementSetSummary,
};

/// A tap proposing a single transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChangeRequest {
    pub id: ReimbursementSetId,
    pub current: ReimbursementSetStatus,
    pub next: ReimbursementSetStatus,
    pub name: String,
    pub invoice_count: u32,
}

/// A tap asking the user to choose any status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusPickRequest {
    pub id: ReimbursementSetId,
    pub current: ReimbursementSetStatus,
    pub name: String,
    pub invoice_count: u32,
}

/// Receiver of status widget taps.
#[cfg_attr(test, mockall::automock)]
pub trait StatusRequests {
    /// Ask the user to confirm moving to `request.next`.
    fn request_status_change(&self, request: StatusChangeRequest);

    /// Ask the user to pick a new status.
    fn request_status_pick(&self, request: StatusPickRequest);
}

/// Errors from applying a status change.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatusServiceError {
    #[error("Reimbursement set not found: {0}")]
    NotFound(ReimbursementSetId),

    #[error("Reimbursement set {id} is already {status:?}")]
    UnchangedStatus {
        id: ReimbursementSetId,
        status: ReimbursementSetStatus,
    },

    #[error("Reimbursement set {id} was expected to be {expected:?} but is {actual:?}")]
    StaleStatus {
        id: ReimbursementSetId,
        expected: ReimbursementSetStatus,
        actual: ReimbursementSetStatus,
    },

    #[error("No status pick is pending")]
    NoPendingPick,
}

/// Result type for status service operations.
pub type Result<T> = std::result::Result<T, StatusServiceError>;

#[derive(Default)]
struct Inner {
    sets: HashMap<ReimbursementSetId, ReimbursementSet>,
    order: Vec<ReimbursementSetId>,
    pending_pick: Option<StatusPickRequest>,
}

/// In-memory state layer for reimbursement sets.
///
/// Confirmation requests are applied immediately. Pick requests are parked
/// until a host view resolves them with [`InMemoryStatusService::resolve_pick`].
#[derive(Default)]
pub struct InMemoryStatusService {
    inner: Mutex<Inner>,
}

impl InMemoryStatusService {
    /// Create an empty service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a service seeded with `sets`, keeping their order.
    pub fn with_sets(sets: impl IntoIterator<Item = ReimbursementSet>) -> Self {
        let service = Self::new();
        for set in sets {
            service.insert(set);
        }
        service
    }

    /// Add or replace a set.
    pub fn insert(&self, set: ReimbursementSet) {
        let mut inner = self.lock();
        if !inner.sets.contains_key(&set.id) {
            inner.order.push(set.id.clone());
        }
        inner.sets.insert(set.id.clone(), set);
    }

    /// Summaries of all sets in insertion order.
    pub fn summaries(&self) -> Vec<ReimbursementSetSummary> {
        let inner = self.lock();
        inner
            .order
            .iter()
            .filter_map(|id| inner.sets.get(id))
            .map(ReimbursementSet::summary)
            .collect()
    }

    /// Summary of one set.
    pub fn summary(&self, id: &ReimbursementSetId) -> Result<ReimbursementSetSummary> {
        self.lock()
            .sets
            .get(id)
            .map(ReimbursementSet::summary)
            .ok_or_else(|| StatusServiceError::NotFound(id.clone()))
    }

    /// Move a set from `expected` to `status`.
    ///
    /// Any status may follow any other. Fails with
    /// [`StatusServiceError::StaleStatus`] when the set is no longer in
    /// `expected`, e.g. when the request was built from an old summary, and
    /// with [`StatusServiceError::UnchangedStatus`] when `status` is the
    /// current status.
    pub fn change_status(
        &self,
        id: &ReimbursementSetId,
        expected: ReimbursementSetStatus,
        status: ReimbursementSetStatus,
    ) -> Result<ReimbursementSetSummary> {
        let mut inner = self.lock();
        let set = inner
            .sets
            .get_mut(id)
            .ok_or_else(|| StatusServiceError::NotFound(id.clone()))?;

        if set.status != expected {
            return Err(StatusServiceError::StaleStatus {
                id: id.clone(),
                expected,
                actual: set.status,
            });
        }

        if set.status == status {
            return Err(StatusServiceError::UnchangedStatus {
                id: id.clone(),
                status,
            });
        }

        let previous = set.status;
        set.status = status;
        set.updated_at = Utc::now();

        tracing::info!(
            set_id = %id,
            from = previous.as_str(),
            to = status.as_str(),
            invoices = set.invoice_count,
            "Reimbursement set status changed"
        );

        Ok(set.summary())
    }

    /// The pick request waiting for a choice, if any.
    pub fn pending_pick(&self) -> Option<StatusPickRequest> {
        self.lock().pending_pick.clone()
    }

    /// Apply the user's choice for the pending pick.
    pub fn resolve_pick(&self, status: ReimbursementSetStatus) -> Result<ReimbursementSetSummary> {
        let pick = self
            .lock()
            .pending_pick
            .take()
            .ok_or(StatusServiceError::NoPendingPick)?;
        self.change_status(&pick.id, pick.current, status)
    }

    /// Drop the pending pick without changing anything.
    pub fn cancel_pick(&self) {
        if let Some(pick) = self.lock().pending_pick.take() {
            tracing::debug!(set_id = %pick.id, "Status pick cancelled");
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl StatusRequests for InMemoryStatusService {
    fn request_status_change(&self, request: StatusChangeRequest) {
        if let Err(e) = self.change_status(&request.id, request.current, request.next) {
            tracing::warn!(set_id = %request.id, "Status change rejected: {}", e);
        }
    }

    fn request_status_pick(&self, request: StatusPickRequest) {
        tracing::debug!(set_id = %request.id, current = request.current.as_str(), "Status pick requested");
        self.lock().pending_pick = Some(request);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn seeded() -> (InMemoryStatusService, ReimbursementSetId) {
        let set = ReimbursementSet::new("Conference", 3);
        let id = set.id.clone();
        (InMemoryStatusService::with_sets([set]), id)
    }

    #[test]
    fn change_request_applies_next_status() {
        let (service, id) = seeded();

        service.request_status_change(StatusChangeRequest {
            id: id.clone(),
            current: ReimbursementSetStatus::Unsubmitted,
            next: ReimbursementSetStatus::Submitted,
            name: "Conference".to_string(),
            invoice_count: 3,
        });

        let summary = service.summary(&id).unwrap();
        assert_eq!(summary.status, ReimbursementSetStatus::Submitted);
        assert_eq!(summary.invoice_count, 3);
    }

    #[test]
    fn unchanged_status_is_rejected() {
        let (service, id) = seeded();

        let err = service
            .change_status(
                &id,
                ReimbursementSetStatus::Unsubmitted,
                ReimbursementSetStatus::Unsubmitted,
            )
            .unwrap_err();
        assert_eq!(
            err,
            StatusServiceError::UnchangedStatus {
                id,
                status: ReimbursementSetStatus::Unsubmitted,
            }
        );
    }

    #[test]
    fn stale_change_request_is_rejected() {
        let set = ReimbursementSet::new("Conference", 3)
            .with_status(ReimbursementSetStatus::Reimbursed);
        let id = set.id.clone();
        let service = InMemoryStatusService::with_sets([set]);

        service.request_status_change(StatusChangeRequest {
            id: id.clone(),
            current: ReimbursementSetStatus::Unsubmitted,
            next: ReimbursementSetStatus::Submitted,
            name: "Conference".to_string(),
            invoice_count: 3,
        });

        assert_eq!(
            service.summary(&id).unwrap().status,
            ReimbursementSetStatus::Reimbursed
        );
    }

    #[test]
    fn change_status_reports_actual_status() {
        let (service, id) = seeded();

        let err = service
            .change_status(
                &id,
                ReimbursementSetStatus::Submitted,
                ReimbursementSetStatus::Reimbursed,
            )
            .unwrap_err();
        assert_eq!(
            err,
            StatusServiceError::StaleStatus {
                id,
                expected: ReimbursementSetStatus::Submitted,
                actual: ReimbursementSetStatus::Unsubmitted,
            }
        );
    }

    #[test]
    fn pick_resolved_after_status_moved_is_stale() {
        let (service, id) = seeded();
        service.request_status_pick(StatusPickRequest {
            id: id.clone(),
            current: ReimbursementSetStatus::Unsubmitted,
            name: "Conference".to_string(),
            invoice_count: 3,
        });
        service
            .change_status(
                &id,
                ReimbursementSetStatus::Unsubmitted,
                ReimbursementSetStatus::Submitted,
            )
            .unwrap();

        let err = service
            .resolve_pick(ReimbursementSetStatus::Reimbursed)
            .unwrap_err();
        assert!(matches!(err, StatusServiceError::StaleStatus { .. }));
        assert_eq!(
            service.summary(&id).unwrap().status,
            ReimbursementSetStatus::Submitted
        );
    }

    #[test]
    fn unknown_set_is_not_found() {
        let service = InMemoryStatusService::new();
        let id = ReimbursementSetId::from("missing");

        let err = service
            .change_status(
                &id,
                ReimbursementSetStatus::Unsubmitted,
                ReimbursementSetStatus::Submitted,
            )
            .unwrap_err();
        assert_eq!(err, StatusServiceError::NotFound(id));
    }

    #[test]
    fn pick_request_waits_for_resolution() {
        let (service, id) = seeded();

        service.request_status_pick(StatusPickRequest {
            id: id.clone(),
            current: ReimbursementSetStatus::Unsubmitted,
            name: "Conference".to_string(),
            invoice_count: 3,
        });

        assert_eq!(service.pending_pick().map(|p| p.id), Some(id.clone()));
        assert_eq!(
            service.summary(&id).unwrap().status,
            ReimbursementSetStatus::Unsubmitted
        );

        let summary = service
            .resolve_pick(ReimbursementSetStatus::Reimbursed)
            .unwrap();
        assert_eq!(summary.status, ReimbursementSetStatus::Reimbursed);
        assert!(service.pending_pick().is_none());
    }

    #[test]
    fn resolve_without_pending_pick_fails() {
        let (service, _) = seeded();
        assert_eq!(
            service.resolve_pick(ReimbursementSetStatus::Submitted),
            Err(StatusServiceError::NoPendingPick)
        );
    }

    #[test]
    fn cancel_pick_leaves_status() {
        let (service, id) = seeded();
        service.request_status_pick(StatusPickRequest {
            id: id.clone(),
            current: ReimbursementSetStatus::Unsubmitted,
            name: "Conference".to_string(),
            invoice_count: 3,
        });

        service.cancel_pick();

        assert!(service.pending_pick().is_none());
        assert_eq!(
            service.summary(&id).unwrap().status,
            ReimbursementSetStatus::Unsubmitted
        );
    }

    #[test]
    fn summaries_keep_insertion_order() {
        let first = ReimbursementSet::new("First", 1);
        let second = ReimbursementSet::new("Second", 2);
        let service = InMemoryStatusService::with_sets([first, second]);

        let names: Vec<_> = service.summaries().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["First", "Second"]);
    }
}
