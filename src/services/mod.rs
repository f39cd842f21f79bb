//! Services layer.
//!
//! Collaborators that sit behind the status widgets: the request boundary
//! the widgets call into, and an in-process state layer implementing it.

mod status_service;

#[cfg(test)]
pub use status_service::MockStatusRequests;
pub use status_service::{
    InMemoryStatusService, Result, StatusChangeRequest, StatusPickRequest, StatusRequests,
    StatusServiceError,
};
