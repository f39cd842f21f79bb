//! Domain layer types for reimbursement sets.
//!
//! Status widgets only read these types; the state layer owns and mutates
//! them.

mod reimbursement_set;
mod types;

pub use reimbursement_set::{ReimbursementSet, ReimbursementSetStatus, ReimbursementSetSummary};
pub use types::ReimbursementSetId;
