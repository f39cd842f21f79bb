//! Application views
//!
//! Views are the top-level UI components that compose together to form
//! the application interface. Each view manages its own state and handles
//! user interactions.

mod reimbursement_board;

pub use reimbursement_board::ReimbursementBoard;
