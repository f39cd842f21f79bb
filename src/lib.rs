//! reimburse - Reimbursement set status widgets
//!
//! This crate provides the status presentation and transition logic for
//! reimbursement sets, the gpui widgets that render it, and the settings and
//! services that surround them.

pub mod app;
pub mod config;
pub mod domain;
pub mod services;
pub mod ui;

pub use app::App;
