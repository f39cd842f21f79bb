//! UI components and views
//!
//! This module contains the gpui-based user interface for reimburse.
//! The UI is organized into:
//! - `theme`: Color schemes and semantic color roles
//! - `status_presentation`: Status to label/color/icon mapping
//! - `components`: Reusable UI primitives
//! - `views`: Full-screen application views

pub mod components;
pub mod status_presentation;
pub mod theme;
pub mod views;

pub use status_presentation::{display_spec, DisplaySpec};
pub use theme::{ColorRole, Theme, ThemeColors, ThemeMode};
pub use views::ReimbursementBoard;
