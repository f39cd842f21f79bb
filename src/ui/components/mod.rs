//! Reusable UI components.
//!
//! Components are stateless `RenderOnce` elements. Colors come from the
//! theme handed to them by the owning view.

pub mod badge;
pub mod button;
pub mod icon;
pub mod status_button;

pub use badge::{Badge, BadgeGeometry, BadgeSize};
pub use button::Button;
pub use icon::{Icon, IconName};
pub use status_button::{StatusButton, StatusShape, StatusTapAction};
