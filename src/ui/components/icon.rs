//! Icon component.
//!
//! Provides a consistent way to render icons throughout the application.

use gpui::{div, px, Hsla, IntoElement, ParentElement, RenderOnce, Styled};

/// Icons used by reimbursement widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconName {
    Pencil,
    PaperPlane,
    CheckCircle,
    ChevronDown,
}

impl IconName {
    /// Get the symbol/character for this icon.
    pub fn symbol(self) -> &'static str {
        match self {
            IconName::Pencil => "\u{270E}",
            IconName::PaperPlane => "\u{27A4}",
            IconName::CheckCircle => "\u{2714}",
            IconName::ChevronDown => "\u{2304}",
        }
    }

    /// Symbolic identifier, independent of the glyph used to draw it.
    pub fn identifier(self) -> &'static str {
        match self {
            IconName::Pencil => "pencil",
            IconName::PaperPlane => "paper-plane",
            IconName::CheckCircle => "check-circle",
            IconName::ChevronDown => "chevron-down",
        }
    }
}

/// An icon component.
#[derive(IntoElement)]
pub struct Icon {
    name: IconName,
    size: f32,
    color: Hsla,
}

impl Icon {
    /// Create an icon drawn at `size` pixels in `color`.
    pub fn new(name: IconName, size: f32, color: Hsla) -> Self {
        Self { name, size, color }
    }
}

impl RenderOnce for Icon {
    fn render(self, _window: &mut gpui::Window, _cx: &mut gpui::App) -> impl IntoElement {
        div()
            .size(px(self.size))
            .flex()
            .items_center()
            .justify_center()
            .text_color(self.color)
            .text_size(px(self.size))
            .child(self.name.symbol())
    }
}
