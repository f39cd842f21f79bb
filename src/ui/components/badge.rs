//! Badge component.
//!
//! Compact tinted label with an optional leading icon, used where space is
//! tight (list rows, cards).

use gpui::{
    div, px, ElementId, FontWeight, Hsla, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled,
};
use serde::{Deserialize, Serialize};

use super::icon::{Icon, IconName};

type ClickHandler = Box<dyn Fn(&gpui::ClickEvent, &mut gpui::Window, &mut gpui::App) + 'static>;

/// Badge size options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// Fixed geometry for a badge size, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BadgeGeometry {
    pub padding_x: f32,
    pub padding_y: f32,
    pub corner_radius: f32,
    pub icon_size: f32,
    pub spacing: f32,
    pub font_size: f32,
}

impl BadgeSize {
    /// All sizes, smallest first.
    pub const ALL: [BadgeSize; 3] = [BadgeSize::Small, BadgeSize::Medium, BadgeSize::Large];

    /// Geometry profile for this size.
    pub fn geometry(self) -> BadgeGeometry {
        match self {
            BadgeSize::Small => BadgeGeometry {
                padding_x: 6.0,
                padding_y: 2.0,
                corner_radius: 8.0,
                icon_size: 12.0,
                spacing: 3.0,
                font_size: 10.0,
            },
            BadgeSize::Medium => BadgeGeometry {
                padding_x: 8.0,
                padding_y: 4.0,
                corner_radius: 10.0,
                icon_size: 14.0,
                spacing: 4.0,
                font_size: 11.0,
            },
            BadgeSize::Large => BadgeGeometry {
                padding_x: 10.0,
                padding_y: 6.0,
                corner_radius: 12.0,
                icon_size: 16.0,
                spacing: 5.0,
                font_size: 12.0,
            },
        }
    }
}

/// A tinted badge: translucent fill and border in `tint`, label in `tint`.
#[derive(IntoElement)]
pub struct Badge {
    id: ElementId,
    label: SharedString,
    icon: Option<IconName>,
    tint: Hsla,
    size: BadgeSize,
    on_click: Option<ClickHandler>,
}

impl Badge {
    /// Create a new badge with the given label and tint color.
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>, tint: Hsla) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            tint,
            size: BadgeSize::Medium,
            on_click: None,
        }
    }

    /// Show an icon before the label.
    pub fn icon(mut self, icon: IconName) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Set the badge size.
    pub fn size(mut self, size: BadgeSize) -> Self {
        self.size = size;
        self
    }

    /// Set the click handler.
    pub fn on_click(
        mut self,
        handler: impl Fn(&gpui::ClickEvent, &mut gpui::Window, &mut gpui::App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Badge {
    fn render(self, _window: &mut gpui::Window, _cx: &mut gpui::App) -> impl IntoElement {
        let geometry = self.size.geometry();
        let fill = Hsla { a: 0.12, ..self.tint };
        let border = Hsla { a: 0.3, ..self.tint };

        let mut element = div()
            .id(self.id)
            .flex()
            .items_center()
            .gap(px(geometry.spacing))
            .px(px(geometry.padding_x))
            .py(px(geometry.padding_y))
            .rounded(px(geometry.corner_radius))
            .bg(fill)
            .border_1()
            .border_color(border)
            .text_color(self.tint)
            .text_size(px(geometry.font_size))
            .font_weight(FontWeight::MEDIUM);

        if let Some(icon) = self.icon {
            element = element.child(Icon::new(icon, geometry.icon_size, self.tint));
        }
        element = element.child(self.label);

        if let Some(handler) = self.on_click {
            element = element.cursor_pointer().on_click(handler);
        }

        element
    }
}
