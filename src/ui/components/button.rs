//! Button component.
//!
//! Filled action button with optional leading and trailing icons.

use gpui::{
    div, px, ClickEvent, ElementId, FontWeight, Hsla, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled,
};

use super::icon::{Icon, IconName};

/// Type alias for button click handlers.
type ClickHandler = Box<dyn Fn(&ClickEvent, &mut gpui::Window, &mut gpui::App) + 'static>;

const HEIGHT: f32 = 40.0;
const PADDING_X: f32 = 20.0;
const FONT_SIZE: f32 = 14.0;
const ICON_SIZE: f32 = 18.0;

/// A filled button component.
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    icon: Option<IconName>,
    trailing_icon: Option<IconName>,
    fill: Hsla,
    foreground: Hsla,
    on_click: Option<ClickHandler>,
}

impl Button {
    /// Create a new button filled with `fill`, drawing text in `foreground`.
    pub fn new(
        id: impl Into<ElementId>,
        label: impl Into<SharedString>,
        fill: Hsla,
        foreground: Hsla,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            trailing_icon: None,
            fill,
            foreground,
            on_click: None,
        }
    }

    /// Show an icon before the label.
    pub fn icon(mut self, icon: IconName) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Show an icon after the label.
    pub fn trailing_icon(mut self, icon: IconName) -> Self {
        self.trailing_icon = Some(icon);
        self
    }

    /// Set the click handler.
    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut gpui::Window, &mut gpui::App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut gpui::Window, _cx: &mut gpui::App) -> impl IntoElement {
        let hover_fill = Hsla {
            a: 0.85,
            ..self.fill
        };

        let mut element = div()
            .id(self.id)
            .h(px(HEIGHT))
            .px(px(PADDING_X))
            .flex()
            .items_center()
            .justify_center()
            .gap(px(8.0))
            .rounded(px(8.0))
            .bg(self.fill)
            .text_color(self.foreground)
            .text_size(px(FONT_SIZE))
            .font_weight(FontWeight::SEMIBOLD)
            .cursor_pointer()
            .hover(move |style| style.bg(hover_fill));

        if let Some(icon) = self.icon {
            element = element.child(Icon::new(icon, ICON_SIZE, self.foreground));
        }
        element = element.child(self.label);
        if let Some(icon) = self.trailing_icon {
            element = element.child(Icon::new(icon, ICON_SIZE, self.foreground));
        }

        if let Some(handler) = self.on_click {
            element = element.on_click(handler);
        }

        element
    }
}
