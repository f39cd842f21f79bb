//! Reimbursement board view
//!
//! Lists reimbursement sets with a compact status badge per row and shows a
//! full status button for the selected set.

use std::path::PathBuf;
use std::sync::Arc;

use gpui::{
    div, px, Context, FontWeight, InteractiveElement, IntoElement, ParentElement, Render,
    SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::config::Settings;
use crate::domain::{ReimbursementSetId, ReimbursementSetStatus, ReimbursementSetSummary};
use crate::services::{InMemoryStatusService, StatusPickRequest};
use crate::ui::components::{Badge, StatusButton};
use crate::ui::status_presentation::display_spec;
use crate::ui::theme::Theme;

/// Main window view listing reimbursement sets.
pub struct ReimbursementBoard {
    theme: Theme,
    settings: Settings,
    settings_path: Option<PathBuf>,
    service: Arc<InMemoryStatusService>,
    selected: Option<ReimbursementSetId>,
}

impl ReimbursementBoard {
    pub fn new(
        theme: Theme,
        settings: Settings,
        settings_path: Option<PathBuf>,
        service: Arc<InMemoryStatusService>,
        _window: &mut Window,
        _cx: &mut Context<Self>,
    ) -> Self {
        let selected = service.summaries().first().map(|s| s.id.clone());
        Self {
            theme,
            settings,
            settings_path,
            service,
            selected,
        }
    }

    /// Flip the theme and remember the choice in the settings file.
    fn toggle_theme(&mut self) {
        self.theme.toggle();
        self.settings.appearance.theme = self.theme.mode.setting();

        let Some(path) = &self.settings_path else {
            return;
        };
        if let Err(e) = self.settings.save_to(path) {
            tracing::warn!("Failed to save settings: {}", e);
        }
    }

    fn status_button(
        &self,
        id: impl Into<SharedString>,
        summary: ReimbursementSetSummary,
    ) -> StatusButton {
        let id: SharedString = id.into();
        StatusButton::new(id, summary, &self.theme, self.service.clone())
            .labels(self.settings.status_button.labels.clone())
            .tap_behavior(self.settings.status_button.tap_behavior)
    }

    fn render_title_bar(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let colors = &self.theme.colors;
        let hover_bg = colors.surface_elevated;

        div()
            .id("title-bar")
            .h(px(40.0))
            .w_full()
            .flex()
            .items_center()
            .justify_between()
            .px(px(16.0))
            .bg(colors.surface)
            .border_b_1()
            .border_color(colors.border)
            .child(SharedString::from("Reimbursements"))
            .child(
                div()
                    .id("toggle-theme")
                    .px(px(8.0))
                    .py(px(4.0))
                    .rounded(px(6.0))
                    .text_color(colors.text_secondary)
                    .cursor_pointer()
                    .hover(move |style| style.bg(hover_bg))
                    .on_click(cx.listener(|this, _, _, cx| {
                        this.toggle_theme();
                        cx.notify();
                    }))
                    .child(SharedString::from("Theme")),
            )
    }

    fn render_set_row(
        &self,
        index: usize,
        summary: ReimbursementSetSummary,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let colors = &self.theme.colors;
        let selected = self.selected.as_ref() == Some(&summary.id);
        let bg = if selected {
            colors.surface_elevated
        } else {
            colors.background
        };
        let hover_bg = colors.surface;
        let id = summary.id.clone();

        div()
            .px(px(12.0))
            .py(px(10.0))
            .flex()
            .items_center()
            .justify_between()
            .bg(bg)
            .border_b_1()
            .border_color(colors.border)
            .child(
                div()
                    .id(("set-row", index))
                    .flex_1()
                    .flex()
                    .flex_col()
                    .cursor_pointer()
                    .hover(move |style| style.bg(hover_bg))
                    .on_click(cx.listener(move |this, _, _, cx| {
                        this.selected = Some(id.clone());
                        cx.notify();
                    }))
                    .child(
                        div()
                            .text_color(colors.text_primary)
                            .font_weight(FontWeight::SEMIBOLD)
                            .child(SharedString::from(summary.name.clone())),
                    )
                    .child(
                        div()
                            .text_color(colors.text_muted)
                            .text_sm()
                            .child(SharedString::from(format!(
                                "{} invoices",
                                summary.invoice_count
                            ))),
                    ),
            )
            .child(
                self.status_button(format!("set-badge-{}", index), summary)
                    .compact(true)
                    .size(self.settings.status_button.badge_size),
            )
    }

    fn render_detail(&self) -> impl IntoElement {
        let colors = &self.theme.colors;
        let selected = self
            .selected
            .as_ref()
            .and_then(|id| self.service.summary(id).ok());

        let mut pane = div()
            .id("detail-pane")
            .flex_1()
            .h_full()
            .flex()
            .flex_col()
            .gap(px(16.0))
            .p(px(24.0))
            .bg(colors.background);

        match selected {
            Some(summary) => {
                pane = pane
                    .child(
                        div()
                            .text_color(colors.text_primary)
                            .text_xl()
                            .font_weight(FontWeight::BOLD)
                            .child(SharedString::from(summary.name.clone())),
                    )
                    .child(self.status_button("detail-status", summary));
            }
            None => {
                pane = pane.child(
                    div()
                        .text_color(colors.text_muted)
                        .child(SharedString::from("Select a reimbursement set")),
                );
            }
        }

        if let Some(pick) = self.service.pending_pick() {
            pane = pane.child(self.render_picker(pick));
        }

        pane
    }

    fn render_picker(&self, pick: StatusPickRequest) -> impl IntoElement {
        let colors = &self.theme.colors;

        let mut strip = div()
            .id("status-picker")
            .flex()
            .items_center()
            .gap(px(8.0))
            .p(px(12.0))
            .rounded(px(8.0))
            .bg(colors.surface)
            .border_1()
            .border_color(colors.border)
            .child(
                div()
                    .text_color(colors.text_secondary)
                    .text_sm()
                    .child(SharedString::from(format!(
                        "{} ({} invoices)",
                        pick.name, pick.invoice_count
                    ))),
            );

        for status in ReimbursementSetStatus::ALL {
            let spec = display_spec(status, &self.settings.status_button.labels);
            let service = self.service.clone();
            strip = strip.child(
                Badge::new(
                    SharedString::from(format!("pick-{}", status.as_str())),
                    spec.label,
                    colors.role(spec.color_role),
                )
                .icon(spec.icon)
                .on_click(move |_, window, _| {
                    if let Err(e) = service.resolve_pick(status) {
                        tracing::warn!("Status pick not applied: {}", e);
                    }
                    window.refresh();
                }),
            );
        }

        let service = self.service.clone();
        strip.child(
            Badge::new("pick-cancel", "Cancel", colors.text_muted).on_click(
                move |_, window, _| {
                    service.cancel_pick();
                    window.refresh();
                },
            ),
        )
    }
}

impl Render for ReimbursementBoard {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let colors = &self.theme.colors;
        let summaries = self.service.summaries();

        let mut list = div()
            .id("set-list")
            .w(px(360.0))
            .h_full()
            .flex()
            .flex_col()
            .overflow_y_scroll()
            .bg(colors.background)
            .border_r_1()
            .border_color(colors.border);
        for (index, summary) in summaries.into_iter().enumerate() {
            list = list.child(self.render_set_row(index, summary, cx));
        }

        div()
            .id("main-window")
            .size_full()
            .flex()
            .flex_col()
            .bg(colors.background)
            .text_color(colors.text_primary)
            .child(self.render_title_bar(cx))
            .child(
                div()
                    .flex_1()
                    .flex()
                    .overflow_hidden()
                    .child(list)
                    .child(self.render_detail()),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;
    use crate::ui::theme::ThemeMode;
    use pretty_assertions::assert_eq;

    fn board(settings_path: Option<PathBuf>) -> ReimbursementBoard {
        ReimbursementBoard {
            theme: Theme::dark(),
            settings: Settings::default(),
            settings_path,
            service: Arc::new(InMemoryStatusService::new()),
            selected: None,
        }
    }

    #[test]
    fn theme_toggle_is_saved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let mut board = board(Some(path.clone()));

        board.toggle_theme();

        assert_eq!(board.theme.mode, ThemeMode::Light);
        let saved = Settings::load_from(&path).unwrap();
        assert_eq!(saved.appearance.theme, config::Theme::Light);

        board.toggle_theme();
        let saved = Settings::load_from(&path).unwrap();
        assert_eq!(saved.appearance.theme, config::Theme::Dark);
    }

    #[test]
    fn theme_toggle_without_settings_path() {
        let mut board = board(None);

        board.toggle_theme();

        assert_eq!(board.theme.mode, ThemeMode::Light);
        assert_eq!(board.settings.appearance.theme, config::Theme::Light);
    }
}
