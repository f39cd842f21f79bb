//! Reimbursement set status button.
//!
//! Shows the current status of a reimbursement set either as a compact badge
//! (lists, cards) or as a full button (detail views). A tap is forwarded to a
//! [`StatusRequests`] collaborator; the button never changes the status itself.

use std::sync::Arc;

use gpui::{ElementId, IntoElement, RenderOnce};

use super::badge::{Badge, BadgeGeometry, BadgeSize};
use super::button::Button;
use super::icon::IconName;
use crate::config::{StatusLabels, TapBehavior};
use crate::domain::ReimbursementSetSummary;
use crate::services::{StatusChangeRequest, StatusPickRequest, StatusRequests};
use crate::ui::status_presentation::display_spec;
use crate::ui::theme::{Theme, ThemeColors};

/// What a tap on a status button asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusTapAction {
    /// Confirm one proposed transition.
    Confirm(StatusChangeRequest),
    /// Choose freely among all statuses.
    Pick(StatusPickRequest),
}

impl StatusTapAction {
    /// Build the action for a tap on `summary`.
    pub fn for_summary(summary: &ReimbursementSetSummary, behavior: TapBehavior) -> Self {
        match behavior {
            TapBehavior::ConfirmNext => StatusTapAction::Confirm(StatusChangeRequest {
                id: summary.id.clone(),
                current: summary.status,
                next: summary.status.next_status(),
                name: summary.name.clone(),
                invoice_count: summary.invoice_count,
            }),
            TapBehavior::PickAny => StatusTapAction::Pick(StatusPickRequest {
                id: summary.id.clone(),
                current: summary.status,
                name: summary.name.clone(),
                invoice_count: summary.invoice_count,
            }),
        }
    }

    /// Hand the action to the collaborator. Fire and forget.
    pub fn dispatch(self, requests: &dyn StatusRequests) {
        match self {
            StatusTapAction::Confirm(request) => {
                tracing::debug!(
                    set_id = %request.id,
                    current = request.current.as_str(),
                    next = request.next.as_str(),
                    "Requesting status change"
                );
                requests.request_status_change(request);
            }
            StatusTapAction::Pick(request) => {
                tracing::debug!(
                    set_id = %request.id,
                    current = request.current.as_str(),
                    "Requesting status pick"
                );
                requests.request_status_pick(request);
            }
        }
    }
}

/// Which element a status button renders as.
#[derive(Debug, Clone, PartialEq)]
pub enum StatusShape {
    /// Tinted badge drawn with the geometry of its size token.
    Badge(BadgeGeometry),
    /// Filled full button, with a chevron when a tap opens a picker.
    Button { trailing_icon: Option<IconName> },
}

/// Status button for one reimbursement set.
#[derive(IntoElement)]
pub struct StatusButton {
    id: ElementId,
    summary: ReimbursementSetSummary,
    colors: ThemeColors,
    requests: Arc<dyn StatusRequests>,
    compact: bool,
    size: BadgeSize,
    labels: StatusLabels,
    tap_behavior: TapBehavior,
}

impl StatusButton {
    /// Create a full-size status button for `summary`.
    pub fn new(
        id: impl Into<ElementId>,
        summary: ReimbursementSetSummary,
        theme: &Theme,
        requests: Arc<dyn StatusRequests>,
    ) -> Self {
        Self {
            id: id.into(),
            summary,
            colors: theme.colors.clone(),
            requests,
            compact: false,
            size: BadgeSize::Medium,
            labels: StatusLabels::default(),
            tap_behavior: TapBehavior::ConfirmNext,
        }
    }

    /// Render as a compact badge instead of a full button.
    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    /// Badge size used in compact mode.
    pub fn size(mut self, size: BadgeSize) -> Self {
        self.size = size;
        self
    }

    /// Label table for status text.
    pub fn labels(mut self, labels: StatusLabels) -> Self {
        self.labels = labels;
        self
    }

    /// What a tap asks for.
    pub fn tap_behavior(mut self, behavior: TapBehavior) -> Self {
        self.tap_behavior = behavior;
        self
    }

    /// The action a tap would dispatch right now.
    pub fn tap_action(&self) -> StatusTapAction {
        StatusTapAction::for_summary(&self.summary, self.tap_behavior)
    }

    /// The element this button renders as.
    pub fn shape(&self) -> StatusShape {
        if self.compact {
            return StatusShape::Badge(self.size.geometry());
        }
        let trailing_icon = match self.tap_behavior {
            TapBehavior::ConfirmNext => None,
            TapBehavior::PickAny => Some(IconName::ChevronDown),
        };
        StatusShape::Button { trailing_icon }
    }

    /// Forward a tap to the collaborator.
    pub fn dispatch_tap(&self) {
        self.tap_action().dispatch(self.requests.as_ref());
    }
}

impl RenderOnce for StatusButton {
    fn render(self, _window: &mut gpui::Window, _cx: &mut gpui::App) -> impl IntoElement {
        let spec = display_spec(self.summary.status, &self.labels);
        let color = self.colors.role(spec.color_role);

        let action = self.tap_action();
        let requests = self.requests.clone();
        let on_tap = move |_: &gpui::ClickEvent, window: &mut gpui::Window, _: &mut gpui::App| {
            action.clone().dispatch(requests.as_ref());
            window.refresh();
        };

        match self.shape() {
            StatusShape::Badge(_) => Badge::new(self.id, spec.label, color)
                .icon(spec.icon)
                .size(self.size)
                .on_click(on_tap)
                .into_any_element(),
            StatusShape::Button { trailing_icon } => {
                let mut button = Button::new(self.id, spec.label, color, self.colors.on_role)
                    .icon(spec.icon)
                    .on_click(on_tap);
                if let Some(icon) = trailing_icon {
                    button = button.trailing_icon(icon);
                }
                button.into_any_element()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ReimbursementSetId, ReimbursementSetStatus};
    use crate::services::MockStatusRequests;
    use mockall::predicate::eq;
    use pretty_assertions::assert_eq;

    fn summary(status: ReimbursementSetStatus, invoice_count: u32) -> ReimbursementSetSummary {
        ReimbursementSetSummary {
            id: ReimbursementSetId::from("set-42"),
            name: "Tokyo offsite".to_string(),
            status,
            invoice_count,
        }
    }

    #[test]
    fn compact_tap_confirms_next_status_with_entity_count() {
        let mut requests = MockStatusRequests::new();
        requests
            .expect_request_status_change()
            .with(eq(StatusChangeRequest {
                id: ReimbursementSetId::from("set-42"),
                current: ReimbursementSetStatus::Submitted,
                next: ReimbursementSetStatus::Reimbursed,
                name: "Tokyo offsite".to_string(),
                invoice_count: 7,
            }))
            .times(1)
            .return_const(());
        requests.expect_request_status_pick().never();

        let button = StatusButton::new(
            "status",
            summary(ReimbursementSetStatus::Submitted, 7),
            &Theme::dark(),
            Arc::new(requests),
        )
        .compact(true)
        .size(BadgeSize::Small);

        button.dispatch_tap();
    }

    #[test]
    fn full_pick_mode_never_proposes_a_status() {
        let mut requests = MockStatusRequests::new();
        requests.expect_request_status_change().never();
        requests
            .expect_request_status_pick()
            .with(eq(StatusPickRequest {
                id: ReimbursementSetId::from("set-42"),
                current: ReimbursementSetStatus::Reimbursed,
                name: "Tokyo offsite".to_string(),
                invoice_count: 2,
            }))
            .times(1)
            .return_const(());

        let button = StatusButton::new(
            "status",
            summary(ReimbursementSetStatus::Reimbursed, 2),
            &Theme::light(),
            Arc::new(requests),
        )
        .tap_behavior(TapBehavior::PickAny);

        button.dispatch_tap();
    }

    #[test]
    fn reimbursed_tap_offers_withdrawal() {
        let action = StatusTapAction::for_summary(
            &summary(ReimbursementSetStatus::Reimbursed, 1),
            TapBehavior::ConfirmNext,
        );

        match action {
            StatusTapAction::Confirm(request) => {
                assert_eq!(request.current, ReimbursementSetStatus::Reimbursed);
                assert_eq!(request.next, ReimbursementSetStatus::Submitted);
            }
            StatusTapAction::Pick(_) => panic!("expected a confirmation request"),
        }
    }

    #[test]
    fn builder_defaults() {
        let button = StatusButton::new(
            "status",
            summary(ReimbursementSetStatus::Unsubmitted, 0),
            &Theme::dark(),
            Arc::new(MockStatusRequests::new()),
        );

        assert!(!button.compact);
        assert_eq!(button.size, BadgeSize::Medium);
        assert_eq!(button.tap_behavior, TapBehavior::ConfirmNext);
        assert_eq!(button.labels, StatusLabels::default());
    }

    #[test]
    fn compact_renders_badge_with_size_geometry() {
        let button = StatusButton::new(
            "status",
            summary(ReimbursementSetStatus::Submitted, 3),
            &Theme::dark(),
            Arc::new(MockStatusRequests::new()),
        )
        .compact(true)
        .size(BadgeSize::Large);

        assert_eq!(button.shape(), StatusShape::Badge(BadgeSize::Large.geometry()));
        match button.shape() {
            StatusShape::Badge(geometry) => {
                assert_eq!(geometry.padding_x, 10.0);
                assert_eq!(geometry.icon_size, 16.0);
            }
            StatusShape::Button { .. } => panic!("expected a badge"),
        }
    }

    #[test]
    fn full_confirm_mode_renders_plain_button() {
        let button = StatusButton::new(
            "status",
            summary(ReimbursementSetStatus::Unsubmitted, 3),
            &Theme::dark(),
            Arc::new(MockStatusRequests::new()),
        )
        .size(BadgeSize::Small);

        assert_eq!(
            button.shape(),
            StatusShape::Button {
                trailing_icon: None
            }
        );
    }

    #[test]
    fn full_pick_mode_renders_chevron() {
        let button = StatusButton::new(
            "status",
            summary(ReimbursementSetStatus::Reimbursed, 3),
            &Theme::light(),
            Arc::new(MockStatusRequests::new()),
        )
        .tap_behavior(TapBehavior::PickAny);

        assert_eq!(
            button.shape(),
            StatusShape::Button {
                trailing_icon: Some(IconName::ChevronDown)
            }
        );
    }

    #[test]
    fn compact_pick_mode_stays_a_badge() {
        let button = StatusButton::new(
            "status",
            summary(ReimbursementSetStatus::Reimbursed, 3),
            &Theme::light(),
            Arc::new(MockStatusRequests::new()),
        )
        .compact(true)
        .tap_behavior(TapBehavior::PickAny);

        assert_eq!(button.shape(), StatusShape::Badge(BadgeSize::Medium.geometry()));
    }
}
