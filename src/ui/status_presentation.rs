//! Status to presentation mapping.
//!
//! Pure lookups shared by every status widget. Label text comes from the
//! configured [`StatusLabels`] table so wording can be localized without
//! touching the mapping.

use crate::config::StatusLabels;
use crate::domain::ReimbursementSetStatus;
use crate::ui::components::IconName;
use crate::ui::theme::ColorRole;

/// How a status is drawn: text, color slot and icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySpec {
    pub label: String,
    pub color_role: ColorRole,
    pub icon: IconName,
}

/// Map a status to its display triple.
pub fn display_spec(status: ReimbursementSetStatus, labels: &StatusLabels) -> DisplaySpec {
    let (color_role, icon) = match status {
        ReimbursementSetStatus::Unsubmitted => (ColorRole::Secondary, IconName::Pencil),
        ReimbursementSetStatus::Submitted => (ColorRole::Tertiary, IconName::PaperPlane),
        ReimbursementSetStatus::Reimbursed => (ColorRole::Primary, IconName::CheckCircle),
    };

    DisplaySpec {
        label: labels.label(status).to_string(),
        color_role,
        icon,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_status_is_mapped() {
        let labels = StatusLabels::default();

        assert_eq!(
            display_spec(ReimbursementSetStatus::Unsubmitted, &labels),
            DisplaySpec {
                label: "草稿".to_string(),
                color_role: ColorRole::Secondary,
                icon: IconName::Pencil,
            }
        );
        assert_eq!(
            display_spec(ReimbursementSetStatus::Submitted, &labels),
            DisplaySpec {
                label: "已提交".to_string(),
                color_role: ColorRole::Tertiary,
                icon: IconName::PaperPlane,
            }
        );
        assert_eq!(
            display_spec(ReimbursementSetStatus::Reimbursed, &labels),
            DisplaySpec {
                label: "已报销".to_string(),
                color_role: ColorRole::Primary,
                icon: IconName::CheckCircle,
            }
        );
    }

    #[test]
    fn label_follows_configured_table() {
        let spec = display_spec(ReimbursementSetStatus::Unsubmitted, &StatusLabels::pending());
        assert_eq!(spec.label, "待报销");
        assert_eq!(spec.color_role, ColorRole::Secondary);

        let spec = display_spec(ReimbursementSetStatus::Reimbursed, &StatusLabels::english());
        assert_eq!(spec.label, "Reimbursed");
    }
}
