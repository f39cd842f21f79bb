//! Application state and lifecycle management

use std::sync::Arc;

use anyhow::Result;
use gpui::{actions, AppContext, Application, KeyBinding, WindowAppearance, WindowOptions};

use crate::config::Settings;
use crate::domain::{ReimbursementSet, ReimbursementSetStatus};
use crate::services::InMemoryStatusService;
use crate::ui::{ReimbursementBoard, Theme};

actions!(reimburse, [Quit]);

/// Main application entry point
pub struct App;

impl App {
    /// Run the application
    pub fn run(settings: Settings) -> Result<()> {
        let service = Arc::new(InMemoryStatusService::with_sets(Self::sample_sets()));

        Application::new().run(move |cx: &mut gpui::App| {
            cx.on_action(|_: &Quit, cx| cx.quit());
            cx.bind_keys([KeyBinding::new("cmd-q", Quit, None)]);

            let system_prefers_dark = matches!(
                cx.window_appearance(),
                WindowAppearance::Dark | WindowAppearance::VibrantDark
            );
            let theme = Theme::from_setting(settings.appearance.theme, system_prefers_dark);
            let settings_path = Settings::default_path().ok();

            let opened = cx.open_window(WindowOptions::default(), |window, cx| {
                cx.new(|cx| {
                    ReimbursementBoard::new(theme, settings, settings_path, service, window, cx)
                })
            });
            if let Err(e) = opened {
                tracing::error!("Failed to open window: {}", e);
                cx.quit();
            }
        });

        Ok(())
    }

    fn sample_sets() -> Vec<ReimbursementSet> {
        vec![
            ReimbursementSet::new("Q3 client visits", 4),
            ReimbursementSet::new("Berlin conference", 7)
                .with_status(ReimbursementSetStatus::Submitted),
            ReimbursementSet::new("Office supplies", 12)
                .with_status(ReimbursementSetStatus::Reimbursed),
        ]
    }
}
