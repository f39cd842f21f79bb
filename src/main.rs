//! reimburse - Entry point for the desktop reimbursement board

use reimburse::config::Settings;
use reimburse::App;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting reimburse");

    let settings = Settings::load_or_default();

    if let Err(e) = App::run(settings) {
        tracing::error!("Application error: {}", e);
        std::process::exit(1);
    }
}
