use anyhow::Context;
use group_file_manager::api::{HttpFileApi, SessionTokenProvider};
use group_file_manager::app::{FileManagerApp, FileManagerWidget};
use group_file_manager::config::get_configuration;
use group_file_manager::localization::Localizer;
use std::sync::Arc;
use tokio::runtime::Runtime;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = get_configuration().context("Failed to read configuration")?;
    tracing::info!(base_url = %settings.api.base_url, "Configuration loaded");

    let localizer = match &settings.locale_file {
        Some(path) => Localizer::load(path).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "Falling back to English strings");
            Localizer::english()
        }),
        None => Localizer::english(),
    };

    let runtime = Runtime::new().context("Failed to start async runtime")?;
    let api = HttpFileApi::new(&settings.api).context("Failed to build HTTP client")?;
    let session = Arc::new(SessionTokenProvider::new(settings.auth.token.clone()));
    let widget = FileManagerWidget::new(session.clone(), Arc::new(api), Arc::new(localizer));

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([640.0, 640.0])
            .with_min_inner_size([420.0, 480.0]),
        ..Default::default()
    };

    let handle = runtime.handle().clone();
    eframe::run_native(
        "Group File Manager",
        options,
        Box::new(move |cc| {
            Box::new(FileManagerApp::new(cc, widget, session, handle))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))?;

    tracing::info!("Shutting down");
    Ok(())
}
