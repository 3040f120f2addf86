mod state;
mod ui;
mod widget;

use crate::api::SessionTokenProvider;
use eframe::{egui, App};
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

pub use state::{
    DeleteControl, DeletionStatus, FileManagerState, ListingRow, ListingView, UploadOutcome,
    GROUP_GLYPH,
};
pub use widget::FileManagerWidget;

const IN_FLIGHT_REPAINT: Duration = Duration::from_millis(100);

/// Desktop shell around [`FileManagerWidget`]. Widget operations run as
/// tasks on the tokio runtime and request a repaint when they finish.
pub struct FileManagerApp {
    widget: FileManagerWidget,
    session: Arc<SessionTokenProvider>,
    runtime: Handle,
    curl_text: String,
    auth_error: Option<String>,
}

impl FileManagerApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        widget: FileManagerWidget,
        session: Arc<SessionTokenProvider>,
        runtime: Handle,
    ) -> Self {
        tracing::info!("Initializing file manager");
        Self {
            widget,
            session,
            runtime,
            curl_text: String::new(),
            auth_error: None,
        }
    }

    fn spawn<F>(&self, ctx: &egui::Context, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        ctx.request_repaint_after(IN_FLIGHT_REPAINT);
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            task.await;
            ctx.request_repaint();
        });
    }

    pub fn toggle_panel(&self, ctx: &egui::Context) {
        let widget = self.widget.clone();
        self.spawn(ctx, async move { widget.toggle_panel().await });
    }

    pub fn upload(&self, ctx: &egui::Context, path: Option<PathBuf>, group_access: bool) {
        if path.is_some() {
            self.widget.mark_uploading();
        }
        let widget = self.widget.clone();
        self.spawn(ctx, async move { widget.upload_path(path, group_access).await });
    }

    pub fn delete(&self, ctx: &egui::Context, row: &ListingRow) {
        let widget = self.widget.clone();
        let entry = row.entry.clone();
        self.widget.mark_delete_pending(&entry);
        self.spawn(ctx, async move { widget.delete_file(entry).await });
    }

    pub fn apply_curl(&mut self) {
        match self.session.apply_curl(&self.curl_text) {
            Ok(()) => self.auth_error = None,
            Err(e) => {
                tracing::warn!(error = %e, "Could not read token from curl command");
                self.auth_error = Some(e.to_string());
            }
        }
    }
}

impl App for FileManagerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let snapshot = self.widget.snapshot();
        if snapshot.has_work_in_flight() {
            ctx.request_repaint_after(IN_FLIGHT_REPAINT);
        }
        self.render(ctx, &snapshot);
    }
}
