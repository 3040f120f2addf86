use crate::upload::UploadedFileEntry;
use derivative::Derivative;
use std::collections::HashMap;

pub const GROUP_GLYPH: &str = "👥";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletionStatus {
    Pending,
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Success(String),
    Error(String),
}

#[derive(Derivative, Debug, Clone, PartialEq)]
#[derivative(Default)]
pub struct FileManagerState {
    pub panel_open: bool,
    pub uploading: bool,
    #[derivative(Default(value = "true"))]
    pub list_loading: bool,
    pub deletion_status: HashMap<String, DeletionStatus>,
    pub upload_outcome: Option<UploadOutcome>,
    pub files: Vec<UploadedFileEntry>,
    pub group_access_requested: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteControl {
    pub enabled: bool,
    pub label_key: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListingRow {
    pub entry: UploadedFileEntry,
    pub group_glyph: Option<&'static str>,
    pub control: DeleteControl,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListingView {
    Loading,
    Empty,
    Rows(Vec<ListingRow>),
}

impl FileManagerState {
    /// Flips the panel and reports whether it is now open.
    pub fn toggle_panel(&mut self) -> bool {
        self.panel_open = !self.panel_open;
        self.panel_open
    }

    pub fn apply_listing(&mut self, files: Vec<UploadedFileEntry>) {
        self.list_loading = false;
        self.deletion_status.clear();
        self.files = files;
    }

    pub fn set_deletion_status(&mut self, display_name: &str, status: DeletionStatus) {
        self.deletion_status
            .insert(display_name.to_string(), status);
    }

    pub fn delete_control(&self, display_name: &str) -> DeleteControl {
        match self.deletion_status.get(display_name) {
            None => DeleteControl {
                enabled: true,
                label_key: "delete.default",
            },
            Some(DeletionStatus::Pending) => DeleteControl {
                enabled: false,
                label_key: "delete.pending",
            },
            Some(DeletionStatus::Error) => DeleteControl {
                enabled: true,
                label_key: "delete.error",
            },
            Some(DeletionStatus::Success) => DeleteControl {
                enabled: false,
                label_key: "delete.success",
            },
        }
    }

    pub fn listing_view(&self) -> ListingView {
        if self.list_loading {
            return ListingView::Loading;
        }
        if self.files.is_empty() {
            return ListingView::Empty;
        }
        ListingView::Rows(
            self.files
                .iter()
                .map(|entry| ListingRow {
                    entry: entry.clone(),
                    group_glyph: entry.is_group_shared.then_some(GROUP_GLYPH),
                    control: self.delete_control(&entry.display_name),
                })
                .collect(),
        )
    }

    /// True while anything the user is waiting on has not resolved yet.
    pub fn has_work_in_flight(&self) -> bool {
        self.uploading
            || (self.panel_open && self.list_loading)
            || self
                .deletion_status
                .values()
                .any(|s| matches!(s, DeletionStatus::Pending | DeletionStatus::Success))
    }
}
