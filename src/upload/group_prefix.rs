//! Group marker handling between storage keys and display names.
//!
//! Group-shared files are stored under their name prefixed with
//! [`GROUP_MARKER`]. Listings strip it, deletes put it back.

use super::types::{RawFileEntry, UploadedFileEntry};

pub const GROUP_MARKER: &str = "grp__";

pub fn prepend(name: &str) -> String {
    format!("{}{}", GROUP_MARKER, name)
}

/// Returns the name without the marker and whether the marker was present.
pub fn strip(storage_name: &str) -> (&str, bool) {
    match storage_name.strip_prefix(GROUP_MARKER) {
        Some(rest) => (rest, true),
        None => (storage_name, false),
    }
}

pub fn storage_key(entry: &UploadedFileEntry) -> String {
    if entry.is_group_shared {
        prepend(&entry.display_name)
    } else {
        entry.display_name.clone()
    }
}

pub fn to_entry(raw: RawFileEntry) -> UploadedFileEntry {
    let (display_name, has_marker) = strip(&raw.name);
    if has_marker != raw.is_group {
        tracing::debug!(
            name = %raw.name,
            is_group = raw.is_group,
            "Group flag disagrees with storage name, using marker"
        );
    }
    UploadedFileEntry {
        display_name: display_name.to_string(),
        is_group_shared: has_marker,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(name: &str, is_group: bool) -> RawFileEntry {
        RawFileEntry {
            name: name.to_string(),
            is_group,
        }
    }

    #[test]
    fn test_listing_scenario() {
        let entries: Vec<_> = vec![raw("grp__report.pdf", true), raw("notes.txt", false)]
            .into_iter()
            .map(to_entry)
            .collect();

        assert_eq!(
            entries,
            vec![
                UploadedFileEntry {
                    display_name: "report.pdf".to_string(),
                    is_group_shared: true,
                },
                UploadedFileEntry {
                    display_name: "notes.txt".to_string(),
                    is_group_shared: false,
                },
            ]
        );
    }

    #[test]
    fn test_marker_is_authoritative() {
        let entry = to_entry(raw("plain.md", true));
        assert_eq!(entry.display_name, "plain.md");
        assert!(!entry.is_group_shared);

        let entry = to_entry(raw("grp__team.md", false));
        assert_eq!(entry.display_name, "team.md");
        assert!(entry.is_group_shared);
    }

    #[test]
    fn test_strip_prepend_round_trip() {
        for name in ["report.pdf", "", "a grp__ b.txt", "grp_.txt", "über.docx", "[grp]_x.md"] {
            assert_eq!(strip(&prepend(name)), (name, true), "name: {:?}", name);
        }
    }

    #[test]
    fn test_marker_stripped_once() {
        assert_eq!(strip("grp__grp__x.txt"), ("grp__x.txt", true));
        assert_eq!(strip("notes_grp__.txt"), ("notes_grp__.txt", false));
    }

    #[test]
    fn test_storage_key() {
        let shared = UploadedFileEntry {
            display_name: "report.pdf".to_string(),
            is_group_shared: true,
        };
        assert_eq!(storage_key(&shared), "grp__report.pdf");

        let private = UploadedFileEntry {
            display_name: "notes.txt".to_string(),
            is_group_shared: false,
        };
        assert_eq!(storage_key(&private), "notes.txt");
    }
}
