//! The file dialog request/result record.

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::backend::{self, CommonDialogBackend, DialogKind, DialogOutcome, NativeRequest, to_wide};
use crate::buffer::FileNameBuffer;
use crate::error::{DialogError, Result};
use crate::filter::encode_filter;
use crate::flags::OpenFileNameFlags;
use crate::logging::targets;
use crate::owner::OwnerWindow;

/// Which dialog to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogMode {
    /// Open a single existing file.
    Open,
    /// Open one or more existing files.
    OpenMultiple,
    /// Choose a file name to save to.
    Save,
}

impl DialogMode {
    /// The OS entry point used by this mode.
    pub fn kind(self) -> DialogKind {
        match self {
            Self::Open | Self::OpenMultiple => DialogKind::Open,
            Self::Save => DialogKind::Save,
        }
    }

    /// Flags this mode always adds.
    pub fn flags(self) -> OpenFileNameFlags {
        match self {
            Self::Open | Self::Save => OpenFileNameFlags::NOCHANGEDIR,
            Self::OpenMultiple => {
                OpenFileNameFlags::ALLOWMULTISELECT
                    | OpenFileNameFlags::EXPLORER
                    | OpenFileNameFlags::NOCHANGEDIR
            }
        }
    }

    /// Whether the result is a list of paths.
    pub fn is_multiple(self) -> bool {
        self.flags().contains(OpenFileNameFlags::ALLOWMULTISELECT)
    }
}

/// Settings and results of an open/save file dialog.
///
/// Create one, adjust the fields, and call one of the `show_*` methods. On
/// acceptance the selected path(s), the filter index and the read-only state
/// are written back; on cancel or error the record is left as it was, so the
/// same value can be shown again.
///
/// ```no_run
/// use horizon_filedialog::{FileDialog, OwnerWindow};
///
/// let mut dlg = FileDialog::with_title("Open Image")
///     .filter("Images (*.png;*.jpg)|*.png;*.jpg|All Files (*.*)|*.*")
///     .initial_dir("C:\\Users\\Public\\Pictures");
///
/// if dlg.show_open(OwnerWindow::none())? {
///     println!("selected {}", dlg.file_path.display());
/// }
/// # Ok::<(), horizon_filedialog::DialogError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FileDialog {
    /// Dialog caption. Empty uses the OS default.
    pub title: String,
    /// Selected file for single-selection dialogs; also used as the initial
    /// file name.
    pub file_path: PathBuf,
    /// Selected files for multi-selection dialogs.
    pub file_paths: Vec<PathBuf>,
    /// Directory shown first. Empty uses the OS default.
    pub initial_dir_path: PathBuf,
    /// Pipe-separated description/pattern pairs.
    pub filter: String,
    /// 1-based index of the selected filter.
    pub filter_index: u32,
    /// Extra `OFN_*` flags.
    pub flags: OpenFileNameFlags,
    /// Show the read-only check box.
    pub show_read_only_cb: bool,
    /// Whether the user checked the read-only box. Output only.
    pub read_only: bool,
}

impl FileDialog {
    /// Create an empty dialog record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a dialog record with a title.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the filter string.
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    /// Set the selected filter (1-based).
    pub fn filter_index(mut self, index: u32) -> Self {
        self.filter_index = index;
        self
    }

    /// Set the initial directory.
    pub fn initial_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.initial_dir_path = path.into();
        self
    }

    /// Set the initial file name.
    pub fn file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = path.into();
        self
    }

    /// Add extra `OFN_*` flags.
    pub fn flags(mut self, flags: OpenFileNameFlags) -> Self {
        self.flags |= flags;
        self
    }

    /// Show or hide the read-only check box.
    pub fn show_read_only_cb(mut self, show: bool) -> Self {
        self.show_read_only_cb = show;
        self
    }

    /// Show the open dialog for a single file.
    ///
    /// Returns `Ok(true)` when the user accepted and `Ok(false)` on cancel.
    pub fn show_open(&mut self, owner: OwnerWindow) -> Result<bool> {
        self.show_with(backend::platform(), owner, DialogMode::Open)
    }

    /// Show the open dialog allowing several files.
    ///
    /// The selection is written to [`file_paths`](Self::file_paths).
    pub fn show_open_multiple(&mut self, owner: OwnerWindow) -> Result<bool> {
        self.show_with(backend::platform(), owner, DialogMode::OpenMultiple)
    }

    /// Show the save dialog.
    pub fn show_save(&mut self, owner: OwnerWindow) -> Result<bool> {
        self.show_with(backend::platform(), owner, DialogMode::Save)
    }

    /// Show a dialog through an explicit backend.
    pub fn show_with<B: CommonDialogBackend>(
        &mut self,
        mut backend: B,
        owner: OwnerWindow,
        mode: DialogMode,
    ) -> Result<bool> {
        let mut request = self.prepare(mode);
        debug!(target: targets::DIALOG, ?mode, flags = ?request.flags, "showing file dialog");

        match backend.run(mode.kind(), owner, &mut request) {
            DialogOutcome::Accepted => {
                self.apply(mode, &request);
                let selected = if mode.is_multiple() { self.file_paths.len() } else { 1 };
                debug!(target: targets::DIALOG, ?mode, selected, "file dialog accepted");
                Ok(true)
            }
            DialogOutcome::Cancelled => {
                debug!(target: targets::DIALOG, ?mode, "file dialog cancelled");
                Ok(false)
            }
            DialogOutcome::Failed(code) => {
                warn!(target: targets::DIALOG, ?mode, code, "file dialog failed");
                Err(DialogError::from_code(code))
            }
            DialogOutcome::Unsupported => Err(DialogError::Unsupported),
        }
    }

    /// Marshal this record into the native request for `mode`.
    pub fn prepare(&self, mode: DialogMode) -> NativeRequest {
        let mut flags = OpenFileNameFlags::FILEMUSTEXIST | mode.flags() | self.flags;
        if !self.show_read_only_cb {
            flags |= OpenFileNameFlags::HIDEREADONLY;
        }

        let file = if mode.is_multiple() {
            FileNameBuffer::multiple()
        } else {
            FileNameBuffer::single(&self.file_path)
        };

        NativeRequest {
            filter: encode_filter(&self.filter),
            filter_index: self.filter_index,
            initial_dir: to_wide(&self.initial_dir_path.to_string_lossy()),
            title: to_wide(&self.title),
            flags,
            file,
        }
    }

    /// Write the results of an accepted request back into this record.
    pub fn apply(&mut self, mode: DialogMode, request: &NativeRequest) {
        self.filter_index = request.filter_index;
        self.read_only = request.flags.contains(OpenFileNameFlags::READONLY);

        if mode.is_multiple() {
            self.file_paths = request.file.decode_multiple();
        } else {
            self.file_path = request.file.decode_single();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn test_file_dialog_builder() {
        let dlg = FileDialog::with_title("Open Image")
            .initial_dir("/home/user")
            .filter("Images|*.png;*.jpg")
            .filter_index(1)
            .file_path("a.png")
            .flags(OpenFileNameFlags::PATHMUSTEXIST)
            .show_read_only_cb(true);

        assert_eq!(dlg.title, "Open Image");
        assert_eq!(dlg.initial_dir_path, PathBuf::from("/home/user"));
        assert_eq!(dlg.filter, "Images|*.png;*.jpg");
        assert_eq!(dlg.filter_index, 1);
        assert_eq!(dlg.file_path, PathBuf::from("a.png"));
        assert!(dlg.flags.contains(OpenFileNameFlags::PATHMUSTEXIST));
        assert!(dlg.show_read_only_cb);
        assert!(!dlg.read_only);
    }

    #[test]
    fn test_mode_entry_points() {
        assert_eq!(DialogMode::Open.kind(), DialogKind::Open);
        assert_eq!(DialogMode::OpenMultiple.kind(), DialogKind::Open);
        assert_eq!(DialogMode::Save.kind(), DialogKind::Save);
        assert!(DialogMode::OpenMultiple.is_multiple());
        assert!(!DialogMode::Open.is_multiple());
        assert!(!DialogMode::Save.is_multiple());
    }

    #[test]
    fn test_prepare_always_requires_existing_file() {
        let dlg = FileDialog::new();
        for mode in [DialogMode::Open, DialogMode::OpenMultiple, DialogMode::Save] {
            let request = dlg.prepare(mode);
            assert!(request.flags.contains(OpenFileNameFlags::FILEMUSTEXIST));
            assert!(request.flags.contains(OpenFileNameFlags::NOCHANGEDIR));
        }
    }

    #[test]
    fn test_prepare_hides_read_only_box_by_default() {
        let request = FileDialog::new().prepare(DialogMode::Open);
        assert!(request.flags.contains(OpenFileNameFlags::HIDEREADONLY));

        let request = FileDialog::new()
            .show_read_only_cb(true)
            .prepare(DialogMode::Open);
        assert!(!request.flags.contains(OpenFileNameFlags::HIDEREADONLY));
    }

    #[test]
    fn test_prepare_multiple_selection() {
        let dlg = FileDialog::new().file_path("ignored.txt");
        let request = dlg.prepare(DialogMode::OpenMultiple);
        assert!(request.flags.contains(
            OpenFileNameFlags::ALLOWMULTISELECT | OpenFileNameFlags::EXPLORER
        ));
        assert_eq!(request.file.capacity(), crate::buffer::MULTI_SELECTION_CAPACITY);
        assert!(request.file.as_slice().iter().all(|&c| c == 0));
    }

    #[test]
    fn test_prepare_single_selection_prefills_path() {
        let dlg = FileDialog::new().file_path("draft.txt");
        let request = dlg.prepare(DialogMode::Save);
        assert_eq!(request.file.capacity(), crate::buffer::SINGLE_SELECTION_CAPACITY);
        assert_eq!(request.file.decode_single(), PathBuf::from("draft.txt"));
    }

    #[test]
    fn test_prepare_marshals_strings() {
        let dlg = FileDialog::with_title("T")
            .filter("A|*.a")
            .filter_index(2)
            .flags(OpenFileNameFlags::ENABLESIZING);
        let request = dlg.prepare(DialogMode::Open);

        assert_eq!(request.title, Some(vec![b'T' as u16, 0]));
        assert_eq!(request.initial_dir, None);
        assert_eq!(request.filter_index, 2);
        assert_eq!(
            request.filter,
            Some(vec![b'A' as u16, 0, b'*' as u16, b'.' as u16, b'a' as u16, 0, 0])
        );
        assert!(request.flags.contains(OpenFileNameFlags::ENABLESIZING));
    }

    #[test]
    fn test_apply_single() {
        let mut dlg = FileDialog::new();
        let mut request = dlg.prepare(DialogMode::Open);
        request.file = FileNameBuffer::from_units("C:\\x.txt\0".encode_utf16().collect());
        request.filter_index = 3;
        request.flags |= OpenFileNameFlags::READONLY;

        dlg.apply(DialogMode::Open, &request);
        assert_eq!(dlg.file_path, PathBuf::from("C:\\x.txt"));
        assert_eq!(dlg.filter_index, 3);
        assert!(dlg.read_only);
        assert!(dlg.file_paths.is_empty());
    }

    #[test]
    fn test_apply_multiple() {
        let mut dlg = FileDialog::new();
        let mut request = dlg.prepare(DialogMode::OpenMultiple);
        request.file = FileNameBuffer::from_units("dir\0a\0b\0\0".encode_utf16().collect());

        dlg.apply(DialogMode::OpenMultiple, &request);
        assert_eq!(
            dlg.file_paths,
            vec![Path::new("dir").join("a"), Path::new("dir").join("b")]
        );
        assert_eq!(dlg.file_path, PathBuf::new());
    }
}
