//! Native backend abstraction.
//!
//! A backend receives a fully marshaled [`NativeRequest`], shows the dialog
//! and writes the OS results back into the request. The module selects the
//! platform implementation at compile time:
//! - Windows: `GetOpenFileNameW` / `GetSaveFileNameW` from comdlg32
//! - Elsewhere: a stub that reports [`DialogError::Unsupported`]
//!
//! [`DialogError::Unsupported`]: crate::DialogError::Unsupported

use crate::buffer::FileNameBuffer;
use crate::flags::OpenFileNameFlags;
use crate::owner::OwnerWindow;

#[cfg(target_os = "windows")]
mod windows;
#[cfg(target_os = "windows")]
pub use self::windows::Win32Backend as PlatformBackend;

#[cfg(not(target_os = "windows"))]
mod stub;
#[cfg(not(target_os = "windows"))]
pub use self::stub::StubBackend as PlatformBackend;

/// Which OS entry point to call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogKind {
    /// `GetOpenFileNameW`.
    Open,
    /// `GetSaveFileNameW`.
    Save,
}

/// How the dialog was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome {
    /// The user confirmed a selection.
    Accepted,
    /// The user cancelled or closed the dialog.
    Cancelled,
    /// The OS reported a failure; carries the `CommDlgExtendedError` code.
    Failed(u32),
    /// No native dialog exists on this platform.
    Unsupported,
}

/// Marshaled inputs and outputs of one dialog invocation.
///
/// Strings are null-terminated UTF-16; `None` maps to a null pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeRequest {
    /// Double-null-terminated filter list.
    pub filter: Option<Vec<u16>>,
    /// 1-based selected filter. Updated by the backend.
    pub filter_index: u32,
    /// Initial directory.
    pub initial_dir: Option<Vec<u16>>,
    /// Dialog caption.
    pub title: Option<Vec<u16>>,
    /// Flags sent to the OS. Updated by the backend with the returned flags.
    pub flags: OpenFileNameFlags,
    /// File name buffer. Filled by the backend.
    pub file: FileNameBuffer,
}

/// Something that can show a common file dialog.
pub trait CommonDialogBackend {
    /// Show the dialog and block until it closes.
    fn run(
        &mut self,
        kind: DialogKind,
        owner: OwnerWindow,
        request: &mut NativeRequest,
    ) -> DialogOutcome;
}

impl<B: CommonDialogBackend + ?Sized> CommonDialogBackend for &mut B {
    fn run(
        &mut self,
        kind: DialogKind,
        owner: OwnerWindow,
        request: &mut NativeRequest,
    ) -> DialogOutcome {
        (**self).run(kind, owner, request)
    }
}

/// The backend for the current platform.
pub fn platform() -> PlatformBackend {
    PlatformBackend::default()
}

/// Whether native common dialogs exist on this platform.
pub fn is_available() -> bool {
    cfg!(target_os = "windows")
}

/// Encode a string as null-terminated UTF-16, or `None` when empty.
pub(crate) fn to_wide(text: &str) -> Option<Vec<u16>> {
    if text.is_empty() {
        None
    } else {
        Some(text.encode_utf16().chain(std::iter::once(0)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_wide_appends_terminator() {
        assert_eq!(to_wide("ab"), Some(vec![b'a' as u16, b'b' as u16, 0]));
        assert_eq!(to_wide(""), None);
    }

    #[test]
    fn test_availability_check() {
        assert_eq!(is_available(), cfg!(target_os = "windows"));
    }

    #[cfg(not(target_os = "windows"))]
    #[test]
    fn test_stub_backend_reports_unsupported() {
        let mut request = NativeRequest {
            filter: None,
            filter_index: 0,
            initial_dir: None,
            title: None,
            flags: OpenFileNameFlags::empty(),
            file: FileNameBuffer::multiple(),
        };
        let outcome = platform().run(DialogKind::Open, OwnerWindow::none(), &mut request);
        assert_eq!(outcome, DialogOutcome::Unsupported);
    }
}
