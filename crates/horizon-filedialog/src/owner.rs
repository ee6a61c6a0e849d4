//! Owner window for modal dialogs.

use raw_window_handle::{HasWindowHandle, RawWindowHandle};

use crate::error::{DialogError, Result};

/// The window that owns a dialog, stored as a raw Win32 `HWND` value.
///
/// A zero handle means the dialog has no owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OwnerWindow(isize);

impl OwnerWindow {
    /// No owner window.
    pub const fn none() -> Self {
        Self(0)
    }

    /// Wrap a raw `HWND` value.
    pub const fn from_raw(hwnd: isize) -> Self {
        Self(hwnd)
    }

    /// Obtain the owner from any window exposing a raw window handle.
    pub fn from_window(window: &impl HasWindowHandle) -> Result<Self> {
        let handle = window
            .window_handle()
            .map_err(|e| DialogError::WindowHandle(e.to_string()))?;

        match handle.as_raw() {
            RawWindowHandle::Win32(handle) => Ok(Self(handle.hwnd.get())),
            _ => Err(DialogError::UnsupportedWindowHandle),
        }
    }

    /// The raw `HWND` value.
    pub const fn raw(self) -> isize {
        self.0
    }

    /// Whether this refers to no window.
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroIsize;

    use raw_window_handle::{
        HandleError, Win32WindowHandle, WindowHandle, XlibWindowHandle,
    };

    use super::*;

    struct FakeWindow(RawWindowHandle);

    impl HasWindowHandle for FakeWindow {
        fn window_handle(&self) -> std::result::Result<WindowHandle<'_>, HandleError> {
            // SAFETY: the handle is never dereferenced by these tests.
            Ok(unsafe { WindowHandle::borrow_raw(self.0) })
        }
    }

    struct UnavailableWindow;

    impl HasWindowHandle for UnavailableWindow {
        fn window_handle(&self) -> std::result::Result<WindowHandle<'_>, HandleError> {
            Err(HandleError::Unavailable)
        }
    }

    #[test]
    fn test_none_owner() {
        assert!(OwnerWindow::none().is_none());
        assert_eq!(OwnerWindow::default(), OwnerWindow::none());
        assert_eq!(OwnerWindow::from_raw(0x1234).raw(), 0x1234);
    }

    #[test]
    fn test_from_win32_window() {
        let hwnd = NonZeroIsize::new(0x00A0_B0C0).unwrap();
        let window = FakeWindow(RawWindowHandle::Win32(Win32WindowHandle::new(hwnd)));
        let owner = OwnerWindow::from_window(&window).unwrap();
        assert_eq!(owner.raw(), 0x00A0_B0C0);
    }

    #[test]
    fn test_non_win32_window_is_rejected() {
        let window = FakeWindow(RawWindowHandle::Xlib(XlibWindowHandle::new(42)));
        assert_eq!(
            OwnerWindow::from_window(&window),
            Err(DialogError::UnsupportedWindowHandle)
        );
    }

    #[test]
    fn test_unavailable_handle() {
        let err = OwnerWindow::from_window(&UnavailableWindow).unwrap_err();
        assert!(matches!(err, DialogError::WindowHandle(_)));
    }
}
