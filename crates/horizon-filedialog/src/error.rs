//! Error types for the file dialog helpers.

use std::fmt;

/// Result type alias for file dialog operations.
pub type Result<T> = std::result::Result<T, DialogError>;

/// Errors that can occur while showing a common file dialog.
///
/// Cancelling the dialog is not an error; the `show_*` operations report it
/// as `Ok(false)`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DialogError {
    /// The common dialog library reported a failure.
    #[error("common dialog error {code}: {0}", code = .0.code())]
    CommonDialog(CommonDialogErrorCode),

    /// Native common dialogs are not available on this platform.
    #[error("native common dialogs are not available on this platform")]
    Unsupported,

    /// The owner window is not backed by a Win32 window handle.
    #[error("owner window is not a Win32 window")]
    UnsupportedWindowHandle,

    /// The owner window handle could not be obtained.
    #[error("failed to access owner window handle: {0}")]
    WindowHandle(String),
}

impl DialogError {
    /// Create an error from a raw `CommDlgExtendedError` value.
    pub fn from_code(code: u32) -> Self {
        Self::CommonDialog(CommonDialogErrorCode::from(code))
    }

    /// The raw extended error code, if this error came from the OS.
    pub fn os_code(&self) -> Option<u32> {
        match self {
            Self::CommonDialog(code) => Some(code.code()),
            _ => None,
        }
    }
}

/// Extended error codes returned by `CommDlgExtendedError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommonDialogErrorCode {
    /// `CDERR_STRUCTSIZE`: invalid `lStructSize`.
    StructSize,
    /// `CDERR_INITIALIZATION`: initialization failed, usually low memory.
    Initialization,
    /// `CDERR_NOTEMPLATE`: missing dialog template.
    NoTemplate,
    /// `CDERR_NOHINSTANCE`: missing instance handle.
    NoInstance,
    /// `CDERR_LOADSTRFAILURE`: failed to load a string.
    LoadStringFailure,
    /// `CDERR_FINDRESFAILURE`: failed to find a resource.
    FindResourceFailure,
    /// `CDERR_LOADRESFAILURE`: failed to load a resource.
    LoadResourceFailure,
    /// `CDERR_LOCKRESFAILURE`: failed to lock a resource.
    LockResourceFailure,
    /// `CDERR_MEMALLOCFAILURE`: memory allocation failed.
    MemoryAllocationFailure,
    /// `CDERR_MEMLOCKFAILURE`: failed to lock memory.
    MemoryLockFailure,
    /// `CDERR_NOHOOK`: missing hook procedure.
    NoHook,
    /// `CDERR_REGISTERMSGFAIL`: `RegisterWindowMessage` failed.
    RegisterMessageFailure,
    /// `FNERR_SUBCLASSFAILURE`: subclassing the list box failed.
    SubclassFailure,
    /// `FNERR_INVALIDFILENAME`: the initial file name is invalid.
    InvalidFileName,
    /// `FNERR_BUFFERTOOSMALL`: the file name buffer is too small.
    BufferTooSmall,
    /// `CDERR_DIALOGFAILURE`: the dialog box could not be created.
    DialogFailure,
    /// Any other code.
    Other(u32),
}

impl CommonDialogErrorCode {
    /// The raw numeric code.
    pub fn code(self) -> u32 {
        match self {
            Self::StructSize => 0x0001,
            Self::Initialization => 0x0002,
            Self::NoTemplate => 0x0003,
            Self::NoInstance => 0x0004,
            Self::LoadStringFailure => 0x0005,
            Self::FindResourceFailure => 0x0006,
            Self::LoadResourceFailure => 0x0007,
            Self::LockResourceFailure => 0x0008,
            Self::MemoryAllocationFailure => 0x0009,
            Self::MemoryLockFailure => 0x000A,
            Self::NoHook => 0x000B,
            Self::RegisterMessageFailure => 0x000C,
            Self::SubclassFailure => 0x3001,
            Self::InvalidFileName => 0x3002,
            Self::BufferTooSmall => 0x3003,
            Self::DialogFailure => 0xFFFF,
            Self::Other(code) => code,
        }
    }

    fn description(self) -> &'static str {
        match self {
            Self::StructSize => "invalid structure size",
            Self::Initialization => "initialization failed",
            Self::NoTemplate => "dialog template not specified",
            Self::NoInstance => "instance handle not specified",
            Self::LoadStringFailure => "failed to load string",
            Self::FindResourceFailure => "failed to find resource",
            Self::LoadResourceFailure => "failed to load resource",
            Self::LockResourceFailure => "failed to lock resource",
            Self::MemoryAllocationFailure => "memory allocation failed",
            Self::MemoryLockFailure => "failed to lock memory",
            Self::NoHook => "hook procedure not specified",
            Self::RegisterMessageFailure => "failed to register window message",
            Self::SubclassFailure => "failed to subclass list box",
            Self::InvalidFileName => "invalid file name",
            Self::BufferTooSmall => "file name buffer too small",
            Self::DialogFailure => "dialog box could not be created",
            Self::Other(_) => "unknown error",
        }
    }
}

impl From<u32> for CommonDialogErrorCode {
    fn from(code: u32) -> Self {
        match code {
            0x0001 => Self::StructSize,
            0x0002 => Self::Initialization,
            0x0003 => Self::NoTemplate,
            0x0004 => Self::NoInstance,
            0x0005 => Self::LoadStringFailure,
            0x0006 => Self::FindResourceFailure,
            0x0007 => Self::LoadResourceFailure,
            0x0008 => Self::LockResourceFailure,
            0x0009 => Self::MemoryAllocationFailure,
            0x000A => Self::MemoryLockFailure,
            0x000B => Self::NoHook,
            0x000C => Self::RegisterMessageFailure,
            0x3001 => Self::SubclassFailure,
            0x3002 => Self::InvalidFileName,
            0x3003 => Self::BufferTooSmall,
            0xFFFF => Self::DialogFailure,
            other => Self::Other(other),
        }
    }
}

impl fmt::Display for CommonDialogErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
