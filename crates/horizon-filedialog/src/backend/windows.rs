//! Windows implementation using the comdlg32 common dialogs.

use std::ffi::c_void;

use tracing::debug;
use windows::Win32::Foundation::HWND;
use windows::Win32::UI::Controls::Dialogs::{
    CommDlgExtendedError, GetOpenFileNameW, GetSaveFileNameW, OPEN_FILENAME_FLAGS, OPENFILENAMEW,
};
use windows::core::{PCWSTR, PWSTR};

use super::{CommonDialogBackend, DialogKind, DialogOutcome, NativeRequest};
use crate::flags::OpenFileNameFlags;
use crate::logging::targets;
use crate::owner::OwnerWindow;

/// Backend calling `GetOpenFileNameW` / `GetSaveFileNameW`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Win32Backend;

fn wide_ptr(text: Option<&Vec<u16>>) -> PCWSTR {
    text.map_or(PCWSTR::null(), |w| PCWSTR(w.as_ptr()))
}

impl CommonDialogBackend for Win32Backend {
    fn run(
        &mut self,
        kind: DialogKind,
        owner: OwnerWindow,
        request: &mut NativeRequest,
    ) -> DialogOutcome {
        let file = request.file.as_mut_slice();
        let max_file = u32::try_from(file.len()).unwrap_or(u32::MAX);

        let mut ofn = OPENFILENAMEW {
            lStructSize: std::mem::size_of::<OPENFILENAMEW>() as u32,
            hwndOwner: HWND(owner.raw() as *mut c_void),
            lpstrFilter: wide_ptr(request.filter.as_ref()),
            nFilterIndex: request.filter_index,
            lpstrFile: PWSTR(file.as_mut_ptr()),
            nMaxFile: max_file,
            lpstrInitialDir: wide_ptr(request.initial_dir.as_ref()),
            lpstrTitle: wide_ptr(request.title.as_ref()),
            Flags: OPEN_FILENAME_FLAGS(request.flags.bits()),
            ..Default::default()
        };

        debug!(target: targets::BACKEND, ?kind, hwnd = owner.raw(), "calling common dialog");

        // SAFETY: every pointer in `ofn` points into `request`, which outlives
        // the call, and `nMaxFile` matches the file buffer length.
        let accepted = unsafe {
            match kind {
                DialogKind::Open => GetOpenFileNameW(&mut ofn),
                DialogKind::Save => GetSaveFileNameW(&mut ofn),
            }
        }
        .as_bool();

        if !accepted {
            // SAFETY: no preconditions; reads thread-local comdlg32 state.
            let code = unsafe { CommDlgExtendedError() }.0;
            if code == 0 {
                return DialogOutcome::Cancelled;
            }
            return DialogOutcome::Failed(code);
        }

        request.filter_index = ofn.nFilterIndex;
        request.flags = OpenFileNameFlags::from_bits(ofn.Flags.0);
        DialogOutcome::Accepted
    }
}
