//! Native Windows open/save file dialogs.
//!
//! This crate is a thin helper over the comdlg32 common dialogs
//! (`GetOpenFileNameW` / `GetSaveFileNameW`). A [`FileDialog`] record holds the
//! title, filter, initial directory and flags; showing it fills in the
//! selected path(s).
//!
//! - **Single selection**: [`FileDialog::show_open`], [`FileDialog::show_save`]
//!   write [`FileDialog::file_path`]
//! - **Multiple selection**: [`FileDialog::show_open_multiple`] writes
//!   [`FileDialog::file_paths`]
//!
//! Every `show_*` call returns `Ok(true)` when the user accepted, `Ok(false)`
//! when they cancelled, and an error carrying the `CommDlgExtendedError` code
//! when the OS failed.
//!
//! # Example
//!
//! ```no_run
//! use horizon_filedialog::{FileDialog, FileFilter, OwnerWindow};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut dlg = FileDialog::with_title("Add documents").filter(FileFilter::join(&[
//!         FileFilter::new("Text Files (*.txt)", &["*.txt"]),
//!         FileFilter::all_files(),
//!     ]));
//!
//!     if dlg.show_open_multiple(OwnerWindow::none())? {
//!         for path in &dlg.file_paths {
//!             println!("{}", path.display());
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! On platforms other than Windows the `show_*` operations return
//! [`DialogError::Unsupported`]. The marshaling itself is platform
//! independent and can be driven through any [`CommonDialogBackend`] with
//! [`FileDialog::show_with`].

pub mod backend;
pub mod buffer;
mod dialog;
mod error;
pub mod filter;
mod flags;
pub mod logging;
mod owner;

pub use backend::{CommonDialogBackend, DialogKind, DialogOutcome, NativeRequest};
pub use buffer::FileNameBuffer;
pub use dialog::{DialogMode, FileDialog};
pub use error::{CommonDialogErrorCode, DialogError, Result};
pub use filter::FileFilter;
pub use flags::OpenFileNameFlags;
pub use owner::OwnerWindow;
