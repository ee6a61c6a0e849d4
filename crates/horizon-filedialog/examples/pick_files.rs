//! Shows the open, open-multiple and save dialogs in turn.
//!
//! Run on Windows with `RUST_LOG=horizon_filedialog=debug` to see the
//! marshaling trace.

use horizon_filedialog::{FileDialog, FileFilter, OpenFileNameFlags, OwnerWindow};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let filter = FileFilter::join(&[
        FileFilter::new("Text Files (*.txt)", &["*.txt"]),
        FileFilter::new("Rust Sources (*.rs)", &["*.rs"]),
        FileFilter::all_files(),
    ]);

    let mut open = FileDialog::with_title("Open a file").filter(filter.clone());
    if open.show_open(OwnerWindow::none())? {
        println!("open: {} (filter {})", open.file_path.display(), open.filter_index);
    } else {
        println!("open: cancelled");
    }

    let mut many = FileDialog::with_title("Open several files")
        .filter(filter.clone())
        .show_read_only_cb(true);
    if many.show_open_multiple(OwnerWindow::none())? {
        for path in &many.file_paths {
            println!("open multiple: {}", path.display());
        }
        println!("read-only requested: {}", many.read_only);
    } else {
        println!("open multiple: cancelled");
    }

    let mut save = FileDialog::with_title("Save as")
        .filter(filter)
        .file_path("untitled.txt")
        .flags(OpenFileNameFlags::OVERWRITEPROMPT);
    if save.show_save(OwnerWindow::none())? {
        println!("save: {}", save.file_path.display());
    } else {
        println!("save: cancelled");
    }

    Ok(())
}
