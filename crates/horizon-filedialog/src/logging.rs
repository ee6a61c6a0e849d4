//! Tracing targets used by the file dialog helpers.
//!
//! The crate emits events through the `tracing` crate and never installs a
//! subscriber. To see them, install one in your application and filter on
//! the targets below:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_filedialog=debug")
//!     .init();
//! ```

/// Target names for log filtering.
pub mod targets {
    /// Dialog request marshaling and result decoding.
    pub const DIALOG: &str = "horizon_filedialog::dialog";
    /// Native backend invocation.
    pub const BACKEND: &str = "horizon_filedialog::backend";
}
