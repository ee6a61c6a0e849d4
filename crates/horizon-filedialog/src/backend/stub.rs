//! Stub implementation for platforms without common dialogs.

use tracing::debug;

use super::{CommonDialogBackend, DialogKind, DialogOutcome, NativeRequest};
use crate::logging::targets;
use crate::owner::OwnerWindow;

/// Backend that never shows anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubBackend;

impl CommonDialogBackend for StubBackend {
    fn run(
        &mut self,
        kind: DialogKind,
        _owner: OwnerWindow,
        _request: &mut NativeRequest,
    ) -> DialogOutcome {
        debug!(target: targets::BACKEND, ?kind, "common dialogs are not available on this platform");
        DialogOutcome::Unsupported
    }
}
