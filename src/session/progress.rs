//! Loading indicator hook.

/// Told when a remote call starts and when it finishes.
pub trait Progress: Send {
    fn loading(&mut self, active: bool);
}

/// Ignores loading notifications.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn loading(&mut self, _active: bool) {}
}
