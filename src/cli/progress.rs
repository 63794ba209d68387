//! Loading indicator on stderr.

use std::io::{IsTerminal, Write};

use crate::session::Progress;

/// Shows "Loading..." while a remote call is in flight. Silent when stderr is not a terminal.
#[derive(Debug, Clone, Copy)]
pub struct StderrProgress {
    enabled: bool,
}

impl StderrProgress {
    pub fn new() -> Self {
        Self {
            enabled: std::io::stderr().is_terminal(),
        }
    }
}

impl Default for StderrProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress for StderrProgress {
    fn loading(&mut self, active: bool) {
        if !self.enabled {
            return;
        }
        let mut err = std::io::stderr().lock();
        let _ = if active {
            write!(err, "Loading...")
        } else {
            write!(err, "\r\x1b[K")
        };
        let _ = err.flush();
    }
}
