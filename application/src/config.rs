//! Application-level configuration.
//!
//! This module provides configuration types that control how a chat turn
//! behaves around the provider call.

use std::time::Duration;

/// Turn behavior configuration.
///
/// Controls how long a provider call may run and whether Ctrl-C aborts an
/// in-flight reply.
#[derive(Debug, Clone)]
pub struct BehaviorConfig {
    /// Maximum time to wait for a complete reply before giving up.
    pub timeout: Option<Duration>,
    /// Cancel the in-flight request when the user presses Ctrl-C.
    pub cancel_on_interrupt: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            cancel_on_interrupt: true,
        }
    }
}

impl BehaviorConfig {
    /// Creates a BehaviorConfig from an optional timeout in seconds.
    ///
    /// `None` or `Some(0)` means no timeout.
    pub fn from_timeout_seconds(seconds: Option<u64>) -> Self {
        Self {
            timeout: seconds.filter(|s| *s > 0).map(Duration::from_secs),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_cancel_on_interrupt(mut self, enabled: bool) -> Self {
        self.cancel_on_interrupt = enabled;
        self
    }
}
