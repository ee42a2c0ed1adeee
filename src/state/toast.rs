//! One-shot user notifications.
//!
//! At most one toast is visible. Showing a new toast replaces the current
//! one, and a toast disappears once its duration has elapsed.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    shown_at: Instant,
}

impl Toast {
    pub fn is_error(&self) -> bool {
        self.kind == ToastKind::Error
    }
}

/// Holds the visible toast, if any.
#[derive(Debug, Clone)]
pub struct ToastState {
    current: Option<Toast>,
    duration: Duration,
}

impl Default for ToastState {
    fn default() -> Self {
        Self::new(Duration::from_secs(4))
    }
}

impl ToastState {
    pub fn new(duration: Duration) -> Self {
        Self {
            current: None,
            duration,
        }
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.show_at(message, ToastKind::Info, Instant::now());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.show_at(message, ToastKind::Error, Instant::now());
    }

    /// Replace whatever is visible with a new toast shown at `now`.
    pub fn show_at(&mut self, message: impl Into<String>, kind: ToastKind, now: Instant) {
        self.current = Some(Toast {
            message: message.into(),
            kind,
            shown_at: now,
        });
    }

    /// Drop the toast if it has outlived its duration.
    ///
    /// Returns `true` when a toast was removed, so the caller knows to redraw.
    pub fn expire(&mut self, now: Instant) -> bool {
        let expired = self
            .current
            .as_ref()
            .is_some_and(|toast| now.saturating_duration_since(toast.shown_at) >= self.duration);
        if expired {
            self.current = None;
        }
        expired
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}
