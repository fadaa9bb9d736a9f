//! Toast notifications reported to the user by the shell.
//!
//! The core queues export outcomes here. The shell draws the queue, drops
//! expired toasts from its UI tick and dismisses a toast when it is clicked.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

static NEXT_TOAST_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Error,
}

impl ToastVariant {
    /// How long a toast of this variant stays visible.
    pub fn default_duration(&self) -> Duration {
        match self {
            ToastVariant::Success => Duration::from_secs(3),
            ToastVariant::Error => Duration::from_secs(5),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub variant: ToastVariant,
    pub duration: Duration,
    pub created_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, variant: ToastVariant) -> Self {
        Self {
            id: NEXT_TOAST_ID.fetch_add(1, Ordering::Relaxed),
            message: message.into(),
            variant,
            duration: variant.default_duration(),
            created_at: Instant::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Error)
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.duration
    }
}

/// Queue of visible toasts, oldest first.
#[derive(Debug, Default)]
pub struct ToastManager {
    toasts: Vec<Toast>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }

    /// Remove the toast with `id`. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    /// Drop toasts whose time is up at `now`. Returns true if any were removed.
    pub fn remove_expired(&mut self, now: Instant) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| !toast.is_expired(now));
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn count(&self) -> usize {
        self.toasts.len()
    }
}
