//! Transient user notifications for edit outcomes.
//!
//! Toasts are queued here by the edit coordinator and read by whatever draws
//! them; each one expires on its own after its duration.

use std::time::{Duration, Instant};

/// Types of toast notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl ToastLevel {
    pub fn icon(&self) -> &'static str {
        match self {
            ToastLevel::Success => "✓",
            ToastLevel::Info => "ℹ",
            ToastLevel::Warning => "⚠",
            ToastLevel::Error => "✗",
        }
    }
}

/// A single toast notification
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, level: ToastLevel, duration: Duration) -> Self {
        Self {
            message: message.into(),
            level,
            created_at: Instant::now(),
            duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.duration
    }
}

/// Queue of active toasts
#[derive(Debug)]
pub struct NotificationCenter {
    toasts: Vec<Toast>,
    duration: Duration,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(Duration::from_secs(3))
    }
}

impl NotificationCenter {
    /// Center whose toasts last `duration`
    pub fn new(duration: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            duration,
        }
    }

    pub fn add(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }

    fn push(&mut self, message: impl Into<String>, level: ToastLevel) {
        let toast = Toast::new(message, level, self.duration);
        self.add(toast);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(message, ToastLevel::Success);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(message, ToastLevel::Info);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(message, ToastLevel::Warning);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(message, ToastLevel::Error);
    }

    /// Remove expired toasts
    pub fn cleanup(&mut self) {
        let now = Instant::now();
        self.toasts.retain(|t| !t.is_expired_at(now));
    }

    pub fn has_toasts(&self) -> bool {
        !self.toasts.is_empty()
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Most recent toast, if any
    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.last()
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
    }
}
