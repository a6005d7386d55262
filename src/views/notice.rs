use std::time::{Duration, Instant};

pub const ORDER_PLACED: &str = "Order placed successfully!";
pub const ORDER_FAILED: &str = "Error submitting order. Please try again.";
pub const DRINKS_LOAD_FAILED: &str = "Failed to load drinks. Please try again.";
pub const DRINK_SAVED: &str = "Drink saved.";
pub const STATISTICS_RESET: &str = "Statistics and orders have been reset.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A one-line message under the form. Confirmations fade after a while,
/// errors stay until something replaces them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    expires_at: Option<Instant>,
}

impl Notice {
    pub fn success(text: impl Into<String>, ttl: Duration) -> Self {
        Notice {
            kind: NoticeKind::Success,
            text: text.into(),
            expires_at: Some(Instant::now() + ttl),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Error,
            text: text.into(),
            expires_at: None,
        }
    }

    pub fn is_visible(&self, now: Instant) -> bool {
        self.expires_at.map_or(true, |at| now < at)
    }
}
