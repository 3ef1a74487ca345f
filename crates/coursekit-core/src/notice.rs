//! User-facing notifications and the refresh trigger.

/// Severity of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// Surfaces notices to the user. Fire-and-forget.
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

/// Requests a re-fetch of the current course view from upstream.
pub trait Refresher {
    fn refresh(&self);
}
