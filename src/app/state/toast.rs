use std::time::{Duration, SystemTime, UNIX_EPOCH};

pub type ToastId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
    Warning,
}

impl ToastKind {
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Error => "✕",
            ToastKind::Warning => "⚠",
            ToastKind::Info => "ℹ",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ToastKind::Success => "SUCCESS",
            ToastKind::Error => "ERROR",
            ToastKind::Warning => "WARNING",
            ToastKind::Info => "INFO",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub kind: ToastKind,
    pub duration: Duration,
}

/// Visible notifications, oldest first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    last_id: ToastId,
}

impl ToastQueue {
    /// Ids come from the wall clock in milliseconds and are bumped past the
    /// previous id, so two toasts in the same millisecond still differ.
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind, duration: Duration) -> ToastId {
        let now_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX));
        let id = now_ms.max(self.last_id.saturating_add(1));
        self.last_id = id;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            kind,
            duration,
        });
        id
    }

    /// Removing an id that is already gone is a no-op.
    pub fn remove(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    #[must_use]
    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.last()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Toast> {
        self.toasts.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// How many queued toasts are of `kind`.
    #[must_use]
    pub fn count_of(&self, kind: ToastKind) -> usize {
        self.toasts.iter().filter(|t| t.kind == kind).count()
    }
}
