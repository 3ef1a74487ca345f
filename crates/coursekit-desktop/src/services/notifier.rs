//! Toast notifications backed by app state signals.

use std::time::Duration;

use dioxus::prelude::*;

use coursekit_core::notice::{Notice, NoticeKind, Notifier};

use crate::state::AppState;

const TOAST_TTL: Duration = Duration::from_secs(4);

/// A visible toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

/// [`Notifier`] that pushes toasts into app state and expires them.
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl ToastNotifier {
    pub fn from_state(state: &AppState) -> Self {
        Self {
            toasts: state.toasts,
            next_id: state.next_toast_id,
        }
    }

    /// Remove a toast before it expires.
    pub fn dismiss(mut self, id: u64) {
        self.toasts.write().retain(|toast| toast.id != id);
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, notice: Notice) {
        match notice.kind {
            NoticeKind::Success => tracing::info!("{}", notice.message),
            NoticeKind::Error => tracing::warn!("{}", notice.message),
        }

        let mut next_id = self.next_id;
        let id = next_id();
        next_id.set(id + 1);

        let mut toasts = self.toasts;
        toasts.write().push(Toast { id, notice });

        let notifier = *self;
        spawn(async move {
            tokio::time::sleep(TOAST_TTL).await;
            notifier.dismiss(id);
        });
    }
}
