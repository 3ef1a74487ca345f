//! Toast stack overlay.

use dioxus::prelude::*;

use coursekit_core::notice::NoticeKind;

use crate::services::ToastNotifier;
use crate::state::AppState;

#[component]
pub fn ToastHost() -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let notifier = ToastNotifier::from_state(&state);
    let toasts = (state.toasts)();

    rsx! {
        div {
            style: "
                position: fixed;
                right: 16px;
                bottom: 16px;
                display: flex;
                flex-direction: column;
                gap: 8px;
                z-index: 100;
            ",
            for toast in toasts {
                div {
                    key: "{toast.id}",
                    style: "
                        min-width: 220px;
                        padding: 10px 14px;
                        border-radius: 6px;
                        border-left: 4px solid {toast_accent(toast.notice.kind, colors)};
                        background: {colors.bg_primary};
                        color: {colors.text_primary};
                        box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
                        font-size: 13px;
                        cursor: pointer;
                    ",
                    "role": "status",
                    onclick: move |_| notifier.dismiss(toast.id),
                    "{toast.notice.message}"
                }
            }
        }
    }
}

const fn toast_accent(kind: NoticeKind, colors: &crate::theme::ColorPalette) -> &'static str {
    match kind {
        NoticeKind::Success => colors.success,
        NoticeKind::Error => colors.error,
    }
}
