//! Button primitive shared by the panel components.

use dioxus::prelude::*;

use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Ghost,
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] disabled: bool,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    let (background, color, border) = match variant {
        ButtonVariant::Primary => (colors.accent, colors.accent_text, colors.accent),
        ButtonVariant::Ghost => ("transparent", colors.text_primary, "transparent"),
    };
    let cursor = if disabled { "not-allowed" } else { "pointer" };
    let opacity = if disabled { "0.6" } else { "1" };

    rsx! {
        button {
            r#type: "button",
            disabled,
            style: "
                display: inline-flex;
                align-items: center;
                gap: 6px;
                padding: 6px 12px;
                border-radius: 6px;
                border: 1px solid {border};
                background: {background};
                color: {color};
                cursor: {cursor};
                opacity: {opacity};
                font-size: 13px;
            ",
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
