use dioxus::prelude::*;

/// Slide-out cart panel.
/// Only closes itself: `on_close` is never a toggle.
#[component]
pub fn CartSidebar(open: bool, on_close: EventHandler<()>) -> Element {
    let panel_class = if open { "c-panel c-panel--right c-panel--open" } else { "c-panel c-panel--right" };

    rsx! {
        if open {
            div {
                class: "c-panel__backdrop",
                onclick: move |_| on_close.call(()),
            }
        }
        aside {
            class: "{panel_class}",
            aria_hidden: if open { "false" } else { "true" },
            div { class: "c-panel__header",
                h2 { class: "c-panel__title", "Your cart" }
                button {
                    class: "c-panel__close",
                    r#type: "button",
                    aria_label: "Close cart",
                    onclick: move |_| on_close.call(()),
                    "✕"
                }
            }
            div { class: "c-cart__empty",
                span { class: "c-cart__empty-icon", "🛒" }
                p { "Your cart is empty." }
            }
        }
    }
}
