use dioxus::prelude::*;

use crate::domain::models::{CategoryLink, Destination};

/// Slide-out navigation panel opened from the header's menu icon.
///
/// Links are routed back through `on_navigate` so the header closes the
/// panel as part of the navigation.
#[component]
pub fn NavigationSidebar(
    open: bool,
    categories: Vec<CategoryLink>,
    /// Closes the panel (backdrop click or close button)
    on_close: EventHandler<()>,
    on_navigate: EventHandler<Destination>,
) -> Element {
    let panel_class = if open { "c-panel c-panel--left c-panel--open" } else { "c-panel c-panel--left" };

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
                h2 { class: "c-panel__title", "Menu" }
                button {
                    class: "c-panel__close",
                    r#type: "button",
                    aria_label: "Close menu",
                    onclick: move |_| on_close.call(()),
                    "✕"
                }
            }
            nav { class: "c-panel__nav",
                ul {
                    li {
                        button {
                            class: "c-panel__link",
                            onclick: move |_| on_navigate.call(Destination::Home),
                            {Destination::Home.display_name()}
                        }
                    }
                    for link in categories {
                        li { key: "{link.label}",
                            button {
                                class: "c-panel__link",
                                onclick: move |_| on_navigate.call(link.destination),
                                "{link.label}"
                            }
                        }
                    }
                    li {
                        button {
                            class: "c-panel__link c-panel__link--account",
                            onclick: move |_| on_navigate.call(Destination::Login),
                            {Destination::Login.display_name()}
                        }
                    }
                }
            }
        }
    }
}
