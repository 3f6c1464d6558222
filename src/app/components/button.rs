use dioxus::prelude::*;

/// Header icon affordance (menu, search, account, cart)
/// Uses CSS classes: c-icon-btn, c-icon-btn--inert
///
/// Without `onclick` the button is rendered but inert.
#[component]
pub fn IconButton(
    icon: &'static str,
    /// Accessible name, also used as tooltip
    label: &'static str,
    onclick: Option<EventHandler<MouseEvent>>,
    #[props(default = "")]
    class: &'static str,
) -> Element {
    let inert = onclick.is_none();

    let btn_class = match (inert, class.is_empty()) {
        (false, true) => "c-icon-btn".to_string(),
        (false, false) => format!("c-icon-btn {}", class),
        (true, true) => "c-icon-btn c-icon-btn--inert".to_string(),
        (true, false) => format!("c-icon-btn c-icon-btn--inert {}", class),
    };

    rsx! {
        button {
            class: "{btn_class}",
            r#type: "button",
            title: label,
            aria_label: label,
            aria_disabled: if inert { "true" } else { "false" },
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            span { class: "c-icon-btn__icon", "{icon}" }
        }
    }
}
