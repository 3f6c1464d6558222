use dioxus::prelude::*;

// Destination pages. Their real content lives outside the header.

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "c-page c-page--home",
            h1 { class: "c-page__title", "BlackWilbur" }
            p { class: "c-page__text", "New season essentials." }
            div { class: "c-page__spacer" }
        }
    }
}

#[component]
pub fn Login() -> Element {
    rsx! {
        section { class: "c-page c-page--login",
            h1 { class: "c-page__title", "Sign in" }
        }
    }
}

#[component]
pub fn Collection() -> Element {
    rsx! {
        section { class: "c-page c-page--collection",
            h1 { class: "c-page__title", "Collection" }
            div { class: "c-page__spacer" }
        }
    }
}
