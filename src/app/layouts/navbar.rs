use dioxus::prelude::*;

use crate::app::components::{CartSidebar, IconButton, NavigationSidebar};
use crate::app::pages::RouterNavigator;
use crate::config::HeaderConfig;
use crate::domain::models::{CategoryLink, Destination, HeaderAction};
use crate::shared::hooks::use_navigation_header;

const LOGO: Asset = asset!("/assets/navlogo.svg");

// What each affordance does. The search icon has no action yet.
const MENU_ICON: HeaderAction = HeaderAction::ToggleSidebar;
const LOGO_CLICK: HeaderAction = HeaderAction::Navigate(Destination::Home);
const ACCOUNT_ICON: HeaderAction = HeaderAction::Navigate(Destination::Login);
const CART_ICON: HeaderAction = HeaderAction::ToggleCart;
const SIDEBAR_PANEL_CLOSE: HeaderAction = HeaderAction::CloseSidebar;
const CART_PANEL_CLOSE: HeaderAction = HeaderAction::CloseCart;

fn category_action(link: &CategoryLink) -> HeaderAction {
    HeaderAction::Navigate(link.destination)
}

/// Storefront header: icon bar, category row and the two slide-out panels.
///
/// Hides itself once the page is scrolled past the configured threshold.
#[component]
pub fn NavigationHeader() -> Element {
    let config = use_context::<HeaderConfig>();
    let mut header = use_navigation_header(config.hide_threshold_px);
    let navigator = RouterNavigator::new(use_navigator());

    let dispatch = use_callback(move |action: HeaderAction| {
        header.dispatch(&navigator, action);
    });
    let on_navigate = use_callback(move |destination: Destination| {
        dispatch.call(HeaderAction::Navigate(destination));
    });

    let nav_class = if header.navbar_hidden() {
        "c-navbar c-navbar--hidden"
    } else {
        "c-navbar"
    };
    let brand = config.brand_name.clone();

    rsx! {
        nav { class: "{nav_class}",
            // Wide screens: icon bar + category row
            div { class: "c-navbar__wide",
                div { class: "c-navbar__bar",
                    div { class: "c-navbar__group",
                        IconButton {
                            icon: "☰",
                            label: "Menu",
                            class: "c-icon-btn--lg",
                            onclick: move |_| dispatch.call(MENU_ICON),
                        }
                        // Search has no behavior yet
                        IconButton { icon: "🔍", label: "Search" }
                    }

                    img {
                        class: "c-navbar__logo c-navbar__logo--clickable",
                        src: LOGO,
                        alt: "{brand}",
                        onclick: move |_| dispatch.call(LOGO_CLICK),
                    }

                    div { class: "c-navbar__group",
                        IconButton {
                            icon: "👤",
                            label: "Account",
                            onclick: move |_| dispatch.call(ACCOUNT_ICON),
                        }
                        IconButton {
                            icon: "🛒",
                            label: "Cart",
                            onclick: move |_| dispatch.call(CART_ICON),
                        }
                    }
                }

                div { class: "c-navbar__categories",
                    for (label, action) in config.categories.iter().map(|link| (link.label.clone(), category_action(link))) {
                        button {
                            key: "{label}",
                            class: "c-navbar__category",
                            r#type: "button",
                            onclick: move |_| dispatch.call(action),
                            "{label}"
                        }
                    }
                }
            }

            // Small screens: single compact row
            div { class: "c-navbar__compact",
                img {
                    class: "c-navbar__logo c-navbar__logo--compact",
                    src: LOGO,
                    alt: "{brand}",
                }
                div { class: "c-navbar__group",
                    IconButton { icon: "🔍", label: "Search" }
                    IconButton {
                        icon: "🛒",
                        label: "Cart",
                        onclick: move |_| dispatch.call(CART_ICON),
                    }
                    IconButton {
                        icon: "👤",
                        label: "Account",
                        onclick: move |_| dispatch.call(ACCOUNT_ICON),
                    }
                    IconButton {
                        icon: "☰",
                        label: "Menu",
                        onclick: move |_| dispatch.call(MENU_ICON),
                    }
                }
            }
        }

        NavigationSidebar {
            open: header.sidebar_open(),
            categories: config.categories.clone(),
            on_close: move |_| dispatch.call(SIDEBAR_PANEL_CLOSE),
            on_navigate: on_navigate,
        }

        div { class: "c-navbar__cart-slot",
            CartSidebar {
                open: header.cart_open(),
                on_close: move |_| dispatch.call(CART_PANEL_CLOSE),
            }
        }
    }
}
