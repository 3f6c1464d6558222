use dioxus::prelude::*;
use dioxus::router::Navigator;

use crate::app::layouts::NavigationHeader;
use crate::app::pages::shop::{Collection, Home, Login};
use crate::config::HeaderConfig;
use crate::shared::errors::{self, AppError};
use crate::shared::hooks::ScrollSourceContext;
use crate::shared::logging::log_navigation_error;
use crate::shared::services::PageNavigator;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},
    #[route("/Login")]
    Login {},
    #[route("/collection")]
    Collection {},
}

/// Parse a header destination path into an app route
pub fn resolve_route(path: &str) -> errors::Result<Route> {
    path.parse::<Route>()
        .map_err(|_| AppError::UnknownRoute(path.to_string()))
}

/// `PageNavigator` backed by the Dioxus router
#[derive(Clone, Copy)]
pub struct RouterNavigator {
    navigator: Navigator,
}

impl RouterNavigator {
    pub fn new(navigator: Navigator) -> Self {
        Self { navigator }
    }
}

impl PageNavigator for RouterNavigator {
    fn navigate(&self, path: &str) {
        match resolve_route(path) {
            Ok(route) => {
                if let Some(failure) = self.navigator.push(route) {
                    log_navigation_error(path, &format!("{:?}", failure));
                }
            }
            Err(e) => log_navigation_error(path, &e.to_string()),
        }
    }
}

#[component]
pub fn App() -> Element {
    use_context_provider(HeaderConfig::load_embedded);
    use_context_provider(ScrollSourceContext::platform_default);

    use_effect(|| {
        tracing::info!("Storefront app initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Layout() -> Element {
    // Bundled by build.rs from assets/css/
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        div { class: "c-layout",
            NavigationHeader {}

            main { class: "c-layout__main",
                Outlet::<Route> {}
            }
        }
    }
}
