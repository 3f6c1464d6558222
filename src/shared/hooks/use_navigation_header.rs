use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::domain::models::{HeaderAction, NavState};
use crate::shared::services::{PageNavigator, ScrollSource, ScrollSubscription};

/// Scroll source shared through the Dioxus context
#[derive(Clone)]
pub struct ScrollSourceContext(pub Rc<dyn ScrollSource>);

impl ScrollSourceContext {
    pub fn new(source: impl ScrollSource + 'static) -> Self {
        Self(Rc::new(source))
    }

    /// Window listener in the browser, inert manual source elsewhere
    pub fn platform_default() -> Self {
        #[cfg(target_arch = "wasm32")]
        let source = crate::shared::services::WindowScrollSource;
        #[cfg(not(target_arch = "wasm32"))]
        let source = crate::shared::services::ManualScrollSource::new();

        Self::new(source)
    }
}

/// Somewhere header state can be read and updated from a scroll callback
pub trait NavStateStore: 'static {
    fn update(&self, f: impl FnOnce(&mut NavState));
}

impl NavStateStore for Signal<NavState> {
    fn update(&self, f: impl FnOnce(&mut NavState)) {
        let mut signal = *self;
        signal.with_mut(f);
    }
}

impl NavStateStore for Rc<RefCell<NavState>> {
    fn update(&self, f: impl FnOnce(&mut NavState)) {
        f(&mut self.borrow_mut());
    }
}

/// Recompute header visibility in `store` on every offset `source` delivers
pub fn attach_scroll_visibility<S: NavStateStore>(
    source: &dyn ScrollSource,
    store: S,
    threshold: f64,
) -> ScrollSubscription {
    source.subscribe(Rc::new(move |offset: f64| {
        store.update(|state| state.on_scroll(offset, threshold));
    }))
}

/// Header state handle returned by [`use_navigation_header`]
#[derive(Clone, Copy)]
pub struct NavigationHeaderState {
    pub state: Signal<NavState>,
}

impl NavigationHeaderState {
    pub fn sidebar_open(&self) -> bool {
        self.state.read().sidebar_open
    }

    pub fn cart_open(&self) -> bool {
        self.state.read().cart_open
    }

    pub fn navbar_hidden(&self) -> bool {
        self.state.read().navbar_hidden
    }

    pub fn dispatch(&mut self, navigator: &dyn PageNavigator, action: HeaderAction) {
        self.state.write().dispatch(navigator, action);
    }
}

/// Hook owning the header's flags and its scroll listener.
///
/// The listener is attached once when the calling component mounts and
/// released when it unmounts, so a re-mounted header never holds two.
pub fn use_navigation_header(hide_threshold_px: f64) -> NavigationHeaderState {
    let state = use_signal(NavState::new);
    let source = try_use_context::<ScrollSourceContext>()
        .unwrap_or_else(ScrollSourceContext::platform_default);

    let subscription = use_hook(move || {
        Rc::new(RefCell::new(Some(attach_scroll_visibility(
            source.0.as_ref(),
            state,
            hide_threshold_px,
        ))))
    });

    use_drop(move || {
        subscription.borrow_mut().take();
    });

    NavigationHeaderState { state }
}
