//! Scroll offset sources
//!
//! The header never reads the page scroll position itself. A `ScrollSource`
//! pushes vertical offsets into a handler and hands back a
//! `ScrollSubscription`; dropping the subscription detaches the handler.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::shared::logging::{log_scroll_listener_attached, log_scroll_listener_detached};

/// Receives the current vertical scroll offset in pixels
pub type ScrollHandler = Rc<dyn Fn(f64)>;

pub trait ScrollSource {
    /// Attach `handler`. It keeps firing until the returned guard is dropped.
    fn subscribe(&self, handler: ScrollHandler) -> ScrollSubscription;
}

/// Guard for an attached scroll handler
#[must_use = "dropping the subscription detaches the scroll handler"]
pub struct ScrollSubscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl ScrollSubscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Subscription that holds nothing (used when attaching failed)
    pub fn detached() -> Self {
        Self { release: None }
    }

    pub fn is_attached(&self) -> bool {
        self.release.is_some()
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

#[derive(Default)]
struct ManualScrollInner {
    next_id: Cell<u64>,
    handlers: RefCell<BTreeMap<u64, ScrollHandler>>,
}

/// In-memory scroll source: offsets are injected with [`ManualScrollSource::emit`].
///
/// Used by tests and by renderers without a browser window (server-side
/// rendering), where no scroll events ever arrive.
#[derive(Clone, Default)]
pub struct ManualScrollSource {
    inner: Rc<ManualScrollInner>,
}

impl ManualScrollSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `offset` to every attached handler
    pub fn emit(&self, offset: f64) {
        // Snapshot so handlers may subscribe/unsubscribe while running
        let handlers: Vec<ScrollHandler> = self.inner.handlers.borrow().values().cloned().collect();
        for handler in handlers {
            handler(offset);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.handlers.borrow().len()
    }
}

impl ScrollSource for ManualScrollSource {
    fn subscribe(&self, handler: ScrollHandler) -> ScrollSubscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner.handlers.borrow_mut().insert(id, handler);
        log_scroll_listener_attached("manual", id);

        let inner = Rc::downgrade(&self.inner);
        ScrollSubscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner.handlers.borrow_mut().remove(&id);
                log_scroll_listener_detached("manual", id);
            }
        })
    }
}

/// Scroll source backed by the browser `window` scroll event
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Default)]
pub struct WindowScrollSource;

#[cfg(target_arch = "wasm32")]
impl ScrollSource for WindowScrollSource {
    fn subscribe(&self, handler: ScrollHandler) -> ScrollSubscription {
        use crate::shared::logging::log_scroll_listener_error;
        use wasm_bindgen::prelude::*;
        use wasm_bindgen::JsCast;

        thread_local! {
            static NEXT_ID: Cell<u64> = const { Cell::new(0) };
        }

        let Some(window) = web_sys::window() else {
            log_scroll_listener_error("window", "no global window");
            return ScrollSubscription::detached();
        };

        let id = NEXT_ID.with(|next| {
            let id = next.get();
            next.set(id + 1);
            id
        });

        let read_from = window.clone();
        let callback = Closure::wrap(Box::new(move |_: web_sys::Event| {
            let offset = read_from.scroll_y().unwrap_or(0.0);
            handler(offset);
        }) as Box<dyn FnMut(_)>);

        let options = web_sys::AddEventListenerOptions::new();
        options.set_passive(true);
        if let Err(e) = window.add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            log_scroll_listener_error("window", &format!("{:?}", e));
            return ScrollSubscription::detached();
        }
        log_scroll_listener_attached("window", id);

        ScrollSubscription::new(move || {
            let _ = window
                .remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
            log_scroll_listener_detached("window", id);
            // `callback` is dropped here, freeing the JS closure
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<f64>>>, ScrollHandler) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let handler: ScrollHandler = Rc::new(move |offset: f64| sink.borrow_mut().push(offset));
        (seen, handler)
    }

    #[test]
    fn test_emit_reaches_attached_handler() {
        let source = ManualScrollSource::new();
        let (seen, handler) = recorder();
        let _subscription = source.subscribe(handler);

        source.emit(10.0);
        source.emit(75.5);
        assert_eq!(*seen.borrow(), vec![10.0, 75.5]);
    }

    #[test]
    fn test_dropping_subscription_detaches_handler() {
        let source = ManualScrollSource::new();
        let (seen, handler) = recorder();
        let subscription = source.subscribe(handler);
        assert!(subscription.is_attached());
        assert_eq!(source.listener_count(), 1);

        drop(subscription);
        assert_eq!(source.listener_count(), 0);

        source.emit(120.0);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_subscriptions_are_independent() {
        let source = ManualScrollSource::new();
        let (first_seen, first) = recorder();
        let (second_seen, second) = recorder();
        let first_sub = source.subscribe(first);
        let _second_sub = source.subscribe(second);

        source.emit(1.0);
        drop(first_sub);
        source.emit(2.0);

        assert_eq!(*first_seen.borrow(), vec![1.0]);
        assert_eq!(*second_seen.borrow(), vec![1.0, 2.0]);
    }

    #[test]
    fn test_subscription_outliving_source_is_harmless() {
        let (_seen, handler) = recorder();
        let subscription = {
            let source = ManualScrollSource::new();
            source.subscribe(handler)
        };
        drop(subscription);
    }

    #[test]
    fn test_detached_subscription() {
        let subscription = ScrollSubscription::detached();
        assert!(!subscription.is_attached());
    }
}
