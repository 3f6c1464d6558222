//! Header view state
//!
//! The three flags owned by a mounted storefront header and every transition
//! the header can perform on them. Framework-free so the transitions can be
//! exercised without a renderer.

use crate::domain::models::Destination;
use crate::shared::logging::{log_navigation, log_panel_toggle, log_visibility_change, Panel};
use crate::shared::services::PageNavigator;

/// Scroll offset (px) above which the header hides itself.
pub const DEFAULT_HIDE_THRESHOLD_PX: f64 = 50.0;

/// What a header affordance (icon, logo, category, panel close) does when used
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    ToggleSidebar,
    CloseSidebar,
    ToggleCart,
    CloseCart,
    Navigate(Destination),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    pub sidebar_open: bool,
    pub cart_open: bool,
    pub navbar_hidden: bool,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
        log_panel_toggle(Panel::Sidebar, self.sidebar_open);
    }

    pub fn toggle_cart(&mut self) {
        self.cart_open = !self.cart_open;
        log_panel_toggle(Panel::Cart, self.cart_open);
    }

    /// Close callback handed to the navigation sidebar panel.
    pub fn close_sidebar(&mut self) {
        if self.sidebar_open {
            self.sidebar_open = false;
            log_panel_toggle(Panel::Sidebar, false);
        }
    }

    /// Close callback handed to the cart panel. Never reopens the cart.
    pub fn close_cart(&mut self) {
        if self.cart_open {
            self.cart_open = false;
            log_panel_toggle(Panel::Cart, false);
        }
    }

    /// Hand `path` to the navigator, then close the sidebar.
    ///
    /// The transition is not awaited: the sidebar is closed as soon as the
    /// navigator returns, whatever the navigator did with the path.
    pub fn navigate_to(&mut self, navigator: &dyn PageNavigator, path: &str) {
        log_navigation(path, self.sidebar_open);
        navigator.navigate(path);
        self.sidebar_open = false;
    }

    pub fn dispatch(&mut self, navigator: &dyn PageNavigator, action: HeaderAction) {
        match action {
            HeaderAction::ToggleSidebar => self.toggle_sidebar(),
            HeaderAction::CloseSidebar => self.close_sidebar(),
            HeaderAction::ToggleCart => self.toggle_cart(),
            HeaderAction::CloseCart => self.close_cart(),
            HeaderAction::Navigate(destination) => self.navigate_to(navigator, destination.path()),
        }
    }

    /// Recompute header visibility from the current vertical scroll offset.
    ///
    /// Only offsets strictly greater than `threshold` hide the header.
    pub fn on_scroll(&mut self, offset: f64, threshold: f64) {
        let hidden = offset > threshold;
        if hidden != self.navbar_hidden {
            log_visibility_change(offset, hidden);
        }
        self.navbar_hidden = hidden;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::services::RecordingNavigator;

    #[test]
    fn test_initial_state_is_all_closed() {
        let state = NavState::new();
        assert!(!state.sidebar_open);
        assert!(!state.cart_open);
        assert!(!state.navbar_hidden);
    }

    #[test]
    fn test_toggle_sidebar_follows_call_parity() {
        let mut state = NavState::new();
        for calls in 1..=7 {
            state.toggle_sidebar();
            assert_eq!(state.sidebar_open, calls % 2 == 1, "after {} calls", calls);
        }
        assert!(!state.cart_open);
    }

    #[test]
    fn test_toggle_cart_follows_call_parity() {
        let mut state = NavState::new();
        for calls in 1..=6 {
            state.toggle_cart();
            assert_eq!(state.cart_open, calls % 2 == 1, "after {} calls", calls);
        }
        assert!(!state.sidebar_open);
    }

    #[test]
    fn test_sidebar_and_cart_can_both_be_open() {
        let mut state = NavState::new();
        state.toggle_sidebar();
        state.toggle_cart();
        assert!(state.sidebar_open && state.cart_open);
    }

    #[test]
    fn test_navigate_to_closes_sidebar_and_forwards_path() {
        let navigator = RecordingNavigator::default();

        let mut state = NavState::new();
        state.toggle_sidebar();
        state.navigate_to(&navigator, "/collection");
        assert!(!state.sidebar_open);

        // Already closed stays closed
        state.navigate_to(&navigator, "/Login");
        assert!(!state.sidebar_open);

        assert_eq!(*navigator.visited.borrow(), vec!["/collection", "/Login"]);
    }

    #[test]
    fn test_navigate_to_leaves_cart_alone() {
        let navigator = RecordingNavigator::default();
        let mut state = NavState::new();
        state.toggle_cart();
        state.navigate_to(&navigator, "/");
        assert!(state.cart_open);
    }

    #[test]
    fn test_scroll_threshold_is_exclusive() {
        let mut state = NavState::new();

        state.on_scroll(50.0, DEFAULT_HIDE_THRESHOLD_PX);
        assert!(!state.navbar_hidden);

        state.on_scroll(51.0, DEFAULT_HIDE_THRESHOLD_PX);
        assert!(state.navbar_hidden);

        // No hysteresis: crossing back shows the header again
        state.on_scroll(50.0, DEFAULT_HIDE_THRESHOLD_PX);
        assert!(!state.navbar_hidden);

        state.on_scroll(0.0, DEFAULT_HIDE_THRESHOLD_PX);
        assert!(!state.navbar_hidden);
    }

    #[test]
    fn test_scroll_does_not_touch_panels() {
        let mut state = NavState::new();
        state.toggle_sidebar();
        state.on_scroll(400.0, DEFAULT_HIDE_THRESHOLD_PX);
        assert!(state.sidebar_open);
        assert!(!state.cart_open);
    }

    #[test]
    fn test_close_sidebar_leaves_cart_unchanged() {
        let mut state = NavState::new();
        state.toggle_sidebar();
        state.toggle_cart();

        state.close_sidebar();
        assert!(!state.sidebar_open);
        assert!(state.cart_open);
    }

    #[test]
    fn test_close_cart_never_reopens() {
        let mut state = NavState::new();
        state.close_cart();
        assert!(!state.cart_open);

        state.toggle_cart();
        state.close_cart();
        state.close_cart();
        assert!(!state.cart_open);
    }

    #[test]
    fn test_dispatch_navigate_uses_destination_path() {
        let navigator = RecordingNavigator::default();
        let mut state = NavState::new();
        state.dispatch(&navigator, HeaderAction::ToggleSidebar);
        state.dispatch(&navigator, HeaderAction::Navigate(Destination::Login));

        assert!(!state.sidebar_open);
        assert_eq!(*navigator.visited.borrow(), vec!["/Login"]);
    }

    #[test]
    fn test_dispatch_panel_actions() {
        let navigator = RecordingNavigator::default();
        let mut state = NavState::new();

        state.dispatch(&navigator, HeaderAction::ToggleCart);
        assert!(state.cart_open);
        state.dispatch(&navigator, HeaderAction::CloseCart);
        assert!(!state.cart_open);

        state.dispatch(&navigator, HeaderAction::ToggleSidebar);
        state.dispatch(&navigator, HeaderAction::CloseSidebar);
        assert!(!state.sidebar_open);
        assert!(navigator.visited.borrow().is_empty());
    }
}
