//! Structured logging helpers for the storefront header
//!
//! Provides consistent, contextual logging for panel toggles, navigation and
//! scroll-driven visibility. Uses structured `tracing` fields tagged with the
//! operation name.

/// Operations the header logs about
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    PanelToggle,
    Navigation,
    ScrollVisibility,
    ScrollListener,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::PanelToggle => "panel_toggle",
            LogOperation::Navigation => "navigation",
            LogOperation::ScrollVisibility => "scroll_visibility",
            LogOperation::ScrollListener => "scroll_listener",
        }
    }
}

/// Slide-out panels owned by the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Sidebar,
    Cart,
}

impl Panel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Panel::Sidebar => "sidebar",
            Panel::Cart => "cart",
        }
    }
}

/// Log a panel opening or closing
pub fn log_panel_toggle(panel: Panel, open: bool) {
    tracing::debug!(
        operation = LogOperation::PanelToggle.as_str(),
        panel = panel.as_str(),
        open = open,
        "Panel toggled"
    );
}

/// Log a navigation request
pub fn log_navigation(path: &str, sidebar_was_open: bool) {
    tracing::debug!(
        operation = LogOperation::Navigation.as_str(),
        path = path,
        sidebar_was_open = sidebar_was_open,
        "Navigating"
    );
}

/// Log a path the router could not resolve
pub fn log_navigation_error(path: &str, error: &str) {
    tracing::warn!(
        operation = LogOperation::Navigation.as_str(),
        path = path,
        error = error,
        "Navigation dropped"
    );
}

/// Log the header hiding or reappearing
pub fn log_visibility_change(offset: f64, hidden: bool) {
    tracing::trace!(
        operation = LogOperation::ScrollVisibility.as_str(),
        scroll_offset = offset,
        hidden = hidden,
        "Header visibility changed"
    );
}

/// Log a scroll listener being attached
pub fn log_scroll_listener_attached(source: &str, subscription_id: u64) {
    tracing::debug!(
        operation = LogOperation::ScrollListener.as_str(),
        source = source,
        subscription_id = subscription_id,
        "Scroll listener attached"
    );
}

/// Log a scroll listener being detached
pub fn log_scroll_listener_detached(source: &str, subscription_id: u64) {
    tracing::debug!(
        operation = LogOperation::ScrollListener.as_str(),
        source = source,
        subscription_id = subscription_id,
        "Scroll listener detached"
    );
}

/// Log a scroll listener that could not be attached
pub fn log_scroll_listener_error(source: &str, error: &str) {
    tracing::error!(
        operation = LogOperation::ScrollListener.as_str(),
        source = source,
        error = error,
        "Failed to attach scroll listener"
    );
}
