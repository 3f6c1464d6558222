// Custom Dioxus hooks
pub mod use_navigation_header;

pub use use_navigation_header::{
    attach_scroll_visibility, use_navigation_header, NavStateStore, NavigationHeaderState,
    ScrollSourceContext,
};
