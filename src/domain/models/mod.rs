// Domain models (view state and navigation targets)
// Pure Rust, no framework dependencies

pub mod destination;
pub mod nav_state;

pub use destination::{default_categories, CategoryLink, Destination};
pub use nav_state::{HeaderAction, NavState, DEFAULT_HIDE_THRESHOLD_PX};
