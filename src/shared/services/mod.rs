// Shared services
// Seams between the header and the outside world (router, page scroll)
pub mod navigator;
pub mod scroll;

pub use navigator::PageNavigator;
#[cfg(test)]
pub use navigator::RecordingNavigator;
pub use scroll::{ManualScrollSource, ScrollHandler, ScrollSource, ScrollSubscription};
#[cfg(target_arch = "wasm32")]
pub use scroll::WindowScrollSource;
