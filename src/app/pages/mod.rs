pub mod shop;
pub mod store_routes;

pub use store_routes::{resolve_route, App, Route, RouterNavigator};
