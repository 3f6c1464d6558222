pub mod navbar;

pub use navbar::NavigationHeader;
