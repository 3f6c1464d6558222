pub mod button;
pub mod cart_sidebar;
pub mod navigation_sidebar;

pub use button::IconButton;
pub use cart_sidebar::CartSidebar;
pub use navigation_sidebar::NavigationSidebar;
