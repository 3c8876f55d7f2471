pub mod navbar;
pub mod notification;

pub use navbar::Navbar;
pub use notification::Notification;
