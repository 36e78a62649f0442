//! Page chrome shared by every screen inside the app.
//!
//! - [`Container`]: background wrapper with the navbar above the page content
//! - [`Navbar`]: top navigation bar
//! - [`ChatBubbleIcon`]: inline SVG used by the navbar brand

mod container;
mod icons;
mod navbar;

pub use container::Container;
pub use icons::ChatBubbleIcon;
pub use navbar::Navbar;
