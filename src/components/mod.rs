//! The components module contains all shared components for our app.

mod app;
mod app_view;
mod event_socket;
mod icons;
mod select_media_file;
mod sidebar;
mod store_context;
mod views;

pub use app::*;
pub use app_view::*;
pub use event_socket::*;
pub use icons::*;
pub use select_media_file::*;
pub use sidebar::*;
pub use store_context::*;
// Views are accessed via views::ViewName
