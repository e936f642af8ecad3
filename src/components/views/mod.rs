mod dashboard;
mod library;
mod media_card;
mod not_found;
mod play;
mod settings;

pub use dashboard::Dashboard;
pub use library::LibraryPage;
pub use media_card::MediaCard;
pub use not_found::NotFound;
pub use play::Play;
pub use settings::Settings;
