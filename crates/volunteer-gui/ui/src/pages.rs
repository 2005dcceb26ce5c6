mod events;
mod landing;
mod placeholder;
mod tasks;

pub use events::EventsPage;
pub use landing::LandingPage;
pub use placeholder::PlaceholderPage;
pub use tasks::TasksPage;
