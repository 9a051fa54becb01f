//! Page views. Each is a plain static section; the shell routes to them.

mod about;
mod achievements;
mod events;
mod home;
mod projects;

pub use about::About;
pub use achievements::Achievements;
pub use events::Events;
pub use home::Home;
pub use projects::Projects;
