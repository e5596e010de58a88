pub mod project;
pub mod user;

pub use project::InMemoryProjectStore;
pub use user::InMemoryUserStore;
