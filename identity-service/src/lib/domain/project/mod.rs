pub mod errors;
pub mod models;
pub mod ports;
pub mod service;

pub use errors::ProjectError;
pub use models::CreateProjectCommand;
pub use models::Project;
pub use models::ProjectId;
pub use models::UpdateProjectCommand;
pub use ports::ProjectStore;
pub use service::ProjectService;
