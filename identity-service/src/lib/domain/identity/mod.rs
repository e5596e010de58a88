pub mod errors;
pub mod models;
pub mod ports;
pub mod service;

pub use errors::AuthError;
pub use errors::RegistrationError;
pub use models::AccessToken;
pub use models::RegisterUserCommand;
pub use models::Role;
pub use models::User;
pub use models::UserId;
pub use models::Username;
pub use ports::IdentityServicePort;
pub use ports::UserLookup;
pub use ports::UserStore;
pub use service::require_role;
pub use service::IdentityService;
