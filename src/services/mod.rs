// Services layer - Business logic and orchestration
pub mod account_service;
pub mod credential_hasher;
pub mod token_service;

pub use account_service::AccountService;
pub use credential_hasher::CredentialHasher;
pub use token_service::TokenService;
