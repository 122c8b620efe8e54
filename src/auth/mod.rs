pub mod credentials;
pub mod scope;

pub use credentials::Credentials;
pub use scope::TokenScope;
