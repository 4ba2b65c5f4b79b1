//! Domain models for the storefront.

pub mod session;
pub mod user;

pub use session::{ShopperId, session_keys};
pub use user::User;
