pub mod auth;
pub mod factory;

pub use auth::AuthFixtures;
