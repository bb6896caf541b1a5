pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod context;
pub mod error;
pub mod flow;
pub mod router;
pub mod routes;
pub mod store;
pub mod util;

pub use app::App;
