pub mod assets;
pub mod config;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod server;
pub(crate) mod template;

pub use config::Config;
pub use routes::{AppState, register_routes, router};
