#[macro_use]
pub mod prelude {
    pub use super::app;
    pub use super::App;
    pub use super::AppResult;
    pub use axum::response::IntoResponse;
    pub use axum::routing::{delete, get, patch, post, put};
    pub use axum::Router;
    pub use tracing::{debug, error, info, trace, warn};
}

mod greet;
mod server;

pub use greet::app;
pub use server::App;

pub type AppResult<T> = anyhow::Result<T>;
