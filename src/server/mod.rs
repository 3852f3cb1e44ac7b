//! HTTP exposure for the restaurant store

pub mod builder;
pub mod handlers;

pub use builder::ServerBuilder;
pub use handlers::{AppState, build_router};
