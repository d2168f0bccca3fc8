// Library entry so integration tests and the binary share the same modules.
pub mod config;
pub mod constants;
pub mod database;
pub mod events;
pub mod handlers;
pub mod model;
pub mod quiz;
pub mod session;
pub mod ui;

pub use model::AppState;
