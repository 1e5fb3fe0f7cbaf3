pub mod admin;
pub mod cli;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod server;
pub mod state;
pub mod worker;

#[cfg(test)]
mod tests;

pub use crate::routes::build_router;
pub use crate::server::{Server, log_report};
pub use crate::state::AppState;
