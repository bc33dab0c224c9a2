// Library modules for integration tests
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
mod models; // Internal module, not exported
pub mod server;
pub mod text_input;
