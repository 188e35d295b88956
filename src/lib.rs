//! src/lib.rs
pub mod api_client;
pub mod configuration;
pub mod domain;
pub mod email_client;
pub mod forms;
pub mod pages;

pub mod telemetry;

mod error_chain_fmt;

pub use error_chain_fmt::error_chain_fmt;
