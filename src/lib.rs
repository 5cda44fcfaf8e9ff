pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use api::create_router;
pub use config::ServiceConfig;
pub use crate::core::{decode, encode, Shift};
pub use server::CipherServer;
pub use utils::error::{Result, ServiceError};
