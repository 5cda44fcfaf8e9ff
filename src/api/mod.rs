//! HTTP adapter: maps requests onto the cipher core and renders JSON.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;

pub use routes::create_router;
