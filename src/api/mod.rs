//! HTTP adapter over the consultation session engine.
//!
//! All session rules live in the core; this module only maps routes,
//! request/response shapes, and error codes.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use router::consultation_api_router;
pub use server::{start_api_server, ApiServer};
