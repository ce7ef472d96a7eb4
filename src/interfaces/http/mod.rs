//! HTTP REST API interfaces
//!
//! - `common`: response envelope, error mapping, field projection, extractors
//! - `modules`: per-resource DTOs and handlers plus middleware
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod modules;
pub mod router;

pub use router::{create_api_router, ApiDoc};
