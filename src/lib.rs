//! Typed client for the CompanyCam REST API.
//!
//! Each resource manager declares its operations as (verb, URL template)
//! routes; the kernel turns those declarations into request/response cycles
//! with typed decoding and a closed set of semantic errors keyed by HTTP
//! status code.

pub mod api;
pub mod core;
pub mod v2;

pub use api::Api;
pub use core::config::{ApiConfig, ApiVersion, ConfigError};
pub use core::errors::{ApiError, HttpContext};
pub use core::types::{Payload, Query, QueryValue, Verb};
