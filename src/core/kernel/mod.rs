//! Transport kernel - request plumbing shared by every resource manager.
//!
//! The kernel contains no resource-specific logic. It is organized around
//! two components:
//!
//! - [`TransportConfig`]: the immutable bag of auth, default headers and
//!   base URL from which a fresh single-use HTTP client is spawned per
//!   request cycle.
//! - [`Route`]: the declarative (verb, URL template) descriptor each manager
//!   operation binds to. At call time it resolves template placeholders from
//!   the method's arguments, sends the request through a freshly spawned
//!   transport, runs the status-code hook, and coerces the JSON body into
//!   the declared return shape (or falls back to raw JSON on mismatch).

pub mod route;
pub mod transport;

// Re-export key types for convenience
pub use route::{PathSegment, RequestParts, Route};
pub use transport::TransportConfig;
