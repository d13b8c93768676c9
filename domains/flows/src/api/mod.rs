//! API layer for the Flows domain
//!
//! Contains HTTP handlers, routes, and domain state definition.

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::FlowsState;
pub use routes::routes;
