//! HTTP surface of the styling service.

pub mod routes;
