//! API layer - HTTP surface.

pub mod http;
