//! Custom extractors for Axum handlers.

pub mod lenient_json;

pub use lenient_json::LenientJson;
