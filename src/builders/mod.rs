//! Builders to construct the roster service from configuration.

pub mod service_builder;

pub use service_builder::build_service;
