//! API exposure layers
//!
//! The host is transport-agnostic; an exposure turns it into a router.

pub mod rest;

pub use rest::RestExposure;
