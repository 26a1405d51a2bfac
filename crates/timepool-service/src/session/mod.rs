//! Session lifecycle management.

pub mod service;

pub use service::SessionService;
