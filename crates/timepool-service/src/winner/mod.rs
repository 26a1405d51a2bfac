//! Difference recomputation and winner selection.

pub mod service;

pub use service::WinnerService;
