//! # Exam Scores
//!
//! Data-access layer for the national exam score dashboard.
//!
//! This crate sits between the dashboard screens and the upstream score API.
//! It validates user input, fetches JSON from the read-only score endpoints,
//! reconciles the backend's varied field spellings into stable typed records,
//! computes derived metrics, and converts every failure into a single
//! user-facing message.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: Canonical subject codes, student records, and report types
//! - [`services`]: Validation, normalization, report assembly, and the
//!   [`ScoreService`] facade consumed by the UI layer
//! - [`transport`]: The `ScoreTransport` seam and its reqwest implementation
//! - [`config`]: Client configuration (base URL, timeout budget)
//! - [`error`]: The error taxonomy and transport-failure classifier

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod transport;

pub use config::ClientConfig;
pub use error::{ServiceError, ServiceResult};
pub use services::ScoreService;
