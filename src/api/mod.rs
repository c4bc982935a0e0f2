//! HTTP-agnostic API layer
//!
//! This module provides typed response structures and pure handlers that can
//! be used by any HTTP server implementation (`tiny_http`, axum, etc.)
//! or directly by clients (CLI, tests).
//!
//! ## Design
//!
//! - **Handlers are pure functions**: Take raw input, return `Result<T, ApiError>`
//! - **Types are framework-agnostic**: No HTTP types leak into this module
//! - **Errors carry HTTP semantics**: `ApiError` knows its status code for translation

mod error;
mod handlers;
mod types;

pub use error::{ApiError, ApiErrorData, ErrorCode};
pub use handlers::{last_message, submit_message};
pub use types::{LastMessage, NoMessage, SIMULATED_TIME_HEADER, Submission};
