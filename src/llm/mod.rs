//! Model-backed command interpretation
//!
//! The HTTP client for the chat-completions endpoint and the rate limiter
//! that gates it.

pub mod client;
pub mod rate_limit;

pub use client::{ConnectionStatus, ModelClient};
pub use rate_limit::{Clock, RateLimiter, SystemClock};
