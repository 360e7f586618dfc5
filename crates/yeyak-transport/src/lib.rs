//! HTTP transport to the reservation agent backend.
//!
//! Implements [`yeyak_core::transport::BookingTransport`] against the
//! backend's REST surface (`POST /session`, `/greetings`, `/chat`). The
//! server address is an explicitly passed [`ServerConfig`] value, never
//! ambient state, so the core stays testable without a network.

pub mod config;
pub mod http;

pub use config::ServerConfig;
pub use http::HttpBookingTransport;
