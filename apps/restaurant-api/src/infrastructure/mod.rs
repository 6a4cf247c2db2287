//! Infrastructure Layer
//!
//! Adapters around the application layer:
//!
//! - **Driven Adapters (Outbound)**
//!   - `persistence/`: in-memory store behind the `Storage` port
//!
//! - **Driver Adapters (Inbound)**
//!   - `http/`: REST API controllers and static asset serving
//!
//! - `config/`: environment-driven server settings

pub mod config;
pub mod http;
pub mod persistence;
