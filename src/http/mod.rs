//! HTTP server module.
//!
//! This module exposes the parsing pipeline as a REST API via an axum
//! router. Handlers are stateless: the pipeline is a pure function, so there
//! is no shared application state, no locking, and no per-request setup.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Request parsing and validation                         │
//! │  - JSON serialization/deserialization                     │
//! │  - CORS, compression, error handling                      │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Parser (pure pipeline)                                   │
//! │  - Classification, extraction, scoring                    │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;

pub mod error;

pub mod handlers;

pub mod router;

pub use router::create_router;
