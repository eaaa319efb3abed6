//! # Construe
//!
//! Rule-based parser that turns short natural-language scheduling
//! constraints ("Team A cannot play before 6pm on Fridays") into structured
//! records for a downstream scheduling engine. The parsing pipeline is pure,
//! synchronous, and deterministic; an axum-based REST API exposes it as a
//! single endpoint.
//!
//! ## Architecture
//!
//! The crate is organized into three layers:
//!
//! - [`models`]: serializable data model (categories, entities, conditions,
//!   category field records, and the assembled [`models::ParseResult`])
//! - [`parser`]: the classification and extraction pipeline
//! - [`http`]: axum router, handlers, and error mapping (behind the
//!   `http-server` feature)
//!
//! The pipeline holds no cross-request state and can be invoked concurrently
//! without synchronization.

pub mod models;

pub mod parser;

#[cfg(feature = "http-server")]
pub mod http;

pub use parser::parse_constraint;
