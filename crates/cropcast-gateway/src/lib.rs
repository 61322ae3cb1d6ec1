//! HTTP client for the hosted crop-yield inference space.
//!
//! The upstream service exposes one named remote procedure,
//! `predict_yield`, taking positional arguments and answering with a
//! markdown fragment. This crate shapes the request, classifies the
//! reply, and maps every failure mode onto [`GatewayError`]. Both the
//! HTTP server and the CLI go through this client, so predictions behave
//! identically from either entry point.

pub mod client;
pub mod config;
pub mod error;

pub use client::InferenceClient;
pub use config::GatewayConfig;
pub use error::GatewayError;
