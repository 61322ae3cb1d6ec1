//! HTTP/JSON API server for the crop-yield advisory service.
//!
//! Exposes the prediction endpoint that validates form input, delegates
//! to the hosted inference space through `cropcast-gateway`, and returns
//! a normalized JSON result. This crate contains the server framework,
//! API schema types, error handling, and route definitions.

pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod state;
