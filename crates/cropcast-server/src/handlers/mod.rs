//! HTTP handler modules for the cropcast API.
//!
//! Handlers are thin: parse the request, delegate to the validator and
//! the gateway client, and map the outcome to a JSON response. No
//! prediction logic lives here.

pub mod catalog;
pub mod health;
pub mod predict;
