//! API schema types for request/response definitions.
//!
//! The prediction request body deserializes directly into
//! `cropcast_core::RawPredictionRequest`; response types live here. Field
//! names are camelCase on the wire, fixed by the public contract.

pub mod catalog;
pub mod predict;
