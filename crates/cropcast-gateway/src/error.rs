//! Gateway error taxonomy.
//!
//! Every failure of an upstream call is terminal for the request; nothing
//! here is retried. The server maps these onto HTTP statuses: an explicit
//! upstream rejection is the caller's problem (400), everything else is a
//! contract or transport break (500).

use cropcast_core::YieldParseError;
use thiserror::Error;

/// Failures of a single upstream prediction call.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The upstream answered with an explicit error string. The message
    /// is the upstream string, verbatim.
    #[error("{0}")]
    UpstreamRejected(String),

    /// The bounded request timeout elapsed.
    #[error("upstream request timed out")]
    UpstreamTimeout,

    /// Network or connection failure reaching the upstream.
    #[error("upstream request failed: {0}")]
    Transport(reqwest::Error),

    /// The upstream answered with a non-success HTTP status.
    #[error("upstream returned HTTP {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    /// The reply body did not have the expected JSON shape.
    #[error("malformed upstream reply: {0}")]
    MalformedReply(String),

    /// The reply string did not contain a usable yield value.
    #[error(transparent)]
    Parse(#[from] YieldParseError),
}
