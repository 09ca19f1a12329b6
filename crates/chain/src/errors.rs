// chain/errors.rs

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ChainError {
    /// A read query failed at the RPC layer. Transient; retried by policy.
    #[error("read failed: {0}")]
    Rpc(String),
    /// The wallet or RPC layer refused the write before broadcast
    /// (e.g. the user declined signing). Surfaced verbatim.
    #[error("{0}")]
    Rejected(String),
    /// A response did not have the expected shape.
    #[error("unexpected response shape: {0}")]
    Decode(String),
    /// A receipt was requested for a handle this binding never issued.
    #[error("unknown transaction handle")]
    UnknownHandle,
}
