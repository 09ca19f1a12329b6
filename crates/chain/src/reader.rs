// chain/reader.rs

// local dependencies
use crate::{call::ReadCall, call::Word, errors::ChainError};

/// Read-only access to chain state.
///
/// Every result is a point-in-time snapshot that may already be stale by the
/// time the caller observes it; chain state is mutably shared with arbitrary
/// other clients. Flows therefore re-query after every confirmed write instead
/// of mutating derived values locally.
#[allow(async_fn_in_trait)]
pub trait ChainReader {
    async fn read(&self, call: &ReadCall) -> Result<Vec<Word>, ChainError>;
}
