// chain/writer.rs

// local dependencies
use crate::{call::WriteCall, errors::ChainError};

/// Opaque identifier for a submitted transaction, used to key the receipt wait.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TxHandle(pub u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TxStatus {
    Success,
    /// Mined but reverted; `reason` carries the externally defined revert text.
    Reverted { reason: String },
}

/// Confirmation that a submitted transaction was mined.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxReceipt {
    pub handle: TxHandle,
    pub status: TxStatus,
}

impl TxReceipt {
    pub fn is_success(&self) -> bool {
        matches!(self.status, TxStatus::Success)
    }
}

/// Write access to chain state, split into the two suspension points of the
/// transaction lifecycle: submit (network accepts the transaction, returns a
/// handle) and receipt (the handle is mined into a block).
///
/// A transaction cannot be cancelled once submitted. `receipt` waits
/// indefinitely; timeout and resubmission policy belong to the wallet/RPC
/// layer behind the binding.
#[allow(async_fn_in_trait)]
pub trait ChainWriter {
    async fn submit(&self, call: &WriteCall) -> Result<TxHandle, ChainError>;

    async fn receipt(&self, handle: TxHandle) -> Result<TxReceipt, ChainError>;
}
