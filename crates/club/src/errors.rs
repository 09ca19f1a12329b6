// club/errors.rs

// external dependencies
use alloy_primitives::U256;
use thiserror::Error;

// local dependencies
use club_chain::ChainError;

/// Everything a flow action can fail with. Each variant renders to the single
/// user-facing string shown next to the triggering control; no error leaves
/// the flow in anything but its prior stable phase.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("Connect your wallet first")]
    NotConnected,
    #[error("Insufficient Sigma 369 tokens. Need {needed}, have {available}")]
    InsufficientBalance { needed: U256, available: U256 },
    #[error("You already own a {0}")]
    AlreadyOwned(String),
    #[error("You have already claimed your {0}.")]
    AlreadyClaimed(String),
    #[error("You need to own a {0} to stake")]
    NotOwned(String),
    #[error("Approval has not been confirmed yet")]
    NotApproved,
    #[error("Nothing staked for this offering")]
    NothingStaked,
    #[error("No rewards to claim")]
    NoRewards,
    #[error("Another transaction for this offering is still pending")]
    TransactionPending,
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Transaction reverted: {0}")]
    Reverted(String),
    #[error(transparent)]
    Chain(#[from] ChainError),
}

/// Map a claim revert reason to a user-facing error.
///
/// Substring heuristic against externally defined revert strings. The drop
/// contract reverts a repeat claim with `DropClaimExceedLimit` or prose
/// containing "already claimed" / "exceed limit"; anything else is surfaced
/// raw. Callers must not rely on exhaustive coverage.
pub fn classify_claim_revert(offering: &str, reason: &str) -> FlowError {
    let lower = reason.to_lowercase();
    if reason.contains("DropClaimExceedLimit")
        || lower.contains("already claimed")
        || lower.contains("exceed limit")
    {
        FlowError::AlreadyClaimed(offering.to_string())
    } else {
        FlowError::Reverted(reason.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeat_claim_reverts_are_classified() {
        for reason in [
            "execution reverted: DropClaimExceedLimit(0, 1)",
            "execution reverted: you have Already Claimed",
            "claim would EXCEED LIMIT for wallet",
        ] {
            assert_eq!(
                classify_claim_revert("Club Member NFT", reason),
                FlowError::AlreadyClaimed("Club Member NFT".to_string())
            );
        }
    }

    #[test]
    fn other_reverts_surface_the_raw_reason() {
        let err = classify_claim_revert("Club Member NFT", "insufficient funds");
        assert_eq!(err, FlowError::Reverted("insufficient funds".to_string()));
    }
}
