// club/state/claim.rs

// external dependencies
use alloy_primitives::U256;

/// Latest chain reads the claim flow depends on. A never-refreshed snapshot
/// reads as all zeroes: approval needed, balance insufficient, nothing owned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClaimSnapshot {
    /// Σ369 the drop contract may pull from the account.
    pub allowance: U256,
    /// Account's Σ369 balance.
    pub token_balance: U256,
    /// Account's balance of the offering's NFT id.
    pub nft_balance: U256,
}

// Eligibility is always recomputed from the latest snapshot, never cached as
// mutable flags; an allowance revoked by another client is reflected before
// the next submit.
impl ClaimSnapshot {
    pub fn needs_approval(&self, price: U256) -> bool {
        self.allowance < price
    }

    pub fn has_enough_tokens(&self, price: U256) -> bool {
        self.token_balance >= price
    }

    pub fn already_owns_nft(&self) -> bool {
        self.nft_balance > U256::ZERO
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClaimPhase {
    Disconnected,
    /// Ownership read shows the NFT is already held; the approve/claim flow
    /// is short-circuited entirely.
    AlreadyOwned,
    NeedsApproval,
    Approving,
    ReadyToClaim,
    Claiming,
    /// Terminal success; the UI invites the staking flow from here.
    Claimed,
}

/// The write currently awaiting its receipt, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClaimIntent {
    Approve,
    Claim,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approval_boundary_is_inclusive() {
        let price = U256::from(100);
        let mut snapshot = ClaimSnapshot::default();

        snapshot.allowance = U256::from(99);
        assert!(snapshot.needs_approval(price));

        // allowance == price needs no approval
        snapshot.allowance = price;
        assert!(!snapshot.needs_approval(price));

        snapshot.allowance = U256::from(101);
        assert!(!snapshot.needs_approval(price));
    }

    #[test]
    fn balance_boundary_is_inclusive() {
        let price = U256::from(100);
        let mut snapshot = ClaimSnapshot::default();

        snapshot.token_balance = U256::from(99);
        assert!(!snapshot.has_enough_tokens(price));

        snapshot.token_balance = price;
        assert!(snapshot.has_enough_tokens(price));
    }

    #[test]
    fn unknown_snapshot_is_conservative() {
        let snapshot = ClaimSnapshot::default();
        assert!(snapshot.needs_approval(U256::from(1)));
        assert!(!snapshot.has_enough_tokens(U256::from(1)));
        assert!(!snapshot.already_owns_nft());
    }
}
