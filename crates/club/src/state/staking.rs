// club/state/staking.rs

// external dependencies
use alloy_primitives::U256;

/// Per-account stake state as read from the staking contract's `stakers`
/// mapping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StakeRecord {
    pub amount_staked: U256,
    /// Unix seconds of the last stake/unstake/claim touching this record.
    pub time_of_last_update: u64,
    pub unclaimed_rewards: U256,
}

/// Latest chain reads the staking flow depends on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StakingSnapshot {
    /// NFTs of this offering held in the wallet. Drops while staked; the
    /// token sits in the staking contract.
    pub nft_balance: U256,
    /// `isApprovedForAll(owner, staking_contract)`.
    pub approved_for_all: bool,
    pub record: StakeRecord,
    /// Reward figure from `getStakeInfoForToken`, computed at read time.
    /// Independently sourced from `record.unclaimed_rewards` and either view
    /// may lag the other.
    pub live_rewards: U256,
}

impl StakingSnapshot {
    pub fn owns_nft(&self) -> bool {
        self.nft_balance > U256::ZERO
    }

    pub fn is_staked(&self) -> bool {
        self.record.amount_staked > U256::ZERO
    }

    /// Displayed claimable reward: the numeric maximum of the two reward
    /// views. Neither source structurally supersedes the other.
    pub fn claimable_rewards(&self) -> U256 {
        self.record.unclaimed_rewards.max(self.live_rewards)
    }

    /// Rewards are only claimable while something is staked; stale unclaimed
    /// rewards after an unstake do not re-enable the claim.
    pub fn can_claim_rewards(&self) -> bool {
        self.is_staked() && self.claimable_rewards() > U256::ZERO
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StakePhase {
    Disconnected,
    /// No NFT in the wallet and nothing staked; claim one first.
    NotOwned,
    NeedsApproval,
    ReadyToStake,
    Staked,
    /// A write for this offering is awaiting its receipt; all other actions
    /// for the offering are disabled until it settles.
    Pending(StakeIntent),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StakeIntent {
    ApproveForAll,
    Stake,
    Unstake,
    ClaimRewards,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(unclaimed: u64, live: u64) -> StakingSnapshot {
        StakingSnapshot {
            record: StakeRecord {
                amount_staked: U256::from(1),
                unclaimed_rewards: U256::from(unclaimed),
                ..StakeRecord::default()
            },
            live_rewards: U256::from(live),
            ..StakingSnapshot::default()
        }
    }

    #[test]
    fn claimable_takes_the_numeric_maximum() {
        assert_eq!(snapshot(5, 7).claimable_rewards(), U256::from(7));
        assert_eq!(snapshot(7, 5).claimable_rewards(), U256::from(7));
        // ties and zero
        assert_eq!(snapshot(7, 7).claimable_rewards(), U256::from(7));
        assert_eq!(snapshot(0, 0).claimable_rewards(), U256::ZERO);
    }

    #[test]
    fn zero_claimable_disables_the_claim() {
        assert!(snapshot(5, 0).can_claim_rewards());
        assert!(!snapshot(0, 0).can_claim_rewards());
    }

    #[test]
    fn stale_rewards_are_not_claimable_unstaked() {
        let mut s = snapshot(5, 5);
        s.record.amount_staked = U256::ZERO;
        assert!(!s.is_staked());
        assert!(!s.can_claim_rewards());
    }
}
