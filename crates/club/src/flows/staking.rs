// club/flows/staking.rs

// external dependencies
use alloy_primitives::Address;
use tracing::{debug, info, warn};

// local dependencies
use club_chain::{Chain, TxStatus, WriteCall};
use crate::{
    config::{ClubConfig, Offering},
    errors::FlowError,
    flows::queries,
    state::{StakeIntent, StakePhase, StakingSnapshot},
};

/// Sequences approve-for-all, stake, unstake and claim-rewards for one
/// offering. Instances for different offerings are independent and may have
/// transactions in flight concurrently; within one offering the actions are
/// mutually exclusive while a transaction is pending.
pub struct StakingFlow<'a, C: Chain> {
    chain: &'a C,
    config: &'a ClubConfig,
    offering: &'a Offering,
    account: Option<Address>,
    snapshot: StakingSnapshot,
    pending: Option<StakeIntent>,
}

impl<'a, C: Chain> StakingFlow<'a, C> {
    pub fn new(chain: &'a C, config: &'a ClubConfig, offering: &'a Offering) -> Self {
        Self {
            chain,
            config,
            offering,
            account: None,
            snapshot: StakingSnapshot::default(),
            pending: None,
        }
    }

    pub async fn connect(&mut self, account: Address) -> Result<(), FlowError> {
        self.account = Some(account);
        self.refresh().await
    }

    pub fn disconnect(&mut self) {
        self.account = None;
        self.snapshot = StakingSnapshot::default();
        self.pending = None;
    }

    pub fn offering(&self) -> &Offering {
        self.offering
    }

    pub fn snapshot(&self) -> &StakingSnapshot {
        &self.snapshot
    }

    pub fn phase(&self) -> StakePhase {
        if self.account.is_none() {
            return StakePhase::Disconnected;
        }
        if let Some(intent) = self.pending {
            return StakePhase::Pending(intent);
        }
        if self.snapshot.is_staked() {
            return StakePhase::Staked;
        }
        if !self.snapshot.owns_nft() {
            return StakePhase::NotOwned;
        }
        if !self.snapshot.approved_for_all {
            return StakePhase::NeedsApproval;
        }
        StakePhase::ReadyToStake
    }

    /// Re-read NFT balance, operator approval, the stakers record and the
    /// live reward figure. No query executes while disconnected.
    pub async fn refresh(&mut self) -> Result<(), FlowError> {
        let Some(account) = self.account else {
            return Ok(());
        };

        self.snapshot = StakingSnapshot {
            nft_balance: queries::nft_balance(self.chain, self.config, self.offering, account)
                .await?,
            approved_for_all: queries::approved_for_all(
                self.chain,
                self.config,
                self.offering,
                account,
            )
            .await?,
            record: queries::stake_record(self.chain, self.config, self.offering, account).await?,
            live_rewards: queries::live_rewards(self.chain, self.config, self.offering, account)
                .await?,
        };
        debug!(
            offering = %self.offering.name,
            nft_balance = %self.snapshot.nft_balance,
            approved = self.snapshot.approved_for_all,
            amount_staked = %self.snapshot.record.amount_staked,
            unclaimed = %self.snapshot.record.unclaimed_rewards,
            live = %self.snapshot.live_rewards,
            "staking snapshot refreshed"
        );
        Ok(())
    }

    /// Grant the staking contract operator approval over the NFT.
    pub async fn approve_for_all(&mut self) -> Result<(), FlowError> {
        self.check_connected()?;
        self.check_owns_nft()?;

        let call = WriteCall::new(self.offering.contract, "setApprovalForAll")
            .arg(self.offering.staking_contract)
            .arg(true);
        self.execute(StakeIntent::ApproveForAll, call).await
    }

    /// Stake one NFT of this offering.
    pub async fn stake(&mut self) -> Result<(), FlowError> {
        self.check_connected()?;
        self.check_owns_nft()?;
        if !self.snapshot.approved_for_all {
            return Err(FlowError::NotApproved);
        }

        let call = WriteCall::new(self.offering.staking_contract, "stake")
            .arg(self.offering.token_id)
            .arg(1u64);
        self.execute(StakeIntent::Stake, call).await
    }

    /// Withdraw one staked NFT. Reward accrual stops at the confirmed block.
    pub async fn unstake(&mut self) -> Result<(), FlowError> {
        self.check_connected()?;
        if !self.snapshot.is_staked() {
            return Err(FlowError::NothingStaked);
        }

        let call = WriteCall::new(self.offering.staking_contract, "withdraw")
            .arg(self.offering.token_id)
            .arg(1u64);
        self.execute(StakeIntent::Unstake, call).await
    }

    /// Harvest accrued PLS. Gated on an active stake with a nonzero
    /// claimable figure.
    pub async fn claim_rewards(&mut self) -> Result<(), FlowError> {
        self.check_connected()?;
        if !self.snapshot.is_staked() {
            return Err(FlowError::NothingStaked);
        }
        if self.snapshot.claimable_rewards().is_zero() {
            return Err(FlowError::NoRewards);
        }

        let call =
            WriteCall::new(self.offering.staking_contract, "claimRewards").arg(self.offering.token_id);
        self.execute(StakeIntent::ClaimRewards, call).await
    }

    /// Submit, wait for the receipt, then re-read everything the flow
    /// depends on before reporting a new phase.
    async fn execute(&mut self, intent: StakeIntent, call: WriteCall) -> Result<(), FlowError> {
        if self.pending.is_some() {
            return Err(FlowError::TransactionPending);
        }
        info!(
            offering = %self.offering.name,
            function = call.function,
            ?intent,
            "submitting staking transaction"
        );

        self.pending = Some(intent);
        let result = self.execute_inner(call).await;
        self.pending = None;
        result
    }

    async fn execute_inner(&mut self, call: WriteCall) -> Result<(), FlowError> {
        let function = call.function;
        let handle = self.chain.submit(&call).await?;
        let receipt = self.chain.receipt(handle).await?;

        match receipt.status {
            TxStatus::Success => {
                info!(offering = %self.offering.name, function, "staking transaction confirmed");
                self.refresh_after_write().await
            }
            TxStatus::Reverted { reason } => {
                warn!(offering = %self.offering.name, function, %reason, "staking transaction reverted");
                Err(FlowError::Reverted(reason))
            }
        }
    }

    /// Refetch after a confirmed write. The mined transaction invalidated
    /// every prior read, so a failed refetch drops the snapshot to its
    /// unknown reading rather than keep answering from pre-transaction
    /// values.
    async fn refresh_after_write(&mut self) -> Result<(), FlowError> {
        if let Err(err) = self.refresh().await {
            self.snapshot = StakingSnapshot::default();
            return Err(err);
        }
        Ok(())
    }

    fn check_connected(&self) -> Result<(), FlowError> {
        self.account.map(|_| ()).ok_or(FlowError::NotConnected)
    }

    fn check_owns_nft(&self) -> Result<(), FlowError> {
        if self.snapshot.owns_nft() {
            Ok(())
        } else {
            Err(FlowError::NotOwned(self.offering.name.clone()))
        }
    }
}
