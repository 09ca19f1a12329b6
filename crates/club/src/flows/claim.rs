// club/flows/claim.rs

// external dependencies
use alloy_primitives::Address;
use tracing::{debug, info, warn};

// local dependencies
use club_chain::{Chain, TxStatus, WriteCall};
use crate::{
    config::{ClubConfig, Offering},
    errors::{classify_claim_revert, FlowError},
    flows::queries,
    state::{ClaimIntent, ClaimPhase, ClaimSnapshot},
};

/// Sequences the approve-then-claim choreography for one offering.
///
/// Approval is never skipped speculatively: after an approval confirms, the
/// allowance is re-read from the chain before a claim may be submitted, so a
/// lagging RPC view keeps the flow in `NeedsApproval` rather than racing a
/// stale cached value.
pub struct ClaimFlow<'a, C: Chain> {
    chain: &'a C,
    config: &'a ClubConfig,
    offering: &'a Offering,
    account: Option<Address>,
    snapshot: ClaimSnapshot,
    pending: Option<ClaimIntent>,
    claimed: bool,
}

impl<'a, C: Chain> ClaimFlow<'a, C> {
    pub fn new(chain: &'a C, config: &'a ClubConfig, offering: &'a Offering) -> Self {
        Self {
            chain,
            config,
            offering,
            account: None,
            snapshot: ClaimSnapshot::default(),
            pending: None,
            claimed: false,
        }
    }

    /// Wallet connected; derived state is rebuilt from fresh reads.
    pub async fn connect(&mut self, account: Address) -> Result<(), FlowError> {
        self.account = Some(account);
        self.refresh().await
    }

    /// Wallet disconnected; everything derived from the account is dropped.
    pub fn disconnect(&mut self) {
        self.account = None;
        self.snapshot = ClaimSnapshot::default();
        self.pending = None;
        self.claimed = false;
    }

    pub fn offering(&self) -> &Offering {
        self.offering
    }

    pub fn snapshot(&self) -> &ClaimSnapshot {
        &self.snapshot
    }

    pub fn phase(&self) -> ClaimPhase {
        if self.account.is_none() {
            return ClaimPhase::Disconnected;
        }
        if self.claimed {
            return ClaimPhase::Claimed;
        }
        if self.snapshot.already_owns_nft() {
            return ClaimPhase::AlreadyOwned;
        }
        match self.pending {
            Some(ClaimIntent::Approve) => ClaimPhase::Approving,
            Some(ClaimIntent::Claim) => ClaimPhase::Claiming,
            None if self.snapshot.needs_approval(self.offering.price) => ClaimPhase::NeedsApproval,
            None => ClaimPhase::ReadyToClaim,
        }
    }

    /// Re-read every query this flow depends on. No query executes while
    /// disconnected.
    pub async fn refresh(&mut self) -> Result<(), FlowError> {
        let Some(account) = self.account else {
            return Ok(());
        };

        self.snapshot = ClaimSnapshot {
            allowance: queries::allowance(self.chain, self.config, account, self.offering.contract)
                .await?,
            token_balance: queries::token_balance(self.chain, self.config, account).await?,
            nft_balance: queries::nft_balance(self.chain, self.config, self.offering, account)
                .await?,
        };
        debug!(
            offering = %self.offering.name,
            allowance = %self.snapshot.allowance,
            token_balance = %self.snapshot.token_balance,
            nft_balance = %self.snapshot.nft_balance,
            "claim snapshot refreshed"
        );
        Ok(())
    }

    /// Submit the Σ369 approval for the full canonical base-unit price and
    /// wait for it to confirm, then refetch.
    pub async fn approve(&mut self) -> Result<(), FlowError> {
        self.account.ok_or(FlowError::NotConnected)?;
        self.check_claim_preconditions()?;

        let call = WriteCall::new(self.config.token, "approve")
            .arg(self.offering.contract)
            .arg(self.offering.price);
        info!(
            offering = %self.offering.name,
            price = %self.offering.price,
            "submitting approval"
        );

        self.pending = Some(ClaimIntent::Approve);
        let result = self.approve_inner(call).await;
        self.pending = None;
        result
    }

    async fn approve_inner(&mut self, call: WriteCall) -> Result<(), FlowError> {
        let handle = self.chain.submit(&call).await?;
        let receipt = self.chain.receipt(handle).await?;

        match receipt.status {
            TxStatus::Success => {
                // The pre-approval allowance read is stale by definition;
                // only a fresh read may unlock the claim.
                self.refresh_after_write().await?;
                info!(
                    offering = %self.offering.name,
                    allowance = %self.snapshot.allowance,
                    "approval confirmed"
                );
                Ok(())
            }
            TxStatus::Reverted { reason } => {
                warn!(offering = %self.offering.name, %reason, "approval reverted");
                Err(FlowError::Reverted(reason))
            }
        }
    }

    /// Submit the paid claim of one NFT. Requires the latest allowance read
    /// to cover the price.
    pub async fn claim(&mut self) -> Result<(), FlowError> {
        self.account.ok_or(FlowError::NotConnected)?;
        self.check_claim_preconditions()?;
        if self.snapshot.needs_approval(self.offering.price) {
            return Err(FlowError::NotApproved);
        }

        let call = WriteCall::new(self.offering.contract, "claim")
            .arg(self.offering.token_id)
            .arg(1u64);
        info!(
            offering = %self.offering.name,
            token_id = self.offering.token_id,
            "submitting claim"
        );

        self.pending = Some(ClaimIntent::Claim);
        let result = self.claim_inner(call).await;
        self.pending = None;
        result
    }

    async fn claim_inner(&mut self, call: WriteCall) -> Result<(), FlowError> {
        let handle = self.chain.submit(&call).await?;
        let receipt = self.chain.receipt(handle).await?;

        match receipt.status {
            TxStatus::Success => {
                self.claimed = true;
                info!(offering = %self.offering.name, "claim confirmed");
                self.refresh_after_write().await
            }
            TxStatus::Reverted { reason } => {
                warn!(offering = %self.offering.name, %reason, "claim reverted");
                Err(classify_claim_revert(&self.offering.name, &reason))
            }
        }
    }

    /// Refetch after a confirmed write. The mined transaction invalidated
    /// every prior read, so a failed refetch drops the snapshot to its
    /// unknown reading rather than keep answering from pre-transaction
    /// values.
    async fn refresh_after_write(&mut self) -> Result<(), FlowError> {
        if let Err(err) = self.refresh().await {
            self.snapshot = ClaimSnapshot::default();
            return Err(err);
        }
        Ok(())
    }

    /// Local precondition checks shared by approve and claim; failures here
    /// never reach the network.
    fn check_claim_preconditions(&self) -> Result<(), FlowError> {
        if self.pending.is_some() {
            return Err(FlowError::TransactionPending);
        }
        if self.snapshot.already_owns_nft() {
            return Err(FlowError::AlreadyOwned(self.offering.name.clone()));
        }
        if !self.snapshot.has_enough_tokens(self.offering.price) {
            return Err(FlowError::InsufficientBalance {
                needed: self.offering.price,
                available: self.snapshot.token_balance,
            });
        }
        Ok(())
    }
}
