// club/flows/portfolio.rs

// external dependencies
use alloy_primitives::{Address, U256};
use serde::Serialize;
use tracing::debug;

// local dependencies
use club_chain::ChainReader;
use crate::{
    config::{ClubConfig, Tier},
    errors::FlowError,
    flows::queries,
};

/// One owned or staked position, as presented on the portfolio screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PortfolioEntry {
    pub tier: Tier,
    /// Display name, `"<offering> #<token id>"`.
    pub name: String,
    pub token_id: u64,
    /// NFTs of this offering held in the wallet.
    pub balance: U256,
    pub amount_staked: U256,
    pub claimable_rewards: U256,
    /// Unix seconds of the last stake update, when staked.
    pub staked_since: Option<u64>,
}

/// Read-only aggregation over every configured offering for the connected
/// account. Holds no transaction state of its own.
pub struct Portfolio<'a, C: ChainReader> {
    chain: &'a C,
    config: &'a ClubConfig,
    account: Option<Address>,
}

impl<'a, C: ChainReader> Portfolio<'a, C> {
    pub fn new(chain: &'a C, config: &'a ClubConfig) -> Self {
        Self {
            chain,
            config,
            account: None,
        }
    }

    pub fn connect(&mut self, account: Address) {
        self.account = Some(account);
    }

    pub fn disconnect(&mut self) {
        self.account = None;
    }

    /// Assemble entries for every offering with any holding, wallet-held or
    /// staked. Empty while disconnected.
    pub async fn load(&self) -> Result<Vec<PortfolioEntry>, FlowError> {
        let Some(account) = self.account else {
            return Ok(Vec::new());
        };

        let mut entries = Vec::new();
        for offering in &self.config.offerings {
            let balance =
                queries::nft_balance(self.chain, self.config, offering, account).await?;
            let record =
                queries::stake_record(self.chain, self.config, offering, account).await?;
            let live =
                queries::live_rewards(self.chain, self.config, offering, account).await?;

            if balance.is_zero() && record.amount_staked.is_zero() {
                continue;
            }

            entries.push(PortfolioEntry {
                tier: offering.tier,
                name: format!("{} #{}", offering.name, offering.token_id),
                token_id: offering.token_id,
                balance,
                amount_staked: record.amount_staked,
                claimable_rewards: record.unclaimed_rewards.max(live),
                staked_since: (record.time_of_last_update > 0 && !record.amount_staked.is_zero())
                    .then_some(record.time_of_last_update),
            });
        }

        debug!(account = %account, entries = entries.len(), "portfolio loaded");
        Ok(entries)
    }
}
