// club/flows/queries.rs

// Shared read-only queries. Every flow refetches through these after a
// confirmed write so no derived flag is ever computed from pre-transaction
// reads. All reads run under the configured retry policy.

// external dependencies
use alloy_primitives::{Address, U256};

// local dependencies
use club_chain::{read_with_retry, ChainError, ChainReader, ReadCall, Word};
use crate::{
    config::{ClubConfig, Offering},
    errors::FlowError,
    state::StakeRecord,
};

pub(crate) fn uint_at(words: &[Word], idx: usize, what: &str) -> Result<U256, FlowError> {
    words
        .get(idx)
        .and_then(Word::as_uint)
        .ok_or_else(|| ChainError::Decode(format!("{what}[{idx}]")).into())
}

pub(crate) fn bool_at(words: &[Word], idx: usize, what: &str) -> Result<bool, FlowError> {
    words
        .get(idx)
        .and_then(Word::as_bool)
        .ok_or_else(|| ChainError::Decode(format!("{what}[{idx}]")).into())
}

/// Σ369 the `spender` contract may pull from `owner`.
pub(crate) async fn allowance<R: ChainReader>(
    chain: &R,
    config: &ClubConfig,
    owner: Address,
    spender: Address,
) -> Result<U256, FlowError> {
    let call = ReadCall::new(config.token, "allowance")
        .arg(owner)
        .arg(spender);
    let words = read_with_retry(chain, &call, config.retry).await?;
    uint_at(&words, 0, "allowance")
}

/// `owner`'s Σ369 balance.
pub(crate) async fn token_balance<R: ChainReader>(
    chain: &R,
    config: &ClubConfig,
    owner: Address,
) -> Result<U256, FlowError> {
    let call = ReadCall::new(config.token, "balanceOf").arg(owner);
    let words = read_with_retry(chain, &call, config.retry).await?;
    uint_at(&words, 0, "balanceOf")
}

/// `owner`'s balance of the offering's NFT id.
pub(crate) async fn nft_balance<R: ChainReader>(
    chain: &R,
    config: &ClubConfig,
    offering: &Offering,
    owner: Address,
) -> Result<U256, FlowError> {
    let call = ReadCall::new(offering.contract, "balanceOf")
        .arg(owner)
        .arg(offering.token_id);
    let words = read_with_retry(chain, &call, config.retry).await?;
    uint_at(&words, 0, "balanceOf")
}

pub(crate) async fn approved_for_all<R: ChainReader>(
    chain: &R,
    config: &ClubConfig,
    offering: &Offering,
    owner: Address,
) -> Result<bool, FlowError> {
    let call = ReadCall::new(offering.contract, "isApprovedForAll")
        .arg(owner)
        .arg(offering.staking_contract);
    let words = read_with_retry(chain, &call, config.retry).await?;
    bool_at(&words, 0, "isApprovedForAll")
}

/// The `stakers` mapping entry for (token id, owner):
/// (condition id of last update, amount staked, time of last update,
/// unclaimed rewards).
pub(crate) async fn stake_record<R: ChainReader>(
    chain: &R,
    config: &ClubConfig,
    offering: &Offering,
    owner: Address,
) -> Result<StakeRecord, FlowError> {
    let call = ReadCall::new(offering.staking_contract, "stakers")
        .arg(offering.token_id)
        .arg(owner);
    let words = read_with_retry(chain, &call, config.retry).await?;

    let time = uint_at(&words, 2, "stakers")?;
    Ok(StakeRecord {
        amount_staked: uint_at(&words, 1, "stakers")?,
        time_of_last_update: u64::try_from(time)
            .map_err(|_| ChainError::Decode("stakers.timeOfLastUpdate".to_string()))?,
        unclaimed_rewards: uint_at(&words, 3, "stakers")?,
    })
}

/// Live reward figure from `getStakeInfoForToken`: (tokens staked, rewards).
pub(crate) async fn live_rewards<R: ChainReader>(
    chain: &R,
    config: &ClubConfig,
    offering: &Offering,
    owner: Address,
) -> Result<U256, FlowError> {
    let call = ReadCall::new(offering.staking_contract, "getStakeInfoForToken")
        .arg(offering.token_id)
        .arg(owner);
    let words = read_with_retry(chain, &call, config.retry).await?;
    uint_at(&words, 1, "getStakeInfoForToken")
}
