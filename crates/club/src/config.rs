// club/config.rs

// external dependencies
use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

// local dependencies
use club_chain::RetryPolicy;
use crate::{constants, utils::amount};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tier {
    Member,
    Vip,
}

/// Static description of one claimable membership tier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offering {
    pub tier: Tier,
    pub name: String,
    /// Edition-drop contract holding the membership NFT.
    pub contract: Address,
    /// Staking contract paired with this tier.
    pub staking_contract: Address,
    pub token_id: u64,
    /// Claim price in Σ369 base units. Configured as a decimal string.
    #[serde(with = "u256_dec")]
    pub price: U256,
    /// PLS accrued per second per staked NFT. Display string; reward math
    /// itself lives in the staking contract.
    pub reward_rate: String,
}

/// Everything the flows need about a deployment: RPC endpoint, payment token,
/// read-retry policy and the offering table. Passed in at construction; the
/// flows hold no global state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubConfig {
    pub rpc_url: String,
    pub chain_id: u64,
    /// Σ369 token that pays for claims.
    pub token: Address,
    #[serde(default)]
    pub retry: RetryPolicy,
    pub offerings: Vec<Offering>,
}

impl ClubConfig {
    /// The PulseChain mainnet deployment of the club contracts.
    pub fn pulsechain() -> Self {
        Self {
            rpc_url: constants::RPC_URL.to_string(),
            chain_id: constants::CHAIN_ID,
            token: constants::SIGMA_TOKEN,
            retry: RetryPolicy::default(),
            offerings: vec![
                Offering {
                    tier: Tier::Member,
                    name: "Club Member NFT".to_string(),
                    contract: constants::MEMBER_DROP,
                    staking_contract: constants::MEMBER_STAKE,
                    token_id: constants::CLUB_TOKEN_ID,
                    price: amount::units(369_000),
                    reward_rate: "0.369".to_string(),
                },
                Offering {
                    tier: Tier::Vip,
                    name: "Club VIP NFT".to_string(),
                    contract: constants::VIP_DROP,
                    staking_contract: constants::VIP_STAKE,
                    token_id: constants::CLUB_TOKEN_ID,
                    price: amount::units(3_690_000),
                    reward_rate: "0.963".to_string(),
                },
            ],
        }
    }

    pub fn offering(&self, tier: Tier) -> Option<&Offering> {
        self.offerings.iter().find(|o| o.tier == tier)
    }
}

/// Prices are configured as base-unit decimal strings
/// ("369000000000000000000000"), not JSON numbers or hex.
mod u256_dec {
    use alloy_primitives::U256;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<U256, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
