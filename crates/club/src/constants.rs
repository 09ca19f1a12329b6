// club/constants.rs

// external dependencies
use alloy_primitives::{address, Address};

/// All club balances are 18-decimal fixed point.
pub const DECIMALS: u32 = 18;

// PulseChain mainnet deployment
pub const CHAIN_ID: u64 = 369;
pub const RPC_URL: &str = "https://rpc.pulsechain.com";

// NFT drop contracts
pub const MEMBER_DROP: Address = address!("dbda9cafd6f19cb11e23158686e6fc146e5e37be");
pub const VIP_DROP: Address = address!("da4963194fec2522337e17406c2957b5b0d11d21");

// Staking contracts
pub const MEMBER_STAKE: Address = address!("ca440387be079f23ec56b40c075b712aa2bae69c");
pub const VIP_STAKE: Address = address!("7a9914bbd050ed27b2b692ce6840603e9d38e911");

// Token contracts
pub const SIGMA_TOKEN: Address = address!("4fff88b8d2cae7d0e913198df18b7f6a02850ec5"); // Σ369, pays for claims
pub const PLS_TOKEN: Address = address!("a1077a294dde1b09bb078844df40758a5d0f9a27"); // reward token

pub const CLUB_WALLET: Address = address!("9791609dd38aca2ccaa3ba92526cf6f02ed4b66b");

/// Each drop mints a single edition; both tiers use token id 0.
pub const CLUB_TOKEN_ID: u64 = 0;
