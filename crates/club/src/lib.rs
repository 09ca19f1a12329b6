// club/lib.rs - top-level file

pub mod config;
pub mod constants;
pub mod errors;
pub mod flows;
pub mod state;
pub mod utils;


pub use config::{ClubConfig, Offering, Tier};
pub use errors::FlowError;
pub use flows::{ClaimFlow, Portfolio, PortfolioEntry, StakingFlow};
pub use state::{
    ClaimIntent, ClaimPhase, ClaimSnapshot, StakeIntent, StakePhase, StakeRecord, StakingSnapshot,
};
