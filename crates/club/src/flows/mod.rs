// club/flows/mod.rs

pub mod claim;
pub mod portfolio;
pub mod staking;

mod queries;

pub use claim::*;
pub use portfolio::*;
pub use staking::*;
