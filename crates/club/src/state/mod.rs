// club/state/mod.rs

pub mod claim;
pub mod staking;

pub use claim::*;
pub use staking::*;
