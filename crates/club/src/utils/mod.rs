// club/utils/mod.rs

pub mod amount;

pub use amount::*;
