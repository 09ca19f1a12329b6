// chain/lib.rs - top-level file

pub mod call;
pub mod errors;
pub mod reader;
pub mod retry;
pub mod writer;

#[cfg(feature = "testing")]
pub mod mock;

#[cfg(test)]
mod test;

pub use call::*;
pub use errors::*;
pub use reader::*;
pub use retry::*;
pub use writer::*;

#[cfg(feature = "testing")]
pub use mock::MockChain;

pub use alloy_primitives::{Address, U256};

/// A collaborator that can both query and mutate chain state. Blanket-implemented
/// so any reader + writer pair (a real RPC binding, the mock) satisfies the flows.
pub trait Chain: ChainReader + ChainWriter {}

impl<T: ChainReader + ChainWriter> Chain for T {}
