// chain/call.rs

// external dependencies
use alloy_primitives::{Address, U256};

/// A single ABI-level argument or return value.
///
/// The flows only ever pass and receive addresses, unsigned integers and
/// booleans; richer types (arrays, structs) stay behind the concrete binding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Word {
    Address(Address),
    Uint(U256),
    Bool(bool),
}

impl Word {
    pub fn as_address(&self) -> Option<Address> {
        match self {
            Word::Address(a) => Some(*a),
            _ => None,
        }
    }

    pub fn as_uint(&self) -> Option<U256> {
        match self {
            Word::Uint(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Word::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<Address> for Word {
    fn from(a: Address) -> Self {
        Word::Address(a)
    }
}

impl From<U256> for Word {
    fn from(v: U256) -> Self {
        Word::Uint(v)
    }
}

impl From<u64> for Word {
    fn from(v: u64) -> Self {
        Word::Uint(U256::from(v))
    }
}

impl From<bool> for Word {
    fn from(b: bool) -> Self {
        Word::Bool(b)
    }
}

/// A read-only contract query: target, function name and argument tuple.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReadCall {
    pub contract: Address,
    pub function: &'static str,
    pub args: Vec<Word>,
}

impl ReadCall {
    pub fn new(contract: Address, function: &'static str) -> Self {
        Self {
            contract,
            function,
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<Word>) -> Self {
        self.args.push(arg.into());
        self
    }
}

/// A state-changing contract call to be submitted as a transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WriteCall {
    pub contract: Address,
    pub function: &'static str,
    pub args: Vec<Word>,
}

impl WriteCall {
    pub fn new(contract: Address, function: &'static str) -> Self {
        Self {
            contract,
            function,
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<Word>) -> Self {
        self.args.push(arg.into());
        self
    }
}
