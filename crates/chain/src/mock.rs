// chain/mock.rs

//! Scriptable in-memory chain for flow tests.
//!
//! Reads return the latest value scripted per (contract, function); receipts
//! and submit-time rejections are scripted per function name and default to
//! success. Every submitted write is recorded for assertion.

// external dependencies
use alloy_primitives::Address;
use std::collections::HashMap;
use std::sync::Mutex;

// local dependencies
use crate::{
    call::{ReadCall, Word, WriteCall},
    errors::ChainError,
    reader::ChainReader,
    writer::{ChainWriter, TxHandle, TxReceipt, TxStatus},
};

type ReadKey = (Address, String);

#[derive(Default)]
struct Inner {
    reads: HashMap<ReadKey, Vec<Word>>,
    read_failures: HashMap<ReadKey, u32>,
    read_counts: HashMap<ReadKey, u32>,
    receipts: HashMap<String, TxStatus>,
    rejections: HashMap<String, String>,
    writes: Vec<WriteCall>,
    submitted: HashMap<TxHandle, String>,
    next_handle: u64,
}

#[derive(Default)]
pub struct MockChain {
    inner: Mutex<Inner>,
}

impl MockChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the value returned by reads of `function` on `contract`.
    pub fn set_read(&self, contract: Address, function: &str, words: Vec<Word>) {
        let mut inner = self.inner.lock().unwrap();
        inner.reads.insert((contract, function.to_string()), words);
    }

    /// Make the next `times` reads of `function` on `contract` fail before
    /// the scripted value becomes visible again. Exercises the retry policy.
    pub fn fail_reads(&self, contract: Address, function: &str, times: u32) {
        let mut inner = self.inner.lock().unwrap();
        inner
            .read_failures
            .insert((contract, function.to_string()), times);
    }

    /// Script the mined status of transactions submitted for `function`.
    pub fn set_receipt(&self, function: &str, status: TxStatus) {
        let mut inner = self.inner.lock().unwrap();
        inner.receipts.insert(function.to_string(), status);
    }

    /// Make submits of `function` fail before broadcast with `reason`.
    pub fn reject_write(&self, function: &str, reason: &str) {
        let mut inner = self.inner.lock().unwrap();
        inner
            .rejections
            .insert(function.to_string(), reason.to_string());
    }

    /// Every write submitted so far, in submission order.
    pub fn writes(&self) -> Vec<WriteCall> {
        self.inner.lock().unwrap().writes.clone()
    }

    pub fn write_count(&self, function: &str) -> usize {
        self.inner
            .lock()
            .unwrap()
            .writes
            .iter()
            .filter(|w| w.function == function)
            .count()
    }

    pub fn read_count(&self, contract: Address, function: &str) -> u32 {
        self.inner
            .lock()
            .unwrap()
            .read_counts
            .get(&(contract, function.to_string()))
            .copied()
            .unwrap_or(0)
    }
}

impl ChainReader for MockChain {
    async fn read(&self, call: &ReadCall) -> Result<Vec<Word>, ChainError> {
        let mut inner = self.inner.lock().unwrap();
        let key = (call.contract, call.function.to_string());

        *inner.read_counts.entry(key.clone()).or_default() += 1;

        if let Some(remaining) = inner.read_failures.get_mut(&key) {
            if *remaining > 0 {
                *remaining -= 1;
                return Err(ChainError::Rpc(format!(
                    "simulated outage: {}",
                    call.function
                )));
            }
        }

        inner
            .reads
            .get(&key)
            .cloned()
            .ok_or_else(|| ChainError::Rpc(format!("no scripted value for {}", call.function)))
    }
}

impl ChainWriter for MockChain {
    async fn submit(&self, call: &WriteCall) -> Result<TxHandle, ChainError> {
        let mut inner = self.inner.lock().unwrap();

        if let Some(reason) = inner.rejections.get(call.function) {
            return Err(ChainError::Rejected(reason.clone()));
        }

        inner.next_handle += 1;
        let handle = TxHandle(inner.next_handle);
        inner.writes.push(call.clone());
        inner.submitted.insert(handle, call.function.to_string());
        Ok(handle)
    }

    async fn receipt(&self, handle: TxHandle) -> Result<TxReceipt, ChainError> {
        let inner = self.inner.lock().unwrap();
        let function = inner
            .submitted
            .get(&handle)
            .ok_or(ChainError::UnknownHandle)?;
        let status = inner
            .receipts
            .get(function)
            .cloned()
            .unwrap_or(TxStatus::Success);
        Ok(TxReceipt { handle, status })
    }
}
