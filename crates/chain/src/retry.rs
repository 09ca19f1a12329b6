// chain/retry.rs

// external dependencies
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

// local dependencies
use crate::{call::ReadCall, call::Word, errors::ChainError, reader::ChainReader};

/// Automatic retry for transient read failures: a fixed number of retries
/// after a failed first attempt, with a fixed backoff between attempts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Retries after the initial attempt; 3 retries means 4 attempts total.
    pub retries: u32,
    pub backoff_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            retries: 3,
            backoff_ms: 1000,
        }
    }
}

/// Run a read query under the given retry policy. Writes are never retried;
/// resubmitting a transaction is not idempotent.
pub async fn read_with_retry<R: ChainReader>(
    reader: &R,
    call: &ReadCall,
    policy: RetryPolicy,
) -> Result<Vec<Word>, ChainError> {
    let attempts = policy.retries.saturating_add(1);
    let mut last = ChainError::Rpc(format!("{} not attempted", call.function));

    for attempt in 0..attempts {
        if attempt > 0 {
            tokio::time::sleep(Duration::from_millis(policy.backoff_ms)).await;
        }
        match reader.read(call).await {
            Ok(words) => return Ok(words),
            Err(err) => {
                warn!(
                    function = call.function,
                    contract = %call.contract,
                    attempt,
                    error = %err,
                    "read query failed"
                );
                last = err;
            }
        }
    }

    Err(last)
}
