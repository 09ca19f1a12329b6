// chain/test.rs

use alloy_primitives::{Address, U256};

use crate::{
    read_with_retry, ChainError, ChainReader, ChainWriter, MockChain, ReadCall, RetryPolicy,
    TxStatus, Word, WriteCall,
};

fn contract() -> Address {
    Address::repeat_byte(0xab)
}

fn fast_retry(retries: u32) -> RetryPolicy {
    RetryPolicy {
        retries,
        backoff_ms: 1,
    }
}

#[tokio::test]
async fn read_returns_scripted_value() {
    let chain = MockChain::new();
    chain.set_read(contract(), "balanceOf", vec![Word::Uint(U256::from(7))]);

    let call = ReadCall::new(contract(), "balanceOf").arg(Address::ZERO);
    let words = chain.read(&call).await.unwrap();

    assert_eq!(words[0].as_uint(), Some(U256::from(7)));
    assert_eq!(chain.read_count(contract(), "balanceOf"), 1);
}

#[tokio::test]
async fn retry_recovers_within_attempt_budget() {
    let chain = MockChain::new();
    chain.set_read(contract(), "allowance", vec![Word::Uint(U256::from(1))]);
    chain.fail_reads(contract(), "allowance", 3);

    let call = ReadCall::new(contract(), "allowance");
    let words = read_with_retry(&chain, &call, fast_retry(3)).await.unwrap();

    // Three failures burn the retries, the fourth attempt succeeds
    assert_eq!(words[0].as_uint(), Some(U256::from(1)));
    assert_eq!(chain.read_count(contract(), "allowance"), 4);
}

#[tokio::test]
async fn retry_surfaces_error_past_budget() {
    let chain = MockChain::new();
    chain.set_read(contract(), "allowance", vec![Word::Uint(U256::ZERO)]);
    chain.fail_reads(contract(), "allowance", 9);

    let call = ReadCall::new(contract(), "allowance");
    let err = read_with_retry(&chain, &call, fast_retry(3))
        .await
        .unwrap_err();

    assert!(matches!(err, ChainError::Rpc(_)));
    // 1 attempt + 3 retries
    assert_eq!(chain.read_count(contract(), "allowance"), 4);
}

#[tokio::test]
async fn receipt_defaults_to_success() {
    let chain = MockChain::new();
    let call = WriteCall::new(contract(), "approve").arg(U256::from(1));

    let handle = chain.submit(&call).await.unwrap();
    let receipt = chain.receipt(handle).await.unwrap();

    assert!(receipt.is_success());
    assert_eq!(chain.write_count("approve"), 1);
}

#[tokio::test]
async fn scripted_revert_is_observed() {
    let chain = MockChain::new();
    chain.set_receipt(
        "claim",
        TxStatus::Reverted {
            reason: "execution reverted".to_string(),
        },
    );

    let handle = chain
        .submit(&WriteCall::new(contract(), "claim"))
        .await
        .unwrap();
    let receipt = chain.receipt(handle).await.unwrap();

    assert!(!receipt.is_success());
}

#[tokio::test]
async fn rejected_write_never_issues_a_handle() {
    let chain = MockChain::new();
    chain.reject_write("approve", "User rejected the request");

    let err = chain
        .submit(&WriteCall::new(contract(), "approve"))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ChainError::Rejected("User rejected the request".to_string())
    );
    assert!(chain.writes().is_empty());
}

#[tokio::test]
async fn unknown_handle_is_an_error() {
    let chain = MockChain::new();
    let err = chain.receipt(crate::TxHandle(42)).await.unwrap_err();
    assert_eq!(err, ChainError::UnknownHandle);
}
