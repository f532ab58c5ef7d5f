use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use waapy_protocols::{
    ClientError, DispatchError, ExecutionItem, InputItem, OperationRequest,
};

use super::{execute_batch, BatchItem, FailurePolicy};
use crate::dispatch::Dispatch;

/// Fails any item whose data carries `"fail": true`; records call order.
struct ScriptedDispatcher {
    calls: Mutex<Vec<Value>>,
}

impl ScriptedDispatcher {
    fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Dispatch for ScriptedDispatcher {
    async fn dispatch(
        &self,
        _request: &OperationRequest,
        item: &InputItem,
    ) -> Result<Value, DispatchError> {
        self.calls.lock().unwrap().push(item.json.clone());
        if item.json["fail"] == true {
            return Err(ClientError::Status {
                status: 500,
                body: "boom".to_string(),
            }
            .into());
        }
        Ok(json!({ "echo": item.json["n"] }))
    }
}

fn request() -> OperationRequest {
    OperationRequest::SendText {
        connection_name: "sales".to_string(),
        recipient: "5511999999999".to_string(),
        text: "Hello".to_string(),
    }
}

fn items(specs: &[(i64, bool)]) -> Vec<BatchItem> {
    specs
        .iter()
        .map(|(n, fail)| BatchItem {
            request: request(),
            input: InputItem::from_json(json!({ "n": n, "fail": fail })),
        })
        .collect()
}

#[tokio::test]
async fn test_continue_on_failure_output_pairs_with_input() {
    let dispatcher = ScriptedDispatcher::new();
    let batch = items(&[(0, false), (1, true), (2, false), (3, true)]);

    let output = execute_batch(&dispatcher, &batch, FailurePolicy::ContinueOnFailure)
        .await
        .unwrap();

    assert_eq!(output.len(), batch.len());
    for (i, slot) in output.iter().enumerate() {
        match slot {
            ExecutionItem::Success { data } => {
                assert!(matches!(i, 0 | 2));
                assert_eq!(data["echo"], i as i64);
            }
            ExecutionItem::Failure {
                data, paired_item, ..
            } => {
                assert!(matches!(i, 1 | 3));
                assert_eq!(*paired_item, i);
                // Failure slots echo the original input data.
                assert_eq!(data["n"], i as i64);
            }
        }
    }
}

#[tokio::test]
async fn test_continue_on_failure_processes_every_item() {
    let dispatcher = ScriptedDispatcher::new();
    let batch = items(&[(0, true), (1, true), (2, true)]);

    let output = execute_batch(&dispatcher, &batch, FailurePolicy::ContinueOnFailure)
        .await
        .unwrap();
    assert_eq!(output.len(), 3);
    assert_eq!(dispatcher.call_count(), 3);
    assert!(output.iter().all(|slot| !slot.is_success()));
}

#[tokio::test]
async fn test_fail_fast_aborts_at_failing_index() {
    let dispatcher = ScriptedDispatcher::new();
    let batch = items(&[(0, false), (1, false), (2, true), (3, false)]);

    let error = execute_batch(&dispatcher, &batch, FailurePolicy::FailFast)
        .await
        .unwrap_err();

    assert_eq!(error.item_index, 2);
    assert_eq!(error.completed.len(), 2);
    assert!(error.completed.iter().all(ExecutionItem::is_success));
    // Item 3 must never have been dispatched.
    assert_eq!(dispatcher.call_count(), 3);
    assert!(matches!(
        error.source,
        DispatchError::Client(ClientError::Status { status: 500, .. })
    ));
}

#[tokio::test]
async fn test_fail_fast_on_first_item_has_no_completed_slots() {
    let dispatcher = ScriptedDispatcher::new();
    let batch = items(&[(0, true), (1, false)]);

    let error = execute_batch(&dispatcher, &batch, FailurePolicy::FailFast)
        .await
        .unwrap_err();
    assert_eq!(error.item_index, 0);
    assert!(error.completed.is_empty());
    assert_eq!(dispatcher.call_count(), 1);
}

#[tokio::test]
async fn test_items_dispatched_sequentially_in_input_order() {
    let dispatcher = ScriptedDispatcher::new();
    let batch = items(&[(0, false), (1, false), (2, false)]);

    execute_batch(&dispatcher, &batch, FailurePolicy::FailFast)
        .await
        .unwrap();

    let calls = dispatcher.calls.lock().unwrap();
    let order: Vec<i64> = calls.iter().map(|c| c["n"].as_i64().unwrap()).collect();
    assert_eq!(order, vec![0, 1, 2]);
}

#[tokio::test]
async fn test_empty_batch_yields_empty_output() {
    let dispatcher = ScriptedDispatcher::new();
    let output = execute_batch(&dispatcher, &[], FailurePolicy::FailFast)
        .await
        .unwrap();
    assert!(output.is_empty());
    assert_eq!(dispatcher.call_count(), 0);
}
