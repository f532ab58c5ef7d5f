//! Sequential batch execution with per-item failure isolation.

#[cfg(test)]
#[path = "batch_tests.rs"]
mod tests;

use tracing::warn;

use waapy_protocols::{BatchError, ExecutionItem, InputItem, OperationRequest};

use crate::dispatch::Dispatch;

/// Failure policy for a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Abort on the first failing item.
    #[default]
    FailFast,
    /// Capture per-item failures into their output slots and keep going.
    ContinueOnFailure,
}

/// One resolved batch entry: the operation parameters for the item plus
/// the item's original data and attachments. The logical operation is
/// selected once per batch; only the parameters vary per item.
#[derive(Debug, Clone)]
pub struct BatchItem {
    pub request: OperationRequest,
    pub input: InputItem,
}

/// Run one logical operation across an ordered sequence of input items.
///
/// Items are processed strictly sequentially: later items may depend on
/// side effects of earlier ones, and the host's per-run context is not
/// thread-safe. No call is issued before the previous item's result is
/// resolved.
///
/// With [`FailurePolicy::ContinueOnFailure`] the output always has one
/// slot per input, in input order; failed slots carry the original input
/// data and the paired index. With [`FailurePolicy::FailFast`] the first
/// failure aborts the run, returning a [`BatchError`] tagged with the
/// failing index and carrying the slots completed before it.
pub async fn execute_batch<D: Dispatch>(
    dispatcher: &D,
    items: &[BatchItem],
    policy: FailurePolicy,
) -> Result<Vec<ExecutionItem>, BatchError> {
    let mut output = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        match dispatcher.dispatch(&item.request, &item.input).await {
            Ok(data) => output.push(ExecutionItem::Success { data }),
            Err(error) if policy == FailurePolicy::ContinueOnFailure => {
                warn!(item = index, %error, "item failed, continuing");
                output.push(ExecutionItem::Failure {
                    data: item.input.json.clone(),
                    error,
                    paired_item: index,
                });
            }
            Err(error) => {
                return Err(BatchError {
                    item_index: index,
                    source: error,
                    completed: output,
                });
            }
        }
    }

    Ok(output)
}
