//! Batch input and output records.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DispatchError;

/// One input record of a batch run: its JSON data plus any named binary
/// attachments.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputItem {
    /// The item's data, echoed back into the output slot on failure.
    #[serde(default)]
    pub json: Value,
    /// Binary attachments keyed by property name, resolved by the
    /// `upload` image mode.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub binary: HashMap<String, BinaryPayload>,
}

impl InputItem {
    pub fn from_json(json: Value) -> Self {
        Self {
            json,
            binary: HashMap::new(),
        }
    }

    pub fn with_binary(mut self, property: impl Into<String>, payload: BinaryPayload) -> Self {
        self.binary.insert(property.into(), payload);
        self
    }
}

/// Binary attachment carried by an input item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BinaryPayload {
    /// MIME type, e.g. `image/png`.
    pub mime_type: String,
    /// Raw bytes.
    pub data: Vec<u8>,
}

/// One output slot of a batch run, paired with the input at the same
/// index.
#[derive(Debug)]
pub enum ExecutionItem {
    /// Normalized provider response for the item.
    Success { data: Value },
    /// Captured per-item failure (continue-on-failure mode).
    Failure {
        /// The originating input item's data.
        data: Value,
        /// The dispatch failure for this item.
        error: DispatchError,
        /// Index of the input item this slot pairs with.
        paired_item: usize,
    },
}

impl ExecutionItem {
    pub fn is_success(&self) -> bool {
        matches!(self, ExecutionItem::Success { .. })
    }

    /// The slot's data: the provider response on success, the original
    /// input data on failure.
    pub fn data(&self) -> &Value {
        match self {
            ExecutionItem::Success { data } => data,
            ExecutionItem::Failure { data, .. } => data,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_input_item_from_json() {
        let item = InputItem::from_json(json!({ "to": "5511999999999" }));
        assert_eq!(item.json["to"], "5511999999999");
        assert!(item.binary.is_empty());
    }

    #[test]
    fn test_input_item_with_binary() {
        let item = InputItem::from_json(json!({})).with_binary(
            "image",
            BinaryPayload {
                mime_type: "image/png".to_string(),
                data: vec![1, 2, 3],
            },
        );
        assert_eq!(item.binary["image"].mime_type, "image/png");
    }

    #[test]
    fn test_input_item_deserialization_defaults() {
        let item: InputItem = serde_json::from_value(json!({})).unwrap();
        assert!(item.json.is_null());
        assert!(item.binary.is_empty());
    }

    #[test]
    fn test_execution_item_success_data() {
        let item = ExecutionItem::Success {
            data: json!({ "status": "sent" }),
        };
        assert!(item.is_success());
        assert_eq!(item.data()["status"], "sent");
    }

    #[test]
    fn test_execution_item_failure_keeps_input_data() {
        let item = ExecutionItem::Failure {
            data: json!({ "original": true }),
            error: DispatchError::MissingBinaryData("image".to_string()),
            paired_item: 2,
        };
        assert!(!item.is_success());
        assert_eq!(item.data()["original"], true);
        match item {
            ExecutionItem::Failure { paired_item, .. } => assert_eq!(paired_item, 2),
            _ => unreachable!(),
        }
    }
}
