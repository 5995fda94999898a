use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A topic to produce to, along with optional message metadata.
///
/// Serializes with camelCase field names and `null` for absent fields:
///
/// ```json
/// { "topicName": "topic-transfer-prepare", "key": null, "partition": null, "opaqueKey": null }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralTopicConf {
    pub topic_name: String,
    /// Message key.
    pub key: Option<Value>,
    /// Partition to produce to.
    pub partition: Option<i32>,
    /// Opaque token passed along to delivery reports.
    pub opaque_key: Option<Value>,
}

impl GeneralTopicConf {
    pub fn new(topic_name: impl Into<String>) -> Self {
        GeneralTopicConf {
            topic_name: topic_name.into(),
            key: None,
            partition: None,
            opaque_key: None,
        }
    }

    pub fn with_key(mut self, key: impl Into<Value>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_partition(mut self, partition: i32) -> Self {
        self.partition = Some(partition);
        self
    }

    pub fn with_opaque_key(mut self, opaque_key: impl Into<Value>) -> Self {
        self.opaque_key = Some(opaque_key.into());
        self
    }
}
