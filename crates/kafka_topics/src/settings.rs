//! Kafka settings: topic templates and per-topic client config.
//!
//! Settings are a tree loaded once at start up:
//!
//! ```json
//! {
//!   "TOPIC_TEMPLATES": {
//!     "GENERAL_TOPIC_TEMPLATE": { "TEMPLATE": "topic-{{functionality}}-{{action}}" }
//!   },
//!   "PRODUCER": {
//!     "TRANSFER": {
//!       "PREPARE": {
//!         "config": {
//!           "options": { "messageCharset": "utf8" },
//!           "rdkafkaConf": { "metadata.broker.list": "localhost:9092" },
//!           "topicConf": { "request.required.acks": "all" }
//!         }
//!       }
//!     }
//!   },
//!   "CONSUMER": {}
//! }
//! ```
//!
//! The tree may also be nested under a top level `KAFKA` key, as it is in a
//! full service config file.
//!
//! Entries below the top level are read leniently. A branch with the wrong
//! shape, eg. `"CONSUMER": { "TRANSFER": "disabled" }`, is kept as an
//! [`Entry::Malformed`] value and only fails the lookups that pass through it.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::enums::Flow;
use crate::error::Result;

/// Key the kafka settings are nested under in a full config document.
pub const KAFKA_SECTION: &str = "KAFKA";

/// Action name to action settings.
pub type ActionMap = BTreeMap<String, Entry<ActionSettings>>;

/// Functionality name to actions.
pub type FunctionalitySettings = BTreeMap<String, Entry<ActionMap>>;

/// The kafka settings tree.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct KafkaSettings {
    #[serde(default)]
    pub topic_templates: BTreeMap<String, Entry<TopicTemplate>>,
    #[serde(default)]
    pub producer: Entry<FunctionalitySettings>,
    #[serde(default)]
    pub consumer: Entry<FunctionalitySettings>,
}

/// A settings entry which either has the expected shape, or is kept as the
/// raw value it was loaded from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entry<T> {
    Valid(T),
    Malformed(Value),
}

impl<T> Entry<T> {
    /// Returns the entry if it has the expected shape.
    pub fn valid(&self) -> Option<&T> {
        match self {
            Entry::Valid(value) => Some(value),
            Entry::Malformed(_) => None,
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Entry::Malformed(_))
    }
}

impl<T: Default> Default for Entry<T> {
    fn default() -> Self {
        Entry::Valid(T::default())
    }
}

/// A named topic template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicTemplate {
    #[serde(rename = "TEMPLATE")]
    pub template: String,
    /// Pattern matching topics rendered from this template. Carried as is.
    #[serde(rename = "REGEX", default, skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,
}

/// Leaf of the client config tree.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<ClientSettings>,
}

/// Producer or consumer client settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientSettings {
    /// Client library options, eg. batch size and poll frequency.
    #[serde(default)]
    pub options: Map<String, Value>,
    /// Global librdkafka properties.
    #[serde(default, rename = "rdkafkaConf")]
    pub rdkafka_conf: Map<String, Value>,
    /// Topic level librdkafka properties.
    #[serde(default, rename = "topicConf")]
    pub topic_conf: Map<String, Value>,
    /// Any other keys in the config, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl KafkaSettings {
    /// Loads settings from a file.
    ///
    /// Files ending in `.yaml` or `.yml` are parsed as yaml, everything else
    /// as json.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let settings = match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Self::from_yaml_str(&contents)?,
            _ => Self::from_json_str(&contents)?,
        };
        debug!(
            path = %path.display(),
            templates = settings.topic_templates.len(),
            "loaded kafka settings"
        );

        Ok(settings)
    }

    /// Parses settings from a json string.
    pub fn from_json_str(s: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(s)?)
    }

    /// Parses settings from a yaml string.
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        Self::from_value(serde_yaml::from_str(s)?)
    }

    /// Builds settings from a json value, unwrapping a top level `KAFKA` key
    /// if present.
    pub fn from_value(mut value: Value) -> Result<Self> {
        if let Some(kafka) = value.get_mut(KAFKA_SECTION).map(Value::take) {
            value = kafka;
        }

        Ok(serde_json::from_value(value)?)
    }

    /// Returns a topic template by name.
    ///
    /// A malformed template entry reads as missing.
    pub fn template(&self, name: &str) -> Option<&TopicTemplate> {
        self.topic_templates.get(name)?.valid()
    }

    /// Returns the functionality settings for a flow, if well formed.
    pub fn flow(&self, flow: Flow) -> Option<&FunctionalitySettings> {
        match flow {
            Flow::Producer => self.producer.valid(),
            Flow::Consumer => self.consumer.valid(),
        }
    }

    /// Looks up client settings at `flow`, `functionality` and `action`.
    ///
    /// Returns `None` if any level is missing or malformed, including an unknown
    /// flow or an action without a `config`.
    pub fn action_config(
        &self,
        flow: &str,
        functionality: &str,
        action: &str,
    ) -> Option<&ClientSettings> {
        let flow = flow.parse::<Flow>().ok()?;
        self.flow(flow)?
            .get(functionality)?
            .valid()?
            .get(action)?
            .valid()?
            .config
            .as_ref()
    }
}

impl ClientSettings {
    /// Global client properties as strings, ready for a kafka client config.
    ///
    /// Booleans and numbers are stringified. Nulls, arrays and objects are
    /// skipped.
    pub fn client_properties(&self) -> BTreeMap<String, String> {
        properties(&self.rdkafka_conf)
    }

    /// Topic properties as strings.
    pub fn topic_properties(&self) -> BTreeMap<String, String> {
        properties(&self.topic_conf)
    }
}

fn properties(map: &Map<String, Value>) -> BTreeMap<String, String> {
    map.iter()
        .filter_map(|(key, value)| {
            let value = match value {
                Value::String(s) => s.clone(),
                Value::Bool(b) => b.to_string(),
                Value::Number(n) => n.to_string(),
                Value::Null | Value::Array(_) | Value::Object(_) => return None,
            };
            Some((key.clone(), value))
        })
        .collect()
}
