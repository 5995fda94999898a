//! Kafka topic names and client config.
//!
//! Topic names are rendered from templates held in [`KafkaSettings`], and
//! producer/consumer client config is looked up by flow, functionality and
//! action.
//!
//! ```
//! use kafka_topics::{KafkaSettings, TopicResolver};
//!
//! let settings = KafkaSettings::from_json_str(r#"{
//!     "TOPIC_TEMPLATES": {
//!         "GENERAL_TOPIC_TEMPLATE": { "TEMPLATE": "topic-{{functionality}}-{{action}}" }
//!     }
//! }"#)?;
//! let resolver = TopicResolver::new(settings);
//!
//! let conf = resolver
//!     .create_general_topic_conf("transfer", "prepare")?
//!     .with_partition(2);
//! assert_eq!(conf.topic_name, "topic-transfer-prepare");
//! assert_eq!(conf.partition, Some(2));
//! # Ok::<_, kafka_topics::Error>(())
//! ```

pub use enums::*;
pub use error::{Error, Result};
pub use logger::{LogSink, Logger, TracingLogger};
pub use resolver::{KafkaConfig, TopicResolver};
pub use settings::{ActionSettings, ClientSettings, KafkaSettings, TopicTemplate};
pub use topic::GeneralTopicConf;

mod enums;
mod error;
mod logger;
mod resolver;
pub mod settings;
pub mod template;
mod topic;
