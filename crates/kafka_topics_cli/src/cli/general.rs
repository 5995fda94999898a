use anyhow::Result;
use clap::Args;
use kafka_topics::{GeneralTopicConf, TopicResolver};

/// Print a general topic config as json
#[derive(Args, Clone, Debug)]
pub struct General {
    /// Functionality, eg. `transfer`
    functionality: String,
    /// Action, eg. `prepare`
    action: String,
    /// Message key
    #[clap(long)]
    key: Option<String>,
    /// Partition to produce to
    #[clap(long)]
    partition: Option<i32>,
    /// Opaque token passed to delivery reports
    #[clap(long)]
    opaque_key: Option<String>,
}

impl General {
    pub fn general(self, resolver: &TopicResolver) -> Result<()> {
        let conf = self.conf(resolver)?;
        println!("{}", serde_json::to_string_pretty(&conf)?);

        Ok(())
    }

    fn conf(self, resolver: &TopicResolver) -> Result<GeneralTopicConf> {
        let mut conf = resolver.create_general_topic_conf(&self.functionality, &self.action)?;
        if let Some(key) = self.key {
            conf = conf.with_key(key);
        }
        if let Some(partition) = self.partition {
            conf = conf.with_partition(partition);
        }
        if let Some(opaque_key) = self.opaque_key {
            conf = conf.with_opaque_key(opaque_key);
        }

        Ok(conf)
    }
}

#[cfg(test)]
mod tests {
    use kafka_topics::{KafkaSettings, TopicResolver};
    use serde_json::json;

    use super::General;

    fn resolver() -> TopicResolver {
        let settings = KafkaSettings::from_value(json!({
            "TOPIC_TEMPLATES": {
                "GENERAL_TOPIC_TEMPLATE": { "TEMPLATE": "topic-{{functionality}}-{{action}}" }
            }
        }))
        .unwrap();
        TopicResolver::new(settings)
    }

    #[test]
    fn conf_without_metadata() {
        let general = General {
            functionality: "transfer".to_string(),
            action: "prepare".to_string(),
            key: None,
            partition: None,
            opaque_key: None,
        };
        assert_eq!(
            serde_json::to_value(general.conf(&resolver()).unwrap()).unwrap(),
            json!({
                "topicName": "topic-transfer-prepare",
                "key": null,
                "partition": null,
                "opaqueKey": null,
            })
        );
    }

    #[test]
    fn conf_with_metadata() {
        let general = General {
            functionality: "transfer".to_string(),
            action: "prepare".to_string(),
            key: Some("k1".to_string()),
            partition: Some(2),
            opaque_key: Some("op1".to_string()),
        };
        let conf = general.conf(&resolver()).unwrap();
        assert_eq!(conf.key, Some(json!("k1")));
        assert_eq!(conf.partition, Some(2));
        assert_eq!(conf.opaque_key, Some(json!("op1")));
    }

    #[test]
    fn missing_template() {
        let general = General {
            functionality: "transfer".to_string(),
            action: "prepare".to_string(),
            key: None,
            partition: None,
            opaque_key: None,
        };
        let resolver = TopicResolver::new(KafkaSettings::default());
        assert!(general.conf(&resolver).is_err());
    }
}
