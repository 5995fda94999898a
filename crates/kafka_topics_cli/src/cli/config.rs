use anyhow::Result;
use clap::Args;
use kafka_topics::{Flow, TopicResolver};

/// Print producer or consumer client config
#[derive(Args, Clone, Debug)]
pub struct Config {
    /// Flow, `PRODUCER` or `CONSUMER`
    flow: Flow,
    /// Functionality, eg. `TRANSFER`
    functionality: String,
    /// Action, eg. `PREPARE`
    action: String,
    /// Print flattened `key=value` client properties instead of json
    #[clap(long)]
    properties: bool,
}

impl Config {
    pub fn config(self, resolver: &TopicResolver) -> Result<()> {
        println!("{}", self.output(resolver)?);

        Ok(())
    }

    fn output(&self, resolver: &TopicResolver) -> Result<String> {
        let config = resolver.kafka_config(self.flow, &self.functionality, &self.action)?;

        if self.properties {
            let lines: Vec<_> = config
                .settings
                .client_properties()
                .into_iter()
                .map(|(key, value)| format!("{key}={value}"))
                .collect();
            Ok(lines.join("\n"))
        } else {
            Ok(serde_json::to_string_pretty(&config)?)
        }
    }
}
