mod config;
mod general;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kafka_topics::{KafkaSettings, TopicResolver};
use tracing::debug;

use self::config::Config;
use self::general::General;

/// Kafka topic names and client config
#[derive(Parser, Debug)]
#[command(name = "kafka-topics", version, about, long_about = None)]
struct Cli {
    /// Settings file, json or yaml
    #[clap(short, long, env = "KAFKA_TOPICS_CONFIG", default_value = "./config/default.json")]
    config: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Clone, Debug)]
enum Commands {
    /// Print the fulfil topic name
    Fulfil,
    /// Print the get transfers topic name
    GetTransfers,
    /// Print the notification topic name
    Notification,
    General(General),
    Config(Config),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let settings = KafkaSettings::load(&cli.config)
        .with_context(|| format!("failed to load settings from {}", cli.config.display()))?;
    debug!(path = %cli.config.display(), "settings loaded");
    let resolver = TopicResolver::new(settings);

    match cli.command {
        Commands::Fulfil => println!("{}", resolver.fulfil_topic_name()?),
        Commands::GetTransfers => println!("{}", resolver.transfer_by_id_topic_name()?),
        Commands::Notification => println!("{}", resolver.notification_topic_name()?),
        Commands::General(general) => general.general(&resolver)?,
        Commands::Config(config) => config.config(&resolver)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands};

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_config_command() {
        let cli = Cli::try_parse_from([
            "kafka-topics",
            "--config",
            "settings.yaml",
            "config",
            "PRODUCER",
            "TRANSFER",
            "PREPARE",
            "--properties",
        ])
        .unwrap();
        assert_eq!(cli.config.to_str(), Some("settings.yaml"));
        assert!(matches!(cli.command, Commands::Config(_)));
    }

    #[test]
    fn rejects_unknown_flow() {
        let result =
            Cli::try_parse_from(["kafka-topics", "config", "producer", "TRANSFER", "PREPARE"]);
        assert!(result.is_err());
    }
}
