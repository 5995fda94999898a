use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::enums::TopicTemplateName;
use crate::error::{Error, Result};
use crate::logger::{Logger, TracingLogger};
use crate::settings::{ClientSettings, KafkaSettings};
use crate::template::{self, Variables};
use crate::topic::GeneralTopicConf;

/// Resolves topic names and client config from [`KafkaSettings`].
///
/// Rendering failures are logged once through the resolver's [`Logger`] and
/// then returned to the caller. Config lookup failures are returned without
/// logging.
#[derive(Clone, Debug)]
pub struct TopicResolver {
    settings: Arc<KafkaSettings>,
    logger: Logger,
}

/// Client settings paired with the logger the client should use.
#[derive(Clone, Debug, Serialize)]
pub struct KafkaConfig {
    #[serde(flatten)]
    pub settings: ClientSettings,
    #[serde(skip)]
    pub logger: Logger,
}

impl TopicResolver {
    /// Creates a resolver logging through [`TracingLogger`].
    pub fn new(settings: impl Into<Arc<KafkaSettings>>) -> Self {
        TopicResolver::with_logger(settings, TracingLogger::shared())
    }

    pub fn with_logger(settings: impl Into<Arc<KafkaSettings>>, logger: Logger) -> Self {
        TopicResolver {
            settings: settings.into(),
            logger,
        }
    }

    pub fn settings(&self) -> &KafkaSettings {
        &self.settings
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Renders the fulfil topic name.
    pub fn fulfil_topic_name(&self) -> Result<String> {
        self.log_error(self.render(TopicTemplateName::Fulfil, &()))
    }

    /// Renders the get transfer by id topic name.
    pub fn transfer_by_id_topic_name(&self) -> Result<String> {
        self.log_error(self.render(TopicTemplateName::GetTransfers, &()))
    }

    /// Renders the notification topic name.
    pub fn render_notification_topic_name(&self) -> Result<String> {
        self.log_error(self.render(TopicTemplateName::Notification, &()))
    }

    /// Returns the notification topic name.
    ///
    /// Same as [`TopicResolver::render_notification_topic_name`].
    pub fn notification_topic_name(&self) -> Result<String> {
        self.render_notification_topic_name()
    }

    /// Renders the general topic name for a functionality and action.
    ///
    /// Values are substituted as given. Settings keys are conventionally upper
    /// case while topic names are lower case, so callers pass `"transfer"`
    /// here but `"TRANSFER"` to [`TopicResolver::kafka_config`].
    pub fn general_topic_name(&self, functionality: &str, action: &str) -> Result<String> {
        let vars = [("functionality", functionality), ("action", action)];
        self.log_error(self.render(TopicTemplateName::General, &vars))
    }

    /// Looks up client settings at `flow`, `functionality` and `action`.
    ///
    /// Every returned config carries the resolver's logger.
    ///
    /// # Example
    ///
    /// ```
    /// # use kafka_topics::{Flow, KafkaSettings, TopicResolver};
    /// # let settings = KafkaSettings::from_json_str(
    /// #     r#"{ "PRODUCER": { "TRANSFER": { "PREPARE": { "config": {} } } } }"#,
    /// # )?;
    /// let resolver = TopicResolver::new(settings);
    /// let config = resolver.kafka_config(Flow::Producer, "TRANSFER", "PREPARE")?;
    /// assert!(config.settings.rdkafka_conf.is_empty());
    ///
    /// let err = resolver.kafka_config("CONSUMER", "TRANSFER", "PREPARE").unwrap_err();
    /// assert_eq!(
    ///     err.to_string(),
    ///     "No config found for flow='CONSUMER', functionality='TRANSFER', action='PREPARE'",
    /// );
    /// # Ok::<_, kafka_topics::Error>(())
    /// ```
    pub fn kafka_config(
        &self,
        flow: impl AsRef<str>,
        functionality: &str,
        action: &str,
    ) -> Result<KafkaConfig> {
        let flow = flow.as_ref();
        let settings = self
            .settings
            .action_config(flow, functionality, action)
            .ok_or_else(|| Error::config_not_found(flow, functionality, action))?;
        debug!(flow, functionality, action, "resolved kafka config");

        Ok(KafkaConfig {
            settings: settings.clone(),
            logger: Arc::clone(&self.logger),
        })
    }

    /// Creates a general topic config with no key, partition or opaque key.
    ///
    /// Use the [`GeneralTopicConf`] builder methods to attach them.
    pub fn create_general_topic_conf(
        &self,
        functionality: &str,
        action: &str,
    ) -> Result<GeneralTopicConf> {
        let topic_name = self.general_topic_name(functionality, action)?;
        Ok(GeneralTopicConf::new(topic_name))
    }

    fn render<V>(&self, name: TopicTemplateName, vars: &V) -> Result<String>
    where
        V: Variables + ?Sized,
    {
        let template = self
            .settings
            .template(name.as_str())
            .ok_or_else(|| Error::TemplateNotFound(name.to_string()))?;

        template::render(&template.template, vars).map_err(|source| Error::TemplateRender {
            name: name.to_string(),
            source,
        })
    }

    fn log_error<T>(&self, result: Result<T>) -> Result<T> {
        if let Err(err) = &result {
            self.logger.error(&err.to_string());
        }
        result
    }
}

impl KafkaConfig {
    pub fn into_parts(self) -> (ClientSettings, Logger) {
        (self.settings, self.logger)
    }
}
