use thiserror::Error;

use crate::template::TemplateError;

/// Result type defaulting to [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error enum.
#[derive(Debug, Error)]
pub enum Error {
    /// The named topic template is absent from the settings.
    #[error("topic template '{0}' not found")]
    TemplateNotFound(String),
    /// The named topic template could not be rendered.
    #[error("failed to render topic template '{name}': {source}")]
    TemplateRender {
        /// Template name, eg. `GENERAL_TOPIC_TEMPLATE`.
        name: String,
        /// Underlying renderer error.
        source: TemplateError,
    },
    /// No client config exists at the given flow, functionality and action.
    #[error(
        "No config found for flow='{flow}', functionality='{functionality}', action='{action}'"
    )]
    ConfigNotFound {
        /// Flow key, eg. `PRODUCER`.
        flow: String,
        /// Functionality key, eg. `TRANSFER`.
        functionality: String,
        /// Action key, eg. `PREPARE`.
        action: String,
    },
    /// IO error while reading settings.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Settings were not valid json.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// Settings were not valid yaml.
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Returns whether the error came from rendering a topic template,
    /// either because it was missing or malformed.
    pub fn is_template_render(&self) -> bool {
        matches!(
            self,
            Error::TemplateNotFound(_) | Error::TemplateRender { .. }
        )
    }

    pub(crate) fn config_not_found(flow: &str, functionality: &str, action: &str) -> Self {
        Error::ConfigNotFound {
            flow: flow.to_string(),
            functionality: functionality.to_string(),
            action: action.to_string(),
        }
    }
}
