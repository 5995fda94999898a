use std::{fmt, str};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Notification message type.
pub const NOTIFICATION: &str = "notification";

/// Event message type.
pub const EVENT: &str = "event";

/// Which side of a topic the client config is for.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Flow {
    /// Producer config.
    Producer,
    /// Consumer config.
    Consumer,
}

impl Flow {
    /// Returns the settings key for the flow.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Flow::Producer => "PRODUCER",
            Flow::Consumer => "CONSUMER",
        }
    }
}

impl AsRef<str> for Flow {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Flow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl str::FromStr for Flow {
    type Err = UnknownFlow;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PRODUCER" => Ok(Flow::Producer),
            "CONSUMER" => Ok(Flow::Consumer),
            _ => Err(UnknownFlow(s.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown flow '{0}', expected 'PRODUCER' or 'CONSUMER'")]
pub struct UnknownFlow(pub String);

/// Named topic templates in the settings.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum TopicTemplateName {
    /// `FULFIL_TOPIC_TEMPLATE`
    Fulfil,
    /// `GET_TRANSFERS_TOPIC_TEMPLATE`
    GetTransfers,
    /// `NOTIFICATION_TOPIC_TEMPLATE`
    Notification,
    /// `GENERAL_TOPIC_TEMPLATE`, with `functionality` and `action` variables.
    General,
}

impl TopicTemplateName {
    pub const fn as_str(&self) -> &'static str {
        match self {
            TopicTemplateName::Fulfil => "FULFIL_TOPIC_TEMPLATE",
            TopicTemplateName::GetTransfers => "GET_TRANSFERS_TOPIC_TEMPLATE",
            TopicTemplateName::Notification => "NOTIFICATION_TOPIC_TEMPLATE",
            TopicTemplateName::General => "GENERAL_TOPIC_TEMPLATE",
        }
    }
}

impl fmt::Display for TopicTemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome attached to a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct State {
    pub status: &'static str,
    pub code: u32,
    pub description: &'static str,
}

impl State {
    pub const SUCCESS: State = State {
        status: "success",
        code: 0,
        description: "action successful",
    };

    pub const FAILURE: State = State {
        status: "error",
        code: 999,
        description: "action failed",
    };
}

#[cfg(test)]
mod tests {
    use super::{Flow, State, TopicTemplateName, UnknownFlow};

    #[test]
    fn flow_from_str() {
        assert_eq!("PRODUCER".parse(), Ok(Flow::Producer));
        assert_eq!("CONSUMER".parse(), Ok(Flow::Consumer));
        assert_eq!(
            "producer".parse::<Flow>(),
            Err(UnknownFlow("producer".to_string()))
        );
    }

    #[test]
    fn flow_serde() {
        assert_eq!(
            serde_json::to_string(&Flow::Producer).unwrap(),
            r#""PRODUCER""#
        );
        assert_eq!(
            serde_json::from_str::<Flow>(r#""CONSUMER""#).unwrap(),
            Flow::Consumer
        );
    }

    #[test]
    fn template_names() {
        assert_eq!(TopicTemplateName::Fulfil.to_string(), "FULFIL_TOPIC_TEMPLATE");
        assert_eq!(
            TopicTemplateName::GetTransfers.as_str(),
            "GET_TRANSFERS_TOPIC_TEMPLATE"
        );
    }

    #[test]
    fn state_json() {
        assert_eq!(
            serde_json::to_value(State::SUCCESS).unwrap(),
            serde_json::json!({
                "status": "success",
                "code": 0,
                "description": "action successful",
            })
        );
        assert_eq!(State::FAILURE.code, 999);
        assert_eq!(State::FAILURE.status, "error");
    }
}
