use crate::domain::model::CarrierMessage;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LabelError {
    #[error("carrier request failed")]
    Carrier(Vec<CarrierMessage>),

    #[error("API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{message}")]
    Service { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl LabelError {
    /// Normalizes a failure into the message shown to the user: one
    /// `carrier: message` line per entry when per-carrier detail is present,
    /// otherwise the error's own text.
    pub fn user_message(&self) -> String {
        match self {
            LabelError::Carrier(messages) if !messages.is_empty() => messages
                .iter()
                .map(|msg| format!("{}: {}", msg.carrier_name, msg.message))
                .collect::<Vec<_>>()
                .join("\n"),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LabelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carrier_messages_render_one_line_per_entry() {
        let err = LabelError::Carrier(vec![CarrierMessage {
            carrier_name: "UPS".to_string(),
            message: "no service".to_string(),
        }]);

        assert_eq!(err.user_message(), "UPS: no service");
    }

    #[test]
    fn multiple_carrier_messages_are_joined_with_newlines() {
        let err = LabelError::Carrier(vec![
            CarrierMessage {
                carrier_name: "UPS".to_string(),
                message: "no service".to_string(),
            },
            CarrierMessage {
                carrier_name: "fedex".to_string(),
                message: "invalid postal code".to_string(),
            },
        ]);

        assert_eq!(
            err.user_message(),
            "UPS: no service\nfedex: invalid postal code"
        );
    }

    #[test]
    fn generic_failure_uses_its_own_message() {
        let err = LabelError::Service {
            message: "network down".to_string(),
        };

        assert_eq!(err.user_message(), "network down");
    }

    #[test]
    fn empty_carrier_list_falls_back_to_display_text() {
        let err = LabelError::Carrier(vec![]);

        assert_eq!(err.user_message(), "carrier request failed");
    }
}
