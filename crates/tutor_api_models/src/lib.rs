//! Wire model for the tutorboard HTTP surface.
//!
//! A single stable JSON schema shared by the server and any future consumer
//! (CLI, tests, alternative frontends). Field names are part of the contract
//! the whiteboard frontend renders from.

use serde::{Deserialize, Serialize};

/// Body of `POST /math_steps`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MathStepsRequest {
    pub equation: String,
}

/// Body of `POST /draw`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DrawRequest {
    pub instruction: String,
}

/// One rendered solving step.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StepJson {
    /// Typeset equation in math-mode delimiters, e.g. `$2x = 6$`.
    pub latex: String,
    /// Mechanical description, e.g. "Divide both sides by 2".
    pub explanation: String,
    /// Student-facing comment from the annotation pass; may be empty.
    pub teaching_comment: String,
}

/// Reply of `POST /math_steps`: either the full ordered sequence or a single
/// descriptor explaining why solving could not proceed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum MathStepsReply {
    Steps { steps: Vec<StepJson> },
    Error { error: String },
}

impl MathStepsReply {
    pub fn steps(steps: Vec<StepJson>) -> Self {
        MathStepsReply::Steps { steps }
    }

    pub fn error(message: impl Into<String>) -> Self {
        MathStepsReply::Error {
            error: message.into(),
        }
    }
}

/// Error descriptor relayed by `POST /draw` when the upstream call fails.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DrawErrorReply {
    pub error: String,
    pub detail: String,
    /// Raw upstream body when one was received, otherwise empty.
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn steps_reply_serializes_with_steps_key() {
        let reply = MathStepsReply::steps(vec![StepJson {
            latex: "$x = 3$".to_string(),
            explanation: "Solution: x = 3".to_string(),
            teaching_comment: String::new(),
        }]);
        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(json["steps"][0]["latex"], "$x = 3$");
        assert_eq!(json["steps"][0]["teaching_comment"], "");
    }

    #[test]
    fn error_reply_serializes_with_error_key() {
        let reply = MathStepsReply::error("missing equals sign");
        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(json["error"], "missing equals sign");
        assert!(json.get("steps").is_none());
    }

    #[test]
    fn draw_error_reply_keeps_the_frontend_contract() {
        let reply = DrawErrorReply {
            error: "upstream API returned error".to_string(),
            detail: "no API key configured".to_string(),
            body: String::new(),
        };
        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(json["error"], "upstream API returned error");
        assert_eq!(json["detail"], "no API key configured");
        assert_eq!(json["body"], "");
    }

    #[test]
    fn untagged_reply_round_trips() {
        let reply = MathStepsReply::error("boom");
        let text = serde_json::to_string(&reply).unwrap();
        let back: MathStepsReply = serde_json::from_str(&text).unwrap();
        assert_eq!(back, reply);
    }
}
