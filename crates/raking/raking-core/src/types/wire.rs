//! Wire-level request/response shapes shared with the front-end.
//!
//! Field names are load-bearing: `poll`, `target_weights`, `iterations`,
//! `final_change`, `l1_errors`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Dynamic target form: dimension name → category label → proportion.
pub type TargetWeights = BTreeMap<String, BTreeMap<String, f64>>;

/// Body of a run-IPF request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunIpfRequest {
    pub poll: String,
    pub target_weights: TargetWeights,
}

/// Body of a run-IPF response.
///
/// `advisories` is carried as opaque JSON so this crate does not depend on
/// the engine's advisory type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunIpfResponse {
    pub message: String,
    pub iterations: u32,
    pub final_change: f64,
    pub l1_errors: Vec<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub advisories: Vec<serde_json::Value>,
}

impl RunIpfResponse {
    pub fn completion_message(poll: &str) -> String {
        format!("IPF algorithm completed for {poll}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_parses_frontend_body() {
        let body = r#"{
            "poll": "Ohio Senate Primary",
            "target_weights": {
                "gender": { "Male": 0.48, "Female": 0.52 }
            }
        }"#;
        let request: RunIpfRequest = serde_json::from_str(body).unwrap();
        assert_eq!(request.poll, "Ohio Senate Primary");
        assert_eq!(request.target_weights["gender"]["Female"], 0.52);
    }

    #[test]
    fn response_uses_snake_case_fields() {
        let response = RunIpfResponse {
            message: RunIpfResponse::completion_message("P"),
            iterations: 3,
            final_change: 0.0,
            l1_errors: vec![0.4, 0.1, 0.0, 0.0],
            advisories: vec![],
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["message"], "IPF algorithm completed for P");
        assert_eq!(value["final_change"], 0.0);
        assert_eq!(value["l1_errors"].as_array().unwrap().len(), 4);
        assert!(value.get("advisories").is_none());
    }
}
