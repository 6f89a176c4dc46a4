use serde::{Deserialize, Serialize};
use std::env;

use crate::advisory::{AdvisoryError, Result};
use crate::goals::Difficulty;

/// One suggested sub-step from the task breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownItem {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<Difficulty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
}

/// Configuration for the hosted language-model endpoint, resolved from the
/// environment so the embedding application never hands secrets through
/// the frontend.
#[derive(Debug, Clone)]
pub struct AdvisoryConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

impl AdvisoryConfig {
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("HORIZON_AI_API_KEY")
            .map_err(|_| AdvisoryError::Config("HORIZON_AI_API_KEY is not set".to_string()))?;

        let base_url = env::var("HORIZON_AI_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1".to_string());

        let model =
            env::var("HORIZON_AI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());

        Ok(AdvisoryConfig {
            base_url,
            api_key,
            model,
        })
    }
}
