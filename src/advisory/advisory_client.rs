use async_trait::async_trait;
use log::debug;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

use crate::advisory::advisory_model::{AdvisoryConfig, BreakdownItem};
use crate::advisory::advisory_traits::AdvisoryClientTrait;
use crate::advisory::{AdvisoryError, Result};

/// Hard cap on breakdown suggestions, whatever the model returns
const MAX_BREAKDOWN_ITEMS: usize = 8;

/// Advisory client backed by an OpenAI-compatible chat-completions
/// endpoint. Stateless per call; a slow response simply arrives late.
pub struct HttpAdvisoryClient {
    config: AdvisoryConfig,
    http: reqwest::Client,
}

impl HttpAdvisoryClient {
    pub fn new(config: AdvisoryConfig) -> Self {
        HttpAdvisoryClient {
            config,
            http: reqwest::Client::new(),
        }
    }

    pub fn from_env() -> Result<Self> {
        Ok(Self::new(AdvisoryConfig::from_env()?))
    }

    async fn complete(&self, system: &str, user: &str) -> Result<String> {
        let url = format!("{}/chat/completions", self.config.base_url);
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature: 0.7,
        };

        debug!("Advisory request to {} ({})", url, self.config.model);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<ChatResponse>()
            .await?;

        let content = response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| AdvisoryError::Parse("response has no choices".to_string()))?;

        Ok(content.trim().to_string())
    }
}

#[async_trait]
impl AdvisoryClientTrait for HttpAdvisoryClient {
    async fn breakdown_task(
        &self,
        title: &str,
        description: &str,
    ) -> Result<Vec<BreakdownItem>> {
        let system = "You break personal goals into small actionable sub-steps. \
            Respond with a JSON array only, no prose. Each element is an object \
            with \"text\" (string), \"level\" (\"Easy\", \"Medium\" or \"Hard\") \
            and \"tip\" (string). At most 8 elements.";
        let user = format!("Goal: {}\nDetails: {}", title, description);

        let content = self.complete(system, &user).await?;
        let mut items: Vec<BreakdownItem> = serde_json::from_str(extract_json_array(&content))
            .map_err(|e| AdvisoryError::Parse(e.to_string()))?;
        items.truncate(MAX_BREAKDOWN_ITEMS);
        Ok(items)
    }

    async fn suggest_description(&self, title: &str, current: Option<&str>) -> Result<String> {
        let system = "You write one short, motivating description for a personal \
            goal. Two sentences at most, plain text.";
        let user = match current {
            Some(text) if !text.trim().is_empty() => {
                format!("Goal: {}\nImprove this draft: {}", title, text)
            }
            _ => format!("Goal: {}", title),
        };
        self.complete(system, &user).await
    }

    async fn daily_greeting(&self, name: &str) -> Result<String> {
        let system = "You write one warm, short daily greeting for a goal-tracking \
            app. One sentence, plain text, no quotes.";
        let user = format!("The user's name is {}.", name);
        self.complete(system, &user).await
    }

    async fn friendly_nudge(&self, goal_title: &str, area: &str) -> Result<String> {
        let system = "You write one gentle, encouraging reminder about a goal the \
            user has not touched in a while. One sentence, plain text, no guilt.";
        let user = format!("Goal: {} (life area: {})", goal_title, area);
        self.complete(system, &user).await
    }
}

/// Models wrap JSON in code fences often enough that we cut down to the
/// outermost array before parsing.
fn extract_json_array(content: &str) -> &str {
    match (content.find('['), content.rfind(']')) {
        (Some(start), Some(end)) if start < end => &content[start..=end],
        _ => content,
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// Canned advisory client for tests: returns fixed text, or fails every
/// call when `failing` is set. Counts nudge calls so scan idempotence can
/// be asserted.
pub struct FakeAdvisoryClient {
    failing: bool,
    nudge_calls: Mutex<usize>,
}

impl FakeAdvisoryClient {
    pub fn new() -> Self {
        FakeAdvisoryClient {
            failing: false,
            nudge_calls: Mutex::new(0),
        }
    }

    pub fn failing() -> Self {
        FakeAdvisoryClient {
            failing: true,
            nudge_calls: Mutex::new(0),
        }
    }

    pub fn nudge_calls(&self) -> usize {
        *self.nudge_calls.lock().unwrap()
    }

    fn check(&self) -> Result<()> {
        if self.failing {
            Err(AdvisoryError::Config("fake client set to fail".to_string()))
        } else {
            Ok(())
        }
    }
}

impl Default for FakeAdvisoryClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AdvisoryClientTrait for FakeAdvisoryClient {
    async fn breakdown_task(
        &self,
        title: &str,
        _description: &str,
    ) -> Result<Vec<BreakdownItem>> {
        self.check()?;
        Ok(vec![
            BreakdownItem {
                text: format!("Plan the first step of {}", title),
                level: Some(crate::goals::Difficulty::Easy),
                tip: Some("Start small".to_string()),
            },
            BreakdownItem {
                text: format!("Do one focused session on {}", title),
                level: Some(crate::goals::Difficulty::Medium),
                tip: None,
            },
        ])
    }

    async fn suggest_description(&self, title: &str, _current: Option<&str>) -> Result<String> {
        self.check()?;
        Ok(format!("A clear plan for {}.", title))
    }

    async fn daily_greeting(&self, name: &str) -> Result<String> {
        self.check()?;
        Ok(format!("Good to see you, {}!", name))
    }

    async fn friendly_nudge(&self, goal_title: &str, _area: &str) -> Result<String> {
        self.check()?;
        *self.nudge_calls.lock().unwrap() += 1;
        Ok(format!("How about a small step on \"{}\" today?", goal_title))
    }
}
