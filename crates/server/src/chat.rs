//! Chat model collaborator: prompt templates and the Groq completions client.
//!
//! Two operations: splitting a job description into focused sub-questions,
//! and generating an answer grounded in retrieved resumes. Both run against
//! an OpenAI-compatible chat-completions endpoint.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Default base URL of the Groq OpenAI-compatible API.
pub const DEFAULT_CHAT_API_URL: &str = "https://api.groq.com/openai/v1";

/// Default chat model.
pub const DEFAULT_CHAT_MODEL: &str = "llama3-8b-8192";

/// Prompt class selecting the job-description answer template.
pub const PROMPT_CLASS_JOB_DESCRIPTION: &str = "retrieve_applicant_jd";

const SUBQUESTION_SYSTEM_PROMPT: &str = "\
You are an expert in talent acquisition. Separate this job description into 3-4 more focused aspects for efficient resume retrieval.
Make sure every single relevant aspect of the query is covered in at least one query. You may choose to remove irrelevant information that doesn't contribute to finding resumes.
Only use the information provided in the initial query. Do not make up any requirements of your own.
Put each result in one line, separated by a linebreak.";

const JOB_DESCRIPTION_SYSTEM_PROMPT: &str = "\
You are an expert in talent acquisition who helps determine the best candidate among multiple suitable resumes.
Use the following pieces of context to determine the best resume given a job description.
Provide detailed explanations for the best resume choice.
Use the applicant ID to refer to resumes in your response.
If you don't know the answer, just say that you don't know; do not try to make up an answer.";

const SCREENING_SYSTEM_PROMPT: &str = "\
You are an expert in talent acquisition who helps analyze resumes for effective resume screening.
Use the provided context and chat history to answer the question.
Do not mention that chat history is provided in your response.
If you don't know the answer, just say that you don't know; do not try to make up an answer.";

/// One prior exchange in the conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub question: String,
    pub answer: String,
}

/// Which answer template to use for `/generate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptMode {
    /// First turn: pick the best resume for a job description.
    JobDescription,
    /// Follow-up turns: answer using retrieved context and chat history.
    Screening,
}

impl PromptMode {
    /// Maps a request's prompt class string to a mode.
    ///
    /// Only `retrieve_applicant_jd` selects the job-description template;
    /// any other value falls through to screening.
    pub fn from_class(prompt_cls: &str) -> Self {
        if prompt_cls == PROMPT_CLASS_JOB_DESCRIPTION {
            PromptMode::JobDescription
        } else {
            PromptMode::Screening
        }
    }
}

/// Errors from a chat model call.
///
/// Transport and API failures are kept distinct from a well-formed response
/// that carried no usable content, so callers can tell "model returned
/// nothing" apart from "network/auth error".
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    /// Transport-level failure reaching the completions API.
    #[error("chat completions request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success HTTP status.
    #[error("chat completions API returned status {status}: {body}")]
    Api { status: u16, body: String },

    /// The model answered but produced no usable output.
    #[error("chat model returned empty output")]
    EmptyOutput,
}

/// The LLM collaborator: sub-question generation and answer generation.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Splits a job description into 3-4 focused sub-questions, one per line.
    async fn generate_subquestions(&self, description: &str) -> Result<Vec<String>, ChatError>;

    /// Generates an answer grounded in the retrieved resume blocks.
    async fn generate_answer(
        &self,
        question: &str,
        docs: &[String],
        history: &[ChatTurn],
        mode: PromptMode,
        subquestions: &[String],
    ) -> Result<String, ChatError>;
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: [Message<'a>; 2],
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Client for an OpenAI-compatible chat-completions API (Groq by default).
pub struct GroqChat {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GroqChat {
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    async fn complete(&self, system: &str, user: &str) -> Result<String, ChatError> {
        let request = CompletionRequest {
            model: &self.model,
            messages: [
                Message {
                    role: "system",
                    content: system,
                },
                Message {
                    role: "user",
                    content: user,
                },
            ],
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: CompletionResponse = response.json().await?;
        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(ChatError::EmptyOutput)
    }
}

#[async_trait]
impl ChatModel for GroqChat {
    async fn generate_subquestions(&self, description: &str) -> Result<Vec<String>, ChatError> {
        let user = format!(
            "Generate 3 to 4 distinct sub-queries based on this initial job description:\n{description}"
        );
        let content = self.complete(SUBQUESTION_SYSTEM_PROMPT, &user).await?;
        let subquestions = split_subquestions(&content);
        if subquestions.is_empty() {
            return Err(ChatError::EmptyOutput);
        }
        Ok(subquestions)
    }

    async fn generate_answer(
        &self,
        question: &str,
        docs: &[String],
        history: &[ChatTurn],
        mode: PromptMode,
        subquestions: &[String],
    ) -> Result<String, ChatError> {
        let context = docs.join("\n\n");
        let (system, user) = match mode {
            PromptMode::JobDescription => {
                let job = subquestions.join("\n\n");
                (
                    JOB_DESCRIPTION_SYSTEM_PROMPT,
                    format!("Context:\n{context}\nJob Requirement:\n{job}\n\nQuestion:\n{question}"),
                )
            }
            PromptMode::Screening => (
                SCREENING_SYSTEM_PROMPT,
                format!(
                    "Chat History:\n{}\n\nContext:\n{context}\n\nQuestion:\n{question}",
                    render_history(history)
                ),
            ),
        };
        self.complete(system, &user).await
    }
}

/// One sub-question per non-blank line, whitespace trimmed.
fn split_subquestions(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn render_history(history: &[ChatTurn]) -> String {
    history
        .iter()
        .map(|turn| format!("Q: {}\nA: {}", turn.question, turn.answer))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_mode_from_class() {
        assert_eq!(
            PromptMode::from_class("retrieve_applicant_jd"),
            PromptMode::JobDescription
        );
        assert_eq!(
            PromptMode::from_class("your_alternate_prompt_cls_value"),
            PromptMode::Screening
        );
        assert_eq!(PromptMode::from_class(""), PromptMode::Screening);
    }

    #[test]
    fn test_split_subquestions_strips_blank_lines() {
        let content = "  Rust experience \n\n5+ years backend\n   \nTeam leadership\n";
        assert_eq!(
            split_subquestions(content),
            vec!["Rust experience", "5+ years backend", "Team leadership"]
        );
    }

    #[test]
    fn test_split_subquestions_all_blank() {
        assert!(split_subquestions(" \n\n\t\n").is_empty());
    }

    #[test]
    fn test_render_history() {
        let history = vec![
            ChatTurn {
                question: "Who fits best?".to_string(),
                answer: "Applicant ID 3".to_string(),
            },
            ChatTurn {
                question: "Why?".to_string(),
                answer: "Strong Rust background".to_string(),
            },
        ];
        let rendered = render_history(&history);
        assert_eq!(
            rendered,
            "Q: Who fits best?\nA: Applicant ID 3\nQ: Why?\nA: Strong Rust background"
        );
    }
}
