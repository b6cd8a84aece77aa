//! Gemini generateContent wire types.
//!
//! Mirrors the REST `models/{model}:generateContent` schema: a request is
//! a list of contents, each holding text parts; the response carries ranked
//! candidates with the same content shape. Only the fields Quill touches
//! are modeled.

use serde::{Deserialize, Serialize};

use crate::Platform;

// ============================================================================
// Request
// ============================================================================

#[derive(Serialize, Debug)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Part {
    pub text: String,
}

impl GenerateContentRequest {
    /// Single-turn request: one content with one text part.
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

// ============================================================================
// Response
// ============================================================================

#[derive(Deserialize, Debug)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
pub struct Candidate {
    pub content: Content,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, if the response has one.
    pub fn text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        if candidate.content.parts.is_empty() {
            return None;
        }
        Some(
            candidate
                .content
                .parts
                .iter()
                .map(|p| p.text.as_str())
                .collect(),
        )
    }
}

// ============================================================================
// Prompt Template
// ============================================================================

/// Wraps the caller's prompt in the fixed social-media-manager instruction.
/// Compliance (tone, hashtags, length) is entirely the model's job; the
/// returned text is never post-validated.
pub fn build_prompt(prompt: &str, platform: Platform) -> String {
    format!(
        "You are a professional social media manager. Generate engaging content for {} based on the following prompt.\n\
         Follow these guidelines:\n\
         - Keep the tone conversational and authentic\n\
         - Include relevant emojis where appropriate\n\
         - Use hashtags strategically (2-3 relevant hashtags)\n\
         - Keep it concise and impactful (under 280 characters for Twitter)\n\
         - Ensure it's engaging and encourages interaction\n\n\
         Prompt: {}",
        platform.as_str(),
        prompt
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_to_contents_parts_shape() {
        let request = GenerateContentRequest::from_prompt("write a post");
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(
            json,
            r#"{"contents":[{"parts":[{"text":"write a post"}]}]}"#
        );
    }

    #[test]
    fn test_response_text_concatenates_first_candidate_parts() {
        let json = r#"{"candidates":[{"content":{"parts":[{"text":"Hello "},{"text":"world"}]}}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text().as_deref(), Some("Hello world"));
    }

    #[test]
    fn test_response_text_uses_only_first_candidate() {
        let json = r#"{"candidates":[
            {"content":{"parts":[{"text":"first"}]}},
            {"content":{"parts":[{"text":"second"}]}}
        ]}"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text().as_deref(), Some("first"));
    }

    #[test]
    fn test_response_without_candidates_has_no_text() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.text(), None);

        let empty: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert_eq!(empty.text(), None);
    }

    #[test]
    fn test_response_with_empty_parts_has_no_text() {
        let json = r#"{"candidates":[{"content":{"parts":[]}}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text(), None);
    }

    #[test]
    fn test_build_prompt_includes_platform_and_caller_prompt() {
        let prompt = build_prompt("launch day!", Platform::Twitter);
        assert!(prompt.contains("Generate engaging content for twitter"));
        assert!(prompt.ends_with("Prompt: launch day!"));
    }

    #[test]
    fn test_build_prompt_carries_guidelines() {
        let prompt = build_prompt("anything", Platform::General);
        assert!(prompt.contains("professional social media manager"));
        assert!(prompt.contains("2-3 relevant hashtags"));
        assert!(prompt.contains("under 280 characters"));
    }
}
