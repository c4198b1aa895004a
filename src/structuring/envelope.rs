// Minimal view of the inference service's generateContent response body.
// The reply the engine cares about lives at candidates[0].content.parts[].text;
// everything else in the envelope is ignored.

use serde::Deserialize;

use super::StructuringError;

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<ResponseCandidate>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseCandidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ContentPart>,
}

#[derive(Debug, Deserialize)]
pub struct ContentPart {
    pub text: Option<String>,
}

/// Pull the model reply text out of a raw inference response body.
///
/// Takes the first candidate's first text part. A body that does not parse,
/// has no candidates, or carries only blank text is `EmptyResponse`.
pub fn reply_text(body: &str) -> Result<String, StructuringError> {
    let response: GenerateContentResponse =
        serde_json::from_str(body).map_err(|_| StructuringError::EmptyResponse)?;

    response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().find_map(|part| part.text))
        .filter(|text| !text.trim().is_empty())
        .ok_or(StructuringError::EmptyResponse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_text_from_first_candidate() {
        let body = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "Here is the data: {\"morning\":[]}"}]}}
            ]
        }"#;
        let text = reply_text(body).unwrap();
        assert!(text.starts_with("Here is the data"));
    }

    #[test]
    fn skips_non_text_parts() {
        let body = r#"{
            "candidates": [
                {"content": {"parts": [{"inlineData": {}}, {"text": "{}"}]}}
            ]
        }"#;
        assert_eq!(reply_text(body).unwrap(), "{}");
    }

    #[test]
    fn no_candidates_is_empty_response() {
        assert!(matches!(
            reply_text(r#"{"candidates": []}"#),
            Err(StructuringError::EmptyResponse)
        ));
    }

    #[test]
    fn blank_text_is_empty_response() {
        let body = r#"{"candidates": [{"content": {"parts": [{"text": "   "}]}}]}"#;
        assert!(matches!(
            reply_text(body),
            Err(StructuringError::EmptyResponse)
        ));
    }

    #[test]
    fn unparseable_body_is_empty_response() {
        assert!(matches!(
            reply_text("<html>502 Bad Gateway</html>"),
            Err(StructuringError::EmptyResponse)
        ));
    }
}
