//! Prompt construction for the commit message draft.

use crate::git::diff::ChangeSet;
use crate::llm::{ChatMessage, ChatRequest};

/// Fixed instruction set sent as the system message.
///
/// Kept as a named constant so tests can assert exact prompt content without
/// coupling to unrelated formatting edits.
pub const SYSTEM_PROMPT: &str = "You are a git commit message writer. Generate a SINGLE commit message that summarizes all changes. Format the message as follows:\n\n\
<type>: <subject>\n\n\
- <change 1>\n\
- <change 2>\n\
- <change 3>\n\n\
Rules:\n\
- Create ONE commit message that encompasses all changes\n\
- First line must be under 50 chars and follow conventional commit format\n\
- Each bullet point should start with a capital letter and be a single line\n\
- Bullet points should be clear and concise\n\
- Use types: feat, fix, docs, style, refactor, test, chore\n\
- Focus on WHAT changed and WHY, not HOW\n\
- If multiple types of changes exist, choose the most significant type";

/// Build the two-message conversation payload.
///
/// Pure: equal inputs produce byte-identical requests. The changeset text is
/// embedded verbatim as the sole user message.
pub fn build_request(model: &str, changes: &ChangeSet) -> ChatRequest {
    ChatRequest {
        model: model.to_string(),
        messages: vec![
            ChatMessage {
                role: "system".to_string(),
                content: SYSTEM_PROMPT.to_string(),
            },
            ChatMessage {
                role: "user".to_string(),
                content: changes.text.clone(),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn changes(text: &str) -> ChangeSet {
        ChangeSet {
            text: text.to_string(),
            stat: None,
            truncated: false,
        }
    }

    #[test]
    fn test_build_request_two_messages_system_first() {
        let request = build_request("gpt-3.5-turbo", &changes("+hello\n"));

        assert_eq!(request.model, "gpt-3.5-turbo");
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, "system");
        assert_eq!(request.messages[0].content, SYSTEM_PROMPT);
        assert_eq!(request.messages[1].role, "user");
    }

    #[test]
    fn test_build_request_embeds_diff_verbatim() {
        let text = "diff --git a/f.txt b/f.txt\n+hello\n";
        let request = build_request("gpt-3.5-turbo", &changes(text));
        assert_eq!(request.messages[1].content, text);
    }

    #[test]
    fn test_build_request_is_pure() {
        let input = changes("+same\n");
        let a = build_request("gpt-3.5-turbo", &input);
        let b = build_request("gpt-3.5-turbo", &input);
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_system_prompt_contract() {
        assert!(SYSTEM_PROMPT.starts_with("You are a git commit message writer."));
        assert!(SYSTEM_PROMPT.contains("<type>: <subject>"));
        assert!(SYSTEM_PROMPT.contains("feat, fix, docs, style, refactor, test, chore"));
        assert!(SYSTEM_PROMPT.contains("First line must be under 50 chars"));
    }

    #[test]
    fn test_request_serializes_to_expected_wire_shape() {
        let request = build_request("gpt-3.5-turbo", &changes("+x\n"));
        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&request).unwrap()).unwrap();

        assert_eq!(json["model"], "gpt-3.5-turbo");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "+x\n");
    }
}
