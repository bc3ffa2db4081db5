//! Data model unit tests

use aichatclient::models::chat::*;
use serde_json::json;

#[test]
fn test_completion_request_round_trip() {
    let request = CompletionRequest::new("gpt-3.5-turbo", vec![ChatMessage::user("hi")]);

    let json = serde_json::to_string(&request).unwrap();
    let deserialized: CompletionRequest = serde_json::from_str(&json).unwrap();

    assert_eq!(deserialized.model, "gpt-3.5-turbo");
    assert_eq!(deserialized.messages, vec![ChatMessage::user("hi")]);
}

#[test]
fn test_message_order_is_preserved() {
    let messages = vec![
        ChatMessage::system("You are concise"),
        ChatMessage::user("first question"),
        ChatMessage::assistant("first answer"),
        ChatMessage::user("second question"),
    ];
    let request = CompletionRequest::new("gpt-4", messages.clone());

    let json = serde_json::to_string(&request).unwrap();
    let deserialized: CompletionRequest = serde_json::from_str(&json).unwrap();

    assert_eq!(deserialized.messages, messages);
}

#[test]
fn test_minimal_wire_body() {
    let request = CompletionRequest::new("gpt-3.5-turbo", vec![ChatMessage::user("hi")]);
    let value = serde_json::to_value(&request).unwrap();

    // Unset optional parameters must not appear as keys
    assert_eq!(
        value,
        json!({
            "model": "gpt-3.5-turbo",
            "messages": [{"role": "user", "content": "hi"}],
        })
    );
}

#[test]
fn test_optional_parameters_on_wire() {
    let mut request = CompletionRequest::new("gpt-4", vec![ChatMessage::user("hi")]);
    request.max_tokens = Some(64);
    request.temperature = Some(0.2);

    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["max_tokens"], json!(64));
    assert_eq!(value["temperature"], json!(0.2));
    assert!(value.get("top_p").is_none());
}

#[test]
fn test_completion_response_deserialization() {
    let body = json!({
        "id": "chatcmpl-abc123",
        "object": "chat.completion",
        "created": 1700000000u64,
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": "Hello there"},
            "finish_reason": "stop",
        }],
        "usage": {"prompt_tokens": 9, "completion_tokens": 3, "total_tokens": 12},
    });

    let response: CompletionResponse = serde_json::from_value(body).unwrap();

    assert_eq!(response.id, "chatcmpl-abc123");
    assert_eq!(response.created, 1700000000);
    assert_eq!(response.choices.len(), 1);
    assert_eq!(response.choices[0].index, 0);
    assert_eq!(response.choices[0].message.role, Role::Assistant);
    assert_eq!(response.choices[0].finish_reason.as_deref(), Some("stop"));
    assert_eq!(response.usage.total_tokens, 12);
    assert_eq!(response.first_message_content(), "Hello there");
}

#[test]
fn test_empty_choices_is_valid() {
    let body = json!({
        "id": "chatcmpl-empty",
        "object": "chat.completion",
        "created": 1700000000u64,
        "choices": [],
        "usage": {"prompt_tokens": 1, "completion_tokens": 0, "total_tokens": 1},
    });

    let response: CompletionResponse = serde_json::from_value(body).unwrap();
    assert!(response.choices.is_empty());
    assert_eq!(response.first_message_content(), "");
}

#[test]
fn test_prompt_then_history_order() {
    let history = vec![
        ChatMessage::assistant("earlier answer"),
        ChatMessage::user("earlier question"),
    ];
    let request = CompletionRequest::from_prompt("gpt-4", "now answer this", history);

    assert_eq!(request.messages[0], ChatMessage::user("now answer this"));
    assert_eq!(request.messages[1], ChatMessage::assistant("earlier answer"));
    assert_eq!(request.messages[2], ChatMessage::user("earlier question"));
}

#[test]
fn test_model_list_deserialization() {
    let body = json!({
        "object": "list",
        "data": [{"id": "gpt-4", "object": "model"}, {"id": "gpt-3.5-turbo", "object": "model"}],
    });

    let models: ModelList = serde_json::from_value(body).unwrap();
    let ids: Vec<String> = models.data.into_iter().map(|m| m.id).collect();
    assert_eq!(ids, vec!["gpt-4", "gpt-3.5-turbo"]);
}
