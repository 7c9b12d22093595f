//! Integration tests for canonical prompt extraction.

use prompt_extract::{
    prompt_bytes, prompt_length, prompt_string, ChatCompletionsPayload, CompletionsPayload,
    ExtractError, InferenceRequest, Message, RequestBody,
};

fn chat_request(messages: Vec<Message>) -> InferenceRequest {
    InferenceRequest::with_body(RequestBody::chat_completions(messages))
}

#[test]
fn test_completions_prompt_passes_through_verbatim() {
    let request = InferenceRequest::with_body(RequestBody::completions("hello"));

    let bytes = prompt_bytes(Some(&request)).expect("prompt_bytes returned error");
    assert_eq!(&bytes[..], b"hello");
    assert_eq!(
        prompt_length(Some(&request)).expect("prompt_length returned error"),
        5
    );
}

#[test]
fn test_chat_messages_serialize_to_golden_form() {
    // Regression check: this exact byte layout feeds cache-key comparisons
    // and must never change between releases.
    let request = chat_request(vec![Message::user("hi"), Message::assistant("hello")]);

    let prompt = prompt_string(Some(&request)).expect("prompt_string returned error");
    assert_eq!(
        prompt,
        r#"[{"role":"user","content":"hi"},{"role":"assistant","content":"hello"}]"#
    );
}

#[test]
fn test_chat_extraction_is_deterministic() {
    let request = chat_request(vec![
        Message::system("be brief"),
        Message::user("what is rust?"),
    ]);

    let first = prompt_bytes(Some(&request)).expect("first extraction failed");
    for _ in 0..8 {
        let again = prompt_bytes(Some(&request)).expect("repeat extraction failed");
        assert_eq!(first, again, "extraction must be byte-identical per call");
    }
}

#[test]
fn test_message_order_is_preserved_not_normalized() {
    let forward = chat_request(vec![Message::user("a"), Message::user("b")]);
    let reversed = chat_request(vec![Message::user("b"), Message::user("a")]);

    let forward_bytes = prompt_bytes(Some(&forward)).expect("forward extraction failed");
    let reversed_bytes = prompt_bytes(Some(&reversed)).expect("reversed extraction failed");
    assert_ne!(
        forward_bytes, reversed_bytes,
        "swapping messages must change the serialized output"
    );
}

#[test]
fn test_nil_request_from_all_operations() {
    assert!(matches!(prompt_bytes(None), Err(ExtractError::NilRequest)));
    assert!(matches!(prompt_string(None), Err(ExtractError::NilRequest)));
    assert!(matches!(prompt_length(None), Err(ExtractError::NilRequest)));
}

#[test]
fn test_nil_body_from_all_operations() {
    let request = InferenceRequest::default();

    assert!(matches!(
        prompt_bytes(Some(&request)),
        Err(ExtractError::NilBody)
    ));
    assert!(matches!(
        prompt_string(Some(&request)),
        Err(ExtractError::NilBody)
    ));
    assert!(matches!(
        prompt_length(Some(&request)),
        Err(ExtractError::NilBody)
    ));
}

#[test]
fn test_unsupported_inputs_from_all_operations() {
    let request = InferenceRequest::with_body(RequestBody::default());

    assert!(matches!(
        prompt_bytes(Some(&request)),
        Err(ExtractError::UnsupportedInputs)
    ));
    assert!(matches!(
        prompt_string(Some(&request)),
        Err(ExtractError::UnsupportedInputs)
    ));
    assert!(matches!(
        prompt_length(Some(&request)),
        Err(ExtractError::UnsupportedInputs)
    ));
}

#[test]
fn test_empty_completions_prompt_is_valid() {
    let request = InferenceRequest::with_body(RequestBody::completions(""));

    let bytes = prompt_bytes(Some(&request)).expect("empty prompt must not be an error");
    assert!(bytes.is_empty());
    assert_eq!(prompt_length(Some(&request)).unwrap(), 0);
}

#[test]
fn test_empty_message_sequence_is_valid() {
    let request = chat_request(vec![]);

    let prompt = prompt_string(Some(&request)).expect("empty sequence must not be an error");
    assert_eq!(prompt, "[]");
    assert_eq!(prompt_length(Some(&request)).unwrap(), 2);
}

#[test]
fn test_completions_wins_when_both_shapes_populated() {
    let request = InferenceRequest::with_body(RequestBody {
        completions: Some(CompletionsPayload {
            prompt: "flat prompt".to_string(),
        }),
        chat_completions: Some(ChatCompletionsPayload {
            messages: vec![Message::user("structured prompt")],
        }),
    });

    let bytes = prompt_bytes(Some(&request)).expect("prompt_bytes returned error");
    assert_eq!(&bytes[..], b"flat prompt");
}

#[test]
fn test_length_counts_bytes_of_multibyte_prompt() {
    // "日本語" is 3 chars, 9 bytes
    let request = InferenceRequest::with_body(RequestBody::completions("日本語"));
    assert_eq!(prompt_length(Some(&request)).unwrap(), 9);
}

#[test]
fn test_extraction_does_not_mutate_the_request() {
    let request = chat_request(vec![Message::user("hi")]);
    let snapshot = request.clone();

    let _ = prompt_bytes(Some(&request)).unwrap();
    let _ = prompt_string(Some(&request)).unwrap();

    assert_eq!(
        prompt_string(Some(&snapshot)).unwrap(),
        prompt_string(Some(&request)).unwrap()
    );
}

#[test]
fn test_parsed_wire_shape_round_trips_through_serde() {
    // The serving layer deserializes wire JSON into InferenceRequest before
    // calling the core; make sure that shape resolves like a hand-built one.
    let raw = r#"{"body":{"chat_completions":{"messages":[{"role":"user","content":"hi"}]}}}"#;
    let request: InferenceRequest = serde_json::from_str(raw).expect("request shape must parse");

    let prompt = prompt_string(Some(&request)).unwrap();
    assert_eq!(prompt, r#"[{"role":"user","content":"hi"}]"#);
}
