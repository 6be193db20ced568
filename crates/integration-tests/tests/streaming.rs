//! Streaming chat-completion endpoint tests

mod harness;

use std::sync::Arc;

use eventsource_stream::Eventsource;
use futures_util::StreamExt;
use harness::server::TestServer;
use harness::stub::{StubEvent, StubModel, single_model};
use parlance_llm::types::{FinishReason, Usage};

/// Collect all SSE `data:` payloads from a streaming response
async fn collect_events(resp: reqwest::Response) -> Vec<String> {
    assert_eq!(
        resp.headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok()),
        Some("text/event-stream")
    );

    let mut source = resp.bytes_stream().eventsource();
    let mut payloads = Vec::new();
    while let Some(event) = source.next().await {
        payloads.push(event.unwrap().data);
    }
    payloads
}

fn parse_chunks(payloads: &[String]) -> Vec<serde_json::Value> {
    payloads
        .iter()
        .filter(|payload| payload.as_str() != "[DONE]")
        .map(|payload| serde_json::from_str(payload).unwrap())
        .collect()
}

async fn stream_request(server: &TestServer, model: &str) -> reqwest::Response {
    server
        .completions(&serde_json::json!({
            "model": model,
            "messages": [{"role": "user", "content": "Hello"}],
            "stream": true
        }))
        .await
        .unwrap()
}

#[tokio::test]
async fn deltas_concatenate_and_the_stream_ends_with_done() {
    let stub = StubModel::streaming(vec![
        StubEvent::Text("Hel".to_owned()),
        StubEvent::Text("lo".to_owned()),
        StubEvent::Finish {
            reason: FinishReason::Stop,
            usage: Some(Usage {
                input_tokens: 2,
                output_tokens: 5,
                total_tokens: 7,
            }),
        },
    ]);
    let server = TestServer::start(single_model("stub-model", Arc::new(stub)))
        .await
        .unwrap();

    let payloads = collect_events(stream_request(&server, "stub-model").await).await;
    assert_eq!(payloads.last().map(String::as_str), Some("[DONE]"));

    let chunks = parse_chunks(&payloads);
    assert_eq!(chunks.len(), 3);

    let combined: String = chunks
        .iter()
        .filter_map(|chunk| chunk["choices"][0]["delta"]["content"].as_str())
        .collect();
    assert_eq!(combined, "Hello");

    for chunk in &chunks {
        assert_eq!(chunk["object"], "chat.completion.chunk");
        assert_eq!(chunk["model"], "stub-model");
    }

    let tail = chunks.last().unwrap();
    assert_eq!(tail["choices"][0]["finish_reason"], "stop");
    assert_eq!(
        tail["usage"],
        serde_json::json!({"prompt_tokens": 2, "completion_tokens": 5, "total_tokens": 7})
    );
}

#[tokio::test]
async fn chunk_ids_are_per_chunk() {
    let stub = StubModel::streaming(vec![
        StubEvent::Text("a".to_owned()),
        StubEvent::Text("b".to_owned()),
        StubEvent::Finish {
            reason: FinishReason::Stop,
            usage: None,
        },
    ]);
    let server = TestServer::start(single_model("stub-model", Arc::new(stub)))
        .await
        .unwrap();

    let chunks = parse_chunks(&collect_events(stream_request(&server, "stub-model").await).await);
    let ids: Vec<&str> = chunks.iter().filter_map(|chunk| chunk["id"].as_str()).collect();
    assert_eq!(ids.len(), 3);
    assert_ne!(ids[0], ids[1]);
    assert_ne!(ids[1], ids[2]);
}

// Mirrors the observed upstream behavior: the first tool call terminates the
// stream with finish_reason "stop", and later events in the same turn are
// never translated (rather than accumulating all tool calls).
#[tokio::test]
async fn stream_stops_at_the_first_tool_call() {
    let stub = StubModel::streaming(vec![
        StubEvent::ToolCall {
            id: "call_7".to_owned(),
            name: "get_weather".to_owned(),
            arguments: r#"{"city":"Paris"}"#.to_owned(),
        },
        StubEvent::Text("never translated".to_owned()),
        StubEvent::Finish {
            reason: FinishReason::ToolCalls,
            usage: None,
        },
    ]);
    let server = TestServer::start(single_model("stub-model", Arc::new(stub)))
        .await
        .unwrap();

    let payloads = collect_events(stream_request(&server, "stub-model").await).await;
    assert_eq!(payloads.last().map(String::as_str), Some("[DONE]"));

    let chunks = parse_chunks(&payloads);
    assert_eq!(chunks.len(), 1);

    let delta = &chunks[0]["choices"][0]["delta"];
    assert_eq!(delta["tool_calls"][0]["index"], 0);
    assert_eq!(delta["tool_calls"][0]["id"], "call_7");
    assert_eq!(delta["tool_calls"][0]["type"], "function");
    assert_eq!(delta["tool_calls"][0]["function"]["name"], "get_weather");
    assert_eq!(delta["tool_calls"][0]["function"]["arguments"], r#"{"city":"Paris"}"#);
    assert_eq!(chunks[0]["choices"][0]["finish_reason"], "stop");
}

#[tokio::test]
async fn provider_error_folds_into_a_well_formed_tail() {
    let stub = StubModel::streaming(vec![
        StubEvent::Text("partial".to_owned()),
        StubEvent::Error("provider exploded".to_owned()),
    ]);
    let server = TestServer::start(single_model("stub-model", Arc::new(stub)))
        .await
        .unwrap();

    let payloads = collect_events(stream_request(&server, "stub-model").await).await;
    assert_eq!(payloads.last().map(String::as_str), Some("[DONE]"));

    let chunks = parse_chunks(&payloads);
    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[1]["choices"][0]["finish_reason"], "stop");
    assert!(chunks[1]["choices"][0]["delta"]["content"].is_null());
}

#[tokio::test]
async fn exhausted_source_without_terminal_event_still_sends_done() {
    let stub = StubModel::streaming(vec![StubEvent::Text("only".to_owned())]);
    let server = TestServer::start(single_model("stub-model", Arc::new(stub)))
        .await
        .unwrap();

    let payloads = collect_events(stream_request(&server, "stub-model").await).await;
    assert_eq!(payloads.len(), 2);
    assert_eq!(payloads.last().map(String::as_str), Some("[DONE]"));
}

#[tokio::test]
async fn non_specific_finish_reasons_collapse_to_stop() {
    for reason in [FinishReason::Unknown, FinishReason::Error, FinishReason::Other] {
        let stub = StubModel::streaming(vec![StubEvent::Finish { reason, usage: None }]);
        let server = TestServer::start(single_model("stub-model", Arc::new(stub)))
            .await
            .unwrap();

        let chunks = parse_chunks(&collect_events(stream_request(&server, "stub-model").await).await);
        assert_eq!(chunks[0]["choices"][0]["finish_reason"], "stop");
    }
}
