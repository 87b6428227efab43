use httpmock::prelude::*;
use seednodes::core::{Color, Emitter, Prompter};
use seednodes::{ExternalAddressResolver, SeedError};
use std::net::Ipv4Addr;
use std::sync::Mutex;

#[derive(Default)]
struct RecordingEmitter {
    messages: Mutex<Vec<(String, Option<Color>)>>,
}

impl Emitter for RecordingEmitter {
    fn message(&self, text: &str, color: Option<Color>) {
        self.messages.lock().unwrap().push((text.to_string(), color));
    }
}

/// Answers prompts from a script and records every question asked.
struct ScriptedPrompter {
    confirm_answer: bool,
    typed_address: Ipv4Addr,
    questions: Mutex<Vec<String>>,
}

impl ScriptedPrompter {
    fn new(confirm_answer: bool, typed_address: Ipv4Addr) -> Self {
        Self {
            confirm_answer,
            typed_address,
            questions: Mutex::new(Vec::new()),
        }
    }

    fn questions(&self) -> Vec<String> {
        self.questions.lock().unwrap().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, question: &str) -> seednodes::Result<bool> {
        self.questions.lock().unwrap().push(question.to_string());
        Ok(self.confirm_answer)
    }

    fn prompt_ipv4(&self, question: &str) -> seednodes::Result<Ipv4Addr> {
        self.questions.lock().unwrap().push(question.to_string());
        Ok(self.typed_address)
    }
}

fn resolver(server: &MockServer) -> ExternalAddressResolver {
    ExternalAddressResolver::new(reqwest::Client::new(), server.url("/"))
}

#[tokio::test]
async fn test_forced_detection_returns_echoed_address() {
    let server = MockServer::start();
    let echo_mock = server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200).body("203.0.113.7");
    });
    let emitter = RecordingEmitter::default();
    let prompter = ScriptedPrompter::new(false, Ipv4Addr::LOCALHOST);

    let address = resolver(&server)
        .resolve(&emitter, &prompter, true)
        .await
        .unwrap();

    assert_eq!(address, "203.0.113.7");
    echo_mock.assert();
    assert!(prompter.questions().is_empty());
    let messages = emitter.messages.lock().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(
        messages[0],
        (
            "WARNING: --force is set, using auto-detected IP '203.0.113.7'".to_string(),
            Some(Color::Yellow)
        )
    );
}

#[tokio::test]
async fn test_forced_detection_fails_on_server_error() {
    let server = MockServer::start();
    let echo_mock = server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(500);
    });
    let emitter = RecordingEmitter::default();
    let prompter = ScriptedPrompter::new(true, Ipv4Addr::LOCALHOST);

    let err = resolver(&server)
        .resolve(&emitter, &prompter, true)
        .await
        .unwrap_err();

    assert!(matches!(err, SeedError::UnknownAddressError { .. }));
    assert!(err.to_string().contains("status code 500"));
    echo_mock.assert_hits(1);
    assert!(emitter.messages.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_unforced_detection_failure_is_fatal_without_prompting() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(404);
    });
    let emitter = RecordingEmitter::default();
    let prompter = ScriptedPrompter::new(true, Ipv4Addr::LOCALHOST);

    let err = resolver(&server)
        .resolve(&emitter, &prompter, false)
        .await
        .unwrap_err();

    assert!(matches!(err, SeedError::UnknownAddressError { .. }));
    assert!(prompter.questions().is_empty());
}

#[tokio::test]
async fn test_unreachable_echo_service_is_unknown_address() {
    // nothing listens on port 1
    let resolver = ExternalAddressResolver::new(reqwest::Client::new(), "http://127.0.0.1:1/");
    let emitter = RecordingEmitter::default();
    let prompter = ScriptedPrompter::new(true, Ipv4Addr::LOCALHOST);

    let err = resolver.resolve(&emitter, &prompter, true).await.unwrap_err();

    assert!(matches!(err, SeedError::UnknownAddressError { .. }));
}

#[tokio::test]
async fn test_confirmed_address_is_used() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200).body("198.51.100.23\n");
    });
    let emitter = RecordingEmitter::default();
    let prompter = ScriptedPrompter::new(true, Ipv4Addr::LOCALHOST);

    let address = resolver(&server)
        .resolve(&emitter, &prompter, false)
        .await
        .unwrap();

    assert_eq!(address, "198.51.100.23");
    assert_eq!(
        prompter.questions(),
        vec![
            "Is this the public-facing IPv4 address (198.51.100.23) you want to use for this node?"
                .to_string()
        ]
    );
    assert!(emitter.messages.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_rejected_address_is_replaced_by_typed_one() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200).body("198.51.100.23");
    });
    let emitter = RecordingEmitter::default();
    let prompter = ScriptedPrompter::new(false, Ipv4Addr::new(192, 0, 2, 10));

    let address = resolver(&server)
        .resolve(&emitter, &prompter, false)
        .await
        .unwrap();

    assert_eq!(address, "192.0.2.10");
    let questions = prompter.questions();
    assert_eq!(questions.len(), 2);
    assert_eq!(questions[1], "Enter the node's public-facing IPv4 address");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_prompts_work_on_multi_threaded_runtime() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200).body("198.51.100.23");
    });
    let emitter = RecordingEmitter::default();
    let prompter = ScriptedPrompter::new(false, Ipv4Addr::new(192, 0, 2, 44));

    let address = resolver(&server)
        .resolve(&emitter, &prompter, false)
        .await
        .unwrap();

    assert_eq!(address, "192.0.2.44");
    assert_eq!(prompter.questions().len(), 2);
}
