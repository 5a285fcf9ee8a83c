use lexbot_core::constants::prompts;
use lexbot_core::*;
use std::sync::{Arc, Mutex};

/// What the controller handed to the backend on one call.
#[derive(Debug, Clone)]
struct RecordedCall {
    system_prompt: String,
    history: Vec<Turn>,
    user_message: String,
    temperature: f32,
}

/// Backend that replays scripted outcomes and records every call.
struct MockBackend {
    outcomes: Arc<Mutex<Vec<CompletionOutcome>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockBackend {
    fn new(mut outcomes: Vec<CompletionOutcome>) -> (Self, Arc<Mutex<Vec<RecordedCall>>>) {
        outcomes.reverse();
        let calls = Arc::new(Mutex::new(Vec::new()));
        let backend = Self {
            outcomes: Arc::new(Mutex::new(outcomes)),
            calls: calls.clone(),
        };
        (backend, calls)
    }
}

#[async_trait::async_trait]
impl CompletionBackend for MockBackend {
    async fn complete(
        &self,
        system_prompt: &str,
        history: &[Turn],
        user_message: &str,
        temperature: f32,
    ) -> CompletionOutcome {
        self.calls.lock().unwrap().push(RecordedCall {
            system_prompt: system_prompt.to_string(),
            history: history.to_vec(),
            user_message: user_message.to_string(),
            temperature,
        });
        self.outcomes
            .lock()
            .unwrap()
            .pop()
            .unwrap_or_else(|| CompletionOutcome::Success("Mock response".into()))
    }
}

fn success(text: &str) -> CompletionOutcome {
    CompletionOutcome::Success(format!("{text}{}", prompts::DISCLAIMER))
}

// ========================================================================
// Empty Input
// ========================================================================

#[tokio::test]
async fn test_blank_message_is_a_noop() {
    let (backend, calls) = MockBackend::new(vec![]);
    let controller = SessionController::new(Box::new(backend));
    let mut session = Session::new();
    session.append(Turn::user("q"), Turn::assistant("a")).unwrap();

    for raw in ["", "   ", "\n\t "] {
        let shown = controller
            .submit_turn(&mut session, &RequestOptions::default(), raw)
            .await;
        assert_eq!(shown, "");
    }

    assert_eq!(session.len(), 2);
    assert!(calls.lock().unwrap().is_empty());
}

// ========================================================================
// Successful Turns
// ========================================================================

#[tokio::test]
async fn test_successful_turn_appends_pair() {
    let (backend, _calls) = MockBackend::new(vec![success("A contract is...")]);
    let controller = SessionController::new(Box::new(backend));
    let mut session = Session::new();

    let shown = controller
        .submit_turn(&mut session, &RequestOptions::default(), "What is a contract?")
        .await;

    assert_eq!(shown, format!("A contract is...{}", prompts::DISCLAIMER));
    let history = session.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0], Turn::user("What is a contract?"));
    assert_eq!(history[1], Turn::assistant(shown));
}

#[tokio::test]
async fn test_user_turn_is_trimmed() {
    let (backend, calls) = MockBackend::new(vec![success("ok")]);
    let controller = SessionController::new(Box::new(backend));
    let mut session = Session::new();

    controller
        .submit_turn(&mut session, &RequestOptions::default(), "  hello there \n")
        .await;

    assert_eq!(session.history()[0].content(), "hello there");
    assert_eq!(calls.lock().unwrap()[0].user_message, "hello there");
}

#[tokio::test]
async fn test_options_flow_into_backend_call() {
    let (backend, calls) = MockBackend::new(vec![success("ok")]);
    let controller = SessionController::new(Box::new(backend));
    let mut session = Session::new();
    let options = RequestOptions::new(Topic::EmploymentLaw, ResponseLength::Brief, 0.2);

    controller
        .submit_turn(&mut session, &options, "Can I be fired for this?")
        .await;

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    let call = &calls[0];
    assert_eq!(
        call.system_prompt,
        PromptComposer::new().compose(Topic::EmploymentLaw, ResponseLength::Brief)
    );
    assert!(call.system_prompt.contains("Current focus area: Employment Law."));
    assert!(call.system_prompt.ends_with(prompts::BRIEF_DIRECTIVE));
    assert_eq!(call.temperature, 0.2);
    assert!(call.history.is_empty());
}

#[tokio::test]
async fn test_prior_history_is_sent_in_order() {
    let (backend, calls) = MockBackend::new(vec![success("one"), success("two"), success("three")]);
    let controller = SessionController::new(Box::new(backend));
    let mut session = Session::new();
    let options = RequestOptions::default();

    controller.submit_turn(&mut session, &options, "first").await;
    controller.submit_turn(&mut session, &options, "second").await;
    controller.submit_turn(&mut session, &options, "third").await;

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 3);
    assert_eq!(calls[0].history.len(), 0);
    assert_eq!(calls[1].history.len(), 2);
    assert_eq!(calls[2].history.len(), 4);
    assert_eq!(calls[2].history[0], Turn::user("first"));
    assert_eq!(calls[2].history[2], Turn::user("second"));
    assert_eq!(calls[2].history[3].content(), format!("two{}", prompts::DISCLAIMER));

    assert_eq!(session.len(), 6);
    assert_eq!(session.last_reply(), Some(format!("three{}", prompts::DISCLAIMER).as_str()));
}

#[tokio::test]
async fn test_custom_composer_is_used() {
    let (backend, calls) = MockBackend::new(vec![success("ok")]);
    let controller = SessionController::new(Box::new(backend))
        .with_composer(PromptComposer::new().with_base("Base."));
    let mut session = Session::new();

    controller
        .submit_turn(&mut session, &RequestOptions::default(), "hi")
        .await;

    assert_eq!(
        calls.lock().unwrap()[0].system_prompt,
        format!("Base.{}", prompts::MEDIUM_DIRECTIVE)
    );
}

// ========================================================================
// Failed Turns
// ========================================================================

#[tokio::test]
async fn test_failed_turn_still_appends_rendered_error() {
    let (backend, _calls) = MockBackend::new(vec![CompletionOutcome::Failure(
        CompletionFailure::Http {
            status: 429,
            detail: "rate limited".into(),
        },
    )]);
    let controller = SessionController::new(Box::new(backend));
    let mut session = Session::new();

    let shown = controller
        .submit_turn(&mut session, &RequestOptions::default(), "What is a tort?")
        .await;

    assert_eq!(shown, "Error 429: rate limited");
    assert_eq!(session.len(), 2);
    assert_eq!(session.history()[1], Turn::assistant("Error 429: rate limited"));
}

#[tokio::test]
async fn test_failed_exchange_is_sent_as_context_next_turn() {
    let (backend, calls) = MockBackend::new(vec![
        CompletionOutcome::Failure(CompletionFailure::Transport {
            service: "GROQ API".into(),
            detail: "timed out".into(),
        }),
        success("recovered"),
    ]);
    let controller = SessionController::new(Box::new(backend));
    let mut session = Session::new();
    let options = RequestOptions::default();

    controller.submit_turn(&mut session, &options, "first").await;
    let shown = controller.submit_turn(&mut session, &options, "second").await;

    assert_eq!(shown, format!("recovered{}", prompts::DISCLAIMER));
    let calls = calls.lock().unwrap();
    assert!(calls[1].history[1]
        .content()
        .starts_with("Error connecting to GROQ API: timed out."));
}

#[tokio::test]
async fn test_length_stays_even_across_mixed_outcomes() {
    let outcomes = vec![
        success("a"),
        CompletionOutcome::Failure(CompletionFailure::MissingCredential {
            env_var: "GROQ_API_KEY".into(),
        }),
        success("b"),
        CompletionOutcome::Failure(CompletionFailure::InvalidResponse {
            service: "GROQ API".into(),
            detail: "No response from API".into(),
        }),
    ];
    let (backend, _calls) = MockBackend::new(outcomes);
    let controller = SessionController::new(Box::new(backend));
    let mut session = Session::new();
    let options = RequestOptions::default();

    for message in ["one", "", "two", "   ", "three", "four"] {
        controller.submit_turn(&mut session, &options, message).await;
        assert_eq!(session.len() % 2, 0);
    }
    assert_eq!(session.pair_count(), 4);
}

// ========================================================================
// Reset
// ========================================================================

#[tokio::test]
async fn test_reset_session_clears_history() {
    let (backend, calls) = MockBackend::new(vec![success("a"), success("b")]);
    let controller = SessionController::new(Box::new(backend));
    let mut session = Session::new();
    let options = RequestOptions::default();

    controller.submit_turn(&mut session, &options, "first").await;
    controller.reset_session(&mut session);
    assert!(session.history().is_empty());

    controller.reset_session(&mut session);
    assert!(session.is_empty());

    controller.submit_turn(&mut session, &options, "after reset").await;
    assert!(calls.lock().unwrap()[1].history.is_empty());
    assert_eq!(session.len(), 2);
}

#[tokio::test]
async fn test_one_controller_serves_independent_sessions() {
    let (backend, _calls) = MockBackend::new(vec![success("for a"), success("for b")]);
    let controller = SessionController::new(Box::new(backend));
    let options = RequestOptions::default();
    let mut a = Session::new();
    let mut b = Session::new();

    controller.submit_turn(&mut a, &options, "question a").await;
    controller.submit_turn(&mut b, &options, "question b").await;
    controller.reset_session(&mut a);

    assert!(a.is_empty());
    assert_eq!(b.history()[0], Turn::user("question b"));
}
