use super::*;
use crate::ports::conversation_logger::ConversationEvent;
use crate::ports::llm_gateway::{CompletionRequest, GatewayError};
use async_trait::async_trait;
use polish_domain::{DomainError, PromptPurpose};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;
use tokio::sync::Barrier;

// ==================== Test Mocks ====================

/// Deterministic gateway: appends `::<agent>` to its input unless a fixed
/// reply is scripted for that agent.
#[derive(Default)]
struct StubGateway {
    replies: HashMap<AgentKind, String>,
    fail_on_call: Option<usize>,
    barrier: Option<Barrier>,
    delay: Option<(AgentKind, Duration)>,
    calls: Mutex<Vec<(AgentKind, CompletionRequest)>>,
}

impl StubGateway {
    fn new() -> Self {
        Self::default()
    }

    fn with_reply(mut self, kind: AgentKind, reply: &str) -> Self {
        self.replies.insert(kind, reply.to_string());
        self
    }

    fn failing_on(mut self, call: usize) -> Self {
        self.fail_on_call = Some(call);
        self
    }

    fn with_barrier(mut self, parties: usize) -> Self {
        self.barrier = Some(Barrier::new(parties));
        self
    }

    fn delaying(mut self, kind: AgentKind, delay: Duration) -> Self {
        self.delay = Some((kind, delay));
        self
    }

    fn calls(&self) -> Vec<(AgentKind, CompletionRequest)> {
        self.calls.lock().unwrap().clone()
    }

    fn agent_inputs(&self) -> Vec<(AgentKind, String)> {
        self.calls()
            .into_iter()
            .map(|(kind, r)| (kind, r.user_prompt().unwrap_or_default().to_string()))
            .collect()
    }

    fn agent_of(request: &CompletionRequest) -> AgentKind {
        let system = request.system_prompt().unwrap_or_default();
        if system.starts_with("You are a prompt engineering expert") {
            AgentKind::Rewriter
        } else if system.starts_with("You are a prompt critic") {
            AgentKind::Critic
        } else {
            AgentKind::Finalizer
        }
    }
}

#[async_trait]
impl LlmGateway for StubGateway {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError> {
        let kind = Self::agent_of(request);
        let call_number = {
            let mut calls = self.calls.lock().unwrap();
            calls.push((kind, request.clone()));
            calls.len()
        };

        if self.fail_on_call == Some(call_number) {
            return Err(GatewayError::RequestFailed(format!(
                "stub failure on call {}",
                call_number
            )));
        }

        if let Some(barrier) = &self.barrier
            && kind != AgentKind::Finalizer
        {
            barrier.wait().await;
        }

        if let Some((slow, delay)) = self.delay
            && slow == kind
        {
            tokio::time::sleep(delay).await;
        }

        let input = request.user_prompt().unwrap_or_default();
        Ok(self
            .replies
            .get(&kind)
            .cloned()
            .unwrap_or_else(|| format!("{}::{}", input, kind)))
    }
}

#[derive(Default)]
struct RecordingLogger {
    events: Mutex<Vec<&'static str>>,
}

impl ConversationLogger for RecordingLogger {
    fn log(&self, event: ConversationEvent) {
        self.events.lock().unwrap().push(event.event_type);
    }
}

fn use_case(gateway: &Arc<StubGateway>) -> OptimizePromptUseCase<StubGateway> {
    OptimizePromptUseCase::new(Arc::clone(gateway))
}

fn use_case_with(
    gateway: &Arc<StubGateway>,
    kinds: &[AgentKind],
) -> OptimizePromptUseCase<StubGateway> {
    OptimizePromptUseCase::with_agents(Arc::clone(gateway), AgentParams::default(), kinds)
}

fn kinds(feedback: &[AgentFeedback]) -> Vec<AgentKind> {
    feedback.iter().map(|f| f.agent_type).collect()
}

fn without_timestamps(mut result: PromptOptimizationResult) -> PromptOptimizationResult {
    for entry in &mut result.agent_feedback {
        entry.timestamp = 0;
    }
    result
}

use AgentKind::{Critic, Finalizer, Rewriter};

// ==================== Sequential ====================

#[tokio::test]
async fn test_sequential_end_to_end() {
    let gateway = Arc::new(StubGateway::new());
    let config = OptimizationConfig::sequential(vec![Rewriter, Critic, Finalizer])
        .with_purpose(PromptPurpose::ArticleWriting);

    let result = use_case(&gateway)
        .execute("write about cats", &config)
        .await
        .unwrap();

    assert_eq!(result.original_prompt, "write about cats");
    assert_eq!(
        result.optimized_prompt,
        "write about cats::rewriter::critic::finalizer"
    );
    assert_eq!(kinds(&result.agent_feedback), vec![Rewriter, Critic, Finalizer]);
    let suggestions: Vec<_> = result
        .agent_feedback
        .iter()
        .map(|f| f.suggestion.as_str())
        .collect();
    assert_eq!(
        suggestions,
        vec![
            "write about cats::rewriter",
            "write about cats::rewriter::critic",
            "write about cats::rewriter::critic::finalizer",
        ]
    );
    for entry in &result.agent_feedback {
        assert_eq!(entry.feedback, entry.suggestion);
    }
}

#[tokio::test]
async fn test_sequential_chains_in_declared_order() {
    let gateway = Arc::new(StubGateway::new());
    let config = OptimizationConfig::sequential(vec![Finalizer, Rewriter]);

    let result = use_case(&gateway).execute("p", &config).await.unwrap();

    assert_eq!(result.optimized_prompt, "p::finalizer::rewriter");
    assert_eq!(
        gateway.agent_inputs(),
        vec![
            (Finalizer, "p".to_string()),
            (Rewriter, "p::finalizer".to_string())
        ]
    );
}

#[tokio::test]
async fn test_sequential_multiple_passes() {
    let gateway = Arc::new(StubGateway::new());
    let config = OptimizationConfig::sequential(vec![Rewriter, Critic]).with_max_iterations(3);

    let result = use_case(&gateway).execute("p", &config).await.unwrap();

    assert_eq!(result.agent_feedback.len(), 3 * 2);
    assert_eq!(
        kinds(&result.agent_feedback),
        vec![Rewriter, Critic, Rewriter, Critic, Rewriter, Critic]
    );
    assert_eq!(
        result.optimized_prompt,
        "p::rewriter::critic::rewriter::critic::rewriter::critic"
    );
    // Second pass consumes the output of the first
    assert_eq!(gateway.agent_inputs()[2].1, "p::rewriter::critic");
}

#[tokio::test]
async fn test_sequential_empty_agent_list_returns_original() {
    let gateway = Arc::new(StubGateway::new());
    let config = OptimizationConfig::sequential(Vec::new());

    let result = use_case(&gateway).execute("p", &config).await.unwrap();

    assert_eq!(result, PromptOptimizationResult::unchanged("p"));
    assert!(gateway.calls().is_empty());
}

#[tokio::test]
async fn test_sequential_skips_unregistered_agent() {
    let gateway = Arc::new(StubGateway::new());
    let config = OptimizationConfig::sequential(vec![Rewriter, Critic]);

    let result = use_case_with(&gateway, &[Rewriter])
        .execute("p", &config)
        .await
        .unwrap();

    assert_eq!(result.optimized_prompt, "p::rewriter");
    assert_eq!(kinds(&result.agent_feedback), vec![Rewriter]);
}

#[tokio::test]
async fn test_progress_called_before_each_agent_in_order() {
    let gateway = Arc::new(StubGateway::new());
    let config = OptimizationConfig::sequential(vec![Rewriter, Critic, Finalizer]);
    let seen = Mutex::new(Vec::new());
    let progress = |agent: AgentKind| {
        // Nothing for this agent has reached the gateway yet
        let calls_so_far = gateway.calls().len();
        seen.lock().unwrap().push((agent, calls_so_far));
    };

    use_case(&gateway)
        .execute_with_progress("p", &config, &progress)
        .await
        .unwrap();

    assert_eq!(
        *seen.lock().unwrap(),
        vec![(Rewriter, 0), (Critic, 1), (Finalizer, 2)]
    );
}

#[tokio::test]
async fn test_failure_on_second_call_rejects() {
    let gateway = Arc::new(StubGateway::new().failing_on(2));
    let config = OptimizationConfig::sequential(vec![Rewriter, Critic, Finalizer]);

    let err = use_case(&gateway)
        .execute("p", &config)
        .await
        .unwrap_err();

    assert_eq!(
        err,
        OptimizeError::Gateway(GatewayError::RequestFailed(
            "stub failure on call 2".to_string()
        ))
    );
    // Run aborted: the finalizer was never invoked
    assert_eq!(gateway.calls().len(), 2);
}

#[tokio::test]
async fn test_identical_inputs_yield_identical_results() {
    let gateway = Arc::new(StubGateway::new());
    let optimizer = use_case(&gateway);
    let config = OptimizationConfig::sequential(vec![Rewriter, Critic, Finalizer])
        .with_max_iterations(2);

    let first = optimizer.execute("same", &config).await.unwrap();
    let second = optimizer.execute("same", &config).await.unwrap();

    assert_eq!(without_timestamps(first), without_timestamps(second));
}

#[tokio::test]
async fn test_temperature_override_forwarded() {
    let gateway = Arc::new(StubGateway::new());
    let default_config = OptimizationConfig::sequential(vec![Rewriter, Finalizer]);
    use_case(&gateway)
        .execute("p", &default_config)
        .await
        .unwrap();

    let override_config = default_config.clone().with_temperature(0.1);
    use_case(&gateway)
        .execute("p", &override_config)
        .await
        .unwrap();

    let temperatures: Vec<_> = gateway
        .calls()
        .iter()
        .map(|(_, r)| r.temperature)
        .collect();
    assert_eq!(temperatures, vec![0.7, 0.5, 0.1, 0.1]);
}

// ==================== Parallel ====================

#[tokio::test]
async fn test_parallel_agents_see_original_prompt() {
    let gateway = Arc::new(StubGateway::new().with_reply(Finalizer, "merged"));
    let config = OptimizationConfig::sequential(vec![Rewriter, Critic])
        .with_mode(OptimizationMode::Parallel);

    let result = use_case(&gateway).execute("p", &config).await.unwrap();

    assert_eq!(result.optimized_prompt, "merged");
    assert_eq!(kinds(&result.agent_feedback), vec![Rewriter, Critic, Finalizer]);

    let inputs = gateway.agent_inputs();
    for (kind, input) in &inputs[..2] {
        assert_ne!(*kind, Finalizer);
        assert_eq!(input, "p");
    }
    assert_eq!(inputs[2].0, Finalizer);
    let combined: serde_json::Value = serde_json::from_str(&inputs[2].1).unwrap();
    assert_eq!(combined["original"], "p");
    assert_eq!(
        combined["variations"],
        serde_json::json!(["p::rewriter", "p::critic"])
    );
}

#[tokio::test]
async fn test_parallel_calls_are_in_flight_together() {
    // Both branches must reach the barrier before either can finish.
    let gateway = Arc::new(StubGateway::new().with_barrier(2));
    let config = OptimizationConfig::sequential(vec![Rewriter, Critic])
        .with_mode(OptimizationMode::Parallel);
    let optimizer = use_case(&gateway);

    let result = tokio::time::timeout(Duration::from_secs(5), optimizer.execute("p", &config))
        .await
        .expect("parallel agents were not issued concurrently")
        .unwrap();

    assert_eq!(result.agent_feedback.len(), 3);
}

#[tokio::test]
async fn test_parallel_without_finalizer_returns_first_variation() {
    let gateway = Arc::new(StubGateway::new());
    let config = OptimizationConfig::sequential(vec![Critic, Rewriter])
        .with_mode(OptimizationMode::Parallel);

    let result = use_case_with(&gateway, &[Rewriter, Critic])
        .execute("p", &config)
        .await
        .unwrap();

    assert_eq!(result.optimized_prompt, "p::critic");
    assert_eq!(kinds(&result.agent_feedback), vec![Critic, Rewriter]);
}

#[tokio::test]
async fn test_parallel_without_any_agent_returns_original() {
    let gateway = Arc::new(StubGateway::new());
    let config = OptimizationConfig::sequential(vec![Rewriter])
        .with_mode(OptimizationMode::Parallel);

    let result = use_case_with(&gateway, &[])
        .execute("p", &config)
        .await
        .unwrap();

    assert_eq!(result, PromptOptimizationResult::unchanged("p"));
}

#[tokio::test]
async fn test_parallel_failure_discards_everything() {
    let gateway = Arc::new(StubGateway::new().failing_on(1));
    let config = OptimizationConfig::sequential(vec![Rewriter, Critic])
        .with_mode(OptimizationMode::Parallel);

    let result = use_case(&gateway).execute("p", &config).await;

    assert!(result.unwrap_err().is_gateway());
    assert!(
        gateway
            .calls()
            .iter()
            .all(|(kind, _)| *kind != Finalizer)
    );
}

#[tokio::test]
async fn test_parallel_progress_in_declared_order_then_finalizer() {
    let gateway = Arc::new(StubGateway::new());
    let config = OptimizationConfig::sequential(vec![Critic, Rewriter])
        .with_mode(OptimizationMode::Parallel);
    let seen = Mutex::new(Vec::new());
    let progress = |agent: AgentKind| seen.lock().unwrap().push((agent, gateway.calls().len()));

    use_case(&gateway)
        .execute_with_progress("p", &config, &progress)
        .await
        .unwrap();

    assert_eq!(
        *seen.lock().unwrap(),
        vec![(Critic, 0), (Rewriter, 1), (Finalizer, 2)]
    );
    assert_eq!(gateway.calls().len(), 3);
}

#[tokio::test]
async fn test_parallel_entries_stamped_when_each_branch_resolves() {
    let gateway = Arc::new(StubGateway::new().delaying(Rewriter, Duration::from_millis(300)));
    let config = OptimizationConfig::sequential(vec![Critic, Rewriter])
        .with_mode(OptimizationMode::Parallel);

    let result = use_case(&gateway).execute("p", &config).await.unwrap();

    assert_eq!(kinds(&result.agent_feedback), vec![Critic, Rewriter, Finalizer]);
    let critic = result.agent_feedback[0].timestamp;
    let rewriter = result.agent_feedback[1].timestamp;
    assert!(
        rewriter - critic >= 200,
        "critic {} rewriter {}",
        critic,
        rewriter
    );
}

#[tokio::test]
async fn test_parallel_unregistered_agent_keeps_original_prompt_slot() {
    let gateway = Arc::new(StubGateway::new());
    let config = OptimizationConfig::sequential(vec![Critic, Rewriter])
        .with_mode(OptimizationMode::Parallel);
    let seen = Mutex::new(Vec::new());
    let progress = |agent: AgentKind| seen.lock().unwrap().push(agent);

    let result = use_case_with(&gateway, &[Rewriter, Finalizer])
        .execute_with_progress("p", &config, &progress)
        .await
        .unwrap();

    assert_eq!(kinds(&result.agent_feedback), vec![Rewriter, Finalizer]);
    assert_eq!(*seen.lock().unwrap(), vec![Rewriter, Finalizer]);

    let inputs = gateway.agent_inputs();
    assert_eq!(inputs.len(), 2);
    let combined: serde_json::Value = serde_json::from_str(&inputs[1].1).unwrap();
    assert_eq!(combined["variations"], serde_json::json!(["p", "p::rewriter"]));
}

// ==================== Critique ====================

#[tokio::test]
async fn test_critique_alternates_critic_and_rewriter() {
    let gateway = Arc::new(StubGateway::new());
    let config = OptimizationConfig::default()
        .with_mode(OptimizationMode::Critique)
        .with_max_iterations(2);

    let result = use_case(&gateway).execute("p", &config).await.unwrap();

    assert_eq!(
        kinds(&result.agent_feedback),
        vec![Critic, Rewriter, Critic, Rewriter, Finalizer]
    );
    for entry in &result.agent_feedback {
        match entry.agent_type {
            Critic => {
                assert!(!entry.feedback.is_empty());
                assert!(entry.suggestion.is_empty());
            }
            Rewriter => {
                assert!(entry.feedback.is_empty());
                assert!(!entry.suggestion.is_empty());
            }
            Finalizer => assert_eq!(entry.suggestion, result.optimized_prompt),
        }
    }

    let inputs = gateway.agent_inputs();
    let revision: serde_json::Value = serde_json::from_str(&inputs[1].1).unwrap();
    assert_eq!(revision["prompt"], "p");
    assert_eq!(revision["critique"], "p::critic");
    // Next round critiques the rewritten draft
    assert_eq!(inputs[2].1, result.agent_feedback[1].suggestion);
    // Closing pass runs on the last draft
    assert_eq!(inputs[4].1, result.agent_feedback[3].suggestion);
}

#[tokio::test]
async fn test_critique_without_critic_returns_original() {
    let gateway = Arc::new(StubGateway::new());
    let config = OptimizationConfig::default().with_mode(OptimizationMode::Critique);
    let seen = Mutex::new(Vec::new());
    let progress = |agent: AgentKind| seen.lock().unwrap().push(agent);

    let result = use_case_with(&gateway, &[Rewriter, Finalizer])
        .execute_with_progress("p", &config, &progress)
        .await
        .unwrap();

    assert_eq!(result, PromptOptimizationResult::unchanged("p"));
    assert!(gateway.calls().is_empty());
    assert!(seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_critique_without_finalizer_ends_on_revision() {
    let gateway = Arc::new(StubGateway::new().with_reply(Rewriter, "revised"));
    let config = OptimizationConfig::default().with_mode(OptimizationMode::Critique);

    let result = use_case_with(&gateway, &[Critic, Rewriter])
        .execute("p", &config)
        .await
        .unwrap();

    assert_eq!(result.optimized_prompt, "revised");
    assert_eq!(kinds(&result.agent_feedback), vec![Critic, Rewriter]);
}

#[tokio::test]
async fn test_critique_progress_per_round_then_finalizer() {
    let gateway = Arc::new(StubGateway::new());
    let config = OptimizationConfig::default()
        .with_mode(OptimizationMode::Critique)
        .with_max_iterations(2);
    let seen = Mutex::new(Vec::new());
    let progress = |agent: AgentKind| seen.lock().unwrap().push((agent, gateway.calls().len()));

    use_case(&gateway)
        .execute_with_progress("p", &config, &progress)
        .await
        .unwrap();

    assert_eq!(
        *seen.lock().unwrap(),
        vec![
            (Critic, 0),
            (Rewriter, 1),
            (Critic, 2),
            (Rewriter, 3),
            (Finalizer, 4)
        ]
    );
    assert_eq!(gateway.calls().len(), 5);
}

// ==================== Preconditions ====================

#[tokio::test]
async fn test_empty_prompt_fails_fast() {
    let gateway = Arc::new(StubGateway::new());

    let err = use_case(&gateway)
        .execute("   ", &OptimizationConfig::default())
        .await
        .unwrap_err();

    assert_eq!(err, OptimizeError::Input(DomainError::EmptyPrompt));
    assert!(gateway.calls().is_empty());
}

#[tokio::test]
async fn test_zero_iterations_is_config_error() {
    let gateway = Arc::new(StubGateway::new());
    let config = OptimizationConfig::default().with_max_iterations(0);

    let err = use_case(&gateway).execute("p", &config).await.unwrap_err();

    assert_eq!(err, OptimizeError::Config(DomainError::InvalidIterations));
}

// ==================== Regeneration ====================

#[tokio::test]
async fn test_regenerate_runs_finalizer_only() {
    let gateway = Arc::new(StubGateway::new().with_reply(Finalizer, "Y"));
    let prior = PromptOptimizationResult::new(
        "write about cats",
        "X",
        vec![AgentFeedback::output(Rewriter, "X")],
    );
    let seen = Mutex::new(Vec::new());
    let progress = |agent: AgentKind| seen.lock().unwrap().push(agent);

    let regenerated = use_case(&gateway)
        .regenerate(&prior, "shorter", PromptPurpose::ArticleWriting, &progress)
        .await
        .unwrap();

    assert_eq!(regenerated.optimized_prompt, "Y");
    assert_eq!(kinds(&regenerated.agent_feedback), vec![Finalizer]);
    assert_eq!(*seen.lock().unwrap(), vec![Finalizer]);

    let inputs = gateway.agent_inputs();
    assert_eq!(inputs.len(), 1);
    assert!(inputs[0].1.contains("Original prompt: write about cats"));
    assert!(inputs[0].1.contains("Current optimized version: X"));
    assert!(inputs[0].1.contains("User feedback: shorter"));

    let merged = prior.with_regeneration("shorter", regenerated.optimized_prompt);
    assert_eq!(merged.optimized_prompt, "Y");
    assert_eq!(merged.agent_feedback.len(), 2);
    let last = merged.agent_feedback.last().unwrap();
    assert_eq!(last.agent_type, Finalizer);
    assert!(last.feedback.contains("shorter"));
    assert_eq!(last.suggestion, "Y");
}

#[tokio::test]
async fn test_regenerate_rejects_empty_feedback() {
    let gateway = Arc::new(StubGateway::new());
    let prior = PromptOptimizationResult::unchanged("p");

    let err = use_case(&gateway)
        .regenerate(&prior, " ", PromptPurpose::ArticleWriting, &NoProgress)
        .await
        .unwrap_err();

    assert_eq!(err, OptimizeError::Input(DomainError::EmptyFeedback));
    assert!(gateway.calls().is_empty());
}

// ==================== Registry & logging ====================

#[test]
fn test_default_registry_has_every_kind() {
    let gateway = Arc::new(StubGateway::new());
    let optimizer = use_case(&gateway);
    assert_eq!(
        optimizer.registered_agents().collect::<Vec<_>>(),
        vec![Rewriter, Critic, Finalizer]
    );
    assert_eq!(optimizer.agent(Critic).unwrap().name(), "Prompt Critic");
}

#[tokio::test]
async fn test_conversation_logger_records_transcript() {
    let gateway = Arc::new(StubGateway::new());
    let logger = Arc::new(RecordingLogger::default());
    let optimizer = use_case(&gateway).with_conversation_logger(logger.clone());

    optimizer
        .execute("p", &OptimizationConfig::sequential(vec![Rewriter]))
        .await
        .unwrap();

    assert_eq!(
        *logger.events.lock().unwrap(),
        vec!["agent_request", "agent_response", "optimization_complete"]
    );
}
