//! Instruction templates for each agent kind

use crate::agent::kind::AgentKind;
use crate::agent::purpose::PromptPurpose;
use serde::Serialize;

/// Combined input handed to the finalizer after a parallel run
#[derive(Serialize)]
struct ParallelVariations<'a> {
    original: &'a str,
    variations: &'a [String],
}

/// Combined input handed to the rewriter in a critique round
#[derive(Serialize)]
struct CritiqueRevision<'a> {
    prompt: &'a str,
    critique: &'a str,
}

/// Templates for generating agent prompts
pub struct AgentPromptTemplate;

impl AgentPromptTemplate {
    /// System instruction for the given agent, specialized by purpose
    pub fn system(kind: AgentKind, purpose: PromptPurpose) -> String {
        match kind {
            AgentKind::Rewriter => Self::rewriter_system(purpose),
            AgentKind::Critic => Self::critic_system(purpose),
            AgentKind::Finalizer => Self::finalizer_system(purpose),
        }
    }

    pub fn rewriter_system(purpose: PromptPurpose) -> String {
        let phrase = purpose.phrase();
        format!(
            "You are a prompt engineering expert. Your task is to rewrite the given prompt to be more effective for LLMs, specifically optimizing for {phrase}. Focus on:
1. Clear and precise language
2. Proper context and constraints
3. Structured format when beneficial
4. Removing ambiguity
5. Best practices for {phrase}
Maintain the original intent while making it more effective."
        )
    }

    pub fn critic_system(purpose: PromptPurpose) -> String {
        let phrase = purpose.phrase();
        format!(
            "You are a prompt critic specializing in LLM interactions, particularly for {phrase}. Analyze the prompt and provide specific suggestions for improvement. Focus on:
1. Identifying vague or ambiguous parts
2. Missing context or constraints
3. Potential misinterpretations by LLMs
4. Specific improvements for {phrase}
Return your analysis in a clear, actionable format."
        )
    }

    pub fn finalizer_system(purpose: PromptPurpose) -> String {
        let phrase = purpose.phrase();
        format!(
            "You are a prompt finalizer expert specializing in {phrase}. Your task is to take the original prompt and suggested improvements, then create the best possible version. Focus on:
1. Incorporating valuable feedback while maintaining clarity
2. Ensuring the prompt is optimized for {phrase}
3. Following best practices for this specific use case
4. Maintaining the original intent while improving effectiveness
Return only the improved prompt without any explanations or additional text."
        )
    }

    /// Finalizer input after a parallel run: `{"original": .., "variations": [..]}`
    pub fn parallel_combine(original: &str, variations: &[String]) -> String {
        serde_json::to_string(&ParallelVariations {
            original,
            variations,
        })
        .unwrap_or_default()
    }

    /// Rewriter input in a critique round: `{"prompt": .., "critique": ..}`
    pub fn critique_revision(prompt: &str, critique: &str) -> String {
        serde_json::to_string(&CritiqueRevision { prompt, critique }).unwrap_or_default()
    }

    /// Synthetic input for a feedback-driven regeneration
    pub fn regeneration(original: &str, current: &str, feedback: &str) -> String {
        format!(
            r#"
Original prompt: {original}

Current optimized version: {current}

User feedback: {feedback}

Please create an improved version based on this feedback."#
        )
    }
}
