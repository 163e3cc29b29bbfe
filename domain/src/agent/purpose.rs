//! Prompt purpose value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// What the optimized prompt will be used for
///
/// The purpose is interpolated into every agent's instruction text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptPurpose {
    #[default]
    ArticleWriting,
    SocialMediaPost,
    TestCaseGeneration,
    ApiDocumentation,
    NonTechnicalExplanation,
    CodeGeneration,
    CodeDebugging,
    CodeReview,
    TechnicalExplanation,
    DataAnalysis,
}

impl PromptPurpose {
    pub const ALL: [PromptPurpose; 10] = [
        PromptPurpose::ArticleWriting,
        PromptPurpose::SocialMediaPost,
        PromptPurpose::TestCaseGeneration,
        PromptPurpose::ApiDocumentation,
        PromptPurpose::NonTechnicalExplanation,
        PromptPurpose::CodeGeneration,
        PromptPurpose::CodeDebugging,
        PromptPurpose::CodeReview,
        PromptPurpose::TechnicalExplanation,
        PromptPurpose::DataAnalysis,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PromptPurpose::ArticleWriting => "article_writing",
            PromptPurpose::SocialMediaPost => "social_media_post",
            PromptPurpose::TestCaseGeneration => "test_case_generation",
            PromptPurpose::ApiDocumentation => "api_documentation",
            PromptPurpose::NonTechnicalExplanation => "non_technical_explanation",
            PromptPurpose::CodeGeneration => "code_generation",
            PromptPurpose::CodeDebugging => "code_debugging",
            PromptPurpose::CodeReview => "code_review",
            PromptPurpose::TechnicalExplanation => "technical_explanation",
            PromptPurpose::DataAnalysis => "data_analysis",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PromptPurpose::ArticleWriting => "Article Writing",
            PromptPurpose::SocialMediaPost => "Social Media Post",
            PromptPurpose::TestCaseGeneration => "Test Case Generation",
            PromptPurpose::ApiDocumentation => "API Documentation",
            PromptPurpose::NonTechnicalExplanation => "Non-Technical Explanation",
            PromptPurpose::CodeGeneration => "Code Generation",
            PromptPurpose::CodeDebugging => "Code Debugging",
            PromptPurpose::CodeReview => "Code Review",
            PromptPurpose::TechnicalExplanation => "Technical Explanation",
            PromptPurpose::DataAnalysis => "Data Analysis",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PromptPurpose::ArticleWriting => {
                "Optimize prompts for generating articles, blog posts, or content"
            }
            PromptPurpose::SocialMediaPost => {
                "Enhance prompts for creating engaging social media content"
            }
            PromptPurpose::TestCaseGeneration => {
                "Improve prompts for generating comprehensive test cases"
            }
            PromptPurpose::ApiDocumentation => {
                "Optimize prompts for creating clear API documentation"
            }
            PromptPurpose::NonTechnicalExplanation => {
                "Perfect prompts for explaining complex topics to non-technical audiences"
            }
            PromptPurpose::CodeGeneration => "Sharpen prompts that ask a model to write code",
            PromptPurpose::CodeDebugging => {
                "Improve prompts for locating and fixing bugs in existing code"
            }
            PromptPurpose::CodeReview => "Optimize prompts for thorough, actionable code reviews",
            PromptPurpose::TechnicalExplanation => {
                "Refine prompts for precise explanations aimed at technical readers"
            }
            PromptPurpose::DataAnalysis => {
                "Enhance prompts for analyzing datasets and reporting findings"
            }
        }
    }

    /// Phrase used inside agent instructions.
    ///
    /// Only the first underscore becomes a space, so
    /// `test_case_generation` reads as `"test case_generation"`.
    pub fn phrase(&self) -> String {
        self.as_str().replacen('_', " ", 1)
    }
}

impl std::fmt::Display for PromptPurpose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PromptPurpose {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        PromptPurpose::ALL
            .into_iter()
            .find(|p| p.as_str() == normalized)
            .ok_or_else(|| DomainError::UnknownPurpose(s.to_string()))
    }
}
