// All LLM prompt templates for the career module.

use crate::errors::AppError;
use crate::llm_client::prompts::fill_template;

/// Career path prompt. Replace `{goal}` before sending.
pub const CAREER_PATH_PROMPT_TEMPLATE: &str = r#"I want to become a {goal}.
Assume I have no prior knowledge about this field.

Lay out a detailed career path from beginner to advanced level.
The path must contain 5 to 10 steps, each one harder than the last.

Start every step with a bold header on its own line, exactly like this:
**Step 1: <Step Name>**

Under each header add:
   - **Summary**: what should be learned in this step (topics, concepts).
   - **Most Important Skill**: the one skill that must be mastered at this stage."#;

/// Per-step summary prompt. Replace `{step_name}` before sending.
pub const STEP_SUMMARY_PROMPT_TEMPLATE: &str = r#"For the career step '{step_name}', describe what to learn.

Answer with exactly two bullet points, each starting with the character "•":
• One sentence stating the overall learning objective of the step (for example: get familiar with the basics of Python, including its syntax, data types and control structures).
• Main Topics Covered: the main topics of the step separated by commas (for example: Variables, Data Types, Operators, Control Structures, Functions, Modules, Error Handling).

Do not add a heading, an introduction or any text before or after the two bullets."#;

/// Learning guide prompt. Replace `{topic}` before sending.
pub const LEARNING_GUIDE_PROMPT_TEMPLATE: &str = r#"Provide a structured A-to-Z learning guide for {topic}.
The guide should include key concepts, a step-by-step learning path, and essential resources."#;

/// The three generative request kinds issued for a goal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PromptRequest<'a> {
    CareerPath { goal: &'a str },
    StepSummary { step_name: &'a str },
    LearningGuide { topic: &'a str },
}

impl PromptRequest<'_> {
    /// Renders the instruction text. Fails only when the required parameter is blank.
    pub fn render(&self) -> Result<String, AppError> {
        let (template, name, value) = match *self {
            PromptRequest::CareerPath { goal } => (CAREER_PATH_PROMPT_TEMPLATE, "goal", goal),
            PromptRequest::StepSummary { step_name } => {
                (STEP_SUMMARY_PROMPT_TEMPLATE, "step_name", step_name)
            }
            PromptRequest::LearningGuide { topic } => {
                (LEARNING_GUIDE_PROMPT_TEMPLATE, "topic", topic)
            }
        };

        let value = value.trim();
        if value.is_empty() {
            return Err(AppError::Validation(format!("{name} cannot be empty")));
        }

        Ok(fill_template(template, &[(name, value)]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_career_path_prompt_contains_goal_and_marker_format() {
        let prompt = PromptRequest::CareerPath {
            goal: "Data Scientist",
        }
        .render()
        .unwrap();
        assert!(prompt.starts_with("I want to become a Data Scientist."));
        assert!(prompt.contains("**Step 1: <Step Name>**"));
        assert!(!prompt.contains("{goal}"));
    }

    #[test]
    fn test_step_summary_prompt_quotes_step_name() {
        let prompt = PromptRequest::StepSummary {
            step_name: "Learn Python",
        }
        .render()
        .unwrap();
        assert!(prompt.contains("'Learn Python'"));
        assert!(!prompt.contains("{step_name}"));
    }

    #[test]
    fn test_learning_guide_prompt_contains_topic() {
        let prompt = PromptRequest::LearningGuide { topic: "Rust" }
            .render()
            .unwrap();
        assert!(prompt.contains("A-to-Z learning guide for Rust."));
    }

    #[test]
    fn test_blank_parameter_is_rejected() {
        let err = PromptRequest::CareerPath { goal: "   " }.render().unwrap_err();
        match err {
            AppError::Validation(msg) => assert_eq!(msg, "goal cannot be empty"),
            other => panic!("expected Validation, got {other:?}"),
        }
    }
}
