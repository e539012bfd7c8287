//! User input and interaction handling.
//! The interactive flow collects the same fields as the command line, one
//! prompt per field, behind a trait so it can be driven by a scripted
//! implementation in tests.

use dialoguer::{Confirm, Input, Select};

use crate::config::{
    DependencyManager, LlmProvider, ObservabilityTool, Orchestrator, ProjectConfig,
    UiFramework, VectorDb,
};
use crate::error::{Error, Result};

/// Trait for collecting answers from the user.
pub trait Prompter {
    /// Asks for a non-empty line of text.
    fn input(&self, prompt: &str, default: &str) -> Result<String>;

    /// Asks to pick one item from a list, returning its index.
    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize>;

    /// Asks a yes/no question.
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;
}

/// Dialoguer-backed prompter used by the CLI.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&self, prompt: &str, default: &str) -> Result<String> {
        Input::new()
            .with_prompt(prompt)
            .default(default.to_string())
            .validate_with(|value: &String| {
                if value.trim().is_empty() {
                    Err("Value cannot be empty")
                } else {
                    Ok(())
                }
            })
            .interact_text()
            .map_err(|e| Error::PromptError(e.to_string()))
    }

    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize> {
        Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }
}

fn select_choice<T: Copy + PartialEq>(
    prompter: &dyn Prompter,
    prompt: &str,
    choices: &[T],
    labels: &[&str],
    default: T,
) -> Result<T> {
    let default_index =
        choices.iter().position(|choice| *choice == default).unwrap_or(0);
    let selection = prompter.select(prompt, labels, default_index)?;
    Ok(choices[selection])
}

/// Collects a full project configuration interactively.
///
/// Question order and defaults match the non-interactive surface; the
/// observability tool is only asked for when observability was confirmed.
pub fn interactive_config(prompter: &dyn Prompter) -> Result<ProjectConfig> {
    let project_name = prompter.input("Project name", "my-genai-app")?;

    let llm_provider = select_choice(
        prompter,
        "Select LLM provider",
        &LlmProvider::ALL,
        &LlmProvider::ALL.map(|choice| choice.label()),
        LlmProvider::OpenAi,
    )?;

    let orchestrator = select_choice(
        prompter,
        "Select orchestration framework",
        &Orchestrator::ALL,
        &Orchestrator::ALL.map(|choice| choice.label()),
        Orchestrator::LangChain,
    )?;

    let vector_db = select_choice(
        prompter,
        "Select vector database",
        &VectorDb::ALL,
        &VectorDb::ALL.map(|choice| choice.label()),
        VectorDb::ChromaDb,
    )?;

    let ui_framework = select_choice(
        prompter,
        "Select UI framework",
        &UiFramework::ALL,
        &UiFramework::ALL.map(|choice| choice.label()),
        UiFramework::Streamlit,
    )?;

    let dependency_manager = select_choice(
        prompter,
        "Select dependency manager",
        &DependencyManager::ALL,
        &DependencyManager::ALL.map(|choice| choice.label()),
        DependencyManager::Pip,
    )?;

    let enable_docker = prompter.confirm("Include Docker configuration?", true)?;
    let enable_observability =
        prompter.confirm("Enable observability/tracing?", false)?;

    let observability_tool = if enable_observability {
        Some(select_choice(
            prompter,
            "Select observability tool",
            &ObservabilityTool::ALL,
            &ObservabilityTool::ALL.map(|choice| choice.label()),
            ObservabilityTool::LangSmith,
        )?)
    } else {
        None
    };

    ProjectConfig::new(
        project_name,
        llm_provider,
        orchestrator,
        vector_db,
        ui_framework,
        dependency_manager,
        enable_docker,
        enable_observability,
        observability_tool,
    )
}
