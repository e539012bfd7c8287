use std::cell::RefCell;
use std::collections::VecDeque;

use genai_scaffold::config::{
    DependencyManager, LlmProvider, ObservabilityTool, Orchestrator, UiFramework,
    VectorDb,
};
use genai_scaffold::error::Result;
use genai_scaffold::prompt::{interactive_config, Prompter};

/// Prompter fed from pre-scripted answers, recording every question asked.
struct ScriptedPrompter {
    inputs: RefCell<VecDeque<String>>,
    selections: RefCell<VecDeque<usize>>,
    confirmations: RefCell<VecDeque<bool>>,
    questions: RefCell<Vec<String>>,
    select_defaults: RefCell<Vec<usize>>,
}

impl ScriptedPrompter {
    fn new(inputs: &[&str], selections: &[usize], confirmations: &[bool]) -> Self {
        Self {
            inputs: RefCell::new(inputs.iter().map(|s| s.to_string()).collect()),
            selections: RefCell::new(selections.iter().copied().collect()),
            confirmations: RefCell::new(confirmations.iter().copied().collect()),
            questions: RefCell::new(Vec::new()),
            select_defaults: RefCell::new(Vec::new()),
        }
    }

    fn remaining_selections(&self) -> usize {
        self.selections.borrow().len()
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&self, prompt: &str, _default: &str) -> Result<String> {
        self.questions.borrow_mut().push(prompt.to_string());
        Ok(self.inputs.borrow_mut().pop_front().expect("unexpected input prompt"))
    }

    fn select(&self, prompt: &str, _items: &[&str], default: usize) -> Result<usize> {
        self.questions.borrow_mut().push(prompt.to_string());
        self.select_defaults.borrow_mut().push(default);
        Ok(self
            .selections
            .borrow_mut()
            .pop_front()
            .expect("unexpected select prompt"))
    }

    fn confirm(&self, prompt: &str, _default: bool) -> Result<bool> {
        self.questions.borrow_mut().push(prompt.to_string());
        Ok(self
            .confirmations
            .borrow_mut()
            .pop_front()
            .expect("unexpected confirm prompt"))
    }
}

#[test]
fn test_interactive_flow_builds_config() {
    // openai, langchain, chromadb (index 1), streamlit, pip (index 1)
    let prompter =
        ScriptedPrompter::new(&["demo-app"], &[0, 0, 1, 0, 1], &[true, false]);

    let config = interactive_config(&prompter).unwrap();

    assert_eq!(config.project_name, "demo-app");
    assert_eq!(config.llm_provider, LlmProvider::OpenAi);
    assert_eq!(config.orchestrator, Orchestrator::LangChain);
    assert_eq!(config.vector_db, VectorDb::ChromaDb);
    assert_eq!(config.ui_framework, UiFramework::Streamlit);
    assert_eq!(config.dependency_manager, DependencyManager::Pip);
    assert!(config.enable_docker);
    assert!(!config.enable_observability);
    assert_eq!(config.observability_tool, None);
}

#[test]
fn test_observability_question_only_when_enabled() {
    let disabled =
        ScriptedPrompter::new(&["demo-app"], &[0, 0, 1, 0, 1], &[true, false]);
    interactive_config(&disabled).unwrap();
    assert_eq!(disabled.remaining_selections(), 0);
    assert!(!disabled
        .questions
        .borrow()
        .iter()
        .any(|q| q.contains("observability tool")));

    let enabled =
        ScriptedPrompter::new(&["demo-app"], &[0, 0, 1, 0, 1, 1], &[true, true]);
    let config = interactive_config(&enabled).unwrap();
    assert_eq!(config.observability_tool, Some(ObservabilityTool::Wandb));
    assert!(enabled
        .questions
        .borrow()
        .iter()
        .any(|q| q.contains("observability tool")));
}

#[test]
fn test_select_defaults_match_documented_choices() {
    let prompter =
        ScriptedPrompter::new(&["demo-app"], &[0, 0, 1, 0, 1], &[true, false]);
    interactive_config(&prompter).unwrap();

    let defaults = prompter.select_defaults.borrow();
    // provider=openai, orchestrator=langchain, vector_db=chromadb,
    // ui=streamlit, deps=pip
    assert_eq!(defaults.as_slice(), &[0, 0, 1, 0, 1]);
}

#[test]
fn test_question_order_is_stable() {
    let prompter =
        ScriptedPrompter::new(&["demo-app"], &[0, 0, 1, 0, 1], &[true, false]);
    interactive_config(&prompter).unwrap();

    let questions = prompter.questions.borrow();
    assert_eq!(questions.len(), 8);
    assert!(questions[0].contains("Project name"));
    assert!(questions[1].contains("LLM provider"));
    assert!(questions[questions.len() - 1].contains("observability"));
}
