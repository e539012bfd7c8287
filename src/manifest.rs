//! Declarative file manifest for generated projects.
//! The full set of renderable files, the directories to create and the
//! marker files to drop are fixed tables; resolution filters the file table
//! against the configuration and never touches the filesystem.

use crate::config::{DependencyManager, Orchestrator, ProjectConfig, UiFramework};

/// Suffix identifying registered template bodies. Destinations are explicit
/// fields, so the suffix is a naming convention for the registry only.
pub const TEMPLATE_SUFFIX: &str = ".j2";

/// Condition under which a file rule applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// Part of the base structure, always rendered
    Always,
    /// Rendered unless the orchestrator is `none`
    HasOrchestrator,
    /// Rendered for exactly this UI framework
    Ui(UiFramework),
    /// Rendered for exactly this dependency manager
    Deps(DependencyManager),
    /// Rendered when Docker support is enabled
    Docker,
    /// Rendered when observability is enabled
    Observability,
}

impl Condition {
    /// Evaluates the condition against a configuration.
    pub fn is_met(&self, config: &ProjectConfig) -> bool {
        match self {
            Condition::Always => true,
            Condition::HasOrchestrator => config.orchestrator != Orchestrator::None,
            Condition::Ui(framework) => config.ui_framework == *framework,
            Condition::Deps(manager) => config.dependency_manager == *manager,
            Condition::Docker => config.enable_docker,
            Condition::Observability => config.enable_observability,
        }
    }
}

/// A single (template body, destination) descriptor with its inclusion
/// condition. The destination is relative to the output root.
#[derive(Debug, PartialEq, Eq)]
pub struct FileRule {
    pub template: &'static str,
    pub destination: &'static str,
    pub condition: Condition,
}

const fn rule(
    template: &'static str,
    destination: &'static str,
    condition: Condition,
) -> FileRule {
    FileRule { template, destination, condition }
}

/// Ordered manifest of every file the generator can produce.
pub const FILE_RULES: &[FileRule] = &[
    // Base structure
    rule("README.md.j2", "README.md", Condition::Always),
    rule("env.example.j2", ".env.example", Condition::Always),
    rule("gitignore.j2", ".gitignore", Condition::Always),
    rule("Makefile.j2", "Makefile", Condition::Always),
    rule("pytest.ini.j2", "pytest.ini", Condition::Always),
    rule("src/__init__.py.j2", "src/__init__.py", Condition::Always),
    rule("src/config.py.j2", "src/config.py", Condition::Always),
    // Prompt management
    rule("src/prompts/__init__.py.j2", "src/prompts/__init__.py", Condition::Always),
    rule("src/prompts/loader.py.j2", "src/prompts/loader.py", Condition::Always),
    rule(
        "src/prompts/templates.yaml.j2",
        "src/prompts/templates.yaml",
        Condition::Always,
    ),
    // Utils
    rule("src/utils/__init__.py.j2", "src/utils/__init__.py", Condition::Always),
    rule("src/utils/logger.py.j2", "src/utils/logger.py", Condition::Always),
    // LLM client: one file per run, content varies by provider
    rule("src/llm/__init__.py.j2", "src/llm/__init__.py", Condition::Always),
    rule("src/llm/client.py.j2", "src/llm/client.py", Condition::Always),
    // Orchestration pipeline
    rule("src/rag_pipeline.py.j2", "src/rag_pipeline.py", Condition::HasOrchestrator),
    // Vector store: content varies by vector_db
    rule("src/vector_store.py.j2", "src/vector_store.py", Condition::Always),
    // UI entry point: at most one of these applies
    rule("app_streamlit.py.j2", "app.py", Condition::Ui(UiFramework::Streamlit)),
    rule("app_gradio.py.j2", "app.py", Condition::Ui(UiFramework::Gradio)),
    rule("app_fastapi.py.j2", "app.py", Condition::Ui(UiFramework::FastApi)),
    // Dependency files: poetry and pip outcomes are mutually exclusive
    rule("pyproject.toml.j2", "pyproject.toml", Condition::Deps(DependencyManager::Poetry)),
    rule("requirements.txt.j2", "requirements.txt", Condition::Deps(DependencyManager::Pip)),
    rule(
        "requirements-dev.txt.j2",
        "requirements-dev.txt",
        Condition::Deps(DependencyManager::Pip),
    ),
    // Docker pair
    rule("Dockerfile.j2", "Dockerfile", Condition::Docker),
    rule("docker-compose.yml.j2", "docker-compose.yml", Condition::Docker),
    // Observability: the tool selects content through context, not the file
    rule("src/observability.py.j2", "src/observability.py", Condition::Observability),
    // Tests
    rule("tests/__init__.py.j2", "tests/__init__.py", Condition::Always),
    rule("tests/conftest.py.j2", "tests/conftest.py", Condition::Always),
    rule("tests/test_example.py.j2", "tests/test_example.py", Condition::Always),
];

/// Directories created for every project, parents before children.
pub const PROJECT_DIRS: &[&str] = &[
    "src",
    "src/llm",
    "src/prompts",
    "src/utils",
    "tests",
    "config",
    "data/cache",
    "data/outputs",
    "data/embeddings",
    "notebooks",
];

/// Otherwise-empty directories that receive a zero-byte `.gitkeep` so
/// version control can track them.
pub const KEEP_DIRS: &[&str] =
    &["data/cache", "data/outputs", "data/embeddings", "notebooks"];

/// Resolves the ordered set of files to render for a configuration.
///
/// The result is deterministic: for a fixed configuration the same rules
/// are returned in `FILE_RULES` order on every call.
pub fn resolve(config: &ProjectConfig) -> Vec<&'static FileRule> {
    FILE_RULES.iter().filter(|rule| rule.condition.is_met(config)).collect()
}
