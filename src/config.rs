//! Configuration model for a single generation run.
//! Every technology choice is a closed enum; out-of-set values are rejected
//! when the configuration is constructed, never at render time.

use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Supported language-model providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    OpenAi,
    Anthropic,
    Azure,
    Ollama,
    Local,
}

impl LlmProvider {
    pub const ALL: [Self; 5] =
        [Self::OpenAi, Self::Anthropic, Self::Azure, Self::Ollama, Self::Local];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::Anthropic => "anthropic",
            Self::Azure => "azure",
            Self::Ollama => "ollama",
            Self::Local => "local",
        }
    }

    /// Human readable name shown in selection lists.
    pub fn label(&self) -> &'static str {
        match self {
            Self::OpenAi => "OpenAI (GPT-4, GPT-3.5)",
            Self::Anthropic => "Anthropic (Claude)",
            Self::Azure => "Azure OpenAI",
            Self::Ollama => "Ollama (Local)",
            Self::Local => "Local (OpenAI-compatible endpoint)",
        }
    }
}

impl fmt::Display for LlmProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LlmProvider {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL.iter().copied().find(|value| value.as_str() == s).ok_or_else(|| {
            Error::ConfigurationError { field: "llm_provider", value: s.to_string() }
        })
    }
}

/// Supported orchestration frameworks. `None` scaffolds raw Python without
/// a pipeline module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orchestrator {
    LangChain,
    LlamaIndex,
    Dspy,
    None,
}

impl Orchestrator {
    pub const ALL: [Self; 4] =
        [Self::LangChain, Self::LlamaIndex, Self::Dspy, Self::None];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LangChain => "langchain",
            Self::LlamaIndex => "llamaindex",
            Self::Dspy => "dspy",
            Self::None => "none",
        }
    }

    /// Human readable name shown in selection lists.
    pub fn label(&self) -> &'static str {
        match self {
            Self::LangChain => "LangChain",
            Self::LlamaIndex => "LlamaIndex",
            Self::Dspy => "DSPy",
            Self::None => "None (Raw Python)",
        }
    }
}

impl fmt::Display for Orchestrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orchestrator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL.iter().copied().find(|value| value.as_str() == s).ok_or_else(|| {
            Error::ConfigurationError { field: "orchestrator", value: s.to_string() }
        })
    }
}

/// Supported vector databases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VectorDb {
    Pinecone,
    ChromaDb,
    Qdrant,
    PgVector,
}

impl VectorDb {
    pub const ALL: [Self; 4] =
        [Self::Pinecone, Self::ChromaDb, Self::Qdrant, Self::PgVector];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pinecone => "pinecone",
            Self::ChromaDb => "chromadb",
            Self::Qdrant => "qdrant",
            Self::PgVector => "pgvector",
        }
    }

    /// Human readable name shown in selection lists.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pinecone => "Pinecone (Cloud)",
            Self::ChromaDb => "ChromaDB (Local)",
            Self::Qdrant => "Qdrant",
            Self::PgVector => "PostgreSQL + pgvector",
        }
    }
}

impl fmt::Display for VectorDb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VectorDb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL.iter().copied().find(|value| value.as_str() == s).ok_or_else(|| {
            Error::ConfigurationError { field: "vector_db", value: s.to_string() }
        })
    }
}

/// Supported UI frameworks. `None` generates no application entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UiFramework {
    Streamlit,
    Gradio,
    FastApi,
    None,
}

impl UiFramework {
    pub const ALL: [Self; 4] =
        [Self::Streamlit, Self::Gradio, Self::FastApi, Self::None];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Streamlit => "streamlit",
            Self::Gradio => "gradio",
            Self::FastApi => "fastapi",
            Self::None => "none",
        }
    }

    /// Human readable name shown in selection lists.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Streamlit => "Streamlit",
            Self::Gradio => "Gradio",
            Self::FastApi => "FastAPI (API only)",
            Self::None => "None",
        }
    }
}

impl fmt::Display for UiFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UiFramework {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL.iter().copied().find(|value| value.as_str() == s).ok_or_else(|| {
            Error::ConfigurationError { field: "ui_framework", value: s.to_string() }
        })
    }
}

/// Supported dependency managers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyManager {
    Poetry,
    Pip,
}

impl DependencyManager {
    pub const ALL: [Self; 2] = [Self::Poetry, Self::Pip];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Poetry => "poetry",
            Self::Pip => "pip",
        }
    }

    /// Human readable name shown in selection lists.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Poetry => "Poetry (pyproject.toml)",
            Self::Pip => "pip (requirements.txt)",
        }
    }
}

impl fmt::Display for DependencyManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DependencyManager {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL.iter().copied().find(|value| value.as_str() == s).ok_or_else(|| {
            Error::ConfigurationError { field: "dependency_manager", value: s.to_string() }
        })
    }
}

/// Supported observability/tracing tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ObservabilityTool {
    LangSmith,
    Wandb,
}

impl ObservabilityTool {
    pub const ALL: [Self; 2] = [Self::LangSmith, Self::Wandb];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LangSmith => "langsmith",
            Self::Wandb => "wandb",
        }
    }

    /// Human readable name shown in selection lists.
    pub fn label(&self) -> &'static str {
        match self {
            Self::LangSmith => "LangSmith",
            Self::Wandb => "Weights & Biases",
        }
    }
}

impl fmt::Display for ObservabilityTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObservabilityTool {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL.iter().copied().find(|value| value.as_str() == s).ok_or_else(|| {
            Error::ConfigurationError { field: "observability_tool", value: s.to_string() }
        })
    }
}

/// Validated record of the user's technology choices for one generation run.
/// Constructed once from CLI flags or interactive answers, read-only
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    pub project_name: String,
    pub llm_provider: LlmProvider,
    pub orchestrator: Orchestrator,
    pub vector_db: VectorDb,
    pub ui_framework: UiFramework,
    pub dependency_manager: DependencyManager,
    pub enable_docker: bool,
    pub enable_observability: bool,
    pub observability_tool: Option<ObservabilityTool>,
}

impl ProjectConfig {
    /// Builds a configuration from already-typed values.
    ///
    /// This is the single validation gate: the project name must be
    /// non-empty and `observability_tool` must be set exactly when
    /// `enable_observability` is true. Enum fields are valid by
    /// construction.
    ///
    /// # Errors
    /// * `Error::ConfigurationError` naming the offending field
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        project_name: impl Into<String>,
        llm_provider: LlmProvider,
        orchestrator: Orchestrator,
        vector_db: VectorDb,
        ui_framework: UiFramework,
        dependency_manager: DependencyManager,
        enable_docker: bool,
        enable_observability: bool,
        observability_tool: Option<ObservabilityTool>,
    ) -> Result<Self> {
        let project_name = project_name.into();
        if project_name.trim().is_empty() {
            return Err(Error::ConfigurationError {
                field: "project_name",
                value: project_name,
            });
        }

        match (enable_observability, observability_tool) {
            (true, None) => {
                return Err(Error::ConfigurationError {
                    field: "observability_tool",
                    value: "unset".to_string(),
                });
            }
            (false, Some(tool)) => {
                return Err(Error::ConfigurationError {
                    field: "observability_tool",
                    value: tool.to_string(),
                });
            }
            _ => {}
        }

        Ok(Self {
            project_name,
            llm_provider,
            orchestrator,
            vector_db,
            ui_framework,
            dependency_manager,
            enable_docker,
            enable_observability,
            observability_tool,
        })
    }

    /// Builds a configuration from raw string values as they arrive from the
    /// command line. Each enum field is parsed fail-fast; the first
    /// out-of-set value aborts with an error naming the field.
    ///
    /// # Errors
    /// * `Error::ConfigurationError` naming the offending field and value
    #[allow(clippy::too_many_arguments)]
    pub fn from_values(
        project_name: &str,
        llm_provider: &str,
        orchestrator: &str,
        vector_db: &str,
        ui_framework: &str,
        dependency_manager: &str,
        enable_docker: bool,
        enable_observability: bool,
        observability_tool: Option<&str>,
    ) -> Result<Self> {
        let observability_tool = observability_tool
            .map(ObservabilityTool::from_str)
            .transpose()?;

        Self::new(
            project_name,
            llm_provider.parse()?,
            orchestrator.parse()?,
            vector_db.parse()?,
            ui_framework.parse()?,
            dependency_manager.parse()?,
            enable_docker,
            enable_observability,
            observability_tool,
        )
    }
}
