//! Render context derivation.
//! The context is an explicit, closed record of every variable the template
//! set can reference; templates cannot see anything that is not listed here.

use crate::config::{
    DependencyManager, LlmProvider, ObservabilityTool, Orchestrator, ProjectConfig,
    UiFramework, VectorDb,
};
use crate::error::Result;
use serde::Serialize;

/// Flat mapping of template variables derived from a [`ProjectConfig`].
///
/// Scalar fields are passed through for direct interpolation; every concrete
/// technology value additionally gets a `use_<value>` flag so template
/// conditionals stay readable. At most one flag per enum family is true.
/// The `none` sentinel of `orchestrator` and `ui_framework` is expressed by
/// the family's flags all being false.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderContext {
    pub project_name: String,
    /// snake_case form of the project name, safe for Python identifiers
    /// and docker-compose service names.
    pub project_slug: String,
    pub llm_provider: LlmProvider,
    pub orchestrator: Orchestrator,
    pub vector_db: VectorDb,
    pub ui_framework: UiFramework,
    pub dependency_manager: DependencyManager,
    pub enable_docker: bool,
    pub enable_observability: bool,
    pub observability_tool: Option<ObservabilityTool>,

    pub use_openai: bool,
    pub use_anthropic: bool,
    pub use_azure: bool,
    pub use_ollama: bool,
    pub use_local: bool,

    pub use_langchain: bool,
    pub use_llamaindex: bool,
    pub use_dspy: bool,

    pub use_pinecone: bool,
    pub use_chromadb: bool,
    pub use_qdrant: bool,
    pub use_pgvector: bool,

    pub use_streamlit: bool,
    pub use_gradio: bool,
    pub use_fastapi: bool,

    pub use_poetry: bool,
    pub use_pip: bool,

    pub use_langsmith: bool,
    pub use_wandb: bool,
}

impl RenderContext {
    /// Converts the context into the JSON value the template engine expects.
    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

impl From<&ProjectConfig> for RenderContext {
    fn from(config: &ProjectConfig) -> Self {
        Self {
            project_name: config.project_name.clone(),
            project_slug: cruet::to_snake_case(&config.project_name),
            llm_provider: config.llm_provider,
            orchestrator: config.orchestrator,
            vector_db: config.vector_db,
            ui_framework: config.ui_framework,
            dependency_manager: config.dependency_manager,
            enable_docker: config.enable_docker,
            enable_observability: config.enable_observability,
            observability_tool: config.observability_tool,

            use_openai: config.llm_provider == LlmProvider::OpenAi,
            use_anthropic: config.llm_provider == LlmProvider::Anthropic,
            use_azure: config.llm_provider == LlmProvider::Azure,
            use_ollama: config.llm_provider == LlmProvider::Ollama,
            use_local: config.llm_provider == LlmProvider::Local,

            use_langchain: config.orchestrator == Orchestrator::LangChain,
            use_llamaindex: config.orchestrator == Orchestrator::LlamaIndex,
            use_dspy: config.orchestrator == Orchestrator::Dspy,

            use_pinecone: config.vector_db == VectorDb::Pinecone,
            use_chromadb: config.vector_db == VectorDb::ChromaDb,
            use_qdrant: config.vector_db == VectorDb::Qdrant,
            use_pgvector: config.vector_db == VectorDb::PgVector,

            use_streamlit: config.ui_framework == UiFramework::Streamlit,
            use_gradio: config.ui_framework == UiFramework::Gradio,
            use_fastapi: config.ui_framework == UiFramework::FastApi,

            use_poetry: config.dependency_manager == DependencyManager::Poetry,
            use_pip: config.dependency_manager == DependencyManager::Pip,

            use_langsmith: config.observability_tool
                == Some(ObservabilityTool::LangSmith),
            use_wandb: config.observability_tool == Some(ObservabilityTool::Wandb),
        }
    }
}
