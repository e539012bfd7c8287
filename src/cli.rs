//! Command-line interface implementation for genai-scaffold.
//! Provides argument parsing and help text formatting using clap.

use clap::Parser;

/// Command-line arguments structure for genai-scaffold.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "genai-scaffold: production-ready Generative AI project scaffolding tool",
    long_about = None
)]
pub struct Args {
    /// Name of the project to create; also the output directory
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: Option<String>,

    /// LLM provider (openai, anthropic, azure, ollama, local)
    #[arg(long = "provider", value_name = "PROVIDER")]
    pub llm_provider: Option<String>,

    /// Orchestration framework (langchain, llamaindex, dspy, none)
    #[arg(long, value_name = "ORCHESTRATOR")]
    pub orchestrator: Option<String>,

    /// Vector database (pinecone, chromadb, qdrant, pgvector)
    #[arg(long = "vector-db", value_name = "VECTOR_DB")]
    pub vector_db: Option<String>,

    /// UI framework (streamlit, gradio, fastapi, none)
    #[arg(long = "ui", value_name = "UI")]
    pub ui_framework: Option<String>,

    /// Dependency manager (pip, poetry)
    #[arg(long = "deps", value_name = "DEPS", default_value = "pip")]
    pub dependency_manager: String,

    /// Skip the Docker build and compose files
    #[arg(long)]
    pub no_docker: bool,

    /// Collect all fields interactively. Also entered automatically when
    /// any of the stack options is missing.
    #[arg(short, long)]
    pub interactive: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// True when the interactive flow should run: either requested
    /// explicitly or any stack field was left unspecified.
    pub fn wants_interactive(&self) -> bool {
        self.interactive
            || self.project_name.is_none()
            || self.llm_provider.is_none()
            || self.orchestrator.is_none()
            || self.vector_db.is_none()
            || self.ui_framework.is_none()
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// Every field is optional; missing stack options route the run into the
/// interactive flow instead of failing, so clap's own error handling only
/// fires for malformed input.
pub fn get_args() -> Args {
    Args::parse()
}
