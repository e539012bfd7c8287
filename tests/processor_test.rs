use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use genai_scaffold::config::{
    DependencyManager, LlmProvider, ObservabilityTool, Orchestrator, ProjectConfig,
    UiFramework, VectorDb,
};
use genai_scaffold::processor::Processor;
use genai_scaffold::renderer::MiniJinjaRenderer;
use tempfile::TempDir;
use walkdir::WalkDir;

fn generate_into(config: &ProjectConfig, root: &Path) {
    let engine = MiniJinjaRenderer::new();
    let processor = Processor::new(&engine, root);
    processor.generate(config).unwrap();
}

fn generate(config: &ProjectConfig) -> TempDir {
    let dir = TempDir::new().unwrap();
    generate_into(config, dir.path());
    dir
}

fn read(root: &Path, relative: &str) -> String {
    fs::read_to_string(root.join(relative))
        .unwrap_or_else(|e| panic!("cannot read {}: {}", relative, e))
}

fn generated_files(root: &Path) -> BTreeSet<String> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            entry
                .path()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

fn scenario_one_config() -> ProjectConfig {
    ProjectConfig::new(
        "test-app",
        LlmProvider::OpenAi,
        Orchestrator::LangChain,
        VectorDb::ChromaDb,
        UiFramework::Streamlit,
        DependencyManager::Pip,
        true,
        false,
        None,
    )
    .unwrap()
}

#[test_log::test]
fn test_pip_docker_scenario() {
    let dir = generate(&scenario_one_config());
    let files = generated_files(dir.path());

    for expected in [
        "README.md",
        ".env.example",
        ".gitignore",
        "Makefile",
        "requirements.txt",
        "requirements-dev.txt",
        "Dockerfile",
        "docker-compose.yml",
        "app.py",
        "src/llm/client.py",
        "src/prompts/loader.py",
        "src/vector_store.py",
        "src/rag_pipeline.py",
        "tests/test_example.py",
    ] {
        assert!(files.contains(expected), "missing {}", expected);
    }

    assert!(!files.contains("pyproject.toml"));
    assert!(!files.contains("src/observability.py"));
}

#[test]
fn test_poetry_scenario() {
    let mut config = scenario_one_config();
    config.dependency_manager = DependencyManager::Poetry;
    let dir = generate(&config);

    assert!(dir.path().join("pyproject.toml").exists());
    assert!(!dir.path().join("requirements.txt").exists());
    assert!(!dir.path().join("requirements-dev.txt").exists());
}

#[test]
fn test_observability_scenario() {
    let mut config = scenario_one_config();
    config.enable_observability = true;
    config.observability_tool = Some(ObservabilityTool::LangSmith);
    let dir = generate(&config);

    let observability = read(dir.path(), "src/observability.py");
    assert!(observability.contains("langsmith"));
    assert!(!observability.contains("wandb"));
}

#[test]
fn test_readme_reflects_stack_choices() {
    let config = ProjectConfig::new(
        "my-rag-app",
        LlmProvider::Anthropic,
        Orchestrator::LlamaIndex,
        VectorDb::Pinecone,
        UiFramework::Gradio,
        DependencyManager::Pip,
        true,
        false,
        None,
    )
    .unwrap();
    let dir = generate(&config);

    let readme = read(dir.path(), "README.md");
    for literal in ["my-rag-app", "anthropic", "llamaindex", "pinecone", "gradio"] {
        assert!(readme.contains(literal), "README missing '{}'", literal);
    }
}

#[test]
fn test_ui_entry_point_content() {
    let mut config = scenario_one_config();

    config.ui_framework = UiFramework::FastApi;
    let dir = generate(&config);
    assert!(read(dir.path(), "app.py").contains("FastAPI"));

    config.ui_framework = UiFramework::Streamlit;
    let dir = generate(&config);
    assert!(read(dir.path(), "app.py").contains("streamlit"));

    config.ui_framework = UiFramework::Gradio;
    let dir = generate(&config);
    assert!(read(dir.path(), "app.py").contains("gradio"));

    config.ui_framework = UiFramework::None;
    let dir = generate(&config);
    assert!(!dir.path().join("app.py").exists());
}

#[test]
fn test_client_content_varies_by_provider() {
    let mut config = scenario_one_config();
    config.llm_provider = LlmProvider::Anthropic;
    let dir = generate(&config);

    let client = read(dir.path(), "src/llm/client.py");
    assert!(client.contains("anthropic"));
    assert!(!client.contains("OpenAI("));
}

#[test]
fn test_marker_files_in_empty_dirs() {
    let dir = generate(&scenario_one_config());

    for keep in [
        "data/cache/.gitkeep",
        "data/outputs/.gitkeep",
        "data/embeddings/.gitkeep",
        "notebooks/.gitkeep",
    ] {
        let path = dir.path().join(keep);
        assert!(path.exists(), "missing {}", keep);
        assert_eq!(fs::metadata(&path).unwrap().len(), 0);
    }

    assert!(dir.path().join("config").is_dir());
}

#[test]
fn test_generation_is_reproducible() {
    let config = scenario_one_config();
    let first = generate(&config);
    let second = generate(&config);

    assert!(!dir_diff::is_different(first.path(), second.path()).unwrap());
}

#[test]
fn test_regeneration_overwrites_in_place() {
    let config = scenario_one_config();
    let dir = generate(&config);
    let before = read(dir.path(), "README.md");

    generate_into(&config, dir.path());
    let after = read(dir.path(), "README.md");

    assert_eq!(before, after);

    let reference = generate(&config);
    assert!(!dir_diff::is_different(dir.path(), reference.path()).unwrap());
}

#[test]
fn test_destination_root_is_created() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("deep").join("target");

    generate_into(&scenario_one_config(), &nested);

    assert!(nested.join("README.md").exists());
}
