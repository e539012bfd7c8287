//! genai-scaffold's main application entry point and orchestration logic.
//! Handles command-line argument parsing, configuration assembly and the
//! generation flow.

use std::path::PathBuf;

use genai_scaffold::{
    cli::{get_args, Args},
    config::{DependencyManager, ProjectConfig, UiFramework},
    error::{default_error_handler, Result},
    logger::init_logger,
    processor::Processor,
    prompt::{interactive_config, DialoguerPrompter, Prompter},
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Assembles the configuration from CLI flags, falling back to the
/// interactive flow when requested or when stack options are missing.
fn build_config(args: &Args, prompter: &dyn Prompter) -> Result<ProjectConfig> {
    if args.wants_interactive() {
        return interactive_config(prompter);
    }

    ProjectConfig::from_values(
        args.project_name.as_deref().unwrap_or_default(),
        args.llm_provider.as_deref().unwrap_or_default(),
        args.orchestrator.as_deref().unwrap_or_default(),
        args.vector_db.as_deref().unwrap_or_default(),
        args.ui_framework.as_deref().unwrap_or_default(),
        &args.dependency_manager,
        !args.no_docker,
        false,
        None,
    )
}

fn print_summary(config: &ProjectConfig) {
    println!("Project configuration:");
    println!("  Project name:       {}", config.project_name);
    println!("  LLM provider:       {}", config.llm_provider);
    println!("  Orchestrator:       {}", config.orchestrator);
    println!("  Vector DB:          {}", config.vector_db);
    println!("  UI framework:       {}", config.ui_framework);
    println!("  Dependency manager: {}", config.dependency_manager);
    println!("  Docker:             {}", if config.enable_docker { "yes" } else { "no" });
    match config.observability_tool {
        Some(tool) => println!("  Observability:      {}", tool),
        None => println!("  Observability:      no"),
    }
}

fn print_next_steps(config: &ProjectConfig) {
    println!("\nNext steps:");
    println!("  cd {}", config.project_name);
    println!("  cp .env.example .env  # then add your API keys");
    if config.dependency_manager == DependencyManager::Poetry {
        println!("  poetry install");
    } else {
        println!("  make setup  # or: pip install -r requirements.txt");
    }
    if config.enable_docker {
        println!("  docker-compose up -d");
    }
    if config.ui_framework != UiFramework::None {
        println!("  make run");
    }
    println!("  make test");
}

/// Main application logic execution.
///
/// # Flow
/// 1. Builds the configuration (CLI flags or interactive prompts)
/// 2. Resolves and renders the template set into the destination tree
/// 3. Prints the configuration summary and follow-up hints
fn run(args: Args) -> Result<()> {
    let prompter = DialoguerPrompter::new();
    let config = build_config(&args, &prompter)?;

    print_summary(&config);

    let output_root = PathBuf::from(&config.project_name);
    let engine = MiniJinjaRenderer::new();
    let processor = Processor::new(&engine, &output_root);
    processor.generate(&config)?;

    println!("\nProject generated successfully in {}.", output_root.display());
    print_next_steps(&config);
    Ok(())
}
