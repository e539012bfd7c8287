//! genai-scaffold generates production-ready Generative AI project trees
//! from an embedded template set, driven by a validated record of
//! technology choices.

/// Command-line interface module for the genai-scaffold application
pub mod cli;

/// Configuration model: technology enums and the validated project record
pub mod config;

/// Render context derivation from the configuration
pub mod context;

/// Error types and handling for the genai-scaffold application
pub mod error;

/// Logger initialization
pub mod logger;

/// Declarative manifest of files, directories and marker files
pub mod manifest;

/// Core generation orchestration
/// Combines all components to write the final output tree
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// Template rendering functionality
pub mod renderer;

/// Embedded template registry
pub mod templates;
