//! Core generation orchestration.
//! Renders every resolved descriptor into the output tree: directories
//! first, then rendered files, then version-control marker files.

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ProjectConfig;
use crate::context::RenderContext;
use crate::error::Result;
use crate::manifest::{resolve, KEEP_DIRS, PROJECT_DIRS};
use crate::renderer::TemplateRenderer;
use crate::templates::template_body;

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(fs::write(path, content)?)
}

/// Generates a project tree from a configuration.
///
/// Holds the rendering engine and the output root for one run; the
/// configuration is passed to [`Processor::generate`].
pub struct Processor<'a> {
    engine: &'a dyn TemplateRenderer,
    output_root: PathBuf,
}

impl<'a> Processor<'a> {
    pub fn new(engine: &'a dyn TemplateRenderer, output_root: impl Into<PathBuf>) -> Self {
        Self { engine, output_root: output_root.into() }
    }

    /// Renders the resolved file set for `config` into the output root.
    ///
    /// Directory creation is idempotent and file writes overwrite
    /// unconditionally. The first error aborts the run; files already
    /// written stay on disk.
    ///
    /// # Errors
    /// * `Error::TemplateNotFoundError` if a descriptor names an
    ///   unregistered template
    /// * `Error::MinijinjaError` if rendering fails
    /// * `Error::IoError` if a directory or file cannot be created
    pub fn generate(&self, config: &ProjectConfig) -> Result<()> {
        fs::create_dir_all(&self.output_root)?;

        let context = RenderContext::from(config).to_value()?;

        for dir in PROJECT_DIRS {
            fs::create_dir_all(self.output_root.join(dir))?;
        }

        for rule in resolve(config) {
            let body = template_body(rule.template)?;
            let rendered = self.engine.render(body, &context)?;
            let target = self.output_root.join(rule.destination);
            debug!("Rendering '{}' to '{}'", rule.template, target.display());
            write_file(&target, &rendered)?;
        }

        for dir in KEEP_DIRS {
            write_file(&self.output_root.join(dir).join(".gitkeep"), "")?;
        }

        Ok(())
    }
}
