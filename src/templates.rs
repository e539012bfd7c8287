//! Embedded template registry.
//! Template bodies live under `templates/` in the source tree and are
//! compiled into the binary, so a generation run needs no template files on
//! disk. Lookup is by the identifier used in the file manifest.

use crate::error::{Error, Result};

/// Registered template bodies, keyed by manifest identifier.
static TEMPLATES: &[(&str, &str)] = &[
    ("README.md.j2", include_str!("../templates/README.md.j2")),
    ("env.example.j2", include_str!("../templates/env.example.j2")),
    ("gitignore.j2", include_str!("../templates/gitignore.j2")),
    ("Makefile.j2", include_str!("../templates/Makefile.j2")),
    ("pytest.ini.j2", include_str!("../templates/pytest.ini.j2")),
    ("src/__init__.py.j2", include_str!("../templates/src/__init__.py.j2")),
    ("src/config.py.j2", include_str!("../templates/src/config.py.j2")),
    (
        "src/prompts/__init__.py.j2",
        include_str!("../templates/src/prompts/__init__.py.j2"),
    ),
    ("src/prompts/loader.py.j2", include_str!("../templates/src/prompts/loader.py.j2")),
    (
        "src/prompts/templates.yaml.j2",
        include_str!("../templates/src/prompts/templates.yaml.j2"),
    ),
    ("src/utils/__init__.py.j2", include_str!("../templates/src/utils/__init__.py.j2")),
    ("src/utils/logger.py.j2", include_str!("../templates/src/utils/logger.py.j2")),
    ("src/llm/__init__.py.j2", include_str!("../templates/src/llm/__init__.py.j2")),
    ("src/llm/client.py.j2", include_str!("../templates/src/llm/client.py.j2")),
    ("src/rag_pipeline.py.j2", include_str!("../templates/src/rag_pipeline.py.j2")),
    ("src/vector_store.py.j2", include_str!("../templates/src/vector_store.py.j2")),
    ("app_streamlit.py.j2", include_str!("../templates/app_streamlit.py.j2")),
    ("app_gradio.py.j2", include_str!("../templates/app_gradio.py.j2")),
    ("app_fastapi.py.j2", include_str!("../templates/app_fastapi.py.j2")),
    ("pyproject.toml.j2", include_str!("../templates/pyproject.toml.j2")),
    ("requirements.txt.j2", include_str!("../templates/requirements.txt.j2")),
    (
        "requirements-dev.txt.j2",
        include_str!("../templates/requirements-dev.txt.j2"),
    ),
    ("Dockerfile.j2", include_str!("../templates/Dockerfile.j2")),
    ("docker-compose.yml.j2", include_str!("../templates/docker-compose.yml.j2")),
    (
        "src/observability.py.j2",
        include_str!("../templates/src/observability.py.j2"),
    ),
    ("tests/__init__.py.j2", include_str!("../templates/tests/__init__.py.j2")),
    ("tests/conftest.py.j2", include_str!("../templates/tests/conftest.py.j2")),
    ("tests/test_example.py.j2", include_str!("../templates/tests/test_example.py.j2")),
];

/// Returns the body of a registered template.
///
/// # Errors
/// * `Error::TemplateNotFoundError` if the identifier is not registered
pub fn template_body(name: &str) -> Result<&'static str> {
    TEMPLATES
        .iter()
        .find(|(registered, _)| *registered == name)
        .map(|(_, body)| *body)
        .ok_or_else(|| Error::TemplateNotFoundError { name: name.to_string() })
}

/// Returns the identifiers of all registered templates in registry order.
pub fn template_names() -> impl Iterator<Item = &'static str> {
    TEMPLATES.iter().map(|(name, _)| *name)
}
