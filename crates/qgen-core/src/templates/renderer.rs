//! Handlebars rendering of embedded templates

use crate::error::{Result, ScaffoldError};
use crate::project::ProjectRequest;
use handlebars::Handlebars;

/// Registry of parsed template bodies
pub struct TemplateRenderer {
    registry: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Create an empty renderer.
    ///
    /// Strict mode turns a misspelled placeholder into a render error instead
    /// of an empty string. Escaping is off because the output is source code,
    /// not HTML.
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(handlebars::no_escape);
        Self { registry }
    }

    /// Parse and register a template body under `id`
    pub fn register(&mut self, id: &str, body: &str) -> Result<()> {
        self.registry
            .register_template_string(id, body)
            .map_err(|e| ScaffoldError::Catalog(format!("template '{}': {}", id, e)))
    }

    pub fn has_template(&self, id: &str) -> bool {
        self.registry.has_template(id)
    }

    /// Render a registered template with the project request as context
    pub fn render(&self, id: &str, request: &ProjectRequest) -> Result<String> {
        self.registry
            .render(id, request)
            .map_err(|e| ScaffoldError::Render {
                template: id.to_string(),
                source: Box::new(e),
            })
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}
