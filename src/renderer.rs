//! Text expansion for placeholder files, backed by MiniJinja.
use crate::error::Result;
use minijinja::{Environment, UndefinedBehavior};

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer that keeps trailing newlines and rejects undefined variables.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a template string using MiniJinja.
    ///
    /// # Errors
    /// * `Error::MinijinjaError` if the template does not parse or fails to render
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        Ok(self.env.render_str(template, context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serde_json::json;

    #[test]
    fn renders_variables_and_branches() {
        let engine = MiniJinjaRenderer::new();
        let context = json!({ "packageName": "demo", "needsVitest": true });

        let rendered = engine
            .render("{{ packageName }}{% if needsVitest %} + vitest{% endif %}\n", &context)
            .unwrap();

        assert_eq!(rendered, "demo + vitest\n");
    }

    #[test]
    fn undefined_variable_is_an_error() {
        let engine = MiniJinjaRenderer::new();
        let result = engine.render("{{ missing }}", &json!({}));
        assert!(matches!(result, Err(Error::MinijinjaError(_))));
    }
}
