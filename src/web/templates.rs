//! Template rendering
//!
//! This module provides page rendering using Tera. Templates are
//! embedded into the binary at compile time so the server and the
//! tests run from any working directory.

use anyhow::{anyhow, Context, Result};
use rust_embed::RustEmbed;
use tera::Tera;

pub use tera::Context as TeraContext;

/// Embedded page templates
#[derive(RustEmbed)]
#[folder = "templates/"]
#[include = "*.html"]
struct TemplateAssets;

/// Template engine wrapper for rendering pages
pub struct Templates {
    tera: Tera,
}

impl Templates {
    /// Compile all embedded templates.
    ///
    /// # Errors
    /// Returns an error if a template is missing, is not UTF-8, or
    /// fails to parse.
    pub fn new() -> Result<Self> {
        let mut raw = Vec::new();
        for name in TemplateAssets::iter() {
            let file = TemplateAssets::get(&name)
                .ok_or_else(|| anyhow!("Missing embedded template: {}", name))?;
            let source = std::str::from_utf8(file.data.as_ref())
                .with_context(|| format!("Template is not UTF-8: {}", name))?
                .to_string();
            raw.push((name.to_string(), source));
        }

        let mut tera = Tera::default();
        tera.add_raw_templates(raw)
            .context("Failed to compile templates")?;

        Ok(Self { tera })
    }

    /// Render a template with the given context
    pub fn render(&self, template: &str, context: &TeraContext) -> Result<String> {
        self.tera
            .render(template, context)
            .with_context(|| format!("Failed to render template: {}", template))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_templates_compile() {
        Templates::new().expect("Templates should compile");
    }

    #[test]
    fn test_render_users_page() {
        let templates = Templates::new().expect("Templates should compile");
        let mut context = TeraContext::new();
        context.insert("users", &Vec::<crate::models::User>::new());

        let html = templates
            .render("users.html", &context)
            .expect("Render should succeed");

        assert!(html.contains("id=\"users-list\""));
    }

    #[test]
    fn test_render_unknown_template_fails() {
        let templates = Templates::new().expect("Templates should compile");

        let result = templates.render("nope.html", &TeraContext::new());

        assert!(result.is_err());
    }
}
