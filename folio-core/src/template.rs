use std::path::Path;

use tera::{Context, Tera};

#[derive(Debug)]
pub enum TemplateError {
    Tera(tera::Error),
}

impl From<tera::Error> for TemplateError {
    fn from(err: tera::Error) -> Self {
        TemplateError::Tera(err)
    }
}

impl std::fmt::Display for TemplateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateError::Tera(e) => write!(f, "Template error: {}", e),
        }
    }
}

impl std::error::Error for TemplateError {}

/// Renders named theme templates against a per-page context.
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Loads every `*.html` template under the theme directory.
    pub fn new<P: AsRef<Path>>(theme_dir: P) -> Result<Self, TemplateError> {
        let glob = format!("{}/**/*.html", theme_dir.as_ref().display());
        let tera = Tera::new(&glob)?;

        Ok(Self { tera })
    }

    pub fn render(&self, template: &str, context: &Context) -> Result<String, TemplateError> {
        Ok(self.tera.render(template, context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_a_named_template() {
        let theme = tempfile::tempdir().unwrap();
        std::fs::write(
            theme.path().join("static-page.html"),
            "<title>{{ page_title }}</title>",
        )
        .unwrap();

        let renderer = TemplateRenderer::new(theme.path()).unwrap();
        let mut context = Context::new();
        context.insert("page_title", "Bob Alan");

        let html = renderer.render("static-page.html", &context).unwrap();
        assert_eq!(html, "<title>Bob Alan</title>");
    }

    #[test]
    fn unknown_template_is_an_error() {
        let theme = tempfile::tempdir().unwrap();
        std::fs::write(theme.path().join("static-page.html"), "x").unwrap();

        let renderer = TemplateRenderer::new(theme.path()).unwrap();
        assert!(renderer.render("carousel.html", &Context::new()).is_err());
    }
}
