//! Printable report rendering
//!
//! Renders report documents to Markdown through embedded Tera templates,
//! one template per report kind.

use rust_embed::Embed;
use serde::Serialize;
use tera::Tera;
use thiserror::Error;

use crate::core::identity::ReportKind;

#[derive(Embed)]
#[folder = "templates/"]
struct EmbeddedTemplates;

/// Errors raised while rendering a report
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(String),

    #[error("no template registered for {0}")]
    MissingTemplate(ReportKind),
}

/// Renders reports to printable Markdown
pub struct ReportRenderer {
    tera: Tera,
}

impl ReportRenderer {
    /// Load all embedded templates
    pub fn new() -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        for filename in EmbeddedTemplates::iter() {
            if let Some(file) = EmbeddedTemplates::get(&filename) {
                if let Ok(template_str) = std::str::from_utf8(&file.data) {
                    tera.add_raw_template(&filename, template_str)
                        .map_err(|e| RenderError::Template(e.to_string()))?;
                }
            }
        }
        Ok(Self { tera })
    }

    /// Render a report document to Markdown
    pub fn render<T: Serialize>(&self, kind: ReportKind, report: &T) -> Result<String, RenderError> {
        let name = Self::template_name(kind);
        if !self.tera.get_template_names().any(|n| n == name) {
            return Err(RenderError::MissingTemplate(kind));
        }

        let context = tera::Context::from_serialize(report)
            .map_err(|e| RenderError::Template(e.to_string()))?;
        self.tera
            .render(name, &context)
            .map_err(|e| RenderError::Template(e.to_string()))
    }

    fn template_name(kind: ReportKind) -> &'static str {
        match kind {
            ReportKind::Xfmr => "transformer.md.tera",
            ReportKind::Swgr => "switchgear.md.tera",
            ReportKind::Pnl => "panelboard.md.tera",
            ReportKind::Mtrs => "motor_starter.md.tera",
        }
    }
}
