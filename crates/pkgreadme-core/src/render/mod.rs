pub mod context;
pub mod templates;

pub use context::{ContextBuilder, HeaderContext, RenderContext};
pub use templates::{TemplateSet, README_TEMPLATE};

use crate::error::Result;

/// Render the final README from a fully assembled context.
pub fn compose_readme(templates: &TemplateSet, context: &RenderContext) -> Result<String> {
    let rendered = templates.render(README_TEMPLATE, &context.to_tera_context()?)?;
    Ok(format!("{}\n", rendered.trim_end()))
}
