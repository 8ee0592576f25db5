use serde::Serialize;
use tera::{Context, Tera};

use crate::error::NoteError;

/// Render a plain-text Tera template with any serializable value as context.
///
/// The value's fields become the template variables. Output is never
/// HTML-escaped; notes are plain text.
pub fn render_template<T: Serialize>(
    template_name: &str,
    template_content: &str,
    value: &T,
) -> Result<String, NoteError> {
    let mut tera = Tera::default();
    tera.autoescape_on(vec![]);
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| NoteError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(value)?;
    let context =
        Context::from_value(value).map_err(|e| NoteError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}
