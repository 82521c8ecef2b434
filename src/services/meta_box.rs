// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use serde::Serialize;
use tera::{Context, Tera};
use tracing::debug;

use crate::domain::{InputKind, MetaBox, is_image_url};
use crate::error::Result;
use crate::services::form::{FormContext, MetaStore, PostId};
use crate::services::registry::title_case;

const TEMPLATE_NAME: &str = "meta_box.html";

const TEMPLATE: &str = concat!(
    "{% for field in fields %}<p>\n",
    "    <label>{{ field.label }}:</label>\n",
    "    ",
    "{% if field.kind == \"text\" %}",
    "<input type='text' name='{{ field.name }}' value='{{ field.value }}' class='widefat' />",
    "{% elif field.kind == \"textarea\" %}",
    "<textarea name='{{ field.name }}' class='widefat' rows='10'>{{ field.value }}</textarea>",
    "{% elif field.kind == \"checkbox\" %}",
    "<input type='checkbox' name='{{ field.name }}' value='{{ field.raw_label }}'",
    "{% if field.value %} checked{% endif %} />",
    "{% elif field.kind == \"select\" %}",
    "<select name='{{ field.name }}' class='widefat'>",
    "{% for option in field.options %}",
    "<option value='{{ option }}'{% if option == field.value %} selected='selected'{% endif %}>",
    "{{ option }}</option>",
    "{% endfor %}",
    "</select>",
    "{% elif field.kind == \"file\" %}",
    "<input type='file' name='{{ field.name }}' id='{{ field.name }}' />",
    "{% endif %}\n",
    "</p>\n",
    "{% if field.preview %}<p>",
    "{% if field.is_image %}<img src='{{ field.preview }}' alt='' style='max-width: 400px;' />",
    "{% else %}<a href='{{ field.preview }}'>{{ field.preview }}</a>{% endif %}",
    "</p>\n{% endif %}",
    "{% endfor %}",
);

#[derive(Debug, Serialize)]
struct FieldView<'a> {
    label: String,
    raw_label: &'a str,
    name: String,
    kind: &'static str,
    value: String,
    options: &'a [String],
    preview: String,
    is_image: bool,
}

/// Renders meta box fields as edit-screen markup.
pub struct MetaBoxRenderer {
    tera: Tera,
}

impl MetaBoxRenderer {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.set_escape_fn(escape_html);
        tera.add_raw_template(TEMPLATE_NAME, TEMPLATE)?;
        Ok(Self { tera })
    }

    /// Render every field of `meta_box` with its stored value for `post_id`,
    /// recording each field name in `form` for the save step.
    pub fn render(
        &self,
        meta_box: &MetaBox,
        post_id: PostId,
        store: &dyn MetaStore,
        form: &mut FormContext,
    ) -> Result<String> {
        let views: Vec<FieldView<'_>> = meta_box
            .fields
            .iter()
            .map(|field| {
                let name = field.form_name(&meta_box.id);
                let value = store.get(post_id, &name).unwrap_or_default();
                form.record(&name, &field.input);

                let options: &[String] = match &field.input {
                    InputKind::Select { options } => options,
                    _ => Default::default(),
                };
                let preview = if field.input.is_file() {
                    value.clone()
                } else {
                    String::new()
                };

                FieldView {
                    label: title_case(&field.label),
                    raw_label: &field.label,
                    kind: field.input.as_str(),
                    is_image: is_image_url(&preview),
                    name,
                    value,
                    options,
                    preview,
                }
            })
            .collect();

        let mut context = Context::new();
        context.insert("fields", &views);
        let html = self.tera.render(TEMPLATE_NAME, &context)?;

        debug!(
            meta_box = %meta_box.id,
            fields = views.len(),
            "meta box rendered"
        );
        Ok(html)
    }
}

/// Same as `tera::escape_html` except `/` is left as-is, keeping URLs intact.
fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
