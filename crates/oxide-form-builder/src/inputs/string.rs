//! Text-like input kinds.

use super::{Input, Widget};

/// Renders `<input>` for `string` and its HTML5 variants.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringInput;

impl StringInput {
    fn html_type(input_type: &str) -> &str {
        match input_type {
            "string" => "text",
            other => other,
        }
    }
}

impl Widget for StringInput {
    fn render(&self, input: &mut Input<'_>) -> String {
        input.add_size();
        input.maxlength();
        input.placeholder();
        input.pattern();

        let attrs = input.input_html_options().to_html();
        format!(
            r#"<input type="{}" name="{}" id="{}" {attrs}>"#,
            Self::html_type(input.input_type()),
            input.dom_name(),
            input.dom_id(),
        )
    }
}

/// Renders `<textarea>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextInput;

impl Widget for TextInput {
    fn render(&self, input: &mut Input<'_>) -> String {
        input.maxlength();
        input.placeholder();

        let attrs = input.input_html_options().to_html();
        format!(
            r#"<textarea name="{}" id="{}" {attrs}></textarea>"#,
            input.dom_name(),
            input.dom_id(),
        )
    }
}
