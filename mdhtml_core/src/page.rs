use minijinja::Environment;
use minijinja::context;
use tracing::debug;

use crate::MdHtmlError;
use crate::MdHtmlResult;
use crate::extract_title;
use crate::parse_document;

/// A minimal page used when no template is configured.
pub const DEFAULT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
	<meta charset="utf-8">
	<title>{{ Title }}</title>
</head>
<body>
	<article>{{ Content }}</article>
</body>
</html>
"#;

/// Render a markdown document into `template`.
///
/// The template receives two variables: `Title`, the text of the document's
/// first `#` heading, and `Content`, the serialized html of the whole document.
/// Values are inserted without html escaping and the template's trailing
/// newline is kept.
pub fn render_page(template: &str, markdown: &str) -> MdHtmlResult<String> {
	let title = extract_title(markdown)?;
	let content = parse_document(markdown)?.serialize()?;
	debug!(title = %title, bytes = content.len(), "rendering page");

	let mut env = Environment::new();
	env.set_keep_trailing_newline(true);
	env.add_template("page", template)
		.map_err(|e| MdHtmlError::TemplateRender(e.to_string()))?;

	let page = env
		.get_template("page")
		.map_err(|e| MdHtmlError::TemplateRender(e.to_string()))?;

	page.render(context! { Title => title, Content => content })
		.map_err(|e| MdHtmlError::TemplateRender(e.to_string()))
}
