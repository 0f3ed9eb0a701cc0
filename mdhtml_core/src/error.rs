use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum MdHtmlError {
	#[error(transparent)]
	#[diagnostic(code(mdhtml::io_error))]
	Io(#[from] std::io::Error),

	#[error("container node has no tag")]
	#[diagnostic(
		code(mdhtml::missing_tag),
		help("every container node must be created with a non-empty tag")
	)]
	MissingTag,

	#[error("container node `<{0}>` has no children")]
	#[diagnostic(
		code(mdhtml::empty_container),
		help("a container node must have at least one child to be serialized")
	)]
	EmptyContainer(String),

	#[error("leaf node has no value")]
	#[diagnostic(code(mdhtml::missing_value))]
	MissingValue,

	#[error("cannot append a child to a leaf node")]
	#[diagnostic(code(mdhtml::leaf_children))]
	LeafChildren,

	#[error("unbalanced `{delimiter}` delimiter in: `{text}`")]
	#[diagnostic(
		code(mdhtml::unbalanced_delimiter),
		help("close the `{delimiter}` marker or remove it")
	)]
	UnbalancedDelimiter { delimiter: String, text: String },

	#[error("no top-level title found")]
	#[diagnostic(
		code(mdhtml::title_not_found),
		help("add a line starting with a single `#` e.g. `# My Title`")
	)]
	TitleNotFound,

	#[error("the markdown document is empty")]
	#[diagnostic(code(mdhtml::empty_document))]
	EmptyDocument,

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(mdhtml::config_parse),
		help("check that mdhtml.toml is valid TOML with an optional [page] section")
	)]
	ConfigParse(String),

	#[error("template rendering failed: {0}")]
	#[diagnostic(code(mdhtml::template_render))]
	TemplateRender(String),
}

pub type MdHtmlResult<T> = Result<T, MdHtmlError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
